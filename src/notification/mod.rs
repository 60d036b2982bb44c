//! 通知层 - 从消息存储快照到隐私门控的平台通知对象
//!
//! # 设计目标
//! 1. 单向数据流：候选行 → 通知条目 → 会话分组 → 隐私门控渲染
//! 2. 策略唯一：隐私门控在 `NotificationBuilder` 实现一次，平台变体只提供能力
//! 3. 协作方解耦：数据源与线程解析器都是 trait，平台通知对象用值对象替身
//! 4. 值语义：每次刷新重建全部状态，构造后不可变
//!
//! # 使用示例
//! ```ignore
//! use message_notify::notification::{
//!     construct_notification_state, NotificationBuilder, NotificationPrivacy,
//!     PlatformCapabilities,
//! };
//!
//! let state = construct_notification_state(&data_source, &resolver, &sticky_threads);
//! let mut builder = NotificationBuilder::create(
//!     &PlatformCapabilities::modern(),
//!     NotificationPrivacy::ContactAndMessage,
//!     false,
//! );
//! for conversation in state.conversations() {
//!     builder.add_messages(conversation);
//! }
//! let rendered = builder.build();
//! ```

pub mod builder;
pub mod privacy;
pub mod provider;
pub mod recipient;
pub mod records;
pub mod state;

pub use builder::{
    ActionKind, AlertDefaults, BubbleMetadata, CompatBuilder, ConversationApiBuilder,
    NotificationBuilder, PlatformBuilder, PlatformCapabilities, RenderedAction, RenderedLights,
    RenderedMessage, RenderedNotification,
};
pub use privacy::NotificationPrivacy;
pub use provider::{construct_notification_state, NotificationDataSource, ThreadRecipientResolver};
pub use recipient::{MentionSetting, Recipient, RecipientId, VibrateState};
pub use records::{MessageRecord, ReactionRecord, UnreadRow};
pub use state::{
    MessageItem, NotificationConversation, NotificationItem, NotificationState, ReactionItem,
    StickyThread,
};
