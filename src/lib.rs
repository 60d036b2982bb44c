//! Message Notify - 消息应用的通知状态构建与隐私门控渲染

pub mod logging;
pub mod notification;
pub mod settings;

pub use logging::init_logging;

pub use notification::{
    construct_notification_state, AlertDefaults, MentionSetting, MessageRecord,
    NotificationBuilder, NotificationConversation, NotificationDataSource, NotificationItem,
    NotificationPrivacy, NotificationState, PlatformBuilder, PlatformCapabilities, ReactionRecord,
    Recipient, RecipientId, RenderedNotification, StickyThread, ThreadRecipientResolver, UnreadRow,
    VibrateState,
};
pub use settings::{
    keys, AccountSyncScheduler, BoundedExecutor, ConfigurationUpdate, DisablePushResult,
    PreferenceStore, PushRegistrationService, PushServiceError, SettingsItem, SettingsPage,
    SettingsRepository, SettingsScreen, StartLocation,
};
