//! 接收者模型 - 会话对端与消息作者的值对象
//!
//! 通知层只读取接收者的展示与提醒属性，不负责持久化。
//! 线程元数据缺失时使用 `Recipient::unknown()` 哨兵值，
//! 哨兵值始终视为未静音。

use serde::{Deserialize, Serialize};

/// 接收者 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipientId(pub u64);

impl RecipientId {
    /// 未知接收者哨兵 ID
    pub const UNKNOWN: RecipientId = RecipientId(0);
}

impl std::fmt::Display for RecipientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 提及通知设置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MentionSetting {
    /// 跟随静音状态
    Default,
    /// 即使静音也通知被提及的消息
    AlwaysNotify,
}

/// 振动设置（跟随全局 / 强制开 / 强制关）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VibrateState {
    Default,
    Enabled,
    Disabled,
}

/// 接收者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
    pub id: RecipientId,
    /// 展示名称
    pub display_name: String,
    /// 是否为本人
    pub is_self: bool,
    /// 是否静音
    pub is_muted: bool,
    /// 提及通知设置
    pub mention_setting: MentionSetting,
    /// 每接收者铃声覆盖（None 表示使用全局默认）
    pub message_ringtone: Option<String>,
    /// 每接收者振动设置
    pub message_vibrate: VibrateState,
    /// 消息请求是否已接受（未接受时不提供回复动作）
    pub message_request_accepted: bool,
}

impl Recipient {
    /// 创建一个普通联系人，提醒属性使用默认值
    pub fn new(id: RecipientId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            is_self: false,
            is_muted: false,
            mention_setting: MentionSetting::Default,
            message_ringtone: None,
            message_vibrate: VibrateState::Default,
            message_request_accepted: true,
        }
    }

    /// 未知接收者哨兵值（线程记录缺失时的替代）
    pub fn unknown() -> Self {
        Self::new(RecipientId::UNKNOWN, "Unknown")
    }

    /// 是否为未知哨兵
    pub fn is_unknown(&self) -> bool {
        self.id == RecipientId::UNKNOWN
    }

    /// 设置本人标记
    pub fn with_self(mut self, is_self: bool) -> Self {
        self.is_self = is_self;
        self
    }

    /// 设置静音状态
    pub fn with_muted(mut self, muted: bool) -> Self {
        self.is_muted = muted;
        self
    }

    /// 设置提及通知设置
    pub fn with_mention_setting(mut self, setting: MentionSetting) -> Self {
        self.mention_setting = setting;
        self
    }

    /// 设置消息请求状态
    pub fn with_message_request_accepted(mut self, accepted: bool) -> Self {
        self.message_request_accepted = accepted;
        self
    }

    /// 未静音（未知哨兵视为未静音）
    pub fn is_not_muted(&self) -> bool {
        !self.is_muted
    }

    /// 静音时是否仍然通知提及
    pub fn is_always_notify_mentions(&self) -> bool {
        self.mention_setting == MentionSetting::AlwaysNotify
    }

    /// 会话快捷方式 ID（深链标识）
    pub fn shortcut_id(&self) -> String {
        format!("recipient-{}", self.id)
    }
}
