//! 通知构建抽象层 - 隐私门控 + 双平台变体
//!
//! `NotificationBuilder` 持有隐私偏好与锁屏状态，门控策略只在这里
//! 实现一次；具体字段填充委托给 `PlatformBuilder` trait 的两个变体：
//! 会话 API 变体（新系统能力：快捷方式 + 气泡）与兼容变体
//! （回退能力：汇总行 + 手动铃声/振动）。变体只决定哪些原生能力
//! 可用，不参与门控。

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::privacy::NotificationPrivacy;
use super::recipient::{Recipient, VibrateState};
use super::state::{NotificationConversation, NotificationItem, NotificationState};

/// 平台能力集（构建时查询一次）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformCapabilities {
    /// 原生会话 API（快捷方式、气泡）
    pub conversation_api: bool,
    /// 系统级通知渠道（渠道接管铃声/振动）
    pub notification_channels: bool,
}

impl PlatformCapabilities {
    /// 新系统能力集
    pub fn modern() -> Self {
        Self {
            conversation_api: true,
            notification_channels: true,
        }
    }

    /// 旧系统回退能力集
    pub fn legacy() -> Self {
        Self {
            conversation_api: false,
            notification_channels: false,
        }
    }
}

/// 渲染出的一条消息行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub author_name: String,
    /// 会话快捷方式键（仅在允许展示联系人时填充）
    pub author_key: Option<String>,
    pub body: String,
    pub timestamp: i64,
}

/// 通知动作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Reply,
    MarkAsRead,
    MarkAllAsRead,
}

/// 渲染出的通知动作
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedAction {
    pub kind: ActionKind,
    pub label: String,
}

/// 气泡元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleMetadata {
    pub shortcut_id: String,
    pub auto_expand: bool,
    pub desired_height: u32,
}

/// LED 提示灯设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedLights {
    pub color: String,
    pub on_ms: u32,
    pub off_ms: u32,
}

/// 全局提醒默认值（来自偏好存储）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertDefaults {
    pub ringtone: Option<String>,
    pub vibrate: bool,
}

/// 平台通知对象的本层替身。
/// 真正的系统通知对象由外部协作方从这里映射。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedNotification {
    pub persons: Vec<String>,
    pub shortcut_id: Option<String>,
    pub when: Option<i64>,
    pub content_title: Option<String>,
    pub content_text: Option<String>,
    pub messages: Vec<RenderedMessage>,
    pub inbox_lines: Vec<String>,
    pub actions: Vec<RenderedAction>,
    pub bubble: Option<BubbleMetadata>,
    pub sound: Option<String>,
    pub vibrate: bool,
    pub lights: Option<RenderedLights>,
    pub group: Option<String>,
    pub group_summary: bool,
}

impl RenderedNotification {
    /// 是否填充了任何消息内容字段
    pub fn has_message_content(&self) -> bool {
        !self.messages.is_empty() || !self.inbox_lines.is_empty() || !self.actions.is_empty()
    }
}

/// 平台构建器契约：未门控的 "actual" 操作。
/// 两个变体行为只在可用能力上不同。
pub trait PlatformBuilder {
    fn name(&self) -> &'static str;
    fn add_person_actual(&mut self, recipient: &Recipient);
    fn set_shortcut_id_actual(&mut self, shortcut_id: &str);
    fn set_when_actual(&mut self, timestamp: i64);
    fn set_content_title_actual(&mut self, title: String);
    fn set_content_text_actual(&mut self, text: String);
    fn set_group_actual(&mut self, group: String);
    fn set_group_summary_actual(&mut self, group_summary: bool);
    fn add_reply_actions_actual(&mut self, conversation: &NotificationConversation);
    fn add_mark_all_read_action_actual(&mut self, state: &NotificationState);
    fn add_messages_actual(
        &mut self,
        conversation: &NotificationConversation,
        include_shortcut: bool,
        include_body: bool,
    );
    fn add_inbox_lines_actual(&mut self, state: &NotificationState, include_body: bool);
    fn set_bubble_metadata_actual(&mut self, conversation: &NotificationConversation, auto_expand: bool);
    fn set_alarms_actual(&mut self, recipient: Option<&Recipient>, defaults: &AlertDefaults);
    fn set_lights_actual(&mut self, color: String, on_ms: u32, off_ms: u32);
    fn build_actual(self: Box<Self>) -> RenderedNotification;
}

/// 条目展示文本（隐私不允许展示正文时用占位文本）
fn item_text(item: &NotificationItem, include_body: bool) -> String {
    if include_body {
        item.primary_text()
    } else {
        "New message".to_string()
    }
}

/// 解析 LED 闪烁模式 "on,off"（毫秒）
fn parse_blink_pattern(pattern: &str) -> Option<(u32, u32)> {
    let mut parts = pattern.split(',');
    let on = parts.next()?.trim().parse().ok()?;
    let off = parts.next()?.trim().parse().ok()?;
    Some((on, off))
}

/// 隐私门控通知构建器。
/// 门控规则表只在这里实现一次，对两个平台变体共享。
pub struct NotificationBuilder {
    privacy: NotificationPrivacy,
    device_locked: bool,
    inner: Box<dyn PlatformBuilder>,
}

impl NotificationBuilder {
    /// 根据平台能力选择具体变体
    pub fn create(
        capabilities: &PlatformCapabilities,
        privacy: NotificationPrivacy,
        device_locked: bool,
    ) -> Self {
        let inner: Box<dyn PlatformBuilder> = if capabilities.conversation_api {
            Box::new(ConversationApiBuilder::new())
        } else {
            Box::new(CompatBuilder::new(capabilities.notification_channels))
        };
        info!(
            variant = inner.name(),
            privacy = %privacy,
            device_locked,
            "Selected platform notification builder"
        );
        Self {
            privacy,
            device_locked,
            inner,
        }
    }

    fn is_not_locked(&self) -> bool {
        !self.device_locked
    }

    /// 发送者身份：隐私 ≥ 仅联系人
    pub fn add_person(&mut self, recipient: &Recipient) {
        if self.privacy.is_display_contact() {
            self.inner.add_person_actual(recipient);
        }
    }

    /// 会话快捷方式：隐私 ≥ 仅联系人 且设备未锁
    pub fn set_shortcut_id(&mut self, recipient: &Recipient) {
        if self.privacy.is_display_contact() && self.is_not_locked() {
            self.inner.set_shortcut_id_actual(&recipient.shortcut_id());
        }
    }

    /// 展示时间戳（零值跳过）
    pub fn set_when(&mut self, conversation: &NotificationConversation) {
        if conversation.when() != 0 {
            self.inner.set_when_actual(conversation.when());
        }
    }

    /// 回复动作：完整隐私 且设备未锁 且消息请求已接受
    pub fn add_reply_actions(&mut self, conversation: &NotificationConversation) {
        if self.privacy.is_display_message()
            && self.is_not_locked()
            && conversation.recipient().message_request_accepted
        {
            self.inner.add_reply_actions_actual(conversation);
        } else {
            debug!(
                thread_id = conversation.thread_id(),
                "Reply actions withheld by privacy policy"
            );
        }
    }

    /// 全部已读动作：完整隐私 且设备未锁
    pub fn add_mark_as_read_action(&mut self, state: &NotificationState) {
        if self.privacy.is_display_message() && self.is_not_locked() {
            self.inner.add_mark_all_read_action_actual(state);
        }
    }

    /// 会话消息行：隐私为 "不展示" 时完全跳过；
    /// 正文仅在完整隐私且设备未锁时展示，联系人键仅在允许展示联系人时携带
    pub fn add_messages(&mut self, conversation: &NotificationConversation) {
        if self.privacy.is_display_nothing() {
            return;
        }
        self.inner.add_messages_actual(
            conversation,
            self.privacy.is_display_contact(),
            self.privacy.is_display_message() && self.is_not_locked(),
        );
    }

    /// 汇总视图（跨会话）：隐私为 "不展示" 时完全跳过
    pub fn add_state_messages(&mut self, state: &NotificationState) {
        if self.privacy.is_display_nothing() {
            return;
        }
        self.inner
            .add_inbox_lines_actual(state, self.privacy.is_display_message() && self.is_not_locked());
        if self.privacy.is_display_contact() {
            for item in state.items() {
                self.inner.add_person_actual(item.author());
            }
        }
    }

    /// 气泡元数据：隐私 ≥ 仅联系人 且设备未锁
    pub fn set_bubble_metadata(&mut self, conversation: &NotificationConversation, auto_expand: bool) {
        if self.privacy.is_display_contact() && self.is_not_locked() {
            self.inner.set_bubble_metadata_actual(conversation, auto_expand);
        }
    }

    /// 汇总文本 "最近来自 X"：隐私 ≥ 仅联系人
    pub fn set_summary_content_text(&mut self, recipient: Option<&Recipient>) {
        if let Some(recipient) = recipient {
            if self.privacy.is_display_contact() {
                self.inner
                    .set_content_text_actual(format!("Most recent from {}", recipient.display_name));
            }
        }
    }

    /// 铃声/振动（不涉及隐私，直接委托）
    pub fn set_alarms(&mut self, recipient: Option<&Recipient>, defaults: &AlertDefaults) {
        self.inner.set_alarms_actual(recipient, defaults);
    }

    /// LED 提示灯："none" 或无法解析的模式跳过
    pub fn set_lights(&mut self, led_color: &str, blink_pattern: &str) {
        if led_color == "none" {
            return;
        }
        match parse_blink_pattern(blink_pattern) {
            Some((on_ms, off_ms)) => {
                self.inner.set_lights_actual(led_color.to_string(), on_ms, off_ms)
            }
            None => warn!(blink_pattern, "Unparseable LED blink pattern, skipping lights"),
        }
    }

    pub fn set_content_title(&mut self, title: impl Into<String>) {
        self.inner.set_content_title_actual(title.into());
    }

    pub fn set_content_text(&mut self, text: impl Into<String>) {
        self.inner.set_content_text_actual(text.into());
    }

    pub fn set_group(&mut self, group: impl Into<String>) {
        self.inner.set_group_actual(group.into());
    }

    pub fn set_group_summary(&mut self, group_summary: bool) {
        self.inner.set_group_summary_actual(group_summary);
    }

    pub fn build(self) -> RenderedNotification {
        self.inner.build_actual()
    }

    #[cfg(test)]
    fn variant_name(&self) -> &'static str {
        self.inner.name()
    }
}

/// 会话 API 变体：原生快捷方式与气泡，铃声/振动与汇总行由系统接管
pub struct ConversationApiBuilder {
    notification: RenderedNotification,
}

impl ConversationApiBuilder {
    pub fn new() -> Self {
        Self {
            notification: RenderedNotification::default(),
        }
    }
}

impl Default for ConversationApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBuilder for ConversationApiBuilder {
    fn name(&self) -> &'static str {
        "conversation_api"
    }

    fn add_person_actual(&mut self, recipient: &Recipient) {
        self.notification.persons.push(recipient.shortcut_id());
    }

    fn set_shortcut_id_actual(&mut self, shortcut_id: &str) {
        self.notification.shortcut_id = Some(shortcut_id.to_string());
    }

    fn set_when_actual(&mut self, timestamp: i64) {
        self.notification.when = Some(timestamp);
    }

    fn set_content_title_actual(&mut self, title: String) {
        self.notification.content_title = Some(title);
    }

    fn set_content_text_actual(&mut self, text: String) {
        self.notification.content_text = Some(text);
    }

    fn set_group_actual(&mut self, group: String) {
        self.notification.group = Some(group);
    }

    fn set_group_summary_actual(&mut self, group_summary: bool) {
        self.notification.group_summary = group_summary;
    }

    fn add_reply_actions_actual(&mut self, _conversation: &NotificationConversation) {
        self.notification.actions.push(RenderedAction {
            kind: ActionKind::MarkAsRead,
            label: "Mark read".to_string(),
        });
        self.notification.actions.push(RenderedAction {
            kind: ActionKind::Reply,
            label: "Reply".to_string(),
        });
    }

    fn add_mark_all_read_action_actual(&mut self, _state: &NotificationState) {
        self.notification.actions.push(RenderedAction {
            kind: ActionKind::MarkAllAsRead,
            label: "Mark all as read".to_string(),
        });
    }

    fn add_messages_actual(
        &mut self,
        conversation: &NotificationConversation,
        include_shortcut: bool,
        include_body: bool,
    ) {
        for item in conversation.items() {
            let author = item.author();
            self.notification.messages.push(RenderedMessage {
                author_name: if author.is_self && !include_shortcut {
                    "You".to_string()
                } else {
                    author.display_name.clone()
                },
                author_key: include_shortcut.then(|| author.shortcut_id()),
                body: item_text(item, include_body),
                timestamp: item.timestamp(),
            });
        }
    }

    fn add_inbox_lines_actual(&mut self, _state: &NotificationState, _include_body: bool) {
        // 会话 API 下汇总由系统分组渲染
    }

    fn set_bubble_metadata_actual(&mut self, conversation: &NotificationConversation, auto_expand: bool) {
        self.notification.bubble = Some(BubbleMetadata {
            shortcut_id: conversation.recipient().shortcut_id(),
            auto_expand,
            desired_height: 600,
        });
    }

    fn set_alarms_actual(&mut self, _recipient: Option<&Recipient>, _defaults: &AlertDefaults) {
        // 通知渠道接管铃声与振动
    }

    fn set_lights_actual(&mut self, _color: String, _on_ms: u32, _off_ms: u32) {
        // 通知渠道接管提示灯
    }

    fn build_actual(self: Box<Self>) -> RenderedNotification {
        self.notification
    }
}

/// 兼容变体：无气泡，汇总行与铃声/振动由本层填充
pub struct CompatBuilder {
    notification: RenderedNotification,
    /// 系统渠道可用时不再手动设置铃声/振动
    channels_supported: bool,
}

impl CompatBuilder {
    pub fn new(channels_supported: bool) -> Self {
        Self {
            notification: RenderedNotification::default(),
            channels_supported,
        }
    }
}

impl PlatformBuilder for CompatBuilder {
    fn name(&self) -> &'static str {
        "compat"
    }

    fn add_person_actual(&mut self, recipient: &Recipient) {
        self.notification.persons.push(recipient.shortcut_id());
    }

    fn set_shortcut_id_actual(&mut self, shortcut_id: &str) {
        self.notification.shortcut_id = Some(shortcut_id.to_string());
    }

    fn set_when_actual(&mut self, timestamp: i64) {
        self.notification.when = Some(timestamp);
    }

    fn set_content_title_actual(&mut self, title: String) {
        self.notification.content_title = Some(title);
    }

    fn set_content_text_actual(&mut self, text: String) {
        self.notification.content_text = Some(text);
    }

    fn set_group_actual(&mut self, group: String) {
        self.notification.group = Some(group);
    }

    fn set_group_summary_actual(&mut self, group_summary: bool) {
        self.notification.group_summary = group_summary;
    }

    fn add_reply_actions_actual(&mut self, _conversation: &NotificationConversation) {
        self.notification.actions.push(RenderedAction {
            kind: ActionKind::MarkAsRead,
            label: "Mark read".to_string(),
        });
        self.notification.actions.push(RenderedAction {
            kind: ActionKind::Reply,
            label: "Reply".to_string(),
        });
    }

    fn add_mark_all_read_action_actual(&mut self, _state: &NotificationState) {
        self.notification.actions.push(RenderedAction {
            kind: ActionKind::MarkAllAsRead,
            label: "Mark all as read".to_string(),
        });
    }

    fn add_messages_actual(
        &mut self,
        conversation: &NotificationConversation,
        include_shortcut: bool,
        include_body: bool,
    ) {
        for item in conversation.items() {
            let author = item.author();
            self.notification.messages.push(RenderedMessage {
                author_name: if author.is_self && !include_shortcut {
                    "You".to_string()
                } else {
                    author.display_name.clone()
                },
                author_key: include_shortcut.then(|| author.shortcut_id()),
                body: item_text(item, include_body),
                timestamp: item.timestamp(),
            });
        }
    }

    fn add_inbox_lines_actual(&mut self, state: &NotificationState, include_body: bool) {
        for item in state.items() {
            let line = if include_body {
                item.inbox_line()
            } else {
                format!("{}: New message", item.author().display_name)
            };
            self.notification.inbox_lines.push(line);
        }
    }

    fn set_bubble_metadata_actual(&mut self, _conversation: &NotificationConversation, _auto_expand: bool) {
        // 兼容变体不支持气泡
    }

    fn set_alarms_actual(&mut self, recipient: Option<&Recipient>, defaults: &AlertDefaults) {
        if self.channels_supported {
            return;
        }

        let ringtone = recipient
            .and_then(|r| r.message_ringtone.clone())
            .or_else(|| defaults.ringtone.clone());
        if let Some(ringtone) = ringtone {
            if !ringtone.is_empty() {
                self.notification.sound = Some(ringtone);
            }
        }

        self.notification.vibrate = match recipient.map(|r| r.message_vibrate) {
            Some(VibrateState::Enabled) => true,
            Some(VibrateState::Disabled) => false,
            Some(VibrateState::Default) | None => defaults.vibrate,
        };
    }

    fn set_lights_actual(&mut self, color: String, on_ms: u32, off_ms: u32) {
        self.notification.lights = Some(RenderedLights { color, on_ms, off_ms });
    }

    fn build_actual(self: Box<Self>) -> RenderedNotification {
        self.notification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::recipient::RecipientId;
    use crate::notification::records::MessageRecord;
    use crate::notification::state::MessageItem;

    fn alice() -> Recipient {
        Recipient::new(RecipientId(1), "Alice")
    }

    fn conversation() -> NotificationConversation {
        let sender = alice();
        let item = NotificationItem::Message(MessageItem {
            thread_recipient: sender.clone(),
            record: MessageRecord::new(1, 7, sender.clone(), "secret text", 1000),
        });
        NotificationConversation::new(sender, 7, vec![item])
    }

    fn state() -> NotificationState {
        NotificationState::new(vec![conversation()])
    }

    fn builder(privacy: NotificationPrivacy, locked: bool) -> NotificationBuilder {
        NotificationBuilder::create(&PlatformCapabilities::modern(), privacy, locked)
    }

    #[test]
    fn test_variant_selection_by_capability() {
        let modern = builder(NotificationPrivacy::ContactAndMessage, false);
        assert_eq!(modern.variant_name(), "conversation_api");

        let legacy = NotificationBuilder::create(
            &PlatformCapabilities::legacy(),
            NotificationPrivacy::ContactAndMessage,
            false,
        );
        assert_eq!(legacy.variant_name(), "compat");
    }

    #[test]
    fn test_show_nothing_populates_no_message_content() {
        let mut builder = builder(NotificationPrivacy::ShowNothing, false);
        let conversation = conversation();

        builder.add_person(conversation.recipient());
        builder.set_shortcut_id(conversation.recipient());
        builder.add_messages(&conversation);
        builder.add_reply_actions(&conversation);
        builder.add_mark_as_read_action(&state());
        builder.add_state_messages(&state());
        builder.set_bubble_metadata(&conversation, false);
        builder.set_summary_content_text(Some(conversation.recipient()));

        let rendered = builder.build();
        assert!(!rendered.has_message_content());
        assert!(rendered.persons.is_empty());
        assert!(rendered.shortcut_id.is_none());
        assert!(rendered.bubble.is_none());
        assert!(rendered.content_text.is_none());
    }

    #[test]
    fn test_contact_only_shows_identity_but_not_body() {
        let mut builder = builder(NotificationPrivacy::ContactOnly, false);
        let conversation = conversation();

        builder.add_person(conversation.recipient());
        builder.set_shortcut_id(conversation.recipient());
        builder.add_messages(&conversation);
        builder.add_reply_actions(&conversation);
        builder.set_bubble_metadata(&conversation, true);

        let rendered = builder.build();
        assert_eq!(rendered.persons, vec!["recipient-1".to_string()]);
        assert_eq!(rendered.shortcut_id, Some("recipient-1".to_string()));
        assert!(rendered.bubble.is_some());
        // 正文被占位文本替换，回复动作被扣留
        assert_eq!(rendered.messages[0].body, "New message");
        assert!(rendered.actions.is_empty());
    }

    #[test]
    fn test_full_privacy_unlocked_shows_everything() {
        let mut builder = builder(NotificationPrivacy::ContactAndMessage, false);
        let conversation = conversation();

        builder.add_messages(&conversation);
        builder.add_reply_actions(&conversation);
        builder.add_mark_as_read_action(&state());
        builder.set_when(&conversation);

        let rendered = builder.build();
        assert_eq!(rendered.messages[0].body, "secret text");
        assert!(rendered.actions.iter().any(|a| a.kind == ActionKind::Reply));
        assert!(rendered
            .actions
            .iter()
            .any(|a| a.kind == ActionKind::MarkAllAsRead));
        assert_eq!(rendered.when, Some(1000));
    }

    #[test]
    fn test_locked_device_withholds_shortcut_actions_bubble_and_body() {
        let mut builder = builder(NotificationPrivacy::ContactAndMessage, true);
        let conversation = conversation();

        builder.add_person(conversation.recipient());
        builder.set_shortcut_id(conversation.recipient());
        builder.add_reply_actions(&conversation);
        builder.add_mark_as_read_action(&state());
        builder.set_bubble_metadata(&conversation, false);
        builder.add_messages(&conversation);

        let rendered = builder.build();
        // 身份可以展示，但深链/动作/气泡/正文在锁屏下扣留
        assert!(!rendered.persons.is_empty());
        assert!(rendered.shortcut_id.is_none());
        assert!(rendered.actions.is_empty());
        assert!(rendered.bubble.is_none());
        assert_eq!(rendered.messages[0].body, "New message");
    }

    #[test]
    fn test_unaccepted_message_request_withholds_reply_actions() {
        let mut builder = builder(NotificationPrivacy::ContactAndMessage, false);
        let recipient = alice().with_message_request_accepted(false);
        let item = NotificationItem::Message(MessageItem {
            thread_recipient: recipient.clone(),
            record: MessageRecord::new(1, 7, recipient.clone(), "hi", 1000),
        });
        let conversation = NotificationConversation::new(recipient, 7, vec![item]);

        builder.add_reply_actions(&conversation);
        let rendered = builder.build();
        assert!(rendered.actions.is_empty());
    }

    #[test]
    fn test_compat_inbox_lines_respect_body_privacy() {
        let mut builder = NotificationBuilder::create(
            &PlatformCapabilities::legacy(),
            NotificationPrivacy::ContactOnly,
            false,
        );
        builder.add_state_messages(&state());

        let rendered = builder.build();
        assert_eq!(rendered.inbox_lines, vec!["Alice: New message".to_string()]);
        assert_eq!(rendered.persons, vec!["recipient-1".to_string()]);
    }

    #[test]
    fn test_compat_alarms_prefer_recipient_ringtone() {
        let mut builder = NotificationBuilder::create(
            &PlatformCapabilities::legacy(),
            NotificationPrivacy::ContactAndMessage,
            false,
        );
        let mut recipient = alice();
        recipient.message_ringtone = Some("content://ringtone/custom".to_string());
        recipient.message_vibrate = VibrateState::Enabled;
        let defaults = AlertDefaults {
            ringtone: Some("content://ringtone/default".to_string()),
            vibrate: false,
        };

        builder.set_alarms(Some(&recipient), &defaults);
        let rendered = builder.build();
        assert_eq!(rendered.sound.as_deref(), Some("content://ringtone/custom"));
        assert!(rendered.vibrate);
    }

    #[test]
    fn test_modern_variant_ignores_alarms_and_inbox_lines() {
        let mut builder = builder(NotificationPrivacy::ContactAndMessage, false);
        let defaults = AlertDefaults {
            ringtone: Some("content://ringtone/default".to_string()),
            vibrate: true,
        };

        builder.set_alarms(Some(&alice()), &defaults);
        builder.add_state_messages(&state());

        let rendered = builder.build();
        assert!(rendered.sound.is_none());
        assert!(!rendered.vibrate);
        assert!(rendered.inbox_lines.is_empty());
    }

    #[test]
    fn test_lights_skipped_for_none_and_bad_pattern() {
        let mut builder = NotificationBuilder::create(
            &PlatformCapabilities::legacy(),
            NotificationPrivacy::ContactAndMessage,
            false,
        );
        builder.set_lights("none", "500,2000");
        builder.set_lights("#ff0000", "not-a-pattern");

        let rendered = builder.build();
        assert!(rendered.lights.is_none());
    }

    #[test]
    fn test_lights_parse_blink_pattern() {
        let mut builder = NotificationBuilder::create(
            &PlatformCapabilities::legacy(),
            NotificationPrivacy::ContactAndMessage,
            false,
        );
        builder.set_lights("#ff0000", "500,2000");

        let rendered = builder.build();
        assert_eq!(
            rendered.lights,
            Some(RenderedLights {
                color: "#ff0000".to_string(),
                on_ms: 500,
                off_ms: 2000,
            })
        );
    }

    #[test]
    fn test_summary_content_text_gated_on_contact() {
        let mut with_contact = builder(NotificationPrivacy::ContactOnly, false);
        with_contact.set_summary_content_text(Some(&alice()));
        assert_eq!(
            with_contact.build().content_text,
            Some("Most recent from Alice".to_string())
        );

        let mut without = builder(NotificationPrivacy::ShowNothing, false);
        without.set_summary_content_text(Some(&alice()));
        assert!(without.build().content_text.is_none());
    }
}
