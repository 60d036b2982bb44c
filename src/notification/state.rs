//! 通知状态模型 - 条目 / 会话 / 整体状态
//!
//! 所有类型为值对象，每次通知刷新重建，构造后不可变。
//! 不变量：会话内条目按比较键升序；会话非空；
//! 整体状态中每个线程至多出现一次，按首次遇到的顺序排列。

use serde::{Deserialize, Serialize};

use super::recipient::Recipient;
use super::records::{MessageRecord, ReactionRecord};

/// 可渲染的通知条目：消息条目或回应条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NotificationItem {
    Message(MessageItem),
    Reaction(ReactionItem),
}

/// 消息条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageItem {
    /// 线程代表接收者
    pub thread_recipient: Recipient,
    pub record: MessageRecord,
}

/// 回应条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionItem {
    /// 线程代表接收者
    pub thread_recipient: Recipient,
    /// 被回应的消息
    pub record: MessageRecord,
    pub reaction: ReactionRecord,
}

impl NotificationItem {
    /// 条目作者（消息为发送者，回应为回应作者）
    pub fn author(&self) -> &Recipient {
        match self {
            NotificationItem::Message(item) => &item.record.sender,
            NotificationItem::Reaction(item) => &item.reaction.author,
        }
    }

    /// 线程代表接收者
    pub fn thread_recipient(&self) -> &Recipient {
        match self {
            NotificationItem::Message(item) => &item.thread_recipient,
            NotificationItem::Reaction(item) => &item.thread_recipient,
        }
    }

    /// 展示时间戳（回应使用收到时间）
    pub fn timestamp(&self) -> i64 {
        match self {
            NotificationItem::Message(item) => item.record.timestamp,
            NotificationItem::Reaction(item) => item.reaction.date_received,
        }
    }

    /// 排序键：时间戳为主，相同时间戳时消息先于回应
    pub fn sort_key(&self) -> (i64, u8) {
        let kind_rank = match self {
            NotificationItem::Message(_) => 0,
            NotificationItem::Reaction(_) => 1,
        };
        (self.timestamp(), kind_rank)
    }

    /// 主展示文本
    pub fn primary_text(&self) -> String {
        match self {
            NotificationItem::Message(item) => item.record.body.clone(),
            NotificationItem::Reaction(item) => {
                format!("Reacted {} to \"{}\"", item.reaction.emoji, item.record.body)
            }
        }
    }

    /// 汇总视图单行文本（隐私允许展示联系人时使用）
    pub fn inbox_line(&self) -> String {
        format!("{}: {}", self.author().display_name, self.primary_text())
    }
}

/// 单个线程的有序通知会话
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConversation {
    recipient: Recipient,
    thread_id: u64,
    items: Vec<NotificationItem>,
}

impl NotificationConversation {
    /// 构造会话。条目必须非空且已按排序键升序排列。
    pub fn new(recipient: Recipient, thread_id: u64, items: Vec<NotificationItem>) -> Self {
        debug_assert!(!items.is_empty());
        debug_assert!(items.windows(2).all(|w| w[0].sort_key() <= w[1].sort_key()));
        Self {
            recipient,
            thread_id,
            items,
        }
    }

    pub fn recipient(&self) -> &Recipient {
        &self.recipient
    }

    pub fn thread_id(&self) -> u64 {
        self.thread_id
    }

    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// 最新条目（构造保证非空）
    pub fn most_recent(&self) -> &NotificationItem {
        self.items.last().unwrap()
    }

    /// 展示时间戳（最新条目的时间）
    pub fn when(&self) -> i64 {
        self.most_recent().timestamp()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// 一次计算的完整结果：按首次遇到顺序排列的会话序列
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NotificationState {
    conversations: Vec<NotificationConversation>,
}

impl NotificationState {
    /// 规范空状态
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(conversations: Vec<NotificationConversation>) -> Self {
        Self { conversations }
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn conversations(&self) -> &[NotificationConversation] {
        &self.conversations
    }

    /// 所有会话条目的扁平迭代器
    pub fn items(&self) -> impl Iterator<Item = &NotificationItem> {
        self.conversations.iter().flat_map(|c| c.items().iter())
    }

    /// 条目总数
    pub fn item_count(&self) -> usize {
        self.conversations.iter().map(|c| c.item_count()).sum()
    }

    /// 出现的线程 ID 列表（保持会话顺序）
    pub fn threads(&self) -> Vec<u64> {
        self.conversations.iter().map(|c| c.thread_id()).collect()
    }
}

/// 粘性线程标记：无论已读状态都必须保留在通知中的线程
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickyThread {
    pub thread_id: u64,
    /// 该线程最早未见条目的时间（毫秒）
    pub earliest_timestamp: i64,
}

impl StickyThread {
    pub fn new(thread_id: u64, earliest_timestamp: i64) -> Self {
        Self {
            thread_id,
            earliest_timestamp,
        }
    }
}
