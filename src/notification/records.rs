//! 消息与回应记录 - 来自外部消息存储的已物化行
//!
//! 这些记录由数据源在一次数据库读取中物化，本层不回查数据库。
//! 时间戳统一使用毫秒。

use serde::{Deserialize, Serialize};

use super::recipient::Recipient;

/// 回应记录（附着在某条消息上）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRecord {
    /// 回应作者
    pub author: Recipient,
    /// 回应表情
    pub emoji: String,
    /// 收到时间（毫秒）
    pub date_received: i64,
}

impl ReactionRecord {
    pub fn new(author: Recipient, emoji: impl Into<String>, date_received: i64) -> Self {
        Self {
            author,
            emoji: emoji.into(),
            date_received,
        }
    }
}

/// 消息记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: u64,
    /// 所属线程
    pub thread_id: u64,
    /// 消息作者（发出方为本人）
    pub sender: Recipient,
    /// 消息正文
    pub body: String,
    /// 时间戳（毫秒）
    pub timestamp: i64,
    /// 是否为本人发出
    pub is_outgoing: bool,
    /// 是否提及本人
    pub has_self_mention: bool,
    /// 附着的回应
    pub reactions: Vec<ReactionRecord>,
}

impl MessageRecord {
    pub fn new(id: u64, thread_id: u64, sender: Recipient, body: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id,
            thread_id,
            sender,
            body: body.into(),
            timestamp,
            is_outgoing: false,
            has_self_mention: false,
            reactions: Vec::new(),
        }
    }

    /// 标记为本人发出
    pub fn outgoing(mut self) -> Self {
        self.is_outgoing = true;
        self
    }

    /// 标记为提及本人
    pub fn with_self_mention(mut self) -> Self {
        self.has_self_mention = true;
        self
    }

    /// 附着一条回应
    pub fn with_reaction(mut self, reaction: ReactionRecord) -> Self {
        self.reactions.push(reaction);
        self
    }
}

/// 数据源返回的一行候选记录：消息 + 该行的已读/回应状态列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnreadRow {
    pub record: MessageRecord,
    /// 消息本身是否未读
    pub is_unread: bool,
    /// 是否有未读回应
    pub has_unread_reactions: bool,
    /// 线程上次查看回应的时间（毫秒）
    pub last_reaction_seen: i64,
}

impl UnreadRow {
    pub fn new(record: MessageRecord) -> Self {
        Self {
            record,
            is_unread: false,
            has_unread_reactions: false,
            last_reaction_seen: 0,
        }
    }

    pub fn unread(mut self) -> Self {
        self.is_unread = true;
        self
    }

    pub fn with_unread_reactions(mut self, last_seen: i64) -> Self {
        self.has_unread_reactions = true;
        self.last_reaction_seen = last_seen;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::recipient::RecipientId;

    #[test]
    fn test_message_record_defaults_incoming() {
        let sender = Recipient::new(RecipientId(1), "Alice");
        let record = MessageRecord::new(10, 1, sender, "hi", 1000);
        assert!(!record.is_outgoing);
        assert!(!record.has_self_mention);
        assert!(record.reactions.is_empty());
    }

    #[test]
    fn test_message_record_with_reaction() {
        let sender = Recipient::new(RecipientId(2), "Me").with_self(true);
        let other = Recipient::new(RecipientId(1), "Alice");
        let record = MessageRecord::new(10, 1, sender, "hi", 1000)
            .outgoing()
            .with_reaction(ReactionRecord::new(other, "👍", 1500));

        assert!(record.is_outgoing);
        assert_eq!(record.reactions.len(), 1);
        assert_eq!(record.reactions[0].date_received, 1500);
    }

    #[test]
    fn test_unread_row_builder() {
        let sender = Recipient::new(RecipientId(1), "Alice");
        let row = UnreadRow::new(MessageRecord::new(10, 1, sender, "hi", 1000))
            .unread()
            .with_unread_reactions(900);

        assert!(row.is_unread);
        assert!(row.has_unread_reactions);
        assert_eq!(row.last_reaction_seen, 900);
    }
}
