//! 通知状态构建器 - 从未读/粘性候选行构建去重后的通知模型
//!
//! 单线程单遍计算：候选行 → 过滤 → 按线程分组（保持首见顺序）→
//! 线程内排序 → 粘性裁剪 → 会话序列。由数据库变更事件触发，
//! 每次计算基于一次数据库读取的内存快照，计算过程不写任何共享状态。

use std::collections::HashMap;

use tracing::debug;

use super::recipient::Recipient;
use super::records::{ReactionRecord, UnreadRow};
use super::state::{
    MessageItem, NotificationConversation, NotificationItem, NotificationState, ReactionItem,
    StickyThread,
};

/// 消息/回应数据源：给定粘性线程集合，返回需要进入通知评估的行
pub trait NotificationDataSource {
    fn rows_for_notification(&self, sticky_threads: &HashMap<u64, StickyThread>) -> Vec<UnreadRow>;
}

/// 线程到接收者的解析器
pub trait ThreadRecipientResolver {
    /// 解析线程代表接收者；线程记录缺失时返回 None
    fn recipient_for_thread(&self, thread_id: u64) -> Option<Recipient>;
}

/// 一条候选行：消息记录加上解析后的线程上下文与过滤所需状态位
#[derive(Debug, Clone)]
struct CandidateRow {
    row: UnreadRow,
    thread_recipient: Recipient,
    thread_id: u64,
    sticky: bool,
}

impl CandidateRow {
    /// 未读且为接收方向
    fn is_unread_incoming(&self) -> bool {
        self.row.is_unread && !self.row.record.is_outgoing
    }

    /// 线程未静音，或线程记录缺失（未知哨兵始终视为未静音）
    fn unknown_or_not_muted(&self) -> bool {
        self.thread_recipient.is_unknown() || self.thread_recipient.is_not_muted()
    }

    /// 消息本身是否应进入通知
    fn include_message(&self) -> bool {
        (self.is_unread_incoming() || self.sticky)
            && (self.unknown_or_not_muted()
                || (self.thread_recipient.is_always_notify_mentions()
                    && self.row.record.has_self_mention))
    }

    /// 某条回应是否应进入通知。
    /// 粘性标记与提及豁免均不适用于回应。
    fn include_reaction(&self, reaction: &ReactionRecord) -> bool {
        !reaction.author.is_self
            && self.row.record.is_outgoing
            && reaction.date_received > self.row.last_reaction_seen
            && self.unknown_or_not_muted()
    }
}

/// 构建通知状态
///
/// 空候选集返回规范空状态；被完全过滤掉的线程不产生会话。
pub fn construct_notification_state(
    data_source: &dyn NotificationDataSource,
    resolver: &dyn ThreadRecipientResolver,
    sticky_threads: &HashMap<u64, StickyThread>,
) -> NotificationState {
    let rows = data_source.rows_for_notification(sticky_threads);
    if rows.is_empty() {
        return NotificationState::empty();
    }

    let candidates: Vec<CandidateRow> = rows
        .into_iter()
        .map(|row| {
            let thread_id = row.record.thread_id;
            let thread_recipient = resolver
                .recipient_for_thread(thread_id)
                .unwrap_or_else(Recipient::unknown);
            CandidateRow {
                row,
                thread_recipient,
                thread_id,
                sticky: sticky_threads.contains_key(&thread_id),
            }
        })
        .collect();

    // 按线程分组，保持首见顺序
    let mut thread_order: Vec<u64> = Vec::new();
    let mut by_thread: HashMap<u64, Vec<CandidateRow>> = HashMap::new();
    for candidate in candidates {
        if !by_thread.contains_key(&candidate.thread_id) {
            thread_order.push(candidate.thread_id);
        }
        by_thread.entry(candidate.thread_id).or_default().push(candidate);
    }

    let mut conversations: Vec<NotificationConversation> = Vec::new();
    for thread_id in thread_order {
        let thread_rows = by_thread.remove(&thread_id).unwrap_or_default();
        let mut items: Vec<NotificationItem> = Vec::new();

        for candidate in &thread_rows {
            if candidate.include_message() {
                items.push(NotificationItem::Message(MessageItem {
                    thread_recipient: candidate.thread_recipient.clone(),
                    record: candidate.row.record.clone(),
                }));
            }

            if candidate.row.has_unread_reactions {
                for reaction in &candidate.row.record.reactions {
                    if candidate.include_reaction(reaction) {
                        items.push(NotificationItem::Reaction(ReactionItem {
                            thread_recipient: candidate.thread_recipient.clone(),
                            record: candidate.row.record.clone(),
                            reaction: reaction.clone(),
                        }));
                    }
                }
            }
        }

        items.sort_by_key(NotificationItem::sort_key);

        // 粘性裁剪：最新条目非本人时，丢弃最后一条本人条目及其之前的全部条目
        if !items.is_empty()
            && sticky_threads.contains_key(&thread_id)
            && !items.last().unwrap().author().is_self
        {
            let after_last_self = items
                .iter()
                .rposition(|item| item.author().is_self)
                .map(|index| index + 1)
                .unwrap_or(0);
            items.drain(..after_last_self);
        }

        if items.is_empty() {
            debug!(thread_id, "All candidates filtered out, skipping thread");
            continue;
        }

        let recipient = items[0].thread_recipient().clone();
        conversations.push(NotificationConversation::new(recipient, thread_id, items));
    }

    debug!(
        conversations = conversations.len(),
        "Constructed notification state"
    );
    NotificationState::new(conversations)
}
