use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::{now, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Where a notice is surfaced. The snackbar channel is the transient,
/// auto-dismissing one; everything else renders in the default area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeChannel {
    Snackbar,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeId(Uuid);

impl NoticeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoticeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NoticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub kind: NoticeKind,
    pub channel: NoticeChannel,
    pub created: Timestamp,
}

/// Ordered queue of user-facing notices, oldest first. Owned by the
/// application root and passed by reference, never a process-wide global.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        NoticeQueue::default()
    }

    pub fn create_success_notice(&mut self, message: &str, channel: NoticeChannel) -> NoticeId {
        self.push(message, NoticeKind::Success, channel)
    }

    pub fn create_error_notice(&mut self, message: &str, channel: NoticeChannel) -> NoticeId {
        self.push(message, NoticeKind::Error, channel)
    }

    fn push(&mut self, message: &str, kind: NoticeKind, channel: NoticeChannel) -> NoticeId {
        let id = NoticeId::new();
        self.notices.push(Notice {
            id,
            message: message.to_string(),
            kind,
            channel,
            created: now(),
        });
        id
    }

    /// All notices in queue order.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// The snackbar view: only notices on the snackbar channel, queue order.
    pub fn snackbar(&self) -> Vec<&Notice> {
        self.notices
            .iter()
            .filter(|n| n.channel == NoticeChannel::Snackbar)
            .collect()
    }

    /// Dismiss a notice by id. Returns false when the id is unknown.
    pub fn remove_notice(&mut self, id: NoticeId) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
