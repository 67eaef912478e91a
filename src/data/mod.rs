mod backend;
mod error;
pub mod ft;
mod notices;
mod observer;
mod query;
mod record;
mod store;
mod utils;
mod value;

pub use backend::{Backend, MemoryBackend};
pub use error::{ErrorInfo, RequestState, SaveTarget};
pub use notices::{Notice, NoticeChannel, NoticeId, NoticeKind, NoticeQueue};
pub use observer::{event_channel, EventReceiver, EventSender, ObserverToken, StoreEvent};
pub use query::{ListQuery, ListResult, SEARCH_FILTER};
pub use record::{FieldPatch, Record};
pub use store::RecordStore;
pub use utils::decode_entities;
pub use value::Value;

use serde::{Deserialize, Serialize};

/// The type of a persisted record, e.g. "page"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct EntityType(pub String);

impl From<&str> for EntityType {
    fn from(name: &str) -> Self {
        EntityType(name.to_string())
    }
}

impl From<String> for EntityType {
    fn from(name: String) -> Self {
        EntityType(name)
    }
}

impl EntityType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The name of a single field within a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct FieldType(pub String);

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        FieldType(name.to_string())
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        FieldType(name)
    }
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub type Timestamp = time::OffsetDateTime;

pub fn now() -> Timestamp {
    time::OffsetDateTime::now_utc()
}
