use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::data::{EntityType, RecordId, SaveTarget};

/// A store mutation, delivered to registered observers after the mutation
/// has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
    RecordEdited {
        entity_type: EntityType,
        id: RecordId,
    },
    EditsDiscarded {
        entity_type: EntityType,
        id: RecordId,
    },
    SaveStarted {
        entity_type: EntityType,
        target: SaveTarget,
    },
    SaveFinished {
        entity_type: EntityType,
        target: SaveTarget,
        ok: bool,
    },
    DeleteStarted {
        entity_type: EntityType,
        id: RecordId,
    },
    DeleteFinished {
        entity_type: EntityType,
        id: RecordId,
        ok: bool,
    },
    QueryResolved {
        entity_type: EntityType,
        cache_key: String,
    },
}

/// A unique token for an observer registration
/// This allows callers to unregister a specific callback on teardown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ObserverToken(Uuid);

impl ObserverToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ObserverToken {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObserverToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ObserverToken {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

pub(crate) type ObserverCallback = Box<dyn FnMut(&StoreEvent)>;

/// Event sender type for forwarding store events to a channel
pub type EventSender = mpsc::UnboundedSender<StoreEvent>;

/// Event receiver type for consuming forwarded store events
pub type EventReceiver = mpsc::UnboundedReceiver<StoreEvent>;

/// Create a new event channel pair
pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
