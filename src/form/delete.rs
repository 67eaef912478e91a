use crate::data::{Backend, EntityType, ErrorInfo, NoticeChannel, NoticeQueue, RecordId, RecordStore};

pub const DELETE_SUCCESS_MESSAGE: &str = "The page was deleted!";
pub const DELETE_ERROR_FALLBACK: &str = "There was an error.";
pub const DELETE_RETRY_SUFFIX: &str = "Please refresh the page and try again.";

/// The user-facing message for a failed delete: the backend's error message,
/// or the generic fallback, followed by the fixed remediation suffix.
pub fn delete_failure_message(error: Option<&ErrorInfo>) -> String {
    let detail = error
        .map(|e| e.message.as_str())
        .unwrap_or(DELETE_ERROR_FALLBACK);
    format!("{} {}", detail, DELETE_RETRY_SUFFIX)
}

/// Delete controller: issues the delete and converts the boolean outcome into
/// snackbar notices.
#[derive(Debug, Clone)]
pub struct DeleteAction {
    entity_type: EntityType,
}

impl DeleteAction {
    pub fn new(entity_type: impl Into<EntityType>) -> Self {
        DeleteAction {
            entity_type: entity_type.into(),
        }
    }

    pub fn is_deleting<B: Backend>(&self, store: &RecordStore<B>, id: RecordId) -> bool {
        store.is_deleting(&self.entity_type, id)
    }

    /// Delete a record and emit the outcome notice. Refused (no notice) while
    /// a delete for the same id is in flight.
    pub fn delete<B: Backend>(
        &self,
        store: &mut RecordStore<B>,
        notices: &mut NoticeQueue,
        id: RecordId,
    ) -> bool {
        if store.is_deleting(&self.entity_type, id) {
            return false;
        }

        let deleted = store.delete_record(&self.entity_type, id);
        if deleted {
            notices.create_success_notice(DELETE_SUCCESS_MESSAGE, NoticeChannel::Snackbar);
        } else {
            // Read the failure through the store handle only after the delete
            // call has returned; the store records it during the call.
            let error = store.get_last_delete_error(&self.entity_type, id);
            notices.create_error_notice(&delete_failure_message(error), NoticeChannel::Snackbar);
        }
        deleted
    }
}
