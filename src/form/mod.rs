mod create;
mod delete;
mod edit;
mod list;

pub use create::CreateForm;
pub use delete::{
    delete_failure_message, DeleteAction, DELETE_ERROR_FALLBACK, DELETE_RETRY_SUFFIX,
    DELETE_SUCCESS_MESSAGE,
};
pub use edit::EditForm;
pub use list::{ListRow, ListStatus, ListView, EMPTY_STATE_TEXT};

use crate::data::ErrorInfo;

/// Render snapshot shared by the create and edit forms: everything the title
/// input, the inline error and the two buttons need.
///
/// UI contract: the save control must be disabled whenever
/// `!has_edits || is_saving`, and the cancel control while `is_saving`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    /// Raw (undecoded) title, as typed
    pub title: String,
    pub has_edits: bool,
    pub is_saving: bool,
    pub last_error: Option<ErrorInfo>,
}

impl FormView {
    pub fn can_save(&self) -> bool {
        self.has_edits && !self.is_saving
    }

    pub fn can_cancel(&self) -> bool {
        !self.is_saving
    }
}
