mod data;
mod form;
mod layout;

#[cfg(test)]
mod test;

pub use data::{
    decode_entities, event_channel, now, Backend, EntityType, ErrorInfo, EventReceiver,
    EventSender, FieldPatch, FieldType, ListQuery, ListResult, MemoryBackend, Notice,
    NoticeChannel, NoticeId, NoticeKind, NoticeQueue, ObserverToken, Record, RecordId, RecordStore,
    RequestState, SaveTarget, StoreEvent, Timestamp, Value, SEARCH_FILTER,
};
pub use data::ft;
pub use form::{
    delete_failure_message, CreateForm, DeleteAction, EditForm, FormView, ListRow, ListStatus,
    ListView, DELETE_ERROR_FALLBACK, DELETE_RETRY_SUFFIX, DELETE_SUCCESS_MESSAGE, EMPTY_STATE_TEXT,
};
pub use layout::{ColumnSettings, DropCapSize, RuleStyle, ShadowSize, StyleVariant};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Create a FieldPatch with minimal syntax
///
/// # Arguments
///
/// Pairs of `field => value` where the field is anything convertible into a
/// `FieldType` and the value anything convertible into a `Value`.
///
/// # Example
///
/// ```
/// use formstore_rs::{ft, patch};
///
/// let fields = patch!(ft::TITLE => "Hello", ft::STATUS => "publish");
/// assert_eq!(fields.len(), 2);
/// ```
#[macro_export]
macro_rules! patch {
    () => {
        $crate::FieldPatch::new()
    };
    ( $($field:expr => $value:expr),+ $(,)? ) => {{
        let mut fields = $crate::FieldPatch::new();
        $(
            fields.insert($crate::FieldType::from($field), $crate::Value::from($value));
        )+
        fields
    }};
}
