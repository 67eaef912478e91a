use crate::data::{ft, Backend, EntityType, FieldPatch, FieldType, Record, RecordStore, Value};
use crate::form::FormView;

/// Form controller for a not-yet-created record. The draft has no id and no
/// authoritative baseline to diff against, so the fields live here instead of
/// in a store overlay and `has_edits` means "the title is non-empty".
#[derive(Debug, Clone)]
pub struct CreateForm {
    entity_type: EntityType,
    draft: FieldPatch,
}

impl CreateForm {
    pub fn new(entity_type: impl Into<EntityType>) -> Self {
        CreateForm {
            entity_type: entity_type.into(),
            draft: FieldPatch::new(),
        }
    }

    pub fn title(&self) -> &str {
        self.draft
            .get(&FieldType::from(ft::TITLE))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.insert(ft::TITLE.into(), title.into());
    }

    pub fn set_field(&mut self, field: FieldType, value: Value) {
        self.draft.insert(field, value);
    }

    pub fn has_edits(&self) -> bool {
        !self.title().is_empty()
    }

    pub fn view<B: Backend>(&self, store: &RecordStore<B>) -> FormView {
        FormView {
            title: self.title().to_string(),
            has_edits: self.has_edits(),
            is_saving: store.is_saving_new(&self.entity_type),
            last_error: store.get_last_save_error_new(&self.entity_type).cloned(),
        }
    }

    /// Submit the draft. New records are created with publish status unless
    /// the draft set one explicitly. On success the draft resets and the
    /// completion callback fires exactly once, with the record the backend
    /// returned (id now assigned).
    pub fn save<B: Backend>(
        &mut self,
        store: &mut RecordStore<B>,
        on_finished: impl FnOnce(&Record),
    ) -> bool {
        if !self.has_edits() || store.is_saving_new(&self.entity_type) {
            return false;
        }

        let mut fields = self.draft.clone();
        fields
            .entry(ft::STATUS.into())
            .or_insert_with(|| ft::STATUS_PUBLISH.into());

        match store.save_new_record(&self.entity_type, fields) {
            Some(record) => {
                self.draft.clear();
                on_finished(&record);
                true
            }
            None => false,
        }
    }

    /// Throw the draft away. Purely local; the store never saw it.
    pub fn cancel(&mut self, on_cancel: impl FnOnce()) {
        self.draft.clear();
        on_cancel();
    }
}
