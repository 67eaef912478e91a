use crate::data::{ft, Backend, EntityType, FieldType, Record, RecordId, RecordStore, Value};
use crate::form::FormView;
use crate::patch;

/// Form controller for an existing record. Holds only the record's key; all
/// state (overlay, saving flag, last error) lives in the store passed to each
/// call.
#[derive(Debug, Clone)]
pub struct EditForm {
    entity_type: EntityType,
    id: RecordId,
}

impl EditForm {
    pub fn new(entity_type: impl Into<EntityType>, id: RecordId) -> Self {
        EditForm {
            entity_type: entity_type.into(),
            id,
        }
    }

    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn view<B: Backend>(&self, store: &RecordStore<B>) -> FormView {
        let title = store
            .get_edited_record(&self.entity_type, self.id)
            .and_then(|r| r.field_str(ft::TITLE).map(str::to_string))
            .unwrap_or_default();
        FormView {
            title,
            has_edits: store.has_edits(&self.entity_type, self.id),
            is_saving: store.is_saving(&self.entity_type, self.id),
            last_error: store
                .get_last_save_error(&self.entity_type, self.id)
                .cloned(),
        }
    }

    pub fn set_title<B: Backend>(&self, store: &mut RecordStore<B>, title: &str) {
        store.edit_record(&self.entity_type, self.id, patch!(ft::TITLE => title));
    }

    pub fn set_field<B: Backend>(&self, store: &mut RecordStore<B>, field: FieldType, value: Value) {
        let mut fields = patch!();
        fields.insert(field, value);
        store.edit_record(&self.entity_type, self.id, fields);
    }

    /// Persist pending edits. The completion callback fires only when the
    /// save succeeded; the return value reports the same outcome. Rejected
    /// outright when there is nothing to save or a save is in flight.
    pub fn save<B: Backend>(
        &self,
        store: &mut RecordStore<B>,
        on_finished: impl FnOnce(&Record),
    ) -> bool {
        if !self.view(store).can_save() {
            return false;
        }
        match store.save_edited_record(&self.entity_type, self.id) {
            Some(record) => {
                on_finished(&record);
                true
            }
            None => false,
        }
    }

    /// Discard pending edits. Never issues a backend call. No-op while a save
    /// is in flight, since the overlay must survive a failing save.
    pub fn cancel<B: Backend>(&self, store: &mut RecordStore<B>, on_cancel: impl FnOnce()) {
        if store.is_saving(&self.entity_type, self.id) {
            return;
        }
        store.discard_edits(&self.entity_type, self.id);
        on_cancel();
    }
}
