use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::data::{ft, EntityType, ErrorInfo, FieldPatch, ListQuery, Record, RecordId, SEARCH_FILTER};

/// The persistence seam behind a [`RecordStore`](crate::RecordStore).
///
/// Implementations own the real storage (a REST backend, a database, a test
/// double). The store is the only caller and serializes calls per key, so
/// implementations never see two concurrent saves for the same record.
///
/// [`RecordStore`]: crate::RecordStore
pub trait Backend {
    fn fetch_list(
        &mut self,
        entity_type: &EntityType,
        query: &ListQuery,
    ) -> Result<Vec<Record>, ErrorInfo>;

    fn save_new(
        &mut self,
        entity_type: &EntityType,
        fields: &FieldPatch,
    ) -> Result<Record, ErrorInfo>;

    fn save_existing(
        &mut self,
        entity_type: &EntityType,
        id: RecordId,
        patch: &FieldPatch,
    ) -> Result<Record, ErrorInfo>;

    fn delete(&mut self, entity_type: &EntityType, id: RecordId) -> Result<(), ErrorInfo>;
}

/// In-memory backend: id assignment from a counter, substring search on the
/// title field, and fault injection switches for exercising failure paths.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: FxHashMap<EntityType, BTreeMap<RecordId, Record>>,
    next_id: u64,

    pub fail_next_save: Option<ErrorInfo>,
    pub fail_next_delete: Option<ErrorInfo>,

    pub fetch_calls: usize,
    pub save_calls: usize,
    pub delete_calls: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Seed a record directly, bypassing the save path. Returns its id.
    pub fn insert_seed(&mut self, entity_type: impl Into<EntityType>, title: &str) -> RecordId {
        self.next_id += 1;
        let id = RecordId(self.next_id);
        let mut record = Record::new(id);
        record
            .fields
            .insert(ft::TITLE.into(), title.into());
        self.records
            .entry(entity_type.into())
            .or_default()
            .insert(id, record);
        id
    }

    pub fn record(&self, entity_type: &EntityType, id: RecordId) -> Option<&Record> {
        self.records.get(entity_type).and_then(|m| m.get(&id))
    }

    fn matches(record: &Record, query: &ListQuery) -> bool {
        match query.get(SEARCH_FILTER) {
            Some(term) => record
                .field_str(ft::TITLE)
                .unwrap_or_default()
                .to_lowercase()
                .contains(&term.to_lowercase()),
            None => true,
        }
    }
}

impl Backend for MemoryBackend {
    fn fetch_list(
        &mut self,
        entity_type: &EntityType,
        query: &ListQuery,
    ) -> Result<Vec<Record>, ErrorInfo> {
        self.fetch_calls += 1;
        let records = self
            .records
            .get(entity_type)
            .map(|m| {
                m.values()
                    .filter(|r| Self::matches(r, query))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(records)
    }

    fn save_new(
        &mut self,
        entity_type: &EntityType,
        fields: &FieldPatch,
    ) -> Result<Record, ErrorInfo> {
        self.save_calls += 1;
        if let Some(error) = self.fail_next_save.take() {
            return Err(error);
        }

        self.next_id += 1;
        let id = RecordId(self.next_id);
        let mut record = Record::new(id);
        record.fields.extend(fields.clone());
        self.records
            .entry(entity_type.clone())
            .or_default()
            .insert(id, record.clone());
        Ok(record)
    }

    fn save_existing(
        &mut self,
        entity_type: &EntityType,
        id: RecordId,
        patch: &FieldPatch,
    ) -> Result<Record, ErrorInfo> {
        self.save_calls += 1;
        if let Some(error) = self.fail_next_save.take() {
            return Err(error);
        }

        let record = self
            .records
            .get_mut(entity_type)
            .and_then(|m| m.get_mut(&id))
            .ok_or_else(|| ErrorInfo::with_code("not_found", format!("No such record: {}", id)))?;
        for (field, value) in patch {
            record.fields.insert(field.clone(), value.clone());
        }
        Ok(record.clone())
    }

    fn delete(&mut self, entity_type: &EntityType, id: RecordId) -> Result<(), ErrorInfo> {
        self.delete_calls += 1;
        if let Some(error) = self.fail_next_delete.take() {
            return Err(error);
        }

        let removed = self
            .records
            .get_mut(entity_type)
            .and_then(|m| m.remove(&id));
        match removed {
            Some(_) => Ok(()),
            None => Err(ErrorInfo::with_code(
                "not_found",
                format!("No such record: {}", id),
            )),
        }
    }
}
