use crate::data::{Backend, EntityType, ListQuery, Record, RecordId, RecordStore};

/// Text shown in place of the table when a resolved query has no records.
pub const EMPTY_STATE_TEXT: &str = "No results";

/// One table row: id plus the entity-decoded title.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: RecordId,
    pub title: String,
}

impl From<&Record> for ListRow {
    fn from(record: &Record) -> Self {
        ListRow {
            id: record.id,
            title: record.title(),
        }
    }
}

/// The three-way render contract: busy indicator until the query resolves,
/// explicit empty state for zero records, otherwise the rows.
#[derive(Debug, Clone, PartialEq)]
pub enum ListStatus {
    Loading,
    Empty,
    Ready(Vec<ListRow>),
}

/// List/search controller. Owns the search term; result data and resolution
/// state stay in the store.
#[derive(Debug, Clone)]
pub struct ListView {
    entity_type: EntityType,
    search_term: String,
}

impl ListView {
    pub fn new(entity_type: impl Into<EntityType>) -> Self {
        ListView {
            entity_type: entity_type.into(),
            search_term: String::new(),
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Update the search box synchronously; the active query recomputes from
    /// the term on demand.
    pub fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    /// The active query: no `search` key while the term is empty.
    pub fn query(&self) -> ListQuery {
        ListQuery::search(&self.search_term)
    }

    /// Fetch the active query through the store.
    pub fn refresh<B: Backend>(&self, store: &mut RecordStore<B>) -> bool {
        store.resolve_query(&self.entity_type, &self.query())
    }

    pub fn status<B: Backend>(&self, store: &RecordStore<B>) -> ListStatus {
        let result = store.list_result(&self.entity_type, &self.query());
        if !result.has_resolved {
            return ListStatus::Loading;
        }
        if result.records.is_empty() {
            return ListStatus::Empty;
        }
        ListStatus::Ready(result.records.iter().map(ListRow::from).collect())
    }
}
