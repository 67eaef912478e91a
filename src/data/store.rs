use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use log::{debug, warn};
use lru::LruCache;
use rustc_hash::FxHashMap;

use crate::data::observer::ObserverCallback;
use crate::data::{
    Backend, EntityType, ErrorInfo, EventSender, FieldPatch, ListQuery, ListResult, ObserverToken,
    Record, RecordId, RequestState, SaveTarget, StoreEvent,
};

/// Resolved queries kept per store before the least recently used ones are
/// dropped and become eligible for refetch.
const QUERY_CACHE_CAPACITY: NonZeroUsize = NonZeroUsize::new(32).unwrap();

/// The entity store: authoritative record cache, pending edit overlays,
/// save/delete request tracking and query resolution, all in front of a
/// [`Backend`] that does the actual persistence.
///
/// A store is constructed explicitly by the application root and passed down
/// by reference; there is no ambient global instance. Components observe
/// changes through [`RecordStore::observe`] and release their registration
/// with [`RecordStore::unobserve`] on teardown.
pub struct RecordStore<B: Backend> {
    backend: B,
    records: FxHashMap<EntityType, BTreeMap<RecordId, Record>>,
    overlays: FxHashMap<(EntityType, RecordId), FieldPatch>,
    save_state: FxHashMap<(EntityType, SaveTarget), RequestState>,
    delete_state: FxHashMap<(EntityType, RecordId), RequestState>,
    queries: LruCache<(EntityType, String), Vec<RecordId>>,
    observers: Vec<(ObserverToken, ObserverCallback)>,
}

impl<B: Backend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        RecordStore {
            backend,
            records: FxHashMap::default(),
            overlays: FxHashMap::default(),
            save_state: FxHashMap::default(),
            delete_state: FxHashMap::default(),
            queries: LruCache::new(QUERY_CACHE_CAPACITY),
            observers: Vec::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // --- records and overlays ---

    /// The authoritative record, without pending edits.
    pub fn get_record(&self, entity_type: &EntityType, id: RecordId) -> Option<&Record> {
        self.records.get(entity_type).and_then(|m| m.get(&id))
    }

    /// The authoritative record merged with its pending overlay.
    pub fn get_edited_record(&self, entity_type: &EntityType, id: RecordId) -> Option<Record> {
        let record = self.get_record(entity_type, id)?;
        match self.overlays.get(&(entity_type.clone(), id)) {
            Some(overlay) => Some(record.merged(overlay)),
            None => Some(record.clone()),
        }
    }

    /// Whether the record has a non-empty pending overlay. Overlaying a field
    /// with its current value still counts as an edit.
    pub fn has_edits(&self, entity_type: &EntityType, id: RecordId) -> bool {
        self.overlays
            .get(&(entity_type.clone(), id))
            .is_some_and(|o| !o.is_empty())
    }

    /// Write pending field values into the record's overlay. Synchronous and
    /// local; nothing reaches the backend until a save.
    pub fn edit_record(&mut self, entity_type: &EntityType, id: RecordId, patch: FieldPatch) {
        let overlay = self
            .overlays
            .entry((entity_type.clone(), id))
            .or_default();
        overlay.extend(patch);
        self.emit(StoreEvent::RecordEdited {
            entity_type: entity_type.clone(),
            id,
        });
    }

    /// Drop the pending overlay without touching the backend.
    pub fn discard_edits(&mut self, entity_type: &EntityType, id: RecordId) {
        if self.overlays.remove(&(entity_type.clone(), id)).is_some() {
            self.emit(StoreEvent::EditsDiscarded {
                entity_type: entity_type.clone(),
                id,
            });
        }
    }

    // --- saving ---

    /// Persist the pending overlay for a record. Returns the saved record, or
    /// `None` on failure (check [`RecordStore::get_last_save_error`]) and when
    /// the call is rejected because a save is already in flight or there is
    /// nothing to save.
    ///
    /// On success the overlay is cleared; on failure it is left intact so the
    /// user's input survives for a retry.
    pub fn save_edited_record(
        &mut self,
        entity_type: &EntityType,
        id: RecordId,
    ) -> Option<Record> {
        let key = (entity_type.clone(), SaveTarget::Existing(id));
        if self.save_state.get(&key).is_some_and(|s| s.in_flight) {
            warn!("rejecting save for {} {}: already saving", entity_type, id);
            return None;
        }

        let patch = match self.overlays.get(&(entity_type.clone(), id)) {
            Some(overlay) if !overlay.is_empty() => overlay.clone(),
            _ => {
                warn!("rejecting save for {} {}: no edits", entity_type, id);
                return None;
            }
        };

        self.save_state.insert(
            key.clone(),
            RequestState {
                in_flight: true,
                last_error: None,
            },
        );
        self.emit(StoreEvent::SaveStarted {
            entity_type: entity_type.clone(),
            target: SaveTarget::Existing(id),
        });

        let outcome = self.backend.save_existing(entity_type, id, &patch);
        self.finish_save(entity_type, SaveTarget::Existing(id), outcome)
    }

    /// Persist a draft that has no id yet. The backend assigns the id and the
    /// returned record enters the authoritative cache.
    pub fn save_new_record(
        &mut self,
        entity_type: &EntityType,
        fields: FieldPatch,
    ) -> Option<Record> {
        let key = (entity_type.clone(), SaveTarget::Draft);
        if self.save_state.get(&key).is_some_and(|s| s.in_flight) {
            warn!("rejecting create for {}: already saving", entity_type);
            return None;
        }

        self.save_state.insert(
            key,
            RequestState {
                in_flight: true,
                last_error: None,
            },
        );
        self.emit(StoreEvent::SaveStarted {
            entity_type: entity_type.clone(),
            target: SaveTarget::Draft,
        });

        let outcome = self.backend.save_new(entity_type, &fields);
        let saved = self.finish_save(entity_type, SaveTarget::Draft, outcome);

        // A new record changes which queries it belongs to; drop resolved
        // results for this type so the next refresh refetches them.
        if saved.is_some() {
            self.invalidate_queries(entity_type);
        }
        saved
    }

    fn finish_save(
        &mut self,
        entity_type: &EntityType,
        target: SaveTarget,
        outcome: Result<Record, ErrorInfo>,
    ) -> Option<Record> {
        let key = (entity_type.clone(), target);
        match outcome {
            Ok(record) => {
                debug!("saved {} {}", entity_type, target);
                if let SaveTarget::Existing(id) = target {
                    self.overlays.remove(&(entity_type.clone(), id));
                }
                self.records
                    .entry(entity_type.clone())
                    .or_default()
                    .insert(record.id, record.clone());
                self.save_state.insert(key, RequestState::default());
                self.emit(StoreEvent::SaveFinished {
                    entity_type: entity_type.clone(),
                    target,
                    ok: true,
                });
                Some(record)
            }
            Err(error) => {
                warn!("save failed for {} {}: {}", entity_type, target, error);
                self.save_state.insert(
                    key,
                    RequestState {
                        in_flight: false,
                        last_error: Some(error),
                    },
                );
                self.emit(StoreEvent::SaveFinished {
                    entity_type: entity_type.clone(),
                    target,
                    ok: false,
                });
                None
            }
        }
    }

    pub fn is_saving(&self, entity_type: &EntityType, id: RecordId) -> bool {
        self.save_state
            .get(&(entity_type.clone(), SaveTarget::Existing(id)))
            .is_some_and(|s| s.in_flight)
    }

    pub fn is_saving_new(&self, entity_type: &EntityType) -> bool {
        self.save_state
            .get(&(entity_type.clone(), SaveTarget::Draft))
            .is_some_and(|s| s.in_flight)
    }

    pub fn get_last_save_error(
        &self,
        entity_type: &EntityType,
        id: RecordId,
    ) -> Option<&ErrorInfo> {
        self.save_state
            .get(&(entity_type.clone(), SaveTarget::Existing(id)))
            .and_then(|s| s.last_error.as_ref())
    }

    pub fn get_last_save_error_new(&self, entity_type: &EntityType) -> Option<&ErrorInfo> {
        self.save_state
            .get(&(entity_type.clone(), SaveTarget::Draft))
            .and_then(|s| s.last_error.as_ref())
    }

    // --- deleting ---

    /// Delete a record. Failure is signaled by `false`, never a panic or an
    /// error return; the detail is recorded for
    /// [`RecordStore::get_last_delete_error`]. On success the record leaves
    /// the authoritative cache and every cached query result.
    pub fn delete_record(&mut self, entity_type: &EntityType, id: RecordId) -> bool {
        let key = (entity_type.clone(), id);
        if self.delete_state.get(&key).is_some_and(|s| s.in_flight) {
            warn!("rejecting delete for {} {}: already deleting", entity_type, id);
            return false;
        }

        self.delete_state.insert(
            key.clone(),
            RequestState {
                in_flight: true,
                last_error: None,
            },
        );
        self.emit(StoreEvent::DeleteStarted {
            entity_type: entity_type.clone(),
            id,
        });

        let outcome = self.backend.delete(entity_type, id);
        let ok = match outcome {
            Ok(()) => {
                debug!("deleted {} {}", entity_type, id);
                if let Some(records) = self.records.get_mut(entity_type) {
                    records.remove(&id);
                }
                self.overlays.remove(&key);
                for ((cached_type, _), ids) in self.queries.iter_mut() {
                    if cached_type == entity_type {
                        ids.retain(|cached_id| *cached_id != id);
                    }
                }
                self.delete_state.insert(key, RequestState::default());
                true
            }
            Err(error) => {
                warn!("delete failed for {} {}: {}", entity_type, id, error);
                self.delete_state.insert(
                    key,
                    RequestState {
                        in_flight: false,
                        last_error: Some(error),
                    },
                );
                false
            }
        };
        self.emit(StoreEvent::DeleteFinished {
            entity_type: entity_type.clone(),
            id,
            ok,
        });
        ok
    }

    pub fn is_deleting(&self, entity_type: &EntityType, id: RecordId) -> bool {
        self.delete_state
            .get(&(entity_type.clone(), id))
            .is_some_and(|s| s.in_flight)
    }

    pub fn get_last_delete_error(
        &self,
        entity_type: &EntityType,
        id: RecordId,
    ) -> Option<&ErrorInfo> {
        self.delete_state
            .get(&(entity_type.clone(), id))
            .and_then(|s| s.last_error.as_ref())
    }

    // --- queries ---

    /// Fetch the result set for a query and cache it under the query's
    /// serialized key. Fetched records enter the authoritative cache. A fetch
    /// failure still finishes resolution, with an empty result set.
    pub fn resolve_query(&mut self, entity_type: &EntityType, query: &ListQuery) -> bool {
        let cache_key = query.cache_key();
        let (ids, ok) = match self.backend.fetch_list(entity_type, query) {
            Ok(fetched) => {
                debug!("resolved {} query {}", entity_type, cache_key);
                let ids = fetched.iter().map(|r| r.id).collect();
                let records = self.records.entry(entity_type.clone()).or_default();
                for record in fetched {
                    records.insert(record.id, record);
                }
                (ids, true)
            }
            Err(error) => {
                warn!("list fetch failed for {}: {}", entity_type, error);
                (Vec::new(), false)
            }
        };
        self.queries.put((entity_type.clone(), cache_key.clone()), ids);
        self.emit(StoreEvent::QueryResolved {
            entity_type: entity_type.clone(),
            cache_key,
        });
        ok
    }

    /// Whether a fetch for this exact query has completed at least once.
    pub fn has_resolved_query(&self, entity_type: &EntityType, query: &ListQuery) -> bool {
        self.queries
            .contains(&(entity_type.clone(), query.cache_key()))
    }

    /// The cached result set for a query, or `None` while unresolved. Never
    /// triggers a fetch; call [`RecordStore::resolve_query`] for that.
    pub fn list_records(
        &self,
        entity_type: &EntityType,
        query: &ListQuery,
    ) -> Option<Vec<Record>> {
        let ids = self
            .queries
            .peek(&(entity_type.clone(), query.cache_key()))?;
        let records = ids
            .iter()
            .filter_map(|id| self.get_record(entity_type, *id).cloned())
            .collect();
        Some(records)
    }

    /// Resolution flag and records for a query in one view.
    pub fn list_result(&self, entity_type: &EntityType, query: &ListQuery) -> ListResult {
        match self.list_records(entity_type, query) {
            Some(records) => ListResult {
                has_resolved: true,
                records,
            },
            None => ListResult {
                has_resolved: false,
                records: Vec::new(),
            },
        }
    }

    fn invalidate_queries(&mut self, entity_type: &EntityType) {
        let stale: Vec<_> = self
            .queries
            .iter()
            .filter(|((cached_type, _), _)| cached_type == entity_type)
            .map(|(key, _)| key.clone())
            .collect();
        for key in stale {
            self.queries.pop(&key);
        }
    }

    // --- observers ---

    /// Register a callback invoked after every store mutation. Keep the token
    /// and pass it to [`RecordStore::unobserve`] on teardown.
    pub fn observe(&mut self, callback: impl FnMut(&StoreEvent) + 'static) -> ObserverToken {
        let token = ObserverToken::new();
        self.observers.push((token.clone(), Box::new(callback)));
        token
    }

    /// Register an observer that forwards every event over a channel.
    pub fn observe_channel(&mut self, sender: EventSender) -> ObserverToken {
        self.observe(move |event| {
            // The receiver side may already be gone during teardown
            let _ = sender.send(event.clone());
        })
    }

    /// Remove an observer. Returns false when the token is unknown.
    pub fn unobserve(&mut self, token: &ObserverToken) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(t, _)| t != token);
        self.observers.len() != before
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, callback) in self.observers.iter_mut() {
            callback(&event);
        }
    }

    // --- test support ---

    /// Force the in-flight flag for a save key, standing in for a backend
    /// call that has not completed yet.
    #[cfg(test)]
    pub(crate) fn set_saving(&mut self, entity_type: &EntityType, target: SaveTarget, saving: bool) {
        self.save_state
            .entry((entity_type.clone(), target))
            .or_default()
            .in_flight = saving;
    }

    #[cfg(test)]
    pub(crate) fn set_deleting(&mut self, entity_type: &EntityType, id: RecordId, deleting: bool) {
        self.delete_state
            .entry((entity_type.clone(), id))
            .or_default()
            .in_flight = deleting;
    }
}
