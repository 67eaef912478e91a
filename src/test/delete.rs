#[cfg(test)]
mod tests {
    use crate::*;

    const PAGE: &str = "page";

    fn loaded_store(titles: &[&str]) -> (RecordStore<MemoryBackend>, Vec<RecordId>) {
        let mut backend = MemoryBackend::new();
        let ids = titles
            .iter()
            .map(|title| backend.insert_seed(PAGE, title))
            .collect();
        let mut store = RecordStore::new(backend);
        store.resolve_query(&EntityType::from(PAGE), &ListQuery::new());
        (store, ids)
    }

    #[test]
    fn successful_delete_emits_a_snackbar_success_notice() {
        let (mut store, ids) = loaded_store(&["Hello"]);
        let mut notices = NoticeQueue::new();
        let action = DeleteAction::new(PAGE);

        assert!(action.delete(&mut store, &mut notices, ids[0]));

        let queued = notices.notices();
        assert_eq!(queued.len(), 1);
        assert_eq!(queued[0].message, "The page was deleted!");
        assert_eq!(queued[0].kind, NoticeKind::Success);
        assert_eq!(queued[0].channel, NoticeChannel::Snackbar);
        assert!(store.get_record(&EntityType::from(PAGE), ids[0]).is_none());
    }

    #[test]
    fn failed_delete_appends_the_retry_suffix_to_the_backend_message() {
        let (mut store, ids) = loaded_store(&["Hello"]);
        let mut notices = NoticeQueue::new();
        let action = DeleteAction::new(PAGE);

        store.backend_mut().fail_next_delete =
            Some(ErrorInfo::new("The page could not be deleted."));
        assert!(!action.delete(&mut store, &mut notices, ids[0]));

        let queued = notices.notices();
        assert_eq!(queued.len(), 1);
        assert_eq!(
            queued[0].message,
            "The page could not be deleted. Please refresh the page and try again."
        );
        assert!(queued[0].message.ends_with(DELETE_RETRY_SUFFIX));
        assert_eq!(queued[0].kind, NoticeKind::Error);
        assert_eq!(queued[0].channel, NoticeChannel::Snackbar);
    }

    #[test]
    fn failure_message_falls_back_when_no_error_was_recorded() {
        assert_eq!(
            delete_failure_message(None),
            "There was an error. Please refresh the page and try again."
        );
        assert_eq!(
            delete_failure_message(Some(&ErrorInfo::new("Forbidden."))),
            "Forbidden. Please refresh the page and try again."
        );
    }

    #[test]
    fn delete_is_refused_while_one_is_in_flight() {
        let (mut store, ids) = loaded_store(&["Hello"]);
        let mut notices = NoticeQueue::new();
        let action = DeleteAction::new(PAGE);

        store.set_deleting(&EntityType::from(PAGE), ids[0], true);
        assert!(action.is_deleting(&store, ids[0]));
        assert!(!action.delete(&mut store, &mut notices, ids[0]));

        // Refusal is silent: no notice, no backend call
        assert!(notices.is_empty());
        assert_eq!(store.backend().delete_calls, 0);
    }
}
