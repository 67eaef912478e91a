#[cfg(test)]
mod tests {
    use crate::*;

    const PAGE: &str = "page";

    fn store_with(titles: &[&str]) -> RecordStore<MemoryBackend> {
        let mut backend = MemoryBackend::new();
        for title in titles {
            backend.insert_seed(PAGE, title);
        }
        RecordStore::new(backend)
    }

    #[test]
    fn empty_search_term_clears_the_filter_key() {
        let mut view = ListView::new(PAGE);

        view.set_search_term("abc");
        assert_eq!(view.query().get(SEARCH_FILTER), Some("abc"));

        view.set_search_term("");
        assert_eq!(view.query().get(SEARCH_FILTER), None);
        assert!(view.query().is_empty());
    }

    #[test]
    fn status_is_loading_until_the_query_resolves() {
        let mut store = store_with(&["A"]);
        let view = ListView::new(PAGE);

        assert_eq!(view.status(&store), ListStatus::Loading);
        view.refresh(&mut store);
        assert!(matches!(view.status(&store), ListStatus::Ready(_)));
    }

    #[test]
    fn resolved_query_with_no_records_is_the_empty_state() {
        let mut store = store_with(&[]);
        let view = ListView::new(PAGE);

        view.refresh(&mut store);
        assert_eq!(view.status(&store), ListStatus::Empty);
        assert_eq!(EMPTY_STATE_TEXT, "No results");
    }

    #[test]
    fn rows_carry_entity_decoded_titles() {
        let mut store = store_with(&["Tom &amp; Jerry"]);
        let view = ListView::new(PAGE);

        view.refresh(&mut store);
        match view.status(&store) {
            ListStatus::Ready(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].title, "Tom & Jerry");
            }
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn changing_the_term_switches_to_an_unresolved_query() {
        let mut store = store_with(&["Alpha", "Beta", "Alphabet"]);
        let mut view = ListView::new(PAGE);

        view.refresh(&mut store);
        assert!(matches!(view.status(&store), ListStatus::Ready(_)));

        // The filtered query has its own cache entry and starts unresolved
        view.set_search_term("alph");
        assert_eq!(view.status(&store), ListStatus::Loading);

        view.refresh(&mut store);
        match view.status(&store) {
            ListStatus::Ready(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    #[test]
    fn search_with_no_matches_is_empty_not_loading() {
        let mut store = store_with(&["Alpha"]);
        let mut view = ListView::new(PAGE);

        view.set_search_term("zzz");
        view.refresh(&mut store);
        assert_eq!(view.status(&store), ListStatus::Empty);
    }
}
