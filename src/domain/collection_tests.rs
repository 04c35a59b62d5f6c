#[cfg(test)]
mod tests {
    use super::super::collection::{Collection, SearchResults, DEFAULT_RECENT_LIMIT};
    use super::super::grocery::{GroceryList, ListId};
    use super::super::ports::{Clock, IdGenerator};
    use crate::infrastructure::{clock::ManualClock, ids::SequentialIds};
    use chrono::{Duration, TimeZone, Utc};
    use uuid::Uuid;

    fn clock() -> ManualClock {
        ManualClock::new(Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap())
    }

    fn titled(collection: Collection, ids: &mut SequentialIds, clock: &ManualClock, title: &str) -> Collection {
        let (collection, list) = collection.create_list(ids, clock);
        collection.update_list(list.save_title(title))
    }

    #[test]
    fn create_list_starts_blank_and_is_stored() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let (collection, list) = Collection::new().create_list(&mut ids, &clock);
        assert_eq!(list.title, "");
        assert!(list.items.is_empty());
        assert_eq!(list.created_at, clock.now());
        assert_eq!(collection.get(list.id), Some(&list));
    }

    #[test]
    fn create_list_prepends() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let (collection, first) = Collection::new().create_list(&mut ids, &clock);
        let (collection, second) = collection.create_list(&mut ids, &clock);
        assert_ne!(first.id, second.id);
        assert_eq!(collection.lists()[0].id, second.id);
        assert_eq!(collection.lists()[1].id, first.id);
    }

    #[test]
    fn create_list_skips_ids_already_in_the_collection() {
        let clock = clock();
        let collection = titled(Collection::new(), &mut SequentialIds::default(), &clock, "Existing");
        let taken = collection.lists()[0].id;

        let mut restarted = SequentialIds::default();
        assert_eq!(ListId(restarted.clone().next_id()), taken);
        let (collection, list) = collection.create_list(&mut restarted, &clock);
        assert_ne!(list.id, taken);
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.get(taken).map(|l| l.title.as_str()), Some("Existing"));
        assert_eq!(collection.get(list.id), Some(&list));
    }

    #[test]
    fn update_list_replaces_in_place() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let collection = titled(Collection::new(), &mut ids, &clock, "One");
        let collection = titled(collection, &mut ids, &clock, "Two");
        let target = collection.lists()[1].clone();
        let (renamed, _) = target.save_title("Uno").add_item("Tortillas", &mut ids);
        let collection = collection.update_list(renamed.clone());
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.lists()[1], renamed);
    }

    #[test]
    fn update_list_with_unknown_id_is_a_no_op() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let collection = titled(Collection::new(), &mut ids, &clock, "One");
        let stranger = GroceryList::new(ListId(Uuid::from_u128(42_000)), clock.now()).save_title("Ghost");
        assert_eq!(collection.clone().update_list(stranger), collection);
    }

    #[test]
    fn from_lists_drops_duplicate_ids() {
        let now = clock().now();
        let id = ListId(Uuid::from_u128(7));
        let collection = Collection::from_lists(vec![
            GroceryList::new(id, now).save_title("Kept"),
            GroceryList::new(id, now).save_title("Dropped"),
        ]);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.lists()[0].title, "Kept");
    }

    #[test]
    fn recent_lists_are_newest_first_and_limited() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let mut collection = Collection::new();
        for (title, days_ago) in [("c", 3), ("a", 1), ("e", 5), ("b", 2), ("d", 4), ("f", 6)] {
            clock.set(clock.now() - Duration::days(days_ago));
            collection = titled(collection, &mut ids, &clock, title);
            clock.set(clock.now() + Duration::days(days_ago));
        }
        let recent = collection.recent_lists(DEFAULT_RECENT_LIMIT);
        assert_eq!(recent.len(), 5);
        let titles: Vec<&str> = recent.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["a", "b", "c", "d", "e"]);
        assert!(recent.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn recent_lists_tie_keeps_stored_order_and_does_not_reorder_storage() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let collection = titled(Collection::new(), &mut ids, &clock, "older insert");
        let collection = titled(collection, &mut ids, &clock, "newer insert");
        let stored: Vec<ListId> = collection.lists().iter().map(|l| l.id).collect();
        let recent: Vec<ListId> = collection.recent_lists(10).iter().map(|l| l.id).collect();
        assert_eq!(recent, stored);
        assert_eq!(collection.recent_lists(0).len(), 0);
    }

    #[test]
    fn blank_query_is_inactive_and_miss_is_active() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let collection = titled(Collection::new(), &mut ids, &clock, "Party Supplies");
        let inactive = collection.search("  ");
        assert!(!inactive.is_active());
        assert!(inactive.matches().is_empty());
        assert_eq!(inactive.headline(), None);

        let miss = collection.search("zzz-no-match");
        assert!(miss.is_active());
        assert!(miss.matches().is_empty());
        assert_eq!(miss.headline().as_deref(), Some("No matching lists found"));
        assert_ne!(inactive, miss);
    }

    #[test]
    fn search_is_case_insensitive_on_titles_only() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let collection = titled(Collection::new(), &mut ids, &clock, "Baking Essentials");
        let collection = titled(collection, &mut ids, &clock, "Weekly Grocery Run");
        let weekly = collection.lists()[0].clone();
        let (weekly, _) = weekly.add_item("Baking soda", &mut ids);
        let collection = collection.update_list(weekly);

        let hits = collection.search("BAKING");
        assert_eq!(hits.matches().len(), 1);
        assert_eq!(hits.matches()[0].title, "Baking Essentials");
        assert_eq!(hits.headline().as_deref(), Some("Found 1 list"));
    }

    #[test]
    fn search_returns_matches_in_stored_order() {
        let clock = clock();
        let mut ids = SequentialIds::default();
        let collection = titled(Collection::new(), &mut ids, &clock, "Snack run");
        let collection = titled(collection, &mut ids, &clock, "Quick Snacks");
        let hits = collection.search("snack");
        let titles: Vec<&str> = hits.matches().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["Quick Snacks", "Snack run"]);
        assert!(matches!(hits, SearchResults::Active { .. }));
    }
}
