use crate::domain::collection::SearchResults;
use crate::domain::grocery::{GroceryList, ItemId, ListId};

use super::grocery_service::GroceryService;

/// Which screen the shell should be drawing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Editing(GroceryList),
}

/// Home/editor state machine driven by user intents.
///
/// Every edit lands in the service immediately; leaving the editor commits nothing extra.
pub struct Navigator<S: GroceryService> {
    service: S,
    view: View,
    search_query: String,
}

impl<S: GroceryService> Navigator<S> {
    pub fn new(service: S) -> Self {
        Self { service, view: View::Home, search_query: String::new() }
    }

    pub fn service(&self) -> &S { &self.service }

    pub fn view(&self) -> &View { &self.view }

    pub fn current_list(&self) -> Option<&GroceryList> {
        match &self.view {
            View::Editing(list) => Some(list),
            View::Home => None,
        }
    }

    pub fn search_query(&self) -> &str { &self.search_query }

    pub fn search_results(&self) -> SearchResults<'_> { self.service.search(&self.search_query) }

    pub fn recent_lists(&self, limit: usize) -> Vec<&GroceryList> { self.service.recent_lists(limit) }

    pub fn create_list(&mut self) -> Option<&GroceryList> {
        if self.view != View::Home {
            return None;
        }
        let list = self.service.create_list();
        self.enter_editor(list);
        self.current_list()
    }

    /// Opens the list with `id`; stays on the home view when it does not exist.
    pub fn select_list(&mut self, id: ListId) -> bool {
        if self.view != View::Home {
            return false;
        }
        match self.service.get_list(id) {
            Some(list) => {
                self.enter_editor(list);
                true
            }
            None => false,
        }
    }

    pub fn back(&mut self) {
        self.view = View::Home;
    }

    pub fn search_changed(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn save_title(&mut self, raw_title: &str) {
        let Some(id) = self.current_id() else { return };
        let updated = self.service.save_title(id, raw_title);
        self.refresh(updated);
    }

    pub fn add_item(&mut self, raw_text: &str) -> bool {
        let Some(id) = self.current_id() else { return false };
        match self.service.add_item(id, raw_text) {
            Some((list, added)) => {
                self.refresh(Some(list));
                added
            }
            None => false,
        }
    }

    pub fn toggle_item(&mut self, item_id: ItemId) {
        let Some(id) = self.current_id() else { return };
        let updated = self.service.toggle_item(id, item_id);
        self.refresh(updated);
    }

    pub fn delete_item(&mut self, item_id: ItemId) {
        let Some(id) = self.current_id() else { return };
        let updated = self.service.delete_item(id, item_id);
        self.refresh(updated);
    }

    fn current_id(&self) -> Option<ListId> {
        self.current_list().map(|l| l.id)
    }

    fn enter_editor(&mut self, list: GroceryList) {
        self.search_query.clear();
        self.view = View::Editing(list);
    }

    fn refresh(&mut self, updated: Option<GroceryList>) {
        if let Some(list) = updated {
            self.view = View::Editing(list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::grocery_service::GroceryServiceImpl;
    use crate::domain::grocery::UNTITLED_LIST;
    use crate::infrastructure::{clock::ManualClock, ids::SequentialIds, sample_data::sample_collection};
    use chrono::Utc;
    use uuid::Uuid;

    type TestNavigator = Navigator<GroceryServiceImpl<SequentialIds, ManualClock>>;

    fn navigator() -> TestNavigator {
        let clock = ManualClock::new(Utc::now());
        let mut ids = SequentialIds::default();
        let collection = sample_collection(&mut ids, &clock);
        Navigator::new(GroceryServiceImpl::with_collection(collection, ids, clock))
    }

    #[test]
    fn starts_at_home() {
        let nav = navigator();
        assert_eq!(nav.view(), &View::Home);
        assert!(nav.current_list().is_none());
    }

    #[test]
    fn create_list_opens_blank_editor_and_clears_search() {
        let mut nav = navigator();
        nav.search_changed("party");
        let list = nav.create_list().cloned().unwrap();
        assert_eq!(list.title, "");
        assert_eq!(nav.search_query(), "");
        assert!(!nav.search_results().is_active());
        assert_eq!(nav.service().collection().len(), 6);
    }

    #[test]
    fn select_unknown_list_stays_home() {
        let mut nav = navigator();
        assert!(!nav.select_list(ListId(Uuid::from_u128(987_654))));
        assert_eq!(nav.view(), &View::Home);
    }

    #[test]
    fn edits_apply_immediately_and_survive_back() {
        let mut nav = navigator();
        let id = nav.recent_lists(1)[0].id;
        assert!(nav.select_list(id));
        assert!(nav.add_item("  Oat milk "));
        assert!(!nav.add_item("   "));
        nav.save_title("");
        let current = nav.current_list().cloned().unwrap();
        assert_eq!(current.title, UNTITLED_LIST);
        assert_eq!(current.items.last().map(|i| i.text.as_str()), Some("Oat milk"));

        nav.back();
        assert_eq!(nav.view(), &View::Home);
        assert_eq!(nav.service().get_list(id), Some(current));
    }

    #[test]
    fn toggle_and_delete_update_the_open_list() {
        let mut nav = navigator();
        let id = nav.recent_lists(1)[0].id;
        nav.select_list(id);
        let first = nav.current_list().unwrap().items[0].id;
        nav.toggle_item(first);
        assert!(nav.current_list().unwrap().items[0].completed);
        nav.delete_item(first);
        assert!(nav.current_list().unwrap().item(first).is_none());
        assert_eq!(nav.service().get_list(id).as_ref(), nav.current_list());
    }

    #[test]
    fn item_intents_on_home_are_ignored() {
        let mut nav = navigator();
        let before = nav.service().collection().clone();
        assert!(!nav.add_item("Milk"));
        nav.save_title("Renamed");
        assert_eq!(nav.service().collection(), &before);
        assert_eq!(nav.view(), &View::Home);
    }

    #[test]
    fn create_and_select_only_from_home() {
        let mut nav = navigator();
        nav.create_list();
        let editing = nav.view().clone();
        assert!(nav.create_list().is_none());
        let other = nav.service().collection().lists()[1].id;
        assert!(!nav.select_list(other));
        assert_eq!(nav.view(), &editing);
    }
}
