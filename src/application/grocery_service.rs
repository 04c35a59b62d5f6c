use crate::domain::collection::{Collection, SearchResults};
use crate::domain::grocery::{GroceryList, ItemId, ListId};
use crate::domain::ports::{Clock, IdGenerator};

/// List-addressed operations over one collection.
///
/// Operations on an unknown list id return `None` and change nothing.
pub trait GroceryService: Send + 'static {
    fn create_list(&mut self) -> GroceryList;
    fn get_list(&self, id: ListId) -> Option<GroceryList>;
    fn recent_lists(&self, limit: usize) -> Vec<&GroceryList>;
    fn search(&self, query: &str) -> SearchResults<'_>;
    fn save_title(&mut self, id: ListId, raw_title: &str) -> Option<GroceryList>;
    /// The flag is `false` when the text was blank and nothing was added.
    fn add_item(&mut self, id: ListId, raw_text: &str) -> Option<(GroceryList, bool)>;
    fn toggle_item(&mut self, id: ListId, item_id: ItemId) -> Option<GroceryList>;
    fn delete_item(&mut self, id: ListId, item_id: ItemId) -> Option<GroceryList>;
    fn collection(&self) -> &Collection;
}

pub struct GroceryServiceImpl<I: IdGenerator, C: Clock> {
    collection: Collection,
    ids: I,
    clock: C,
}

impl<I: IdGenerator, C: Clock> GroceryServiceImpl<I, C> {
    pub fn new(ids: I, clock: C) -> Self { Self::with_collection(Collection::new(), ids, clock) }

    pub fn with_collection(collection: Collection, ids: I, clock: C) -> Self { Self { collection, ids, clock } }

    fn commit(&mut self, list: GroceryList) {
        let collection = std::mem::take(&mut self.collection);
        self.collection = collection.update_list(list);
    }

    fn apply(&mut self, id: ListId, op: impl FnOnce(GroceryList) -> GroceryList) -> Option<GroceryList> {
        let list = op(self.collection.get(id)?.clone());
        self.commit(list.clone());
        Some(list)
    }
}

impl<I: IdGenerator, C: Clock> GroceryService for GroceryServiceImpl<I, C> {
    fn create_list(&mut self) -> GroceryList {
        let collection = std::mem::take(&mut self.collection);
        let (collection, list) = collection.create_list(&mut self.ids, &self.clock);
        self.collection = collection;
        tracing::debug!(list_id = %list.id.0, "list created");
        list
    }

    fn get_list(&self, id: ListId) -> Option<GroceryList> { self.collection.get(id).cloned() }

    fn recent_lists(&self, limit: usize) -> Vec<&GroceryList> { self.collection.recent_lists(limit) }

    fn search(&self, query: &str) -> SearchResults<'_> { self.collection.search(query) }

    fn save_title(&mut self, id: ListId, raw_title: &str) -> Option<GroceryList> {
        let list = self.apply(id, |l| l.save_title(raw_title))?;
        tracing::debug!(list_id = %id.0, title = %list.title, "title saved");
        Some(list)
    }

    fn add_item(&mut self, id: ListId, raw_text: &str) -> Option<(GroceryList, bool)> {
        let (list, added) = self.collection.get(id)?.clone().add_item(raw_text, &mut self.ids);
        if added {
            self.commit(list.clone());
        }
        tracing::debug!(list_id = %id.0, added, "add item");
        Some((list, added))
    }

    fn toggle_item(&mut self, id: ListId, item_id: ItemId) -> Option<GroceryList> {
        let list = self.apply(id, |l| l.toggle_item(item_id))?;
        tracing::debug!(list_id = %id.0, item_id = %item_id.0, "item toggled");
        Some(list)
    }

    fn delete_item(&mut self, id: ListId, item_id: ItemId) -> Option<GroceryList> {
        let list = self.apply(id, |l| l.delete_item(item_id))?;
        tracing::debug!(list_id = %id.0, item_id = %item_id.0, "item deleted");
        Some(list)
    }

    fn collection(&self) -> &Collection { &self.collection }
}
