use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ports::IdGenerator;

/// Title stored when a list is saved without one.
pub const UNTITLED_LIST: &str = "Untitled List";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ListId(pub Uuid);

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ItemId(pub Uuid);

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroceryList {
    pub id: ListId,
    pub title: String,
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
}

impl GroceryList {
    /// A fresh, untitled list with no items.
    pub fn new(id: ListId, created_at: DateTime<Utc>) -> Self {
        Self { id, title: String::new(), items: Vec::new(), created_at }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Appends an item with the trimmed text.
    ///
    /// Blank text leaves the list untouched and reports `false`.
    pub fn add_item<I: IdGenerator + ?Sized>(mut self, raw_text: &str, ids: &mut I) -> (Self, bool) {
        let text = raw_text.trim();
        if text.is_empty() {
            return (self, false);
        }
        let id = loop {
            let id = ItemId(ids.next_id());
            if self.item(id).is_none() {
                break id;
            }
        };
        self.items.push(Item { id, text: text.to_string(), completed: false });
        (self, true)
    }

    pub fn toggle_item(mut self, item_id: ItemId) -> Self {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == item_id) {
            item.completed = !item.completed;
        }
        self
    }

    pub fn delete_item(mut self, item_id: ItemId) -> Self {
        self.items.retain(|i| i.id != item_id);
        self
    }

    /// Stores the trimmed title, or the placeholder when it is blank.
    pub fn save_title(mut self, raw_title: &str) -> Self {
        let title = raw_title.trim();
        self.title = if title.is_empty() { UNTITLED_LIST.to_string() } else { title.to_string() };
        self
    }

    /// Title as shown to the user; a list still being named reads as untitled.
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() { UNTITLED_LIST } else { &self.title }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.completed).count()
    }
}
