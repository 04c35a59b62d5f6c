use std::collections::HashSet;

use super::grocery::{GroceryList, ListId};
use super::ports::{Clock, IdGenerator};
use super::preview::pluralize;

/// Number of lists shown in the recent view unless configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Every list known to one application instance.
///
/// Stored order carries no meaning; callers display lists through
/// [`Collection::recent_lists`] or [`Collection::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    lists: Vec<GroceryList>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from bootstrap data, keeping the first list seen for each id.
    pub fn from_lists(lists: impl IntoIterator<Item = GroceryList>) -> Self {
        let mut seen = HashSet::new();
        let lists = lists.into_iter().filter(|l| seen.insert(l.id)).collect();
        Self { lists }
    }

    pub fn lists(&self) -> &[GroceryList] {
        &self.lists
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, id: ListId) -> Option<&GroceryList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Adds an untitled, empty list stamped with the clock's current time.
    ///
    /// Ids already taken in this collection are skipped.
    pub fn create_list<I, C>(mut self, ids: &mut I, clock: &C) -> (Self, GroceryList)
    where
        I: IdGenerator + ?Sized,
        C: Clock + ?Sized,
    {
        let id = loop {
            let id = ListId(ids.next_id());
            if self.get(id).is_none() {
                break id;
            }
        };
        let list = GroceryList::new(id, clock.now());
        self.lists.insert(0, list.clone());
        (self, list)
    }

    /// Replaces the stored list with the same id. Unknown ids are ignored.
    pub fn update_list(mut self, updated: GroceryList) -> Self {
        if let Some(slot) = self.lists.iter_mut().find(|l| l.id == updated.id) {
            *slot = updated;
        }
        self
    }

    /// Newest lists first, at most `limit` of them.
    pub fn recent_lists(&self, limit: usize) -> Vec<&GroceryList> {
        let mut recent: Vec<&GroceryList> = self.lists.iter().collect();
        // sort_by is stable: equal timestamps keep stored order
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit);
        recent
    }

    /// Case-insensitive substring match against list titles.
    ///
    /// A blank query turns search off rather than matching nothing.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        if query.trim().is_empty() {
            return SearchResults::Inactive;
        }
        let needle = query.to_lowercase();
        let matches = self.lists.iter().filter(|l| l.title.to_lowercase().contains(&needle)).collect();
        SearchResults::Active { matches }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResults<'a> {
    /// No query has been entered.
    Inactive,
    /// A query is present; `matches` may be empty.
    Active { matches: Vec<&'a GroceryList> },
}

impl<'a> SearchResults<'a> {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchResults::Active { .. })
    }

    pub fn matches(&self) -> &[&'a GroceryList] {
        match self {
            SearchResults::Inactive => &[],
            SearchResults::Active { matches } => matches,
        }
    }

    pub fn headline(&self) -> Option<String> {
        match self {
            SearchResults::Inactive => None,
            SearchResults::Active { matches } if matches.is_empty() => Some("No matching lists found".to_string()),
            SearchResults::Active { matches } => Some(format!("Found {}", pluralize(matches.len(), "list"))),
        }
    }
}
