use super::grocery::GroceryList;

/// How many item texts a list card or search hit shows.
pub const PREVIEW_ITEM_COUNT: usize = 3;

/// Condensed view of a list for cards and search hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPreview<'a> {
    pub leading: Vec<&'a str>,
    pub remaining: usize,
    pub completed: usize,
    pub total: usize,
}

impl ListPreview<'_> {
    /// e.g. `3 items` or `5 items: Quinoa, Salmon fillets, Avocados...`
    pub fn summary(&self) -> String {
        let count = pluralize(self.total, "item");
        if self.leading.is_empty() {
            return count;
        }
        let more = if self.remaining > 0 { "..." } else { "" };
        format!("{count}: {}{more}", self.leading.join(", "))
    }
}

impl GroceryList {
    pub fn preview(&self) -> ListPreview<'_> {
        let leading: Vec<&str> = self.items.iter().take(PREVIEW_ITEM_COUNT).map(|i| i.text.as_str()).collect();
        ListPreview {
            remaining: self.items.len() - leading.len(),
            leading,
            completed: self.completed_count(),
            total: self.items.len(),
        }
    }
}

pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 { format!("{count} {noun}") } else { format!("{count} {noun}s") }
}
