use chrono::Duration;

use crate::domain::{
    collection::Collection,
    grocery::{GroceryList, ListId},
    ports::{Clock, IdGenerator},
};

/// (title, days ago, items with their completion flag)
const SAMPLE_LISTS: &[(&str, i64, &[(&str, bool)])] = &[
    ("Weekly Grocery Run", 1, &[
        ("Organic bananas", false),
        ("Whole grain bread", false),
        ("Greek yogurt", true),
        ("Free-range eggs", false),
        ("Fresh spinach", false),
    ]),
    ("Party Supplies", 2, &[("Chips and dips", false), ("Soft drinks", false), ("Ice cream", false)]),
    ("Healthy Meal Prep", 3, &[
        ("Quinoa", true),
        ("Salmon fillets", false),
        ("Avocados", false),
        ("Bell peppers", false),
    ]),
    ("Baking Essentials", 4, &[("All-purpose flour", false), ("Vanilla extract", false)]),
    ("Quick Snacks", 5, &[("Mixed nuts", false), ("Protein bars", false), ("Fresh fruit", false)]),
];

/// Demo lists created over the last five days.
pub fn sample_collection<I, C>(ids: &mut I, clock: &C) -> Collection
where
    I: IdGenerator + ?Sized,
    C: Clock + ?Sized,
{
    let now = clock.now();
    let lists = SAMPLE_LISTS.iter().map(|(title, days_ago, items)| {
        let list = GroceryList::new(ListId(ids.next_id()), now - Duration::days(*days_ago)).save_title(title);
        items.iter().fold(list, |list, (text, completed)| {
            let (list, _) = list.add_item(text, ids);
            if !*completed {
                return list;
            }
            // items are never created completed; tick the one just added
            match list.items.last().map(|i| i.id) {
                Some(id) => list.toggle_item(id),
                None => list,
            }
        })
    });
    Collection::from_lists(lists.collect::<Vec<_>>())
}
