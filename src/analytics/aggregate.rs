//! Order-preserving aggregation helpers shared by the reports.
//!
//! Every selection here resolves ties in favour of the earliest element, and
//! every grouping keeps groups in the order their key was first seen.

use crate::models::MenuItem;

/// First element with the greatest key.
///
/// `Iterator::max_by` returns the *last* maximum, so this folds by hand.
pub fn first_max_by<T, I, F>(items: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let k = key(&item);
        let better = match &best {
            Some((_, best_key)) => k > *best_key,
            None => true,
        };
        if better {
            best = Some((item, k));
        }
    }
    best.map(|(item, _)| item)
}

/// First element with the smallest key.
pub fn first_min_by<T, I, F>(items: I, mut key: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> f64,
{
    first_max_by(items, move |item| -key(item))
}

/// Per-category group of item references, in first-seen category order.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<&'a MenuItem>,
}

impl CategoryGroup<'_> {
    /// Sum of `value` over the group's items.
    pub fn total<F>(&self, value: F) -> f64
    where
        F: Fn(&MenuItem) -> f64,
    {
        self.items.iter().map(|&item| value(item)).sum()
    }
}

/// Group items by their category string, preserving first-seen order.
pub fn group_by_category(items: &[MenuItem]) -> Vec<CategoryGroup<'_>> {
    let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: &item.category,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Count occurrences of each key, preserving first-seen order.
pub fn frequency<I>(keys: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_max_prefers_earliest_tie() {
        let values = [("a", 3.0), ("b", 5.0), ("c", 5.0)];
        let best = first_max_by(values.iter(), |(_, v)| *v).unwrap();
        assert_eq!(best.0, "b");
    }

    #[test]
    fn test_first_min_prefers_earliest_tie() {
        let values = [("a", 2.0), ("b", 1.0), ("c", 1.0)];
        let worst = first_min_by(values.iter(), |(_, v)| *v).unwrap();
        assert_eq!(worst.0, "b");
    }

    #[test]
    fn test_first_max_empty() {
        let empty: Vec<f64> = Vec::new();
        assert!(first_max_by(empty, |v| *v).is_none());
    }

    #[test]
    fn test_frequency_order() {
        let keys = ["lemon", "salt", "lemon", "basil"].map(String::from);
        let counts = frequency(keys);
        assert_eq!(
            counts,
            vec![
                ("lemon".to_string(), 2),
                ("salt".to_string(), 1),
                ("basil".to_string(), 1)
            ]
        );
    }
}
