//! Derived counts and the status line they drive

use crate::domain::Item;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivedCounts {
    /// Items not yet purchased
    pub remaining: usize,
    /// Non-empty list with every item purchased
    pub all_purchased: bool,
}

impl DerivedCounts {
    pub fn of(items: &[Item]) -> Self {
        let remaining = items.iter().filter(|item| !item.purchased).count();
        Self {
            remaining,
            all_purchased: !items.is_empty() && remaining == 0,
        }
    }

    pub fn status(&self, len: usize) -> ListStatus {
        if len == 0 {
            ListStatus::Hidden
        } else if self.all_purchased {
            ListStatus::AllPurchased
        } else {
            ListStatus::Remaining(self.remaining)
        }
    }
}

/// Summary shown under the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Empty list, nothing to show
    Hidden,
    AllPurchased,
    Remaining(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, purchased: bool) -> Item {
        let mut item = Item::new(id, format!("Item {}", id), 1.0, "pcs".to_string());
        item.purchased = purchased;
        item
    }

    #[test]
    fn test_empty_list() {
        let counts = DerivedCounts::of(&[]);
        assert_eq!(counts, DerivedCounts { remaining: 0, all_purchased: false });
        assert_eq!(counts.status(0), ListStatus::Hidden);
    }

    #[test]
    fn test_mixed_list() {
        let items = vec![item(1, true), item(2, false), item(3, false)];
        let counts = DerivedCounts::of(&items);
        assert_eq!(counts.remaining, 2);
        assert!(!counts.all_purchased);
        assert_eq!(counts.status(items.len()), ListStatus::Remaining(2));
    }

    #[test]
    fn test_everything_purchased() {
        let items = vec![item(1, true), item(2, true)];
        assert_eq!(DerivedCounts::of(&items).status(items.len()), ListStatus::AllPurchased);
    }
}
