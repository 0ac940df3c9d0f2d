//! Card types: Card, Item

use super::ids::CardId;
use serde::{Deserialize, Serialize};

/// A card on the board: a titled checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub title: String,
    /// UI hint only (6-char hex without `#`)
    pub color: String,
    /// Fixed at creation; never reordered
    pub items: Vec<Item>,
    /// Set once when the card lands in the done column, never cleared
    pub completed_date: Option<String>,
}

impl Card {
    /// Create a new card with the given items
    pub fn new(id: CardId, title: impl Into<String>, items: Vec<Item>) -> Self {
        let title = title.into();
        let color = crate::auto_color::auto_color(&title).to_string();
        Self {
            id,
            title,
            color,
            items,
            completed_date: None,
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Returns (total, completed) item counts
    pub fn item_counts(&self) -> (usize, usize) {
        let completed = self.items.iter().filter(|item| item.completed).count();
        (self.items.len(), completed)
    }

    /// Fraction of completed items.
    ///
    /// Returns 0.0 for a card with no items.
    pub fn ratio(&self) -> f64 {
        let (total, completed) = self.item_counts();
        if total == 0 {
            return 0.0;
        }
        completed as f64 / total as f64
    }

    /// More than half the items are checked
    pub fn is_past_halfway(&self) -> bool {
        let (total, completed) = self.item_counts();
        total > 0 && completed * 2 > total
    }

    /// Every item is checked (and there is at least one)
    pub fn is_fully_complete(&self) -> bool {
        let (total, completed) = self.item_counts();
        total > 0 && completed == total
    }

    /// Whether the completion timestamp has been recorded
    pub fn is_completed(&self) -> bool {
        self.completed_date.is_some()
    }
}

/// A single checklist line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub completed: bool,
}

impl Item {
    /// Create an unchecked item
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }

    /// Create an empty unchecked item
    pub fn blank() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_with(flags: &[bool]) -> Card {
        let items = flags
            .iter()
            .enumerate()
            .map(|(i, &completed)| Item {
                text: format!("item {}", i),
                completed,
            })
            .collect();
        Card::new(CardId::new(1), "Groceries", items)
    }

    #[test]
    fn test_card_creation() {
        let card = card_with(&[false, false]);
        assert_eq!(card.title, "Groceries");
        assert_eq!(card.color.len(), 6);
        assert!(!card.is_completed());
    }

    #[test]
    fn test_ratio() {
        assert_eq!(card_with(&[]).ratio(), 0.0);
        assert_eq!(card_with(&[true, false]).ratio(), 0.5);
        assert_eq!(card_with(&[true, true, true]).ratio(), 1.0);
    }

    #[test]
    fn test_halfway_is_strict() {
        assert!(!card_with(&[]).is_past_halfway());
        assert!(!card_with(&[true, false]).is_past_halfway());
        assert!(card_with(&[true, true, false]).is_past_halfway());
        assert!(!card_with(&[true, false, false]).is_past_halfway());
    }

    #[test]
    fn test_fully_complete() {
        assert!(!card_with(&[]).is_fully_complete());
        assert!(!card_with(&[true, false]).is_fully_complete());
        assert!(card_with(&[true]).is_fully_complete());
    }

    #[test]
    fn test_card_serialization_field_names() {
        let card = card_with(&[true]).with_color("d73a4a");
        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["color"], "d73a4a");
        assert_eq!(value["items"][0]["completed"], true);
        // completedDate is always written, null until the card completes
        assert!(value["completedDate"].is_null());
        assert!(value.as_object().unwrap().contains_key("completedDate"));
    }
}
