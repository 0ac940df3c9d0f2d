//! AddCard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{run, Outcome};
use crate::types::{Card, ColumnIndex, Item};
use noteboard_operations::{Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Add a new card to the end of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddCard {
    /// Target column (0, 1 or 2)
    pub column: ColumnIndex,
    /// The card title (required)
    pub title: String,
    /// Background color; derived from the title when absent
    pub color: Option<String>,
    /// Item texts. When absent the card gets the configured number of blank items.
    /// Blank texts are kept as blank items, not dropped.
    pub items: Option<Vec<String>>,
}

impl AddCard {
    /// Create a new AddCard command with default items
    pub fn new(column: ColumnIndex, title: impl Into<String>) -> Self {
        Self {
            column,
            title: title.into(),
            color: None,
            items: None,
        }
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the item texts
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = Some(items.into_iter().map(Into::into).collect());
        self
    }

    fn build_items(&self, ctx: &BoardContext) -> Result<Vec<Item>, BoardError> {
        match &self.items {
            Some(texts) if texts.len() > ctx.max_items() => Err(BoardError::invalid_value(
                "items",
                format!("{} items given, at most {} allowed", texts.len(), ctx.max_items()),
            )),
            Some(texts) => Ok(texts.iter().map(|text| Item::new(text.trim())).collect()),
            None => Ok(vec![Item::blank(); ctx.default_item_count()]),
        }
    }
}

impl Operation for AddCard {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "card"
    }

    fn description(&self) -> &'static str {
        "Create a new card at the end of a column"
    }
}

impl Execute<BoardContext, BoardError> for AddCard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, || {
            let title = self.title.trim();
            if title.is_empty() {
                return Err(BoardError::missing_field("title"));
            }

            if ctx.refuses(self.column) {
                return Err(BoardError::ColumnLocked {
                    column: self.column,
                });
            }

            if let Some(capacity) = self.column.capacity() {
                if ctx.board().column(self.column).len() >= capacity {
                    return Err(BoardError::CapacityExceeded {
                        column: self.column,
                        capacity,
                    });
                }
            }

            let items = self.build_items(ctx)?;

            // Everything validated; only now touch the board
            let board = ctx.board_mut();
            let id = board.allocate_id().ok_or_else(|| {
                BoardError::invalid_value("nextCardId", "no card ids left to allocate")
            })?;
            let mut card = Card::new(id, title, items);
            if let Some(color) = self.color.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
                card = card.with_color(color);
            }

            let mut result = serde_json::to_value(&card)?;
            result["column"] = serde_json::json!(self.column);
            board.column_mut(self.column).cards.push(card);

            Ok(Outcome::Changed(result))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, CardId};
    use rstest::rstest;

    fn setup() -> BoardContext {
        BoardContext::new(Board::new())
    }

    #[test]
    fn test_add_card() {
        let mut ctx = setup();

        let result = AddCard::new(ColumnIndex::Todo, "Groceries")
            .with_items(["milk", "bread"])
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(result["id"], 1);
        assert_eq!(result["title"], "Groceries");
        assert_eq!(result["column"], 0);
        assert_eq!(result["items"][1]["text"], "bread");
        assert!(result["completedDate"].is_null());

        let column = ctx.board().column(ColumnIndex::Todo);
        assert_eq!(column.len(), 1);
        assert_eq!(ctx.board().next_card_id, CardId::new(2));
    }

    #[test]
    fn test_add_card_default_items() {
        let mut ctx = setup();
        AddCard::new(ColumnIndex::InProgress, "Chores")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        let card = &ctx.board().column(ColumnIndex::InProgress).cards[0];
        assert_eq!(card.items.len(), 3);
        assert!(card.items.iter().all(|item| !item.completed && item.text.is_empty()));
    }

    #[test]
    fn test_add_card_appends_in_order() {
        let mut ctx = setup();
        for title in ["a", "b", "c"] {
            AddCard::new(ColumnIndex::Todo, title)
                .execute(&mut ctx)
                .into_result()
                .unwrap();
        }
        let titles: Vec<_> = ctx
            .board()
            .column(ColumnIndex::Todo)
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[rstest]
    #[case::todo(ColumnIndex::Todo, 3)]
    #[case::in_progress(ColumnIndex::InProgress, 5)]
    fn test_add_card_capacity(#[case] column: ColumnIndex, #[case] capacity: usize) {
        let mut ctx = setup();
        for i in 0..capacity {
            AddCard::new(column, format!("card {}", i))
                .execute(&mut ctx)
                .into_result()
                .unwrap();
        }
        let before = ctx.board().clone();

        let result = AddCard::new(column, "one too many")
            .execute(&mut ctx)
            .into_result();

        assert!(matches!(
            result,
            Err(BoardError::CapacityExceeded { capacity: c, .. }) if c == capacity
        ));
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_done_column_is_unbounded() {
        let mut ctx = setup();
        for i in 0..20 {
            AddCard::new(ColumnIndex::Done, format!("card {}", i))
                .execute(&mut ctx)
                .into_result()
                .unwrap();
        }
        assert_eq!(ctx.board().column(ColumnIndex::Done).len(), 20);
    }

    #[test]
    fn test_add_card_blank_title() {
        let mut ctx = setup();
        let result = AddCard::new(ColumnIndex::Todo, "   ").execute(&mut ctx);
        assert!(!result.should_persist());
        assert!(matches!(
            result.into_result(),
            Err(BoardError::MissingField { .. })
        ));
        assert_eq!(ctx.board(), &Board::new());
    }

    #[test]
    fn test_add_card_keeps_blank_item_texts() {
        let mut ctx = setup();
        AddCard::new(ColumnIndex::Todo, "Sparse")
            .with_items(["first", "  ", ""])
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        let card = &ctx.board().column(ColumnIndex::Todo).cards[0];
        let texts: Vec<_> = card.items.iter().map(|item| item.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "", ""]);
    }

    #[test]
    fn test_add_card_exhausted_counter() {
        let mut ctx = setup();
        ctx.board_mut().next_card_id = CardId::new(u64::MAX);
        let before = ctx.board().clone();

        let result = AddCard::new(ColumnIndex::Todo, "One more")
            .execute(&mut ctx)
            .into_result();

        assert!(matches!(
            result,
            Err(BoardError::InvalidValue { ref field, .. }) if field == "nextCardId"
        ));
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_add_card_too_many_items() {
        let mut ctx = setup();
        let result = AddCard::new(ColumnIndex::Todo, "Long")
            .with_items(["1", "2", "3", "4", "5", "6"])
            .execute(&mut ctx)
            .into_result();
        assert!(matches!(result, Err(BoardError::InvalidValue { .. })));
        // The id counter was not consumed
        assert_eq!(ctx.board().next_card_id, CardId::new(1));
    }

    #[test]
    fn test_add_card_zero_items() {
        let mut ctx = setup();
        let empty: [&str; 0] = [];
        AddCard::new(ColumnIndex::Todo, "Empty")
            .with_items(empty)
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert!(ctx.board().column(ColumnIndex::Todo).cards[0].items.is_empty());
    }

    #[test]
    fn test_add_card_color() {
        let mut ctx = setup();
        let result = AddCard::new(ColumnIndex::Todo, "Colored")
            .with_color("ff0000")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["color"], "ff0000");

        let result = AddCard::new(ColumnIndex::Todo, "Colored")
            .with_color("  ")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["color"], crate::auto_color::auto_color("Colored"));
    }

    #[test]
    fn test_add_card_payload_from_json() {
        let cmd: AddCard =
            serde_json::from_str(r#"{"column": 1, "title": "From UI", "items": ["x"]}"#).unwrap();
        assert_eq!(cmd.column, ColumnIndex::InProgress);

        let bad = serde_json::from_str::<AddCard>(r#"{"column": 3, "title": "nope"}"#);
        assert!(bad.is_err());
    }
}
