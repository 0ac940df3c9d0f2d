//! EditCard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{run, Outcome};
use crate::types::CardId;
use noteboard_operations::{Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// A change to one existing item. Items cannot be added, removed or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemPatch {
    /// Zero-based index of the item
    pub index: usize,
    /// New text
    #[serde(default)]
    pub text: Option<String>,
    /// New completion state
    #[serde(default)]
    pub completed: Option<bool>,
}

impl ItemPatch {
    /// Patch that replaces the item text
    pub fn text(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: Some(text.into()),
            completed: None,
        }
    }

    /// Patch that sets the completion state
    pub fn completed(index: usize, completed: bool) -> Self {
        Self {
            index,
            text: None,
            completed: Some(completed),
        }
    }
}

/// Edit card attributes and item texts.
///
/// Capacity is never consulted. Only patches that flip an item's completion
/// run the move rule.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditCard {
    /// The card ID to edit
    pub id: CardId,
    /// New title
    pub title: Option<String>,
    /// New color
    pub color: Option<String>,
    /// Item changes
    #[serde(default)]
    pub items: Vec<ItemPatch>,
}

impl EditCard {
    /// Create a new EditCard command that changes nothing yet
    pub fn new(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            color: None,
            items: Vec::new(),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Add an item patch
    pub fn with_item(mut self, patch: ItemPatch) -> Self {
        self.items.push(patch);
        self
    }
}

impl Operation for EditCard {
    fn verb(&self) -> &'static str {
        "edit"
    }

    fn noun(&self) -> &'static str {
        "card"
    }

    fn description(&self) -> &'static str {
        "Change a card's title, color or item texts"
    }
}

impl Execute<BoardContext, BoardError> for EditCard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, || {
            let Some((column, _)) = ctx.board().locate(self.id) else {
                debug!(card = %self.id, "edit card: no such card");
                return Ok(Outcome::Unchanged(json!({ "updated": false })));
            };

            if ctx.refuses(column) {
                return Err(BoardError::ColumnLocked { column });
            }

            let title = match self.title.as_deref().map(str::trim) {
                Some("") => return Err(BoardError::missing_field("title")),
                other => other,
            };

            let Some(card) = ctx.board_mut().find_card_mut(self.id) else {
                return Ok(Outcome::Unchanged(json!({ "updated": false })));
            };

            let mut changed = false;
            let mut completion_changed = false;

            if let Some(title) = title {
                if card.title != title {
                    card.title = title.to_string();
                    changed = true;
                }
            }
            if let Some(color) = &self.color {
                if &card.color != color {
                    card.color = color.clone();
                    changed = true;
                }
            }

            for patch in &self.items {
                let Some(item) = card.items.get_mut(patch.index) else {
                    debug!(card = %self.id, index = patch.index, "edit card: no such item");
                    continue;
                };
                if let Some(text) = &patch.text {
                    if &item.text != text {
                        item.text = text.clone();
                        changed = true;
                    }
                }
                if let Some(completed) = patch.completed {
                    if item.completed != completed {
                        item.completed = completed;
                        changed = true;
                        completion_changed = true;
                    }
                }
            }

            if !changed {
                return Ok(Outcome::Unchanged(json!({ "updated": false })));
            }

            let transfer = if completion_changed {
                ctx.evaluate_move(self.id)
            } else {
                None
            };
            let column = ctx
                .board()
                .locate(self.id)
                .map_or(column, |(current, _)| current);

            Ok(Outcome::Changed(json!({
                "updated": true,
                "column": column,
                "card": ctx.board().find_card(self.id),
                "moved": transfer,
            })))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::types::{Board, ColumnIndex};

    fn setup() -> (BoardContext, CardId) {
        let mut ctx = BoardContext::new(Board::new());
        let result = AddCard::new(ColumnIndex::Todo, "Trip")
            .with_items(["tickets", "hotel", "bags"])
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        let id = CardId::new(result["id"].as_u64().unwrap());
        (ctx, id)
    }

    #[test]
    fn test_edit_title_and_color() {
        let (mut ctx, id) = setup();

        let result = EditCard::new(id)
            .with_title("Holiday")
            .with_color("123abc")
            .execute(&mut ctx);
        assert!(result.should_persist());

        let card = ctx.board().find_card(id).unwrap();
        assert_eq!(card.title, "Holiday");
        assert_eq!(card.color, "123abc");
    }

    #[test]
    fn test_edit_item_text_does_not_move() {
        let (mut ctx, id) = setup();

        let value = EditCard::new(id)
            .with_item(ItemPatch::text(0, "passports"))
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert!(value["moved"].is_null());
        assert_eq!(ctx.board().find_card(id).unwrap().items[0].text, "passports");
        assert!(ctx.board().column(ColumnIndex::Todo).contains(id));
    }

    #[test]
    fn test_edit_completion_runs_move_rule() {
        let (mut ctx, id) = setup();

        let value = EditCard::new(id)
            .with_item(ItemPatch::completed(0, true))
            .with_item(ItemPatch::completed(1, true))
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        assert_eq!(value["column"], 1);
        assert!(ctx.board().column(ColumnIndex::InProgress).contains(id));
    }

    #[test]
    fn test_edit_ignores_capacity() {
        let mut ctx = BoardContext::new(Board::new());
        for i in 0..3 {
            AddCard::new(ColumnIndex::Todo, format!("card {}", i))
                .execute(&mut ctx)
                .into_result()
                .unwrap();
        }
        let result = EditCard::new(CardId::new(1))
            .with_title("renamed")
            .execute(&mut ctx)
            .into_result();
        assert!(result.is_ok());
    }

    #[test]
    fn test_edit_blank_title_rejected() {
        let (mut ctx, id) = setup();
        let before = ctx.board().clone();

        let result = EditCard::new(id).with_title(" ").execute(&mut ctx).into_result();
        assert!(matches!(result, Err(BoardError::MissingField { .. })));
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_edit_noops() {
        let (mut ctx, id) = setup();
        let before = ctx.board().clone();

        // Unknown card
        assert!(!EditCard::new(CardId::new(77))
            .with_title("x")
            .execute(&mut ctx)
            .should_persist());
        // Same title
        assert!(!EditCard::new(id)
            .with_title("Trip")
            .execute(&mut ctx)
            .should_persist());
        // Out of range item
        assert!(!EditCard::new(id)
            .with_item(ItemPatch::text(10, "nope"))
            .execute(&mut ctx)
            .should_persist());

        assert_eq!(ctx.board(), &before);
    }
}
