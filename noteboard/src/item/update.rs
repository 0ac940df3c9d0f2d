//! UpdateItem command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{run, Outcome};
use crate::types::CardId;
use noteboard_operations::{Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Check or uncheck one item on a card, then re-evaluate where the card belongs
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateItem {
    /// The card holding the item
    pub card_id: CardId,
    /// Zero-based index of the item on the card
    pub item_index: usize,
    /// New completion state
    pub completed: bool,
}

impl UpdateItem {
    /// Create a new UpdateItem command
    pub fn new(card_id: impl Into<CardId>, item_index: usize, completed: bool) -> Self {
        Self {
            card_id: card_id.into(),
            item_index,
            completed,
        }
    }

    /// Shorthand for checking an item
    pub fn check(card_id: impl Into<CardId>, item_index: usize) -> Self {
        Self::new(card_id, item_index, true)
    }

    /// Shorthand for unchecking an item
    pub fn uncheck(card_id: impl Into<CardId>, item_index: usize) -> Self {
        Self::new(card_id, item_index, false)
    }
}

impl Operation for UpdateItem {
    fn verb(&self) -> &'static str {
        "update"
    }

    fn noun(&self) -> &'static str {
        "item"
    }

    fn description(&self) -> &'static str {
        "Set an item's completion and move the card if the rules say so"
    }
}

impl Execute<BoardContext, BoardError> for UpdateItem {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, || {
            let Some((column, _)) = ctx.board().locate(self.card_id) else {
                debug!(card = %self.card_id, "update item: no such card");
                return Ok(Outcome::Unchanged(json!({ "updated": false })));
            };

            if ctx.refuses(column) {
                return Err(BoardError::ColumnLocked { column });
            }

            let Some(card) = ctx.board_mut().find_card_mut(self.card_id) else {
                return Ok(Outcome::Unchanged(json!({ "updated": false })));
            };
            let Some(item) = card.items.get_mut(self.item_index) else {
                debug!(card = %self.card_id, index = self.item_index, "update item: no such item");
                return Ok(Outcome::Unchanged(json!({ "updated": false })));
            };
            if item.completed == self.completed {
                return Ok(Outcome::Unchanged(json!({ "updated": false })));
            }
            item.completed = self.completed;

            let transfer = ctx.evaluate_move(self.card_id);
            let column = ctx
                .board()
                .locate(self.card_id)
                .map_or(column, |(current, _)| current);

            Ok(Outcome::Changed(json!({
                "updated": true,
                "column": column,
                "card": ctx.board().find_card(self.card_id),
                "moved": transfer,
            })))
        })
    }
}
