//! RemoveCard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::outcome::{run, Outcome};
use crate::types::CardId;
use noteboard_operations::{Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Remove a card from the board.
///
/// Removing an id that is not on the board is a no-op, not an error.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoveCard {
    /// The card ID to remove
    pub id: CardId,
}

impl RemoveCard {
    /// Create a new RemoveCard command
    pub fn new(id: impl Into<CardId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for RemoveCard {
    fn verb(&self) -> &'static str {
        "remove"
    }

    fn noun(&self) -> &'static str {
        "card"
    }

    fn description(&self) -> &'static str {
        "Remove a card from the board"
    }
}

impl Execute<BoardContext, BoardError> for RemoveCard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        run(self, || match ctx.board_mut().take_card(self.id) {
            Some((column, card)) => Ok(Outcome::Changed(json!({
                "removed": true,
                "column": column,
                "card": card,
            }))),
            None => {
                debug!(card = %self.id, "remove: no such card");
                Ok(Outcome::Unchanged(json!({ "removed": false })))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::AddCard;
    use crate::types::{Board, ColumnIndex};

    fn setup() -> BoardContext {
        let mut ctx = BoardContext::new(Board::new());
        for (column, title) in [
            (ColumnIndex::Todo, "a"),
            (ColumnIndex::Todo, "b"),
            (ColumnIndex::Todo, "c"),
            (ColumnIndex::InProgress, "d"),
        ] {
            AddCard::new(column, title)
                .execute(&mut ctx)
                .into_result()
                .unwrap();
        }
        ctx
    }

    #[test]
    fn test_remove_card_shifts_later_cards() {
        let mut ctx = setup();

        let result = RemoveCard::new(CardId::new(2)).execute(&mut ctx);
        assert!(result.should_persist());
        let value = result.into_result().unwrap();
        assert_eq!(value["removed"], true);
        assert_eq!(value["column"], 0);
        assert_eq!(value["card"]["title"], "b");

        let titles: Vec<_> = ctx
            .board()
            .column(ColumnIndex::Todo)
            .cards
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_card_is_noop() {
        let mut ctx = setup();
        let before = ctx.board().clone();

        let result = RemoveCard::new(CardId::new(99)).execute(&mut ctx);
        assert!(!result.should_persist());
        assert_eq!(result.into_result().unwrap()["removed"], false);
        assert_eq!(ctx.board(), &before);
    }

    #[test]
    fn test_removed_id_is_not_reused() {
        let mut ctx = setup();
        RemoveCard::new(CardId::new(4)).execute(&mut ctx).into_result().unwrap();

        let result = AddCard::new(ColumnIndex::InProgress, "e")
            .execute(&mut ctx)
            .into_result()
            .unwrap();
        assert_eq!(result["id"], 5);
    }
}
