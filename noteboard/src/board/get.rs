//! GetBoard command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::ColumnIndex;
use noteboard_operations::{Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Get the board with per-column counts and capacities
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetBoard;

impl Operation for GetBoard {
    fn verb(&self) -> &'static str {
        "get"
    }

    fn noun(&self) -> &'static str {
        "board"
    }

    fn description(&self) -> &'static str {
        "Retrieve the board with card counts and the lock state"
    }
}

impl Execute<BoardContext, BoardError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let board = ctx.board();
        let result = serde_json::to_value(board).map(|mut result| {
            result["counts"] = json!(ColumnIndex::ALL.map(|c| board.column(c).len()));
            result["capacities"] = json!(ColumnIndex::ALL.map(ColumnIndex::capacity));
            result["lock"] = json!(ctx.lock_status());
            result
        });

        match result {
            Ok(value) => ExecutionResult::Unchanged { value },
            Err(error) => ExecutionResult::Failed {
                error: error.into(),
                log_entry: None,
            },
        }
    }
}
