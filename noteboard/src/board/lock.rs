//! GetLockStatus command

use crate::context::BoardContext;
use crate::error::BoardError;
use crate::types::ColumnIndex;
use noteboard_operations::{Execute, ExecutionResult, Operation};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Report whether the To Do column is locked
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct GetLockStatus;

impl Operation for GetLockStatus {
    fn verb(&self) -> &'static str {
        "get"
    }

    fn noun(&self) -> &'static str {
        "lock"
    }

    fn description(&self) -> &'static str {
        "Report whether the To Do column is locked and which cards block it"
    }
}

impl Execute<BoardContext, BoardError> for GetLockStatus {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, BoardError> {
        let status = ctx.lock_status();
        ExecutionResult::Unchanged {
            value: json!({
                "column": ColumnIndex::Todo,
                "locked": status.locked,
                "blocking_cards": status.blocking_cards,
                "policy": ctx.lock_policy(),
            }),
        }
    }
}
