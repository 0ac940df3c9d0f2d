//! Board rules: automatic card placement and column 0 locking.
//!
//! ## Move evaluation
//!
//! Runs after every change to a card's item completion. One pass, looking only
//! at the column the card is in right now:
//!
//! - To Do, more than half checked: append to In Progress. In Progress
//!   capacity is NOT checked here; rule-driven transfers may overfill it.
//! - In Progress, everything checked: append to Done and stamp the
//!   completion date (once).
//! - Done: terminal, nothing happens.
//!
//! At most one transfer happens per evaluation. A card that goes from nothing
//! checked to everything checked in one edit while in To Do only reaches In
//! Progress; the next completion edit takes it to Done. Transfers are not
//! chained within a command.
//!
//! ## Locking
//!
//! To Do is locked when In Progress is at or over capacity and some To Do card
//! is more than half checked.

use crate::clock::Clock;
use crate::types::{Board, CardId, ColumnIndex};
use serde::Serialize;
use tracing::{debug, info};

/// A transfer performed by [`evaluate_move`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    pub card: CardId,
    pub from: ColumnIndex,
    pub to: ColumnIndex,
    /// Completion date stamped by this transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

/// Apply the move-evaluation rule to one card.
///
/// Returns the transfer performed, or `None` when the card stays put (or is
/// not on the board).
pub fn evaluate_move(
    board: &mut Board,
    id: CardId,
    clock: &dyn Clock,
    timestamp_format: &str,
) -> Option<Transfer> {
    let (column, pos) = board.locate(id)?;
    let card = &board.column(column).cards[pos];

    if card.items.is_empty() {
        return None;
    }

    let to = match column {
        ColumnIndex::Todo if card.is_past_halfway() => ColumnIndex::InProgress,
        ColumnIndex::InProgress if card.is_fully_complete() => ColumnIndex::Done,
        _ => {
            debug!(card = %id, column = %column, ratio = card.ratio(), "card stays");
            return None;
        }
    };

    board.transfer(id, to)?;

    let mut completed_date = None;
    if to.is_terminal() {
        if let Some(card) = board.find_card_mut(id) {
            if card.completed_date.is_none() {
                let stamp = clock.now().format(timestamp_format).to_string();
                card.completed_date = Some(stamp.clone());
                completed_date = Some(stamp);
            }
        }
    }

    info!(card = %id, from = %column, to = %to, "card moved");

    Some(Transfer {
        card: id,
        from: column,
        to,
        completed_date,
    })
}

/// Lock state of the To Do column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LockStatus {
    pub locked: bool,
    /// To Do cards that are past halfway while In Progress is full
    pub blocking_cards: Vec<CardId>,
}

/// Compute whether To Do is locked
pub fn lock_status(board: &Board) -> LockStatus {
    let in_progress = board.column(ColumnIndex::InProgress);
    let full = ColumnIndex::InProgress
        .capacity()
        .is_some_and(|capacity| in_progress.len() >= capacity);

    if !full {
        return LockStatus::default();
    }

    let blocking_cards: Vec<CardId> = board
        .column(ColumnIndex::Todo)
        .cards
        .iter()
        .filter(|card| card.is_past_halfway())
        .map(|card| card.id)
        .collect();

    LockStatus {
        locked: !blocking_cards.is_empty(),
        blocking_cards,
    }
}

/// Whether the given column is currently locked. Only To Do can be.
pub fn is_locked(board: &Board, column: ColumnIndex) -> bool {
    column == ColumnIndex::Todo && lock_status(board).locked
}
