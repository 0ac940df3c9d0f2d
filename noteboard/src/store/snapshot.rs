//! Snapshot encoding and decoding
//!
//! Two stored layouts are understood:
//!
//! - the current one, which is exactly the serde form of [`Board`]:
//!   `{ "columns": [{ "title", "cards": [...] }], "nextCardId": n }`
//! - the legacy one: a bare array of three columns whose cards carry no ids
//!   (`[{ "cards": [{ "title", "items", "completedAt"? }] }]`). It is migrated
//!   on read and written back in the current layout on the next save.
//!
//! Anything else is treated as corrupt: decoding yields `None` and logs a
//! warning instead of failing.

use crate::error::Result;
use crate::types::{Board, Card, ColumnIndex, Item};
use serde::Deserialize;
use tracing::{info, warn};

/// Serialize a board for storage
pub fn encode(board: &Board) -> Result<String> {
    Ok(serde_json::to_string(board)?)
}

/// Parse a stored payload. Corrupt payloads yield `None`.
pub fn decode(text: &str) -> Option<Board> {
    let stored: Stored = match serde_json::from_str(text) {
        Ok(stored) => stored,
        Err(error) => {
            warn!(%error, "stored board is not readable, ignoring it");
            return None;
        }
    };

    let board = match stored {
        Stored::Current(board) => board,
        Stored::Legacy(columns) => migrate_legacy(columns)?,
    };

    validate(board)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Stored {
    Current(Board),
    Legacy(Vec<LegacyColumn>),
}

#[derive(Deserialize)]
struct LegacyColumn {
    #[serde(default)]
    cards: Vec<LegacyCard>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyCard {
    #[serde(default)]
    title: String,
    #[serde(default)]
    items: Vec<LegacyItem>,
    #[serde(default)]
    completed_at: Option<String>,
}

#[derive(Deserialize)]
struct LegacyItem {
    #[serde(default)]
    text: String,
    #[serde(default)]
    completed: bool,
}

fn migrate_legacy(columns: Vec<LegacyColumn>) -> Option<Board> {
    if columns.len() != ColumnIndex::ALL.len() {
        warn!(
            columns = columns.len(),
            "legacy board does not have three columns, ignoring it"
        );
        return None;
    }

    let mut board = Board::new();
    for (index, column) in ColumnIndex::ALL.into_iter().zip(columns) {
        for legacy in column.cards {
            let id = board.allocate_id()?;
            let items = legacy
                .items
                .into_iter()
                .map(|item| Item {
                    text: item.text,
                    completed: item.completed,
                })
                .collect();
            let mut card = Card::new(id, legacy.title, items);
            card.completed_date = legacy.completed_at;
            board.column_mut(index).cards.push(card);
        }
    }

    info!(cards = board.card_count(), "migrated legacy board");
    Some(board)
}

fn validate(mut board: Board) -> Option<Board> {
    if board.has_duplicate_ids() {
        warn!("stored board has duplicate card ids, ignoring it");
        return None;
    }

    if let Some(max) = board.max_card_id() {
        let Some(after_max) = max.next() else {
            warn!(max = %max, "stored card id is at the end of the id space, ignoring board");
            return None;
        };
        if board.next_card_id <= max {
            warn!(
                next = %board.next_card_id,
                max = %max,
                "stored id counter is behind the cards, repairing"
            );
            board.next_card_id = after_max;
        }
    }

    for (index, column) in ColumnIndex::ALL.into_iter().zip(board.columns.iter_mut()) {
        if column.title != index.title() {
            warn!(
                column = index.index(),
                stored = %column.title,
                "stored column title does not match its position, resetting"
            );
            column.title = index.title().to_string();
        }
    }

    Some(board)
}
