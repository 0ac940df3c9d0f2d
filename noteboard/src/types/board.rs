//! Board-level types: Board, Column

use super::card::Card;
use super::ids::{CardId, ColumnIndex};
use serde::{Deserialize, Serialize};

/// The whole board: exactly three columns and the id counter.
///
/// This is also the persisted snapshot; field names are part of the stored
/// format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub columns: [Column; 3],
    /// Next id to hand out. Always greater than every id on the board.
    pub next_card_id: CardId,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            columns: ColumnIndex::ALL.map(Column::new),
            next_card_id: CardId::new(1),
        }
    }

    pub fn column(&self, index: ColumnIndex) -> &Column {
        &self.columns[index.index()]
    }

    pub fn column_mut(&mut self, index: ColumnIndex) -> &mut Column {
        &mut self.columns[index.index()]
    }

    /// Iterate columns paired with their index, in board order
    pub fn columns(&self) -> impl Iterator<Item = (ColumnIndex, &Column)> {
        ColumnIndex::ALL.into_iter().zip(self.columns.iter())
    }

    /// Hand out a fresh card id and advance the counter.
    ///
    /// Returns `None` without touching the counter when it cannot advance.
    pub fn allocate_id(&mut self) -> Option<CardId> {
        let id = self.next_card_id;
        self.next_card_id = id.next()?;
        Some(id)
    }

    /// Find where a card lives. Columns are scanned in order 0, 1, 2 and the
    /// first match wins.
    pub fn locate(&self, id: CardId) -> Option<(ColumnIndex, usize)> {
        self.columns()
            .find_map(|(index, column)| column.position_of(id).map(|pos| (index, pos)))
    }

    /// Find a card by ID
    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        let (column, pos) = self.locate(id)?;
        self.column(column).cards.get(pos)
    }

    /// Find a card by ID (mutable)
    pub fn find_card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let (column, pos) = self.locate(id)?;
        self.column_mut(column).cards.get_mut(pos)
    }

    /// Remove a card from whichever column holds it
    pub fn take_card(&mut self, id: CardId) -> Option<(ColumnIndex, Card)> {
        let (column, pos) = self.locate(id)?;
        let card = self.column_mut(column).cards.remove(pos);
        Some((column, card))
    }

    /// Move a card to the end of `to`. Capacity is not consulted.
    ///
    /// Returns the column it came from, or `None` if the card is not on the board.
    pub fn transfer(&mut self, id: CardId, to: ColumnIndex) -> Option<ColumnIndex> {
        let (from, card) = self.take_card(id)?;
        self.column_mut(to).cards.push(card);
        Some(from)
    }

    /// Iterate every card on the board in column order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|column| column.cards.iter())
    }

    /// Total number of cards on the board
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|column| column.cards.len()).sum()
    }

    /// Largest id currently on the board
    pub fn max_card_id(&self) -> Option<CardId> {
        self.cards().map(|card| card.id).max()
    }

    /// Whether any id appears on more than one card
    pub fn has_duplicate_ids(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.cards().any(|card| !seen.insert(card.id))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A column: an ordered list of cards. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column titled for its position
    pub fn new(index: ColumnIndex) -> Self {
        Self {
            title: index.title().to_string(),
            cards: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.position_of(id).is_some()
    }
}
