// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

/// Every card file holds a full deck.
pub const NUM_CARDS: usize = 52;

#[derive(Debug, PartialEq)]
pub enum CardDeckError {
    WrongSize { found: usize },
}

impl Display for CardDeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CardDeckError::WrongSize { found } => {
                write!(f, "expected exactly {NUM_CARDS} cards, found {found}.")
            }
        }
    }
}

impl Error for CardDeckError {}

/// A full deck of cards. A card's index in the file is its position.
#[derive(Debug, Clone)]
pub struct CardDeck {
    cards: Vec<String>,
}

impl CardDeck {
    /// Parse a card file: one card per line, surrounding spaces and tabs
    /// trimmed, blank lines and `#` comments dropped.
    pub fn parse(text: &str) -> Result<Self, CardDeckError> {
        let cards: Vec<String> = text
            .lines()
            .map(|line| line.trim_matches([' ', '\t']))
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();
        if cards.len() != NUM_CARDS {
            return Err(CardDeckError::WrongSize { found: cards.len() });
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// The card at a position. Panics if `position >= NUM_CARDS`.
    pub fn card(&self, position: usize) -> &str {
        &self.cards[position]
    }

    /// The `count` cards immediately before `position`, wrapping around the
    /// start of the deck, in deck order.
    ///
    /// `count` is clamped to the deck size.
    pub fn preview(&self, position: usize, count: usize) -> Vec<&str> {
        let count = count.min(NUM_CARDS);
        (0..count)
            .map(|i| (position + NUM_CARDS - count + i) % NUM_CARDS)
            .map(|idx| self.card(idx))
            .collect()
    }
}
