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

use std::fs::read_to_string;
use std::io::ErrorKind;
use std::path::Path;

use memcards_core::answers::AnswerDeck;
use memcards_core::cards::CardDeck;
use memcards_core::error::ErrorReport;
use memcards_core::error::Fallible;

fn read_content(path: &Path) -> Fallible<String> {
    read_to_string(path).map_err(|e| {
        log::debug!("Failed to read {}: {e}", path.display());
        match e.kind() {
            ErrorKind::InvalidData => {
                ErrorReport::new(format!("File '{}' is not valid UTF-8", path.display()))
            }
            _ => ErrorReport::new(format!("Could not open file '{}'", path.display())),
        }
    })
}

/// Load an answer file for the recall quiz.
pub fn load_answer_deck(path: &Path) -> Fallible<AnswerDeck> {
    let text = read_content(path)?;
    let deck = AnswerDeck::parse(&text).inspect_err(|e| {
        log::warn!("{}: {e}", path.display());
    })?;
    log::debug!(
        "Loaded {} lines, {} questions from {}",
        deck.lines().len(),
        deck.question_count(),
        path.display()
    );
    Ok(deck)
}

/// Load a 52-card deck.
pub fn load_card_deck(path: &Path) -> Fallible<CardDeck> {
    let text = read_content(path)?;
    let deck = CardDeck::parse(&text).inspect_err(|e| {
        log::warn!("{}: {e}", path.display());
    })?;
    log::debug!("Loaded card deck from {}", path.display());
    Ok(deck)
}
