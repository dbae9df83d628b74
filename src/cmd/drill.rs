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

use std::io::BufRead;
use std::io::Write;

use memcards_core::cards::CardDeck;
use memcards_core::cards::NUM_CARDS;
use memcards_core::error::Fallible;
use memcards_core::rng::TinyRng;
use memcards_core::rng::permutation;

use crate::cmd::SessionConfig;
use crate::load::load_card_deck;
use crate::term::Color;
use crate::term::Input;
use crate::term::Outcome;
use crate::term::Terminal;

/// Typed at either prompt to draw a new order of cards.
const SHUFFLE: &str = "shuffle";

#[derive(Debug, PartialEq)]
struct DrillCursor {
    /// Number of cards named correctly in a row.
    round: usize,
    /// How many preceding cards to show as a hint.
    preview_count: usize,
    ask_preview_count: bool,
}

impl DrillCursor {
    fn new() -> Self {
        Self {
            round: 0,
            preview_count: 1,
            ask_preview_count: true,
        }
    }

    /// Back to the first round, asking for the hint count again.
    fn restart(&mut self) {
        self.round = 0;
        self.ask_preview_count = true;
    }
}

/// Parse the number of hints. Anything that is not an integer means one
/// hint, and the result is clamped to the deck size.
fn parse_preview_count(input: &str) -> usize {
    input
        .trim()
        .parse::<i64>()
        .unwrap_or(1)
        .clamp(1, NUM_CARDS as i64) as usize
}

/// Drill the deck: each round shows the cards just before a position, in
/// deck order, and asks for the card at that position. Positions are visited
/// in shuffled order. A single mistake starts the drill over.
pub fn run_drill<R: BufRead, W: Write, E: Write>(
    term: &mut Terminal<R, W, E>,
    config: &SessionConfig,
) -> Fallible<Outcome> {
    let mut deck = load_card_deck(&config.path)?;
    let mut rng = config.rng();
    let mut order = permutation(NUM_CARDS, &mut rng);
    let mut cursor = DrillCursor::new();

    loop {
        if cursor.ask_preview_count {
            term.write("Type shuffle to mix the cards\n\nNumber of Hints:\n\n>> ")?;
            let input = match term.read_input()? {
                Input::Text(text) => text,
                Input::Exit(outcome) => return Ok(outcome),
            };
            if input == SHUFFLE {
                (deck, order) = reshuffle(term, config, &mut rng)?;
                cursor.restart();
                continue;
            }
            cursor.preview_count = parse_preview_count(&input);
            cursor.ask_preview_count = false;
            term.clear()?;
        }

        if cursor.round >= NUM_CARDS {
            term.write(&format!(
                "Congratulations! You have completed all {NUM_CARDS} rounds.\n"
            ))?;
            return Ok(Outcome::Completed);
        }

        let position = order[cursor.round];
        let preview = deck.preview(position, cursor.preview_count).join(", ");
        term.write(&format!(
            "\nCard {} of {NUM_CARDS}:\n\n{preview}\n\n>> ",
            cursor.round + 1
        ))?;
        let answer = match term.read_input()? {
            Input::Text(text) => text,
            Input::Exit(outcome) => return Ok(outcome),
        };
        if answer == SHUFFLE {
            (deck, order) = reshuffle(term, config, &mut rng)?;
            cursor.restart();
            continue;
        }

        let expected = deck.card(position);
        if answer == expected {
            term.paint(Color::Green, "\nCorrect!\n\n")?;
            cursor.round += 1;
        } else {
            term.paint(
                Color::Red,
                &format!("\nIncorrect. Correct answer: {expected}\n\n"),
            )?;
            term.write("\nPress enter to continue...")?;
            if let Input::Exit(outcome) = term.read_input()? {
                return Ok(outcome);
            }
            log::debug!("Missed card at position {position} in round {}", cursor.round);
            term.clear()?;
            cursor.restart();
        }
    }
}

/// Reload the deck from disk and draw a new order.
fn reshuffle<R: BufRead, W: Write, E: Write>(
    term: &mut Terminal<R, W, E>,
    config: &SessionConfig,
    rng: &mut TinyRng,
) -> Fallible<(CardDeck, Vec<usize>)> {
    let deck = load_card_deck(&config.path)?;
    let order = permutation(NUM_CARDS, rng);
    term.clear()?;
    term.write("Cards shuffled!\n\n")?;
    Ok((deck, order))
}
