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

use memcards_core::cards::NUM_CARDS;
use memcards_core::error::Fallible;
use memcards_core::rng::permutation;
use memcards_core::text::normalize;

use crate::cmd::SessionConfig;
use crate::load::load_card_deck;
use crate::term::Color;
use crate::term::Input;
use crate::term::Outcome;
use crate::term::Terminal;

/// Print the whole deck, then ask once for every card by its number, in
/// random order. Mistakes are shown but never restart the pass.
pub fn run_listing<R: BufRead, W: Write, E: Write>(
    term: &mut Terminal<R, W, E>,
    config: &SessionConfig,
) -> Fallible<Outcome> {
    let deck = load_card_deck(&config.path)?;
    for (position, card) in deck.cards().iter().enumerate() {
        term.write(&format!("{}. {card}\n", position + 1))?;
    }

    let order = permutation(NUM_CARDS, &mut config.rng());
    let mut correct = 0;
    for position in order {
        term.write(&format!("\nWhat is card number {}?\n\n> ", position + 1))?;
        let answer = match term.read_input()? {
            Input::Text(text) => text,
            Input::Exit(outcome) => return Ok(outcome),
        };
        let expected = deck.card(position);
        if normalize(answer.trim()) == normalize(expected) {
            term.paint(Color::Green, "\nCorrect!\n")?;
            correct += 1;
        } else {
            term.paint(
                Color::Red,
                &format!("\nIncorrect. Correct answer: {expected}\n"),
            )?;
        }
        term.write("\nPress enter to continue...")?;
        if let Input::Exit(outcome) = term.read_input()? {
            return Ok(outcome);
        }
    }

    term.write(&format!("\nYou named {correct} of {NUM_CARDS} cards.\n"))?;
    Ok(Outcome::Completed)
}
