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

use memcards_core::answers::AnswerDeck;
use memcards_core::answers::is_header;
use memcards_core::error::Fallible;
use memcards_core::text::is_accepted;

use crate::cmd::SessionConfig;
use crate::load::load_answer_deck;
use crate::term::Color;
use crate::term::Input;
use crate::term::Outcome;
use crate::term::Terminal;

/// Hints wrap around after this many correct answers in a row.
const MAX_HINTS: usize = 25;

/// Where the recall quiz is in the answer file.
#[derive(Debug, Default, PartialEq)]
struct QuizCursor {
    /// Index of the next file line to look at.
    line: usize,
    /// Ordinal of the current question.
    question: usize,
    hints: usize,
}

impl QuizCursor {
    /// Move past a correctly answered question. Headers between it and the
    /// next question will be echoed.
    fn advance(&mut self) {
        self.line += 1;
        self.question += 1;
        self.hints = if self.hints >= MAX_HINTS {
            0
        } else {
            self.hints + 1
        };
    }

    /// Go straight to a question, without echoing anything on the way.
    /// Moving past the last question puts the cursor at the end of the file.
    fn move_to(&mut self, deck: &AnswerDeck, ordinal: usize) {
        self.question = ordinal;
        self.line = deck.question_line(ordinal).unwrap_or(deck.lines().len());
    }
}

/// Quiz the user on every line of an answer file, in order.
///
/// A wrong answer shows the expected line and offers a jump: an empty reply
/// moves on to the next question, anything else is searched for among the
/// section headers and the quiz continues after the nearest match. A search
/// that finds nothing restarts the quiz from the first question.
pub fn run_recall<R: BufRead, W: Write, E: Write>(
    term: &mut Terminal<R, W, E>,
    config: &SessionConfig,
) -> Fallible<Outcome> {
    let deck = load_answer_deck(&config.path)?;
    let mut cursor = QuizCursor::default();

    while let Some(question_line) = deck.question_line(cursor.question) {
        if cursor.line < question_line {
            let line = deck.line(cursor.line);
            if is_header(line) {
                print_header(term, line)?;
            }
            cursor.line += 1;
            continue;
        }

        let answer = deck.line(question_line);
        let number = AnswerDeck::display_number(cursor.question);
        term.write(&format!("Line {number}\n\n> "))?;
        let typed = match term.read_input()? {
            Input::Text(text) => text,
            Input::Exit(outcome) => return Ok(outcome),
        };

        if is_accepted(&typed, answer) {
            term.paint(Color::Green, &format!("\n{answer}\n\nCorrect!\n\n"))?;
            cursor.advance();
            continue;
        }

        term.paint(Color::Red, &format!("\nThe answer was: \n\n{answer}\n"))?;
        term.write("\nJump to: \n\n> ")?;
        let search = match term.read_input()? {
            Input::Text(text) => text,
            Input::Exit(outcome) => return Ok(outcome),
        };
        term.write("\n")?;

        if search.is_empty() {
            cursor.move_to(&deck, cursor.question + 1);
            continue;
        }

        match deck.find_nearest_header(cursor.line, &search) {
            Some(header) => {
                log::debug!("Jump '{search}' resolved to line {header}");
                // A header with nothing after it keeps the current question.
                if let Some(ordinal) = deck.first_question_after(header) {
                    cursor.move_to(&deck, ordinal);
                }
                cursor.hints = 0;
                print_header(term, deck.line(header))?;
            }
            None => {
                log::debug!("Jump '{search}' matched no header, restarting");
                term.write("\nNo matching section found. Restarting from beginning.\n\n")?;
                cursor = QuizCursor::default();
                cursor.move_to(&deck, 0);
            }
        }
    }

    term.write("You remembered everything!\n")?;
    Ok(Outcome::Completed)
}

fn print_header<R: BufRead, W: Write, E: Write>(
    term: &mut Terminal<R, W, E>,
    header: &str,
) -> Fallible<()> {
    term.paint(Color::Cyan, &format!("\n{header}\n\n"))
}
