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

use crate::text::normalize;

/// The classification of a single line of an answer file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A line starting with `#`. Printed and used as a jump target, never quizzed.
    Header,
    /// Any other non-empty line. Its full text is the expected answer.
    Question,
    /// An empty line.
    Blank,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if line.is_empty() {
            LineKind::Blank
        } else if is_header(line) {
            LineKind::Header
        } else {
            LineKind::Question
        }
    }
}

pub fn is_header(line: &str) -> bool {
    line.starts_with('#')
}

#[derive(Debug, PartialEq)]
pub enum AnswerDeckError {
    /// The file has no quizzable lines at all.
    NoQuestions,
}

impl Display for AnswerDeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerDeckError::NoQuestions => write!(f, "No valid questions found in the file."),
        }
    }
}

impl Error for AnswerDeckError {}

/// The lines of an answer file, in file order.
#[derive(Debug)]
pub struct AnswerDeck {
    lines: Vec<String>,
    /// Line index of every question, in file order. The position in this
    /// vector is the question's ordinal.
    questions: Vec<usize>,
}

impl AnswerDeck {
    pub fn parse(text: &str) -> Result<Self, AnswerDeckError> {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let questions: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| LineKind::of(line) == LineKind::Question)
            .map(|(idx, _)| idx)
            .collect();
        if questions.is_empty() {
            return Err(AnswerDeckError::NoQuestions);
        }
        Ok(Self { lines, questions })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> &str {
        &self.lines[idx]
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The line index of the question with the given ordinal.
    pub fn question_line(&self, ordinal: usize) -> Option<usize> {
        self.questions.get(ordinal).copied()
    }

    /// The 1-based number shown to the user for a question ordinal.
    pub fn display_number(ordinal: usize) -> usize {
        ordinal + 1
    }

    /// The ordinal of the first question located after the given line.
    pub fn first_question_after(&self, line: usize) -> Option<usize> {
        self.questions.iter().position(|&q| q > line)
    }

    pub fn find_nearest_header(&self, from: usize, term: &str) -> Option<usize> {
        find_nearest_header(&self.lines, from, term)
    }
}

/// Find the header closest to `from` whose text contains `term`, ignoring
/// case.
///
/// Distance is measured in lines. On a tie the header with the lower index
/// wins.
pub fn find_nearest_header<S: AsRef<str>>(lines: &[S], from: usize, term: &str) -> Option<usize> {
    let term = normalize(term);
    let mut best: Option<(usize, usize)> = None;
    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if !is_header(line) || !normalize(line).contains(&term) {
            continue;
        }
        let distance = idx.abs_diff(from);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((idx, distance));
        }
    }
    best.map(|(idx, _)| idx)
}
