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

use std::fmt::Display;
use std::fmt::Formatter;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use clap::ValueEnum;
use memcards_core::error::Fallible;
use memcards_core::rng::TinyRng;

use crate::term::Outcome;
use crate::term::Terminal;

pub mod drill;
pub mod listing;
pub mod menu;
pub mod recall;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    /// Type each line of an answer file from memory.
    Recall,
    /// Name the next card of a 52-card deck from the cards before it.
    Drill,
    /// Name cards of a 52-card deck by their position.
    Listing,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Recall => write!(f, "recall"),
            Mode::Drill => write!(f, "drill"),
            Mode::Listing => write!(f, "listing"),
        }
    }
}

/// Settings shared by every engine invocation in a session.
pub struct SessionConfig {
    /// The content file: an answer file or a card deck, depending on the mode.
    pub path: PathBuf,
    /// Seed for shuffles. When absent, each engine seeds from the clock.
    pub seed: Option<u64>,
    pub color: bool,
}

impl SessionConfig {
    /// A fresh RNG for one engine invocation.
    pub fn rng(&self) -> TinyRng {
        let seed = self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        });
        log::debug!("Shuffle seed: {seed}");
        TinyRng::from_seed(seed)
    }
}

/// Run a single engine, with the banner before it and the completion note
/// after it.
pub fn run_mode<R: BufRead, W: Write, E: Write>(
    term: &mut Terminal<R, W, E>,
    config: &SessionConfig,
    mode: Mode,
) -> Fallible<Outcome> {
    term.clear()?;
    term.write("Type \"menu\" or \"quit\" anytime to return or exit.\n\n")?;
    log::debug!("Starting {mode} on {}", config.path.display());
    let outcome = match mode {
        Mode::Recall => recall::run_recall(term, config)?,
        Mode::Drill => drill::run_drill(term, config)?,
        Mode::Listing => listing::run_listing(term, config)?,
    };
    log::debug!("Finished {mode}: {outcome:?}");
    if outcome == Outcome::Completed {
        term.write("\nProgram complete.\n")?;
    }
    Ok(outcome)
}
