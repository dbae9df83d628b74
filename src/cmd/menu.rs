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

use memcards_core::error::Fallible;

use crate::cmd::Mode;
use crate::cmd::SessionConfig;
use crate::cmd::run_mode;
use crate::term::Input;
use crate::term::Outcome;
use crate::term::Terminal;

const MENU: &str = "Choose a program:\n\n\
    1. Memory Houses\n\
    2. Memory Hints\n\
    3. Card Listing\n\
    4. Quit\n\n> ";

#[derive(Debug, PartialEq)]
enum Choice {
    Run(Mode),
    Quit,
    Invalid,
}

impl Choice {
    fn parse(input: &str) -> Self {
        let input = input.trim();
        if input == ":quit" {
            return Choice::Quit;
        }
        match input.parse::<u32>() {
            Ok(1) => Choice::Run(Mode::Recall),
            Ok(2) => Choice::Run(Mode::Drill),
            Ok(3) => Choice::Run(Mode::Listing),
            Ok(4) => Choice::Quit,
            _ => Choice::Invalid,
        }
    }
}

/// Show the mode-selection menu until the user leaves.
///
/// An engine that fails to start, for example because the content file does
/// not suit it, is reported and the menu is shown again.
pub fn run_menu<R: BufRead, W: Write, E: Write>(
    term: &mut Terminal<R, W, E>,
    config: &SessionConfig,
) -> Fallible<()> {
    loop {
        term.clear()?;
        term.write(MENU)?;
        let input = match term.read_input()? {
            Input::Text(text) => text,
            Input::Exit(Outcome::Quit) => return Ok(()),
            Input::Exit(_) => continue,
        };
        let mode = match Choice::parse(&input) {
            Choice::Run(mode) => mode,
            Choice::Quit => break,
            Choice::Invalid => {
                term.write("\nInvalid choice.\n")?;
                continue;
            }
        };
        match run_mode(term, config, mode) {
            Ok(Outcome::Quit) => return Ok(()),
            Ok(_) => {}
            Err(e) => {
                log::debug!("{mode} failed to run: {e}");
                term.report(&e)?;
            }
        }
    }
    term.write("\nGoodbye!\n")?;
    Ok(())
}
