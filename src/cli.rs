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

use std::io::IsTerminal;
use std::io::stderr;
use std::io::stdin;
use std::io::stdout;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use memcards_core::error::Fallible;

use crate::cmd::Mode;
use crate::cmd::SessionConfig;
use crate::cmd::menu::run_menu;
use crate::cmd::run_mode;
use crate::term::Terminal;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the content file: an answer file for the recall quiz, or a
    /// 52-card deck for the card drills.
    file: String,
    /// Run a single quiz and exit instead of showing the menu.
    #[arg(long)]
    mode: Option<Mode>,
    /// Seed for card shuffles. By default, the system clock is used.
    #[arg(long)]
    seed: Option<u64>,
    /// Disable colors and screen clearing.
    #[arg(long)]
    no_color: bool,
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit with 1; `--help` and `--version` with 0.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            exit(code)
        }
    };
    let config = SessionConfig {
        path: PathBuf::from(cli.file),
        seed: cli.seed,
        color: !cli.no_color && stdout().is_terminal(),
    };
    colored::control::set_override(config.color);
    let mut term = Terminal::new(stdin().lock(), stdout(), stderr(), config.color);
    match cli.mode {
        Some(mode) => run_mode(&mut term, &config, mode).map(|_| ()),
        None => run_menu(&mut term, &config),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "memcards", "deck.txt", "--mode", "drill", "--seed", "42", "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.file, "deck.txt");
        assert_eq!(cli.mode, Some(Mode::Drill));
        assert_eq!(cli.seed, Some(42));
        assert!(cli.no_color);
    }

    #[test]
    fn test_file_is_required() {
        let err = Cli::try_parse_from(["memcards"]).err().unwrap();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["memcards", "deck.txt", "--mode", "poker"]).is_err());
    }
}
