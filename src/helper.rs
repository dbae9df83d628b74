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

use std::io::Cursor;
use std::io::Write;

use memcards_core::error::Fallible;
use tempfile::NamedTempFile;

use crate::cmd::SessionConfig;
use crate::term::Terminal;

pub type ScriptedTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>;

/// Write `contents` to a temporary file that lives as long as the handle.
pub fn create_tmp_file(contents: impl AsRef<[u8]>) -> Fallible<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_ref())?;
    file.flush()?;
    Ok(file)
}

/// The cards `card1` through `card52`, one per line.
pub fn full_deck_text() -> String {
    (1..=52)
        .map(|i| format!("card{i}\n"))
        .collect::<String>()
}

pub fn config_for(file: &NamedTempFile, seed: u64) -> SessionConfig {
    SessionConfig {
        path: file.path().to_path_buf(),
        seed: Some(seed),
        color: false,
    }
}

/// A colorless terminal that reads the given script.
pub fn scripted(input: impl AsRef<[u8]>) -> ScriptedTerminal {
    Terminal::new(
        Cursor::new(input.as_ref().to_vec()),
        Vec::new(),
        Vec::new(),
        false,
    )
}

pub fn output_of(term: ScriptedTerminal) -> String {
    streams_of(term).0
}

/// What the terminal printed as prompts, and what it reported as errors.
pub fn streams_of(term: ScriptedTerminal) -> (String, String) {
    let (output, errors) = term.into_streams();
    (
        String::from_utf8_lossy(&output).into_owned(),
        String::from_utf8_lossy(&errors).into_owned(),
    )
}
