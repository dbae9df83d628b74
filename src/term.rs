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

use colored::Colorize;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::Clear;
use crossterm::terminal::ClearType;
use memcards_core::error::ErrorReport;
use memcards_core::error::Fallible;

/// How an engine handed control back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The engine ran out of content.
    Completed,
    /// The user typed `menu`.
    Menu,
    /// The user typed `quit`, or input ended.
    Quit,
}

/// A line read from the user.
#[derive(Debug, PartialEq)]
pub enum Input {
    Text(String),
    /// One of the reserved words that leave the current engine.
    Exit(Outcome),
}

/// Cosmetic text colors.
#[derive(Clone, Copy)]
pub enum Color {
    Cyan,
    Green,
    Red,
}

/// Line-oriented terminal: prompts go to `output`, answers come from `input`,
/// failures are reported on `errors`.
pub struct Terminal<R, W, E> {
    input: R,
    output: W,
    errors: E,
    /// Whether to emit colors and clear the screen.
    color: bool,
}

impl<R: BufRead, W: Write, E: Write> Terminal<R, W, E> {
    pub fn new(input: R, output: W, errors: E, color: bool) -> Self {
        Self {
            input,
            output,
            errors,
            color,
        }
    }

    /// Read one line without its line terminator. Returns `None` at end of
    /// input. Bytes that are not UTF-8 become replacement characters.
    pub fn read_line(&mut self) -> Fallible<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Read one line, recognizing the reserved words `menu` and `quit`.
    pub fn read_input(&mut self) -> Fallible<Input> {
        match self.read_line()? {
            None => {
                log::debug!("Input closed");
                Ok(Input::Exit(Outcome::Quit))
            }
            Some(line) if line == "menu" => Ok(Input::Exit(Outcome::Menu)),
            Some(line) if line == "quit" => {
                self.write("Exiting...\n")?;
                Ok(Input::Exit(Outcome::Quit))
            }
            Some(line) => Ok(Input::Text(line)),
        }
    }

    pub fn write(&mut self, text: &str) -> Fallible<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn paint(&mut self, color: Color, text: &str) -> Fallible<()> {
        if !self.color {
            return self.write(text);
        }
        let painted = match color {
            Color::Cyan => text.cyan(),
            Color::Green => text.green(),
            Color::Red => text.red(),
        };
        self.write(&painted.to_string())
    }

    pub fn clear(&mut self) -> Fallible<()> {
        if self.color {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    /// Report a failure without leaving the session.
    pub fn report(&mut self, err: &ErrorReport) -> Fallible<()> {
        writeln!(self.errors, "{err}")?;
        self.errors.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_streams(self) -> (W, E) {
        (self.output, self.errors)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn terminal(input: &[u8], color: bool) -> Terminal<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>> {
        Terminal::new(Cursor::new(input.to_vec()), Vec::new(), Vec::new(), color)
    }

    fn output_of(term: Terminal<Cursor<Vec<u8>>, Vec<u8>, Vec<u8>>) -> String {
        String::from_utf8(term.into_streams().0).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminators() -> Fallible<()> {
        let mut term = terminal(b"unix\nwindows\r\nlast", false);
        assert_eq!(term.read_line()?, Some("unix".to_string()));
        assert_eq!(term.read_line()?, Some("windows".to_string()));
        assert_eq!(term.read_line()?, Some("last".to_string()));
        assert_eq!(term.read_line()?, None);
        Ok(())
    }

    #[test]
    fn test_reserved_words() -> Fallible<()> {
        let mut term = terminal(b"menu\nquit\nMenu\n\n", false);
        assert_eq!(term.read_input()?, Input::Exit(Outcome::Menu));
        assert_eq!(term.read_input()?, Input::Exit(Outcome::Quit));
        assert_eq!(term.read_input()?, Input::Text("Menu".to_string()));
        assert_eq!(term.read_input()?, Input::Text(String::new()));
        assert_eq!(term.read_input()?, Input::Exit(Outcome::Quit));
        let output = output_of(term);
        assert_eq!(output, "Exiting...\n");
        Ok(())
    }

    #[test]
    fn test_plain_output_without_color() -> Fallible<()> {
        let mut term = terminal(b"", false);
        term.clear()?;
        term.paint(Color::Green, "Correct!")?;
        let output = output_of(term);
        assert_eq!(output, "Correct!");
        Ok(())
    }

    #[test]
    fn test_colored_output() -> Fallible<()> {
        colored::control::set_override(true);
        let mut term = terminal(b"", true);
        term.paint(Color::Red, "wrong")?;
        let output = output_of(term);
        assert_eq!(output, "\x1b[31mwrong\x1b[0m");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_read_as_text() -> Fallible<()> {
        let mut term = terminal(b"Lond\xf3n\n\xe9\r\n", false);
        assert_eq!(term.read_input()?, Input::Text("Lond\u{fffd}n".to_string()));
        assert_eq!(term.read_input()?, Input::Text("\u{fffd}".to_string()));
        assert_eq!(term.read_input()?, Input::Exit(Outcome::Quit));
        Ok(())
    }

    #[test]
    fn test_clear_screen() -> Fallible<()> {
        let mut term = terminal(b"", true);
        term.clear()?;
        let output = output_of(term);
        assert!(output.contains("\x1b[2J"));
        Ok(())
    }

    #[test]
    fn test_report_goes_to_error_stream() -> Fallible<()> {
        let mut term = terminal(b"", false);
        term.report(&ErrorReport::new("bad deck"))?;
        let (output, errors) = term.into_streams();
        assert!(output.is_empty());
        assert_eq!(String::from_utf8(errors).unwrap(), "error: bad deck\n");
        Ok(())
    }
}
