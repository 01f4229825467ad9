//! Line-oriented console protocol.
//!
//! Every prompt prints its question, then the `>>> ` marker, and blocks on one
//! line of input. `exit`/`quit` (or end of input) ends the session from any
//! prompt; callers see that as [`Reply::Exit`] and unwind.

use crate::aliases::AliasTable;
use crate::models::Mode;
use crate::options::{OptionSet, Resolution};
use anyhow::Result;
use std::io::{BufRead, Write};

pub const INPUT_MARKER: &str = ">>> ";
pub const INVALID_INPUT: &str = "Invalid input.";

/// Answer to a prompt: a value, or a request to end the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    Value(T),
    Exit,
}

fn is_exit_command(line: &str) -> bool {
    let l = line.trim();
    l.eq_ignore_ascii_case("exit") || l.eq_ignore_ascii_case("quit")
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Show the input marker and read one line, without the line ending.
    pub fn read(&mut self) -> Result<Reply<String>> {
        write!(self.output, "{INPUT_MARKER}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // stdin closed
            writeln!(self.output)?;
            return Ok(Reply::Exit);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if is_exit_command(&line) {
            return Ok(Reply::Exit);
        }
        Ok(Reply::Value(line))
    }

    /// Show the mode menu and read until a listed digit is entered.
    pub fn choose_mode(&mut self) -> Result<Reply<Mode>> {
        self.say("What type of data do you want to view?")?;
        for (i, mode) in Mode::ALL.iter().enumerate() {
            self.say(format!("{} - {}", i + 1, mode.menu_label()))?;
        }
        loop {
            let Reply::Value(line) = self.read()? else {
                return Ok(Reply::Exit);
            };
            match Mode::from_menu_entry(&line) {
                Some(mode) => return Ok(Reply::Value(mode)),
                None => self.say(INVALID_INPUT)?,
            }
        }
    }

    /// Ask `question` until the answer is empty (`None`) or one of `options`.
    /// `options` lists every choice and asks again.
    pub fn choose(
        &mut self,
        question: &str,
        options: &OptionSet,
        aliases: Option<&AliasTable>,
    ) -> Result<Reply<Option<String>>> {
        self.say(question)?;
        loop {
            let Reply::Value(line) = self.read()? else {
                return Ok(Reply::Exit);
            };
            match options.resolve(&line, aliases) {
                Resolution::Skip => return Ok(Reply::Value(None)),
                Resolution::Selected(v) => return Ok(Reply::Value(Some(v))),
                Resolution::ShowOptions => {
                    for o in options.iter() {
                        writeln!(self.output, "{o}")?;
                    }
                }
                Resolution::Invalid => self.say(INVALID_INPUT)?,
            }
        }
    }
}
