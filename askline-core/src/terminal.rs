//! # Terminal Input Helper
//!
//! This module provides the console layer of the toolkit: prompt rendering
//! with indentation, the yes/no token pair, pluggable input sources, and
//! the [`Prompter`], which repeatedly prompts the user until the input
//! satisfies every validator of a [`PromptSpec`].
//!
//! ## Features
//! - Continuously prompts the user until valid input is received.
//! - Supports multiple validation rules simultaneously.
//! - Input is read from any [`InputSource`], so flows can be driven by the
//!   real console or by a scripted sequence of lines.
//!
//! ## Usage
//!
//! Create a prompter over stdin/stdout with [`Prompter::console`] and run a
//! [`PromptSpec`] through [`Prompter::ask`].
//!
//! ### Example 1: Bounded integer input
//! ```rust,no_run
//! use askline_core::{PromptSpec, Prompter, Validator};
//!
//! fn main() -> Result<(), askline_core::PromptError> {
//!     let mut prompter = Prompter::console();
//!     let answer = prompter.ask(
//!         &PromptSpec::new("Player count (1-16)")
//!             .with_validator(Validator::Int { min: 1, max: 16 })
//!             .with_invalid("integer between 1 and 16 (inclusive)"),
//!     )?;
//!     println!("Players: {}", answer);
//!     Ok(())
//! }
//! ```
//!
//! ### Example 2: Scripted input
//! ```rust
//! use askline_core::{PromptSpec, Prompter, ScriptedInput, Validator};
//!
//! let mut prompter = Prompter::new(ScriptedInput::new(["nope", "7"]), Vec::<u8>::new());
//! let answer = prompter
//!     .ask(
//!         &PromptSpec::new("Lucky number")
//!             .with_validator(Validator::Int { min: 1, max: 9 })
//!             .with_invalid("integer between 1 and 9 (inclusive)"),
//!     )
//!     .unwrap();
//! assert_eq!(answer, "7");
//! ```

use crate::error::PromptError;
use crate::prompt::PromptSpec;
use log::{debug, trace};
use std::collections::VecDeque;
use std::io::{self, Write};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

fn indentation(level: usize) -> String {
    " ".repeat(INDENT_WIDTH * level)
}

/// The yes/no token pair used by boolean prompts.
///
/// Tokens are stored lowercased and compared case-insensitively. The pair
/// is carried by the [`Prompter`] rather than read from a global, so
/// alternate tokens can be injected per prompter.
#[derive(Debug, Clone)]
pub struct Tokens {
    yes: String,
    no: String,
}

impl Tokens {
    pub fn new(yes: &str, no: &str) -> Tokens {
        Tokens {
            yes: yes.to_lowercase(),
            no: no.to_lowercase(),
        }
    }

    pub fn yes(&self) -> &str {
        &self.yes
    }

    pub fn no(&self) -> &str {
        &self.no
    }
}

impl Default for Tokens {
    fn default() -> Tokens {
        Tokens::new("y", "n")
    }
}

/// One line of input at a time, from wherever the caller wants.
///
/// `Ok(None)` means the source is closed: end of input on a console, or an
/// exhausted script.
pub trait InputSource {
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads from process stdin.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().read_line(&mut line)?;
        if read == 0 { Ok(None) } else { Ok(Some(line)) }
    }
}

/// A finite, pre-recorded sequence of input lines.
///
/// Used by tests and by callers that want to drive a flow without a
/// console. Once the lines run out the source reports itself closed.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> ScriptedInput
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// A helper for repeatedly asking the user for input until it passes all
/// the validators of a [`PromptSpec`].
///
/// The prompter owns the input source, the output writer, and the yes/no
/// [`Tokens`]. All console traffic of the toolkit goes through it: prompts
/// render as `"<indent><message>: "`, plain lines via [`Prompter::print`],
/// and rejected attempts produce exactly one `"Invalid: <notice>"` line
/// before the prompt is shown again.
pub struct Prompter<R, W> {
    input: R,
    out: W,
    tokens: Tokens,
}

impl Prompter<StdinInput, io::Stdout> {
    /// A prompter wired to the process console.
    pub fn console() -> Prompter<StdinInput, io::Stdout> {
        Prompter::new(StdinInput, io::stdout())
    }
}

impl<R: InputSource, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Prompter<R, W> {
        Prompter {
            input,
            out,
            tokens: Tokens::default(),
        }
    }

    /// Replace the default yes/no tokens.
    pub fn with_tokens(mut self, tokens: Tokens) -> Prompter<R, W> {
        self.tokens = tokens;
        self
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    /// Give back the input source and writer (useful for inspecting
    /// captured output after a scripted run).
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.out)
    }

    /// Print one line at the given indent level.
    pub fn print(&mut self, text: &str, indent: usize) -> Result<(), PromptError> {
        writeln!(self.out, "{}{}", indentation(indent), text)?;
        Ok(())
    }

    /// Render `"<indent><message>: "`, read one line and return it trimmed
    /// of surrounding whitespace. No validation happens here.
    pub fn read(&mut self, message: &str, indent: usize) -> Result<String, PromptError> {
        write!(self.out, "{}{}: ", indentation(indent), message)?;
        self.out.flush()?;
        match self.input.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(PromptError::Closed),
        }
    }

    /// The read-validate-reprompt loop.
    ///
    /// Repeats until either the trimmed input is empty while the spec
    /// allows blanks (returned as the empty string, skipping validation)
    /// or every validator accepts the trimmed input. Each rejected attempt
    /// prints the spec's invalid-input notice and prompts again; there is
    /// no retry limit.
    pub fn ask(&mut self, spec: &PromptSpec) -> Result<String, PromptError> {
        loop {
            let answer = self.read(&spec.message, spec.indent)?;

            if spec.allow_blank && answer.is_empty() {
                trace!("blank accepted for {:?}", spec.message);
                return Ok(answer);
            }

            if spec
                .validators
                .iter()
                .all(|validator| validator.accepts(&answer, &self.tokens))
            {
                trace!("accepted {:?} for {:?}", answer, spec.message);
                return Ok(answer);
            }

            debug!("rejected {:?} for {:?}", answer, spec.message);
            writeln!(self.out, "Invalid: {}", spec.invalid)?;
        }
    }
}
