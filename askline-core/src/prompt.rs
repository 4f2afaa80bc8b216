//! Prompt specifications and typed prompts.
//!
//! [`PromptSpec`] describes one prompt for the retry engine: a message, an
//! indent level, an ordered validator stack, the invalid-input notice and
//! the blank-input policy. The typed prompts here ([`Confirm`],
//! [`NamePrompt`], [`TextPrompt`], [`IntPrompt`], [`FloatPrompt`],
//! [`Menu`]) are thin compositions of the engine with fixed validators and
//! a conversion step.
//!
//! Every typed prompt is a value: configure it with `with_*` builders,
//! then run it against a [`Prompter`] with `read`.

use crate::error::{ConfigError, PromptError};
use crate::terminal::{InputSource, Prompter, Tokens};
use crate::validate::{NAME_CHARS, Validator};
use std::fmt::Display;
use std::io::Write;

/// One prompt: message, indent, validator stack, notice, blank policy.
///
/// Constructed per call and consumed by one run of [`Prompter::ask`]; each
/// construction gets its own validator container.
#[derive(Debug, Clone)]
pub struct PromptSpec {
    pub message: String,
    pub indent: usize,
    pub validators: Vec<Validator>,
    pub invalid: String,
    pub allow_blank: bool,
}

impl PromptSpec {
    pub fn new(message: impl Into<String>) -> PromptSpec {
        PromptSpec {
            message: message.into(),
            indent: 0,
            validators: Vec::new(),
            invalid: String::new(),
            allow_blank: false,
        }
    }

    pub fn with_indent(mut self, level: usize) -> PromptSpec {
        self.indent = level;
        self
    }

    /// Append one validator to the stack.
    pub fn with_validator(mut self, validator: Validator) -> PromptSpec {
        self.validators.push(validator);
        self
    }

    /// Set the notice printed after a rejected attempt.
    pub fn with_invalid(mut self, notice: impl Into<String>) -> PromptSpec {
        self.invalid = notice.into();
        self
    }

    /// Let an empty line through, skipping validation.
    pub fn allow_blank(mut self, allow: bool) -> PromptSpec {
        self.allow_blank = allow;
        self
    }
}

/// Outcome of a yes/no prompt.
///
/// `Unknown` is a valid outcome, not an error: it is produced when no
/// default is configured and the answer is neither token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    Yes,
    No,
    Unknown,
}

impl TriState {
    pub fn is_yes(self) -> bool {
        self == TriState::Yes
    }

    /// `Some(bool)` for a decided answer, `None` for `Unknown`.
    pub fn decided(self) -> Option<bool> {
        match self {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Unknown => None,
        }
    }

    /// Map a raw (already case-normalized) answer onto a tri-state.
    ///
    /// With a default configured, only the opposite token overrides it:
    /// any other answer resolves to the default. With no default, the
    /// answer must be one of the two tokens to decide.
    pub fn resolve(answer: &str, default: Option<bool>, tokens: &Tokens) -> TriState {
        match default {
            Some(true) => {
                if answer == tokens.no() {
                    TriState::No
                } else {
                    TriState::Yes
                }
            }
            Some(false) => {
                if answer == tokens.yes() {
                    TriState::Yes
                } else {
                    TriState::No
                }
            }
            None => {
                if answer == tokens.yes() {
                    TriState::Yes
                } else if answer == tokens.no() {
                    TriState::No
                } else {
                    TriState::Unknown
                }
            }
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> TriState {
        match value {
            Some(true) => TriState::Yes,
            Some(false) => TriState::No,
            None => TriState::Unknown,
        }
    }
}

/// A yes/no prompt producing a [`TriState`].
///
/// Renders as `"<message>? <yes>/<no>"`. The default biases ambiguous
/// answers: with `Some(true)` anything but the no-token reads as yes, and
/// vice versa. `strict` restricts acceptable input to the two tokens at
/// the validator stage, so `Unknown` becomes unreachable.
pub struct Confirm {
    pub message: String,
    pub indent: usize,
    pub strict: bool,
    pub default: Option<bool>,
    pub allow_blank: bool,
}

impl Confirm {
    pub fn new(message: impl Into<String>) -> Confirm {
        Confirm {
            message: message.into(),
            indent: 0,
            strict: false,
            default: Some(true),
            allow_blank: false,
        }
    }

    pub fn with_indent(mut self, level: usize) -> Confirm {
        self.indent = level;
        self
    }

    pub fn with_default(mut self, default: Option<bool>) -> Confirm {
        self.default = default;
        self
    }

    pub fn strict(mut self) -> Confirm {
        self.strict = true;
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Confirm {
        self.allow_blank = allow;
        self
    }

    pub fn read<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<TriState, PromptError> {
        let tokens = prompter.tokens().clone();
        let spec = PromptSpec::new(format!(
            "{}? {}/{}",
            self.message,
            tokens.yes(),
            tokens.no()
        ))
        .with_indent(self.indent)
        .with_validator(Validator::YesNo { strict: self.strict })
        .with_invalid(format!("{} or {}", tokens.yes(), tokens.no()))
        .allow_blank(self.allow_blank);

        let answer = prompter.ask(&spec)?.to_lowercase();
        if answer.is_empty() {
            // blank falls back to the configured default verbatim
            return Ok(TriState::from(self.default));
        }
        Ok(TriState::resolve(&answer, self.default, &tokens))
    }
}

/// An alphabetic name prompt (letters plus `' '`, `','`, `'-'`, `'.'`).
pub struct NamePrompt {
    pub message: String,
    pub indent: usize,
    pub allow_blank: bool,
}

impl NamePrompt {
    pub fn new(message: impl Into<String>) -> NamePrompt {
        NamePrompt {
            message: message.into(),
            indent: 0,
            allow_blank: false,
        }
    }

    pub fn with_indent(mut self, level: usize) -> NamePrompt {
        self.indent = level;
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> NamePrompt {
        self.allow_blank = allow;
        self
    }

    pub fn read<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<String, PromptError> {
        let punctuation = NAME_CHARS
            .iter()
            .map(|c| format!("'{}'", c))
            .collect::<Vec<_>>()
            .join(", ");
        let spec = PromptSpec::new(&self.message)
            .with_indent(self.indent)
            .with_validator(Validator::NonEmpty)
            .with_validator(Validator::Name)
            .with_invalid(format!("letters plus any of {}", punctuation))
            .allow_blank(self.allow_blank);
        prompter.ask(&spec)
    }
}

impl Default for NamePrompt {
    fn default() -> NamePrompt {
        NamePrompt::new("Name")
    }
}

/// A free-text prompt with inclusive length bounds.
pub struct TextPrompt {
    pub message: String,
    pub indent: usize,
    pub min: usize,
    pub max: Option<usize>,
    pub allow_blank: bool,
}

impl TextPrompt {
    pub fn new(message: impl Into<String>) -> TextPrompt {
        TextPrompt {
            message: message.into(),
            indent: 0,
            min: 1,
            max: None,
            allow_blank: false,
        }
    }

    pub fn with_indent(mut self, level: usize) -> TextPrompt {
        self.indent = level;
        self
    }

    pub fn bounded(mut self, min: usize, max: usize) -> TextPrompt {
        self.min = min;
        self.max = Some(max);
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> TextPrompt {
        self.allow_blank = allow;
        self
    }

    pub fn read<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<String, PromptError> {
        let max_text = self.max.map_or("inf".to_string(), |max| max.to_string());
        let spec = PromptSpec::new(&self.message)
            .with_indent(self.indent)
            .with_validator(Validator::Length { min: self.min, max: self.max })
            .with_invalid(format!("between {} and {} characters", self.min, max_text))
            .allow_blank(self.allow_blank);
        prompter.ask(&spec)
    }
}

impl Default for TextPrompt {
    fn default() -> TextPrompt {
        TextPrompt::new("String")
    }
}

/// A signed-integer prompt with inclusive bounds.
///
/// Returns `None` only when blanks are allowed and the user entered one.
pub struct IntPrompt {
    pub message: String,
    pub indent: usize,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub allow_blank: bool,
}

impl IntPrompt {
    pub fn new(message: impl Into<String>) -> IntPrompt {
        IntPrompt {
            message: message.into(),
            indent: 0,
            min: None,
            max: None,
            allow_blank: false,
        }
    }

    pub fn with_indent(mut self, level: usize) -> IntPrompt {
        self.indent = level;
        self
    }

    pub fn bounded(mut self, min: i64, max: i64) -> IntPrompt {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> IntPrompt {
        self.allow_blank = allow;
        self
    }

    pub fn read<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Option<i64>, PromptError> {
        let min_text = self.min.map_or("-inf".to_string(), |min| min.to_string());
        let max_text = self.max.map_or("inf".to_string(), |max| max.to_string());
        let spec = PromptSpec::new(&self.message)
            .with_indent(self.indent)
            .with_validator(Validator::Int {
                min: self.min.unwrap_or(i64::MIN),
                max: self.max.unwrap_or(i64::MAX),
            })
            .with_invalid(format!(
                "integer between {} and {} (inclusive)",
                min_text, max_text
            ))
            .allow_blank(self.allow_blank);
        // a blank answer fails to parse, everything else was validated
        Ok(prompter.ask(&spec)?.parse().ok())
    }
}

impl Default for IntPrompt {
    fn default() -> IntPrompt {
        IntPrompt::new("Integer")
    }
}

/// A float prompt with inclusive bounds.
pub struct FloatPrompt {
    pub message: String,
    pub indent: usize,
    pub min: f64,
    pub max: f64,
    pub allow_blank: bool,
}

impl FloatPrompt {
    pub fn new(message: impl Into<String>) -> FloatPrompt {
        FloatPrompt {
            message: message.into(),
            indent: 0,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            allow_blank: false,
        }
    }

    pub fn with_indent(mut self, level: usize) -> FloatPrompt {
        self.indent = level;
        self
    }

    pub fn bounded(mut self, min: f64, max: f64) -> FloatPrompt {
        self.min = min;
        self.max = max;
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> FloatPrompt {
        self.allow_blank = allow;
        self
    }

    pub fn read<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Option<f64>, PromptError> {
        let spec = PromptSpec::new(&self.message)
            .with_indent(self.indent)
            .with_validator(Validator::Float { min: self.min, max: self.max })
            .with_invalid(format!(
                "number between {} and {} (inclusive)",
                self.min, self.max
            ))
            .allow_blank(self.allow_blank);
        Ok(prompter.ask(&spec)?.parse().ok())
    }
}

impl Default for FloatPrompt {
    fn default() -> FloatPrompt {
        FloatPrompt::new("Number")
    }
}

/// A numbered menu over a non-empty slice of displayable options.
///
/// Renders a 1-based menu block and delegates to an [`IntPrompt`] bounded
/// to `[1, count]`:
///
/// ```text
/// Options:
///
/// 1: first
/// 2: second
///
/// Choice:
/// ```
///
/// The accepted number is post-processed into the shape the caller wants:
/// zero-based index ([`Menu::read_index`]), one-based number
/// ([`Menu::read_number`]) or the option itself ([`Menu::read_item`]).
pub struct Menu<'a, T: Display> {
    options: &'a [T],
    pub message: String,
    pub indent: usize,
    pub allow_blank: bool,
}

impl<'a, T: Display> Menu<'a, T> {
    /// Fails with [`ConfigError::EmptyMenu`] on an empty option list,
    /// before any console interaction.
    pub fn new(message: impl Into<String>, options: &'a [T]) -> Result<Menu<'a, T>, ConfigError> {
        if options.is_empty() {
            return Err(ConfigError::EmptyMenu);
        }
        Ok(Menu {
            options,
            message: message.into(),
            indent: 0,
            allow_blank: false,
        })
    }

    pub fn with_indent(mut self, level: usize) -> Menu<'a, T> {
        self.indent = level;
        self
    }

    pub fn allow_blank(mut self, allow: bool) -> Menu<'a, T> {
        self.allow_blank = allow;
        self
    }

    fn block(&self) -> String {
        let width = self.options.len().to_string().len();
        let lines: Vec<String> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| format!("{:<width$}: {}", i + 1, option))
            .collect();
        format!("{}:\n\n{}\n\nChoice", self.message, lines.join("\n"))
    }

    /// The selected 1-based number.
    pub fn read_number<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Option<i64>, PromptError> {
        IntPrompt::new(self.block())
            .bounded(1, self.options.len() as i64)
            .with_indent(self.indent)
            .allow_blank(self.allow_blank)
            .read(prompter)
    }

    /// The selected zero-based index.
    pub fn read_index<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Option<usize>, PromptError> {
        Ok(self.read_number(prompter)?.map(|n| (n - 1) as usize))
    }

    /// The selected option itself.
    pub fn read_item<R: InputSource, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Option<&'a T>, PromptError> {
        Ok(self.read_index(prompter)?.map(|i| &self.options[i]))
    }
}
