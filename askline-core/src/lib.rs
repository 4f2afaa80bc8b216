//! # Askline
//!
//! A library for interactive terminal input: composable validation
//! filters, a retry-until-valid prompt engine, typed prompts, and loop
//! controllers for prompt-driven flows.
//!
//! ## Features
//! - Continuously prompts the user until the input passes every
//!   [`Validator`].
//! - Typed prompts for names, bounded strings, integers, floats, yes/no
//!   questions and numbered menus.
//! - Loop controllers: collect responses until the user stops
//!   ([`Collect`]), or repeat an action until a quit trigger
//!   ([`UntilQuit`]).
//! - Injectable input source, so flows can be scripted and tested without
//!   a console.
//!
//! ## Usage
//!
//! ### Example 1: Validated input
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
//! ### Example 2: A menu and a collect loop
//! ```rust,no_run
//! use askline_core::{Collect, IntPrompt, Menu, Prompter};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut prompter = Prompter::console();
//!
//!     let colors = ["red", "green", "blue"];
//!     let picked = Menu::new("Favourite color", &colors)?.read_item(&mut prompter)?;
//!     println!("Picked: {}", picked.expect("menu without blanks always picks"));
//!
//!     // collect numbers until the user enters a blank line
//!     let numbers = Collect::new().sentinel_stop().run(&mut prompter, |p| {
//!         IntPrompt::new("Value (blank to stop)").allow_blank(true).read(p)
//!     })?;
//!     println!("Collected {:?}", numbers);
//!     Ok(())
//! }
//! ```

pub mod error;
pub use error::{ConfigError, PromptError};

pub mod flow;
pub use flow::{Collect, ContinuePolicy, TriggerPair, UntilQuit};

pub mod format;

pub mod prompt;
pub use prompt::{
    Confirm, FloatPrompt, IntPrompt, Menu, NamePrompt, PromptSpec, TextPrompt, TriState,
};

pub mod terminal;
pub use terminal::{InputSource, Prompter, ScriptedInput, StdinInput, Tokens};

pub mod validate;
pub use validate::Validator;
