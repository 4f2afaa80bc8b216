//! Loop controllers for prompt-driven flows.
//!
//! Two controllers drive repeated execution of caller-supplied code:
//!
//! - [`Collect`] runs a routine over and over and gathers its responses,
//!   deciding after each run whether to keep going — either by asking the
//!   user ([`ContinuePolicy::AskEachTime`]) or by treating a `None`
//!   response as the stop signal ([`ContinuePolicy::SentinelStop`]).
//! - [`UntilQuit`] repeats a side-effecting action, gated by a
//!   single-keystroke continue/quit [`TriggerPair`] instead of a yes/no
//!   question.
//!
//! Routines and actions receive the prompter, so they are free to prompt
//! for their own input inside the loop.

use crate::error::{ConfigError, PromptError};
use crate::prompt::Confirm;
use crate::terminal::{InputSource, Prompter};
use log::debug;
use std::io::Write;

/// How [`Collect`] decides whether to run another iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinuePolicy {
    /// Append every response, then ask the user yes/no.
    AskEachTime,
    /// Keep going automatically; a `None` response stops the loop and is
    /// not appended.
    SentinelStop,
}

/// Runs a routine repeatedly and collects its responses in order.
///
/// With `do_while` (the default) the routine runs once before any
/// continuation check; otherwise the user is first asked whether to start
/// at all. `counted` prints the 1-based iteration index on its own line
/// before each run.
pub struct Collect {
    pub do_while: bool,
    pub policy: ContinuePolicy,
    pub count: bool,
    pub indent: usize,
}

impl Collect {
    pub fn new() -> Collect {
        Collect {
            do_while: true,
            policy: ContinuePolicy::AskEachTime,
            count: false,
            indent: 0,
        }
    }

    /// Ask the user whether to start instead of running the first
    /// iteration unconditionally.
    pub fn ask_to_start(mut self) -> Collect {
        self.do_while = false;
        self
    }

    /// Stop on a `None` response instead of asking after each iteration.
    pub fn sentinel_stop(mut self) -> Collect {
        self.policy = ContinuePolicy::SentinelStop;
        self
    }

    /// Print the 1-based iteration index before each run.
    pub fn counted(mut self) -> Collect {
        self.count = true;
        self
    }

    pub fn with_indent(mut self, level: usize) -> Collect {
        self.indent = level;
        self
    }

    /// Run the loop. See [`Collect::run_with`] for the `between` variant.
    pub fn run<R, W, T, F>(
        &self,
        prompter: &mut Prompter<R, W>,
        routine: F,
    ) -> Result<Vec<T>, PromptError>
    where
        R: InputSource,
        W: Write,
        F: FnMut(&mut Prompter<R, W>) -> Result<Option<T>, PromptError>,
    {
        self.run_with(prompter, routine, |_| Ok(()))
    }

    /// Run the loop with a `between` hook.
    ///
    /// The hook runs after an affirmative continuation decision and before
    /// the next iteration — never after the final one.
    pub fn run_with<R, W, T, F, B>(
        &self,
        prompter: &mut Prompter<R, W>,
        mut routine: F,
        mut between: B,
    ) -> Result<Vec<T>, PromptError>
    where
        R: InputSource,
        W: Write,
        F: FnMut(&mut Prompter<R, W>) -> Result<Option<T>, PromptError>,
        B: FnMut(&mut Prompter<R, W>) -> Result<(), PromptError>,
    {
        let mut responses = Vec::new();
        let mut iteration = 0usize;

        let mut go = self.do_while
            || Confirm::new("Start")
                .with_indent(self.indent)
                .read(prompter)?
                .is_yes();

        while go {
            iteration += 1;
            if self.count {
                prompter.print(&iteration.to_string(), self.indent)?;
            }

            let response = routine(prompter)?;

            go = match self.policy {
                ContinuePolicy::AskEachTime => {
                    if let Some(response) = response {
                        responses.push(response);
                    }
                    Confirm::new("Continue")
                        .with_indent(self.indent)
                        .read(prompter)?
                        .is_yes()
                }
                ContinuePolicy::SentinelStop => match response {
                    Some(response) => {
                        responses.push(response);
                        true
                    }
                    None => false,
                },
            };

            if go {
                between(prompter)?;
            }
        }

        debug!("collect loop finished after {} iteration(s)", iteration);
        Ok(responses)
    }
}

impl Default for Collect {
    fn default() -> Collect {
        Collect::new()
    }
}

/// Trigger value meaning "just press Enter" (a blank line).
pub const ENTER: &str = "Enter";

const DEFAULT_QUIT: &str = "Q";

/// The continue/quit tokens of an [`UntilQuit`] loop.
///
/// The two triggers must differ (case-insensitively); equal triggers are a
/// configuration error caught at construction, before any console
/// interaction. Empty strings fall back to the defaults: continue on
/// [`ENTER`], quit on `Q`. Matching is case-insensitive.
#[derive(Debug, Clone)]
pub struct TriggerPair {
    cont: String,
    quit: String,
}

impl TriggerPair {
    pub fn new(cont: &str, quit: &str) -> Result<TriggerPair, ConfigError> {
        let cont = if cont.is_empty() { ENTER } else { cont }.to_string();
        let quit = if quit.is_empty() { DEFAULT_QUIT } else { quit }.to_string();
        if cont.to_uppercase() == quit.to_uppercase() {
            return Err(ConfigError::MatchingTriggers(cont));
        }
        Ok(TriggerPair { cont, quit })
    }

    pub fn continue_trigger(&self) -> &str {
        &self.cont
    }

    pub fn quit_trigger(&self) -> &str {
        &self.quit
    }

    fn matches(trigger: &str, choice: &str) -> bool {
        (choice.is_empty() && trigger.eq_ignore_ascii_case(ENTER))
            || trigger.to_uppercase() == choice
    }

    /// `choice` must already be trimmed and uppercased.
    fn matches_continue(&self, choice: &str) -> bool {
        TriggerPair::matches(&self.cont, choice)
    }

    fn matches_quit(&self, choice: &str) -> bool {
        TriggerPair::matches(&self.quit, choice)
    }
}

impl Default for TriggerPair {
    fn default() -> TriggerPair {
        TriggerPair {
            cont: ENTER.to_string(),
            quit: DEFAULT_QUIT.to_string(),
        }
    }
}

/// Repeats a side-effecting action until the quit trigger is entered.
///
/// Prompts with a message naming both triggers. Input matching the
/// continue trigger (or blank, when the continue trigger is [`ENTER`])
/// runs the action again; input matching the quit trigger ends the loop;
/// anything else re-prompts without a notice.
pub struct UntilQuit {
    pub triggers: TriggerPair,
    pub do_while: bool,
    pub continue_word: String,
    pub quit_word: String,
    pub indent: usize,
}

impl UntilQuit {
    pub fn new(triggers: TriggerPair) -> UntilQuit {
        UntilQuit {
            triggers,
            do_while: true,
            continue_word: "continue".to_string(),
            quit_word: "quit".to_string(),
            indent: 0,
        }
    }

    /// Prompt before the first run instead of running the action once
    /// unconditionally.
    pub fn prompt_first(mut self) -> UntilQuit {
        self.do_while = false;
        self
    }

    /// Replace the verbs in the trigger prompt.
    pub fn with_words(
        mut self,
        continue_word: impl Into<String>,
        quit_word: impl Into<String>,
    ) -> UntilQuit {
        self.continue_word = continue_word.into();
        self.quit_word = quit_word.into();
        self
    }

    pub fn with_indent(mut self, level: usize) -> UntilQuit {
        self.indent = level;
        self
    }

    pub fn run<R, W, F>(
        &self,
        prompter: &mut Prompter<R, W>,
        mut action: F,
    ) -> Result<(), PromptError>
    where
        R: InputSource,
        W: Write,
        F: FnMut(&mut Prompter<R, W>) -> Result<(), PromptError>,
    {
        if self.do_while {
            action(prompter)?;
        }

        let message = format!(
            "Hit {} to {} or {} to {}",
            self.triggers.continue_trigger(),
            self.continue_word,
            self.triggers.quit_trigger(),
            self.quit_word
        );

        loop {
            let choice = prompter.read(&message, self.indent)?.to_uppercase();
            if self.triggers.matches_continue(&choice) {
                action(prompter)?;
            } else if self.triggers.matches_quit(&choice) {
                debug!("quit trigger {:?} received", choice);
                return Ok(());
            }
            // anything else: prompt again, no notice
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::IntPrompt;
    use crate::terminal::ScriptedInput;

    fn scripted(lines: &[&str]) -> Prompter<ScriptedInput, Vec<u8>> {
        Prompter::new(ScriptedInput::new(lines.iter().copied()), Vec::new())
    }

    fn output(prompter: Prompter<ScriptedInput, Vec<u8>>) -> String {
        let (_, out) = prompter.into_parts();
        String::from_utf8(out).unwrap()
    }

    fn take_from<T: Copy>(values: &'static [T]) -> impl FnMut() -> Option<T> {
        let mut i = 0;
        move || {
            let value = values.get(i).copied();
            i += 1;
            value
        }
    }

    #[test]
    fn test_collect_ask_each_time_gathers_until_no() {
        let mut next = take_from(&[1, 2, 3]);
        let mut prompter = scripted(&["y", "y", "n"]);
        let responses = Collect::new()
            .run(&mut prompter, |_| Ok(next()))
            .unwrap();
        assert_eq!(responses, vec![1, 2, 3]);
        assert_eq!(output(prompter).matches("Continue? y/n: ").count(), 3);
    }

    #[test]
    fn test_collect_sentinel_stops_without_prompting() {
        let mut next = take_from(&[1, 2]);
        // empty script: any continuation prompt would error with Closed
        let mut prompter = scripted(&[]);
        let responses = Collect::new()
            .sentinel_stop()
            .run(&mut prompter, |_| Ok(next()))
            .unwrap();
        assert_eq!(responses, vec![1, 2]);
        assert!(!output(prompter).contains("Continue"));
    }

    #[test]
    fn test_collect_ask_to_start_declined_never_runs_routine() {
        let mut ran = false;
        let mut prompter = scripted(&["n"]);
        let responses: Vec<i32> = Collect::new()
            .ask_to_start()
            .run(&mut prompter, |_| {
                ran = true;
                Ok(Some(1))
            })
            .unwrap();
        assert!(responses.is_empty());
        assert!(!ran);
        assert_eq!(output(prompter), "Start? y/n: ");
    }

    #[test]
    fn test_collect_counted_prints_iteration_index() {
        let mut next = take_from(&[10, 20]);
        let mut prompter = scripted(&[]);
        Collect::new()
            .sentinel_stop()
            .counted()
            .run(&mut prompter, |_| Ok(next()))
            .unwrap();
        let printed = output(prompter);
        assert!(printed.contains("1\n"));
        assert!(printed.contains("2\n"));
        // the sentinel iteration is counted too
        assert!(printed.contains("3\n"));
    }

    #[test]
    fn test_collect_between_runs_only_between_iterations() {
        let mut next = take_from(&[1, 2, 3]);
        let mut between_calls = 0;
        let mut prompter = scripted(&["y", "y", "n"]);
        Collect::new()
            .run_with(
                &mut prompter,
                |_| Ok(next()),
                |_| {
                    between_calls += 1;
                    Ok(())
                },
            )
            .unwrap();
        assert_eq!(between_calls, 2);
    }

    #[test]
    fn test_collect_routine_can_prompt() {
        let mut prompter = scripted(&["4", "8", ""]);
        let responses = Collect::new()
            .sentinel_stop()
            .run(&mut prompter, |p| {
                IntPrompt::new("Value").allow_blank(true).read(p)
            })
            .unwrap();
        assert_eq!(responses, vec![4, 8]);
    }

    #[test]
    fn test_trigger_pair_equal_triggers_fail_fast() {
        assert!(matches!(
            TriggerPair::new("q", "Q"),
            Err(ConfigError::MatchingTriggers(_))
        ));
        // empty continue falls back to Enter, which collides here
        assert!(matches!(
            TriggerPair::new("", "enter"),
            Err(ConfigError::MatchingTriggers(_))
        ));
    }

    #[test]
    fn test_trigger_pair_defaults() {
        let triggers = TriggerPair::default();
        assert_eq!(triggers.continue_trigger(), "Enter");
        assert_eq!(triggers.quit_trigger(), "Q");
    }

    #[test]
    fn test_until_quit_runs_action_until_quit_trigger() {
        let mut runs = 0;
        let mut prompter = scripted(&["", "x", "Q"]);
        UntilQuit::new(TriggerPair::default())
            .run(&mut prompter, |_| {
                runs += 1;
                Ok(())
            })
            .unwrap();
        // once up front, once for the blank continue; "x" is ignored
        assert_eq!(runs, 2);
        let printed = output(prompter);
        assert_eq!(
            printed.matches("Hit Enter to continue or Q to quit: ").count(),
            3
        );
        assert!(!printed.contains("Invalid"));
    }

    #[test]
    fn test_until_quit_prompt_first_and_case_insensitive_quit() {
        let mut runs = 0;
        let mut prompter = scripted(&["q"]);
        UntilQuit::new(TriggerPair::default())
            .prompt_first()
            .run(&mut prompter, |_| {
                runs += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(runs, 0);
    }

    #[test]
    fn test_until_quit_custom_triggers_and_words() {
        let mut runs = 0;
        let triggers = TriggerPair::new("C", "X").unwrap();
        let mut prompter = scripted(&["c", "x"]);
        UntilQuit::new(triggers)
            .prompt_first()
            .with_words("scan again", "stop")
            .run(&mut prompter, |_| {
                runs += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(runs, 1);
        assert!(output(prompter).contains("Hit C to scan again or X to stop: "));
    }

    #[test]
    fn test_until_quit_blank_quits_when_quit_is_enter() {
        let mut runs = 0;
        let triggers = TriggerPair::new("C", "Enter").unwrap();
        let mut prompter = scripted(&[""]);
        UntilQuit::new(triggers)
            .prompt_first()
            .run(&mut prompter, |_| {
                runs += 1;
                Ok(())
            })
            .unwrap();
        assert_eq!(runs, 0);
    }
}
