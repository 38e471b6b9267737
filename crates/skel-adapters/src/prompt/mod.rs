//! Prompt adapters for the overwrite confirmation.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;

use skel_core::{
    application::{ApplicationError, ports::Prompt},
    error::SkelResult,
};

/// The only answer accepted as affirmative.
///
/// Deliberately case- and content-sensitive: `y`, `yes`, and an empty line
/// all decline. Anything other than a literal `Y` means "no".
const AFFIRMATIVE: &str = "Y";

/// Interactive prompt reading one line from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinPrompt;

impl StdinPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for StdinPrompt {
    fn confirm_overwrite(&self, destination: &Path) -> SkelResult<bool> {
        print!(
            "'{}' already exists. Do you want to create your project here? (Y/n): ",
            destination.display()
        );
        io::stdout().flush().map_err(|e| prompt_failed(e))?;

        let mut answer = String::new();
        io::stdin()
            .read_line(&mut answer)
            .map_err(|e| prompt_failed(e))?;

        let affirmative = answer.trim_end_matches(['\r', '\n']) == AFFIRMATIVE;
        debug!(affirmative, "overwrite confirmation answered");
        Ok(affirmative)
    }
}

fn prompt_failed(e: io::Error) -> skel_core::error::SkelError {
    ApplicationError::PromptFailed {
        reason: e.to_string(),
    }
    .into()
}

/// Prompt that always confirms, for `--yes` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl AutoConfirm {
    pub fn new() -> Self {
        Self
    }
}

impl Prompt for AutoConfirm {
    fn confirm_overwrite(&self, _destination: &Path) -> SkelResult<bool> {
        Ok(true)
    }
}

/// Prompt fed from a fixed list of answers, for tests.
///
/// Answers are consumed front to back; running out of answers is an error
/// so tests notice unexpected extra prompts.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    /// Queue up raw answers exactly as a user would have typed them.
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm_overwrite(&self, _destination: &Path) -> SkelResult<bool> {
        let mut answers = self.answers.lock().map_err(|_| {
            skel_core::error::SkelError::Internal {
                message: "scripted prompt lock poisoned".into(),
            }
        })?;
        if answers.is_empty() {
            return Err(ApplicationError::PromptFailed {
                reason: "no scripted answer left".into(),
            }
            .into());
        }
        Ok(answers.remove(0) == AFFIRMATIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_capital_y_is_affirmative() {
        let prompt = ScriptedPrompt::with_answers(["Y", "y", "yes", "", "N"]);
        let dest = Path::new("/x");
        assert!(prompt.confirm_overwrite(dest).unwrap());
        assert!(!prompt.confirm_overwrite(dest).unwrap());
        assert!(!prompt.confirm_overwrite(dest).unwrap());
        assert!(!prompt.confirm_overwrite(dest).unwrap());
        assert!(!prompt.confirm_overwrite(dest).unwrap());
    }

    #[test]
    fn exhausted_script_is_an_error() {
        let prompt = ScriptedPrompt::with_answers(Vec::<String>::new());
        assert!(prompt.confirm_overwrite(Path::new("/x")).is_err());
    }

    #[test]
    fn auto_confirm_always_says_yes() {
        assert!(AutoConfirm::new().confirm_overwrite(Path::new("/x")).unwrap());
    }
}
