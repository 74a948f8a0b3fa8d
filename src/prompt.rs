//! Interactive collection of a rename request.
//!
//! Invoked via `renamer --prompt`. Asks for the operation, the target
//! directory and the operation's text fields, one blocking question at a
//! time. Answers are validated with the same checks the argument
//! dispatcher uses; an invalid answer re-prompts with the message instead
//! of aborting the run.

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::{Operation, validate_dir};

const CHOICES: &[&str] = &[
    "Replace text in file names",
    "Append text to file names",
    "Renumber file names sequentially",
];

/// Run the question/answer exchange and return the collected request.
pub fn collect() -> Result<(PathBuf, Operation)> {
    let theme = ColorfulTheme::default();

    let choice = Select::with_theme(&theme)
        .with_prompt("What do you want to do?")
        .items(CHOICES)
        .default(0)
        .interact()?;

    let dir: String = Input::with_theme(&theme)
        .with_prompt("Directory to process")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.is_empty() {
                return Err("required, please enter a path".to_string());
            }
            validate_dir(Path::new(input)).map_err(|err| err.to_string())
        })
        .interact_text()?;

    let operation = match choice {
        0 => {
            let old: String = Input::with_theme(&theme)
                .with_prompt("Text to replace")
                .validate_with(|input: &String| -> Result<(), &str> {
                    if input.is_empty() {
                        Err("required, please enter a value")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?;
            let new: String = Input::with_theme(&theme)
                .with_prompt("Replacement text")
                .allow_empty(true)
                .interact_text()?;
            Operation::Replace { old, new }
        }
        1 => {
            // Unlike the `append` subcommand, both fields are offered here
            // and either or neither may be filled in.
            let after: String = Input::with_theme(&theme)
                .with_prompt("Text to add after the name (before the extension)")
                .allow_empty(true)
                .interact_text()?;
            let before: String = Input::with_theme(&theme)
                .with_prompt("Text to add in front of the name")
                .allow_empty(true)
                .interact_text()?;
            Operation::Append { before, after }
        }
        _ => Operation::Number,
    };

    Ok((PathBuf::from(dir), operation))
}
