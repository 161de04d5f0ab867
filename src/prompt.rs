use chrono::NaiveDate;
use dialoguer::{Confirm, Input};
use log::{info, warn};

use lecture_notes::config;
use lecture_notes::error::InputValidationError;
use lecture_notes::schedule::models::{SemesterCode, TermStart};

use crate::utils::models::Prefix;

/// Asks the user for whatever the command line didn't give
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    pub fn new(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Take `given` if valid, else keep asking until the user confirms a valid answer.
    /// `confirm` formats the parsed value for the confirmation question.
    pub fn collect<T>(
        &self,
        given: Option<String>,
        field: &'static str,
        question: &str,
        validate: impl Fn(&str) -> Result<T, InputValidationError>,
        confirm: impl Fn(&T) -> String,
    ) -> anyhow::Result<T> {
        if let Some(given) = given {
            match validate(&given) {
                Ok(value) => return Ok(value),
                Err(e) if self.interactive => println!("{} {e}", Prefix::Error.val()),
                Err(e) => return Err(e.into()),
            }
        }

        if !self.interactive {
            return Err(InputValidationError::Missing(field).into());
        }

        loop {
            let answer: String = Input::new()
                .with_prompt(format!("{} {question}", Prefix::Question.val()))
                .allow_empty(true)
                .interact_text()?;

            match validate(&answer) {
                Ok(value) => {
                    if yes_or_no(&format!("Is this correct - {}?", confirm(&value)))? {
                        return Ok(value);
                    }
                }
                Err(e) => println!("{} {e}", Prefix::Error.val()),
            }
        }
    }

    /// Like [`Prompter::collect`], for text that only has to be non blank
    pub fn collect_text(
        &self,
        given: Option<String>,
        field: &'static str,
        question: &str,
    ) -> anyhow::Result<String> {
        self.collect(
            given,
            field,
            question,
            |s| config::non_blank(field, s),
            |s: &String| format!("'{s}'"),
        )
    }

    /// First Monday of classes, computed from the semester unless the user knows better
    pub fn term_start(
        &self,
        semester: SemesterCode,
        given: Option<String>,
    ) -> anyhow::Result<TermStart> {
        let ask_date = |given: Option<String>| {
            self.collect(
                given,
                "start date",
                "Input the date in the form of YYYY MM DD:",
                config::parse_date,
                |d: &NaiveDate| d.format("%a %b %d, %Y").to_string(),
            )
        };

        let date = if given.is_some() {
            ask_date(given)?
        } else {
            let computed = TermStart::from_semester(semester);
            if !self.interactive || yes_or_no(&format!("Is the start of {semester} {computed}?"))? {
                info!("term {semester} starts {computed}");
                return Ok(computed);
            }

            ask_date(None)?
        };

        let (start, moved) = TermStart::from_override(date)?;
        if moved {
            warn!("{date} is not a Monday, using the Monday of that week: {start}");
        }

        Ok(start)
    }

    /// Tell the user something, only when they are there to read it
    pub fn info(&self, message: &str) {
        if self.interactive {
            println!("{} {message}", Prefix::Info.val());
        }
    }
}

fn yes_or_no(question: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(format!("{} {question}", Prefix::Question.val()))
        .default(true)
        .interact()?)
}
