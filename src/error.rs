use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Malformed user input, recoverable by asking again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    #[error("semester code \"{0}\" should be a 4 digit year followed by one of W, F, SU, S1, S2 (i.e. 2022W)")]
    SemesterCode(String),
    #[error("weekday pattern is empty, expected some of M, T, W, R, F")]
    EmptyWeekdays,
    #[error("unknown weekday letter '{0}', expected one of M, T, W, R, F")]
    WeekdayLetter(char),
    #[error("course section \"{0}\" should be exactly 1 character")]
    Section(String),
    #[error("credit count \"{0}\" is not a non-negative number")]
    Credits(String),
    #[error("week count {0} should be between 1 and {max}", max = crate::schedule::MAX_WEEK_COUNT)]
    WeekCount(u32),
    #[error("date is past the range of the calendar")]
    DateOutOfRange,
    #[error("\"{0}\" is not a date of the form YYYY MM DD")]
    Date(String),
    #[error("{0} cannot be blank")]
    Blank(&'static str),
    #[error("missing {0} (no interactive input allowed)")]
    Missing(&'static str),
}

/// The template lacks something the renderer cannot do without
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateStructureError {
    #[error("marker line \"{0}\" not found in template")]
    MissingMarker(&'static str),
    #[error("marker line \"{marker}\" found {count} times in template, expected once")]
    DuplicateMarker { marker: &'static str, count: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputValidationError),
    #[error(transparent)]
    Template(#[from] TemplateStructureError),
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
