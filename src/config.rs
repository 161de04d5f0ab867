use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::InputValidationError;
use crate::schedule::models::{SemesterCode, WeekdayPattern};
use crate::schedule::{Sessions, DEFAULT_WEEK_COUNT};
use crate::template::models::Substitution;

/// Institution appended to the document keywords
pub const DEFAULT_INSTITUTION: &str = "York University";

/// Single character section, i.e. `A`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section(char);

impl FromStr for Section {
    type Err = InputValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(InputValidationError::Section(s.to_owned())),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a credit count
pub fn parse_credits(s: &str) -> Result<u32, InputValidationError> {
    s.trim()
        .parse()
        .map_err(|_| InputValidationError::Credits(s.to_owned()))
}

/// Parse a date written `YYYY MM DD` (or `YYYY-MM-DD`)
pub fn parse_date(s: &str) -> Result<NaiveDate, InputValidationError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y %m %d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| InputValidationError::Date(s.to_owned()))
}

/// Trimmed text, rejected when empty
pub fn non_blank(field: &'static str, s: &str) -> Result<String, InputValidationError> {
    match s.trim() {
        "" => Err(InputValidationError::Blank(field)),
        s => Ok(s.to_owned()),
    }
}

/// Everything known about the course
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseConfig {
    pub author: String,
    /// Course code with spaces, i.e. `EECS 3311`
    pub code: String,
    pub title: String,
    pub section: Section,
    /// Full name of the professor
    pub prof: String,
    pub location: String,
    pub semester: SemesterCode,
    pub credits: u32,
    /// Lecture days
    pub weekdays: WeekdayPattern,
    pub tutorials: Option<WeekdayPattern>,
    pub labs: Option<WeekdayPattern>,
}

impl CourseConfig {
    /// First name of the professor, how they are referred to within the notes
    pub fn prof_first_name(&self) -> &str {
        self.prof.split_whitespace().next().unwrap_or_default()
    }

    pub fn sessions(&self) -> Sessions<'_> {
        Sessions {
            lectures: &self.weekdays,
            tutorials: self.tutorials.as_deref(),
            labs: self.labs.as_deref(),
        }
    }
}

/// Knobs that don't describe the course itself
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Name of the output file, with its extension
    pub filename: String,
    pub institution: String,
    pub week_count: u32,
    pub substitution: Substitution,
}

impl Options {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            institution: DEFAULT_INSTITUTION.to_owned(),
            week_count: DEFAULT_WEEK_COUNT,
            substitution: Substitution::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_is_one_char() {
        assert_eq!("A".parse::<Section>(), Ok(Section('A')));
        assert_eq!(" M ".parse::<Section>(), Ok(Section('M')));
        assert_eq!(
            "AB".parse::<Section>(),
            Err(InputValidationError::Section("AB".to_owned()))
        );
        assert!("".parse::<Section>().is_err());
    }

    #[test]
    fn credits_are_numeric() {
        assert_eq!(parse_credits("3"), Ok(3));
        assert_eq!(
            parse_credits("three"),
            Err(InputValidationError::Credits("three".to_owned()))
        );
        assert!(parse_credits("-1").is_err());
    }

    #[test]
    fn dates() {
        let expected = NaiveDate::from_ymd_opt(2022, 1, 10);
        assert_eq!(parse_date("2022 01 10").ok(), expected);
        assert_eq!(parse_date("2022-01-10").ok(), expected);
        assert_eq!(
            parse_date("10/01/2022"),
            Err(InputValidationError::Date("10/01/2022".to_owned()))
        );
    }

    #[test]
    fn blank_is_rejected() {
        assert_eq!(non_blank("prof", "  "), Err(InputValidationError::Blank("prof")));
        assert_eq!(non_blank("prof", " Andrew "), Ok("Andrew".to_owned()));
    }

    #[test]
    fn weekday_patterns() {
        let pattern: WeekdayPattern = "f w m".parse().unwrap();
        assert_eq!(pattern.to_string(), "FWM");
        assert_eq!("FWMF".parse::<WeekdayPattern>(), Ok(pattern));
        assert_ne!(
            "MWF".parse::<WeekdayPattern>(),
            "FWM".parse::<WeekdayPattern>()
        );
        assert_eq!(
            "MX".parse::<WeekdayPattern>(),
            Err(InputValidationError::WeekdayLetter('X'))
        );
        assert_eq!(
            "Th".parse::<WeekdayPattern>(),
            Err(InputValidationError::WeekdayLetter('h'))
        );
        assert_eq!(
            "".parse::<WeekdayPattern>(),
            Err(InputValidationError::EmptyWeekdays)
        );
    }

    #[test]
    fn semester_codes() {
        let code: SemesterCode = "2022SU".parse().unwrap();
        assert_eq!(code.year(), 2022);
        assert_eq!(code.to_string(), "2022SU");

        for bad in ["22W", "2022", "2022X", "2022w", "2022WF"] {
            assert_eq!(
                bad.parse::<SemesterCode>(),
                Err(InputValidationError::SemesterCode(bad.to_owned()))
            );
        }
    }
}
