use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;

use crate::error::InputValidationError;

/// Letters used by the registrar to name class days
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeekdayLetter {
    /// Monday
    M,
    /// Tuesday
    T,
    /// Wednesday
    W,
    /// Thursday, `R` so it doesn't collide with Tuesday
    R,
    /// Friday
    F,
}

impl WeekdayLetter {
    pub fn weekday(self) -> Weekday {
        match self {
            Self::M => Weekday::Mon,
            Self::T => Weekday::Tue,
            Self::W => Weekday::Wed,
            Self::R => Weekday::Thu,
            Self::F => Weekday::Fri,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::M => 'M',
            Self::T => 'T',
            Self::W => 'W',
            Self::R => 'R',
            Self::F => 'F',
        }
    }
}

impl TryFrom<char> for WeekdayLetter {
    type Error = InputValidationError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'M' => Ok(Self::M),
            'T' => Ok(Self::T),
            'W' => Ok(Self::W),
            'R' => Ok(Self::R),
            'F' => Ok(Self::F),
            _ => Err(InputValidationError::WeekdayLetter(value)),
        }
    }
}

/// Non-empty set of class days, in the order they were given
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekdayPattern(Vec<WeekdayLetter>);

impl FromStr for WeekdayPattern {
    type Err = InputValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut seen = HashSet::new();
        let mut letters = vec![];
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let letter = WeekdayLetter::try_from(c)?;
            // "MWFM" is the same as "MWF"
            if seen.insert(letter) {
                letters.push(letter);
            }
        }

        if letters.is_empty() {
            return Err(InputValidationError::EmptyWeekdays);
        }

        Ok(Self(letters))
    }
}

impl Deref for WeekdayPattern {
    type Target = [WeekdayLetter];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for WeekdayPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|l| write!(f, "{}", l.letter()))
    }
}

/// Academic term, the suffix of a semester code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Term {
    Winter,
    Fall,
    Summer,
    Summer1,
    Summer2,
}

impl Term {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Winter => "W",
            Self::Fall => "F",
            Self::Summer => "SU",
            Self::Summer1 => "S1",
            Self::Summer2 => "S2",
        }
    }

    /// Month and day from which the first Monday of classes is searched
    pub fn anchor(self) -> (u32, u32) {
        match self {
            Self::Winter => (1, 7),
            Self::Fall => (9, 7),
            // 2nd Monday of May
            Self::Summer | Self::Summer1 => (5, 7),
            Self::Summer2 => (6, 20),
        }
    }
}

impl FromStr for Term {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "W" => Ok(Self::Winter),
            "F" => Ok(Self::Fall),
            "SU" => Ok(Self::Summer),
            "S1" => Ok(Self::Summer1),
            "S2" => Ok(Self::Summer2),
            _ => Err(()),
        }
    }
}

static SEMESTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>[0-9]{4})(?P<term>W|F|SU|S1|S2)$").expect("semester regex is valid")
});

/// Year and term, i.e. `2022W`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SemesterCode {
    year: i32,
    term: Term,
}

impl SemesterCode {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn term(&self) -> Term {
        self.term
    }
}

impl FromStr for SemesterCode {
    type Err = InputValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || InputValidationError::SemesterCode(s.to_owned());

        let captures = SEMESTER_RE.captures(s).ok_or_else(invalid)?;
        let year = captures["year"].parse().map_err(|_| invalid())?;
        let term = captures["term"].parse().map_err(|()| invalid())?;

        Ok(Self { year, term })
    }
}

impl fmt::Display for SemesterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{}", self.year, self.term.tag())
    }
}

/// Monday of the first week of classes
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TermStart(NaiveDate);

impl TermStart {
    /// First Monday strictly after the term's anchor day
    pub fn from_semester(semester: SemesterCode) -> Self {
        let (month, day) = semester.term().anchor();
        // 4 digit years are far from both ends of the calendar
        let anchor = NaiveDate::from_ymd_opt(semester.year(), month, day)
            .unwrap_or(NaiveDate::MIN);

        Self(super::next_weekday(anchor, Weekday::Mon).unwrap_or(anchor))
    }

    /// Start given by the user, moved back to the Monday of its week.
    /// The boolean tells if the date had to be moved.
    pub fn from_override(date: NaiveDate) -> Result<(Self, bool), InputValidationError> {
        let offset = date.weekday().num_days_from_monday();
        let monday = date
            .checked_sub_signed(Duration::days(i64::from(offset)))
            .ok_or(InputValidationError::DateOutOfRange)?;

        Ok((Self(monday), offset != 0))
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for TermStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(super::DATE_FORMAT))
    }
}

/// What happens in a class slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SessionKind {
    Lecture,
    Tutorial,
    Lab,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lecture => "Lecture",
            Self::Tutorial => "Tutorial",
            Self::Lab => "Lab",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LectureRecord {
    /// Week of the term, starting at 1
    pub week: u32,
    /// Position among the sessions of the same kind, starting at 1, never reset
    pub index: u32,
    pub date: NaiveDate,
    pub kind: SessionKind,
}

impl LectureRecord {
    /// Three letters weekday, i.e. `Mon`
    pub fn weekday_label(&self) -> String {
        self.date.format("%a").to_string()
    }
}
