use chrono::{Datelike, Duration, NaiveDate, Weekday};
use log::debug;

use crate::error::InputValidationError;

pub mod models;

use models::{LectureRecord, SessionKind, TermStart, WeekdayLetter};

/// Dates are written the same way everywhere in the notes
pub const DATE_FORMAT: &str = "%Y %m %d";

/// Usual number of teaching weeks in a term
pub const DEFAULT_WEEK_COUNT: u32 = 12;

/// Longest term accepted, ten years of weeks
pub const MAX_WEEK_COUNT: u32 = 520;

/// Next `weekday` strictly after `date`, from 1 to 7 days later.
/// `None` past the last date the calendar can hold.
pub fn next_weekday(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(date.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        // Target day already happened this week
        days_ahead += 7;
    }

    date.checked_add_signed(Duration::days(days_ahead))
}

/// Dates of every session of one kind over the term
pub fn compute_schedule(
    start: TermStart,
    weekdays: &[WeekdayLetter],
    week_count: u32,
    kind: SessionKind,
) -> Result<Vec<LectureRecord>, InputValidationError> {
    if weekdays.is_empty() {
        return Err(InputValidationError::EmptyWeekdays);
    }
    if !(1..=MAX_WEEK_COUNT).contains(&week_count) {
        return Err(InputValidationError::WeekCount(week_count));
    }

    let weeks = usize::try_from(week_count).map_err(|_| InputValidationError::WeekCount(week_count))?;
    let capacity = weekdays
        .len()
        .checked_mul(weeks)
        .ok_or(InputValidationError::WeekCount(week_count))?;
    let mut records = Vec::with_capacity(capacity);

    // Sunday before the term, so a Monday class lands on the first day
    let mut cursor = start
        .date()
        .pred_opt()
        .ok_or(InputValidationError::DateOutOfRange)?;
    let mut index = 1;
    for week in 1..=week_count {
        for letter in weekdays {
            cursor = next_weekday(cursor, letter.weekday())
                .ok_or(InputValidationError::DateOutOfRange)?;
            debug!("{kind} {index}: week {week}, {}", cursor.format(DATE_FORMAT));

            records.push(LectureRecord {
                week,
                index,
                date: cursor,
                kind,
            });
            index += 1;
        }
    }

    Ok(records)
}

/// Weekday patterns of every kind of session a course has
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sessions<'a> {
    pub lectures: &'a [WeekdayLetter],
    pub tutorials: Option<&'a [WeekdayLetter]>,
    pub labs: Option<&'a [WeekdayLetter]>,
}

/// Every session of the course, ordered by week, date and then kind
pub fn compute_course_schedule(
    start: TermStart,
    sessions: &Sessions<'_>,
    week_count: u32,
) -> Result<Vec<LectureRecord>, InputValidationError> {
    let mut records = compute_schedule(start, sessions.lectures, week_count, SessionKind::Lecture)?;

    for (pattern, kind) in [
        (sessions.tutorials, SessionKind::Tutorial),
        (sessions.labs, SessionKind::Lab),
    ] {
        if let Some(pattern) = pattern {
            records.extend(compute_schedule(start, pattern, week_count, kind)?);
        }
    }

    // Stable, so each kind keeps its own numbering order
    records.sort_by_key(|record| (record.week, record.date, record.kind));

    Ok(records)
}
