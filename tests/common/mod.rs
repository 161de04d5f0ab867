use chrono::NaiveDate;

use lecture_notes::config::{CourseConfig, Options};
use lecture_notes::schedule::models::TermStart;

/// Template shipped with the crate
pub const TEMPLATE: &str = include_str!("../../templates/lecture-template.tex");

#[must_use]
pub fn course() -> CourseConfig {
    CourseConfig {
        author: "A. Smith".to_owned(),
        code: "EECS 3311".to_owned(),
        title: "Software Design".to_owned(),
        section: "A".parse().expect("section should be valid"),
        prof: "Andrew Skelton".to_owned(),
        location: "VC 105".to_owned(),
        semester: "2022W".parse().expect("semester should be valid"),
        credits: 3,
        weekdays: "MWF".parse().expect("weekdays should be valid"),
        tutorials: None,
        labs: None,
    }
}

#[must_use]
#[allow(dead_code)]
pub fn options() -> Options {
    Options::new("EECS3311.tex")
}

#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("date should exist")
}

#[must_use]
#[allow(dead_code)]
pub fn created() -> NaiveDate {
    date(2021, 12, 11)
}

#[must_use]
pub fn winter_start() -> TermStart {
    TermStart::from_semester(course().semester)
}

#[allow(dead_code)]
pub fn debug_setup() {
    let _ = pretty_env_logger::formatted_builder()
        .parse_filters("trace")
        .is_test(true)
        .try_init();
}
