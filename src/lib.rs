pub mod config;
pub mod error;
pub mod schedule;
pub mod template;

use chrono::NaiveDate;
use log::{info, warn};

use crate::config::{CourseConfig, Options};
use crate::error::Result;
use crate::schedule::models::TermStart;
use crate::template::models::TemplateDocument;
use crate::template::Rendered;

/// Build the notes of a course from the template text.
///
/// `created` is the day written in the `[DATE]` placeholders.
pub fn generate(
    config: &CourseConfig,
    options: &Options,
    start: TermStart,
    template: &str,
    created: NaiveDate,
) -> Result<Rendered> {
    info!("computing {} weeks starting {start}", options.week_count);
    let schedule = schedule::compute_course_schedule(start, &config.sessions(), options.week_count)?;

    let document = TemplateDocument::parse(template);
    let values = template::values(config, options, created);
    let rendered = template::render(&document, &values, &schedule, options.substitution)?;

    for placeholder in &rendered.unused {
        warn!("template has no {}, value not used", placeholder.token());
    }

    Ok(rendered)
}
