use chrono::NaiveDate;
use log::{debug, info};

use crate::config::{CourseConfig, Options};
use crate::error::TemplateStructureError;
use crate::schedule::models::LectureRecord;
use crate::schedule::DATE_FORMAT;

pub mod models;

use models::{Placeholder, Substitution, TemplateDocument, Values};

/// Line of the template where the weeks are inserted
pub const MARKER: &str = "% TODO: Lecture notes here";

/// Document ready to be written, and what the template never asked for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub lines: Vec<String>,
    /// Placeholders absent from the template, so never filled
    pub unused: Vec<Placeholder>,
}

impl Rendered {
    /// Whole document, newline terminated
    pub fn text(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Value of every placeholder for this course
pub fn values(config: &CourseConfig, options: &Options, created: NaiveDate) -> Values {
    let created = created.format(DATE_FORMAT).to_string();

    Values::from([
        (Placeholder::Filename, options.filename.clone()),
        (Placeholder::Author, config.author.clone()),
        (Placeholder::Date, created.clone()),
        (Placeholder::CreatedDate, created),
        (
            Placeholder::Description,
            format!("Course notes for {}", config.code),
        ),
        (
            Placeholder::Subject,
            format!("Lecture notes for {} in {}", config.code, config.semester),
        ),
        (
            Placeholder::Keywords,
            format!("{}, {}", config.code, options.institution),
        ),
        (Placeholder::Credits, config.credits.to_string()),
        (Placeholder::Code, config.code.clone()),
        (Placeholder::Title, config.title.clone()),
        (Placeholder::Prof, config.prof.clone()),
        (
            Placeholder::ProfFirstName,
            config.prof_first_name().to_owned(),
        ),
        (Placeholder::Semester, config.semester.to_string()),
        (Placeholder::Schedule, config.weekdays.to_string()),
        (Placeholder::Section, config.section.to_string()),
        (Placeholder::Location, config.location.clone()),
    ])
}

/// One `section` per week, one `subsection` per session
pub fn weeks(schedule: &[LectureRecord]) -> Vec<String> {
    let mut lines = vec![];
    let mut current_week = None;

    for record in schedule {
        if current_week != Some(record.week) {
            current_week = Some(record.week);
            lines.push(String::new());
            lines.push(format!("\\section{{Week {}}}", record.week));
        }

        lines.push(format!(
            "\\subsection{{{} {}: {} ({})}}",
            record.kind,
            record.index,
            record.date.format(DATE_FORMAT),
            record.weekday_label()
        ));
        lines.push("\\begin{itemize*}".to_owned());
        lines.push("    \\item ".to_owned());
        lines.push("\\end{itemize*}".to_owned());
        lines.push(String::new());
    }

    lines
}

/// Fill the template and insert the weeks right before the marker line
pub fn render(
    template: &TemplateDocument,
    values: &Values,
    schedule: &[LectureRecord],
    substitution: Substitution,
) -> Result<Rendered, TemplateStructureError> {
    let found = template.find_lines(MARKER);
    let insert_at = match found[..] {
        [] => return Err(TemplateStructureError::MissingMarker(MARKER)),
        [line] => line,
        _ => {
            return Err(TemplateStructureError::DuplicateMarker {
                marker: MARKER,
                count: found.len(),
            })
        }
    };
    debug!("inserting weeks at line {}", insert_at + 1);

    let used = template.placeholders();
    let unused = Placeholder::ALL
        .into_iter()
        .filter(|p| !used.contains(p))
        .collect();

    let mut lines = template.fill(values, substitution);
    let block = weeks(schedule);
    info!(
        "generated {} weeks, {} sessions",
        schedule.last().map_or(0, |record| record.week),
        schedule.len()
    );
    lines.splice(insert_at..insert_at, block);

    Ok(Rendered { lines, unused })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::models::SessionKind;

    fn record(week: u32, index: u32, d: u32, kind: SessionKind) -> LectureRecord {
        LectureRecord {
            week,
            index,
            date: NaiveDate::from_ymd_opt(2022, 1, d).unwrap(),
            kind,
        }
    }

    #[test]
    fn weeks_block_layout() {
        let lines = weeks(&[
            record(1, 1, 10, SessionKind::Lecture),
            record(1, 1, 13, SessionKind::Lab),
            record(2, 2, 17, SessionKind::Lecture),
        ]);

        assert_eq!(
            lines,
            vec![
                "",
                "\\section{Week 1}",
                "\\subsection{Lecture 1: 2022 01 10 (Mon)}",
                "\\begin{itemize*}",
                "    \\item ",
                "\\end{itemize*}",
                "",
                "\\subsection{Lab 1: 2022 01 13 (Thu)}",
                "\\begin{itemize*}",
                "    \\item ",
                "\\end{itemize*}",
                "",
                "",
                "\\section{Week 2}",
                "\\subsection{Lecture 2: 2022 01 17 (Mon)}",
                "\\begin{itemize*}",
                "    \\item ",
                "\\end{itemize*}",
                "",
            ]
        );
    }

    #[test]
    fn block_goes_before_marker() {
        let template = TemplateDocument::parse("head [DATE]\n% TODO: Lecture notes here\n\\end{document}\n");
        let values = Values::from([(Placeholder::Date, "2022 01 01".to_owned())]);

        let rendered = render(
            &template,
            &values,
            &[record(1, 1, 10, SessionKind::Lecture)],
            Substitution::Slots,
        )
        .unwrap();

        assert_eq!(rendered.lines[0], "head 2022 01 01");
        assert_eq!(rendered.lines[2], "\\section{Week 1}");
        assert_eq!(
            &rendered.lines[rendered.lines.len() - 2..],
            ["% TODO: Lecture notes here", "\\end{document}"]
        );
        assert!(!rendered.unused.contains(&Placeholder::Date));
        assert!(rendered.unused.contains(&Placeholder::Author));
    }

    #[test]
    fn marker_is_required() {
        let template = TemplateDocument::parse("\\begin{document}\n\\end{document}");
        assert_eq!(
            render(&template, &Values::new(), &[], Substitution::Replace),
            Err(TemplateStructureError::MissingMarker(MARKER))
        );
    }

    #[test]
    fn marker_must_be_unique() {
        let template = TemplateDocument::parse(&format!("{MARKER}\n{MARKER}\n"));
        assert_eq!(
            render(&template, &Values::new(), &[], Substitution::Replace),
            Err(TemplateStructureError::DuplicateMarker {
                marker: MARKER,
                count: 2
            })
        );
    }
}
