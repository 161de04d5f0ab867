use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use regex::Regex;

/// Values known by the template, each written as `[NAME]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    Filename,
    Author,
    /// Day the notes were generated
    Date,
    /// Same as [`Placeholder::Date`], used in the course info block
    CreatedDate,
    Description,
    Subject,
    Keywords,
    Credits,
    Code,
    Title,
    /// Full name of the professor
    Prof,
    /// Informal name of the professor
    ProfFirstName,
    Semester,
    Schedule,
    Section,
    Location,
}

impl Placeholder {
    pub const ALL: [Self; 16] = [
        Self::Filename,
        Self::Author,
        Self::Date,
        Self::CreatedDate,
        Self::Description,
        Self::Subject,
        Self::Keywords,
        Self::Credits,
        Self::Code,
        Self::Title,
        Self::Prof,
        Self::ProfFirstName,
        Self::Semester,
        Self::Schedule,
        Self::Section,
        Self::Location,
    ];

    /// Name between the brackets
    pub fn name(self) -> &'static str {
        match self {
            Self::Filename => "FILENAME",
            Self::Author => "AUTHOR",
            Self::Date => "DATE",
            Self::CreatedDate => "COURSE-CREATED-DATE",
            Self::Description => "DESC",
            Self::Subject => "SUBJ",
            Self::Keywords => "KEYWORDS",
            Self::Credits => "COURSE-CREDITS",
            Self::Code => "COURSE-CODE",
            Self::Title => "COURSE-TITLE",
            Self::Prof => "COURSE-PROF",
            Self::ProfFirstName => "PROF",
            Self::Semester => "COURSE-SEMESTER",
            Self::Schedule => "COURSE-SCHEDULE",
            Self::Section => "COURSE-SECTION",
            Self::Location => "COURSE-LOCATION",
        }
    }

    /// The whole token as it appears in the template
    pub fn token(self) -> String {
        format!("[{}]", self.name())
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

pub type Values = HashMap<Placeholder, String>;

/// How the tokens of a template are replaced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Substitution {
    /// Each line split once into text and slots, a value is never read again
    #[default]
    Slots,
    /// Each token replaced in turn over the raw line, in [`Placeholder::ALL`] order.
    /// A value holding a token can be replaced again by a later placeholder.
    Replace,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Placeholder),
}

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?P<name>[A-Z-]+)\]").expect("token regex is valid"));

/// Template split once into literal text and named slots
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDocument {
    lines: Vec<Vec<Segment>>,
    raw: Vec<String>,
}

impl TemplateDocument {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(parse_line).collect(),
            raw: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Every placeholder used at least once
    pub fn placeholders(&self) -> BTreeSet<Placeholder> {
        self.lines
            .iter()
            .flatten()
            .filter_map(|segment| match segment {
                Segment::Slot(p) => Some(*p),
                Segment::Text(_) => None,
            })
            .collect()
    }

    /// Indices of the lines whose literal text contains `needle`
    pub fn find_lines(&self, needle: &str) -> Vec<usize> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| {
                line.iter()
                    .any(|segment| matches!(segment, Segment::Text(text) if text.contains(needle)))
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Fill every slot from `values`.
    /// Slots without a value are written back as their token.
    pub fn substitute(&self, values: &Values) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                line.iter()
                    .fold(String::new(), |mut out, segment| {
                        match segment {
                            Segment::Text(text) => out.push_str(text),
                            Segment::Slot(p) => match values.get(p) {
                                Some(value) => out.push_str(value),
                                None => out.push_str(&p.token()),
                            },
                        }
                        out
                    })
            })
            .collect()
    }

    /// Replace every `[NAME]` found in the raw lines, one placeholder after the other.
    /// Tokens without a value stay as they are.
    pub fn replace(&self, values: &Values) -> Vec<String> {
        self.raw
            .iter()
            .map(|line| {
                Placeholder::ALL.into_iter().fold(line.clone(), |line, p| {
                    match values.get(&p) {
                        Some(value) => line.replace(&p.token(), value),
                        None => line,
                    }
                })
            })
            .collect()
    }

    /// Fill the template with the chosen strategy
    pub fn fill(&self, values: &Values, substitution: Substitution) -> Vec<String> {
        match substitution {
            Substitution::Slots => self.substitute(values),
            Substitution::Replace => self.replace(values),
        }
    }
}

fn parse_line(line: &str) -> Vec<Segment> {
    let mut segments = vec![];
    let mut last = 0;

    for captures in TOKEN_RE.captures_iter(line) {
        // Unknown bracketed text stays as it is
        let (Some(token), Some(placeholder)) =
            (captures.get(0), Placeholder::from_name(&captures["name"]))
        else {
            continue;
        };

        if token.start() > last {
            segments.push(Segment::Text(line[last..token.start()].to_owned()));
        }
        segments.push(Segment::Slot(placeholder));
        last = token.end();
    }

    if last < line.len() || segments.is_empty() {
        segments.push(Segment::Text(line[last..].to_owned()));
    }

    segments
}
