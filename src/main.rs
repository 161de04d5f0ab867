use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::Local;
use clap::Parser;
use log::{error, info, warn};

use lecture_notes::config::{self, CourseConfig, Options, Section};
use lecture_notes::schedule::models::{SemesterCode, WeekdayPattern};
use lecture_notes::schedule::DEFAULT_WEEK_COUNT;
use lecture_notes::template::models::Substitution;

mod prompt;
mod utils;

use prompt::Prompter;
use utils::models::Prefix;

/// Environment variable holding the log filters
const LOG_ENV: &str = "LECTURE_NOTES_LOG";

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// Author of the notes file
    #[clap(short, long)]
    author: Option<String>,

    /// File name of the document to create, `.tex` is added if missing
    #[clap(short, long, value_name = "FILE NAME")]
    filename: Option<String>,

    /// Course code, with spaces, i.e. "EECS 3311"
    #[clap(short, long)]
    course_code: Option<String>,

    /// Weekdays of the lectures (MTWRF, R is Thursday)
    #[clap(short, long)]
    weekdays: Option<String>,

    /// Weekdays of the tutorials, if any
    #[clap(long)]
    tutorials: Option<String>,

    /// Weekdays of the labs, if any
    #[clap(long)]
    labs: Option<String>,

    /// Location of the course
    #[clap(short, long)]
    location: Option<String>,

    /// Course section, 1 character
    #[clap(short, long)]
    section: Option<String>,

    /// Professor teaching this section
    #[clap(short, long)]
    prof: Option<String>,

    /// Year and term, i.e. 2022F for Fall 2022 (W, F, SU, S1, S2)
    #[clap(short = 'y', long, value_name = "YEAR AND TERM")]
    semester: Option<String>,

    /// Number of credits of the course
    #[clap(short = 'n', long)]
    credits: Option<String>,

    /// Title of the course
    #[clap(short, long)]
    title: Option<String>,

    /// First Monday of classes (YYYY MM DD), default to the usual start of the term
    #[clap(long, value_name = "DATE")]
    start: Option<String>,

    /// Number of weeks in the term
    #[clap(long, default_value_t = DEFAULT_WEEK_COUNT)]
    weeks: u32,

    /// Institution written in the keywords of the document
    #[clap(long, default_value = config::DEFAULT_INSTITUTION)]
    institution: String,

    /// Template to fill, default to ~/git/templates/lecture-template.tex
    #[clap(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// How the placeholders of the template are replaced
    #[clap(long, value_enum, default_value_t = Substitution::Slots)]
    substitution: Substitution,

    /// Never ask anything, fail when something is missing
    #[clap(long)]
    no_input: bool,

    /// Print the document instead of writing the file
    #[clap(long)]
    stdout: bool,

    /// Show how the dates are computed
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    pretty_env_logger::formatted_builder()
        .parse_filters(&env::var(LOG_ENV).unwrap_or_else(|_| default_filter.to_owned()))
        .init();

    if let Err(e) = run(args) {
        error!("{e:?}");
        ::std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let template_path = match args.template {
        Some(path) => path,
        None => utils::default_template_path()
            .context("can't find the home directory, use --template")?,
    };
    let template = utils::read_template(&template_path)
        .with_context(|| format!("failed to read the template {}", template_path.display()))?;
    info!("template: {}", template_path.display());

    let prompter = Prompter::new(!args.no_input);

    let author = prompter.collect_text(args.author, "author", "Author of the notes:")?;
    let code = prompter.collect_text(args.course_code, "course code", "Course code (with spaces):")?;

    prompter.info("About to ask which weekdays for Lectures, Tutorials, Labs");
    let weekdays = prompter.collect(
        args.weekdays,
        "weekdays",
        "Input weekdays the lectures happen (MTWRF):",
        str::parse::<WeekdayPattern>,
        |w: &WeekdayPattern| w.to_string(),
    )?;
    let tutorials = optional_weekdays(&prompter, args.tutorials, args.no_input, "Tutorials")?;
    let labs = optional_weekdays(&prompter, args.labs, args.no_input, "Labs")?;

    let location = prompter.collect_text(args.location, "location", "Location of this course:")?;
    let filename = prompter.collect(
        args.filename,
        "file name",
        "File name (tex):",
        |s| config::non_blank("file name", s).map(|s| utils::with_extension(&s)),
        |s: &String| format!("'{s}'"),
    )?;
    let title = prompter.collect_text(args.title, "course title", "Course title:")?;
    let section = prompter.collect(
        args.section,
        "section",
        "Course Section (1 char):",
        str::parse::<Section>,
        |s: &Section| format!("Section {s}"),
    )?;
    let prof = prompter.collect_text(args.prof, "prof", "Professor teaching this section:")?;
    let semester = prompter.collect(
        args.semester,
        "semester",
        "Year and Semester (Ex: 2021F):",
        str::parse::<SemesterCode>,
        |s: &SemesterCode| s.to_string(),
    )?;
    let start = prompter.term_start(semester, args.start)?;
    let credits = prompter.collect(
        args.credits,
        "credits",
        "Course credit amount:",
        config::parse_credits,
        |n: &u32| format!("{n} credits"),
    )?;

    let course = CourseConfig {
        author,
        code,
        title,
        section,
        prof,
        location,
        semester,
        credits,
        weekdays,
        tutorials,
        labs,
    };
    let options = Options {
        filename,
        institution: args.institution,
        week_count: args.weeks,
        substitution: args.substitution,
    };

    let rendered = lecture_notes::generate(
        &course,
        &options,
        start,
        &template,
        Local::now().date_naive(),
    )?;

    if args.stdout {
        print!("{}", rendered.text());
        return Ok(());
    }

    let output = Path::new(&options.filename);
    if output.exists() {
        warn!("overwriting {}", output.display());
    }
    utils::write_output(output, &rendered.text())
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("{} {}", Prefix::Done.val(), output.display());

    Ok(())
}

/// Weekdays of tutorials or labs, an empty answer means the course has none
fn optional_weekdays(
    prompter: &Prompter,
    given: Option<String>,
    no_input: bool,
    kind: &'static str,
) -> anyhow::Result<Option<WeekdayPattern>> {
    if given.is_none() && no_input {
        return Ok(None);
    }

    prompter.collect(
        given,
        kind,
        &format!("Input weekdays of the {} (MTWRF, empty if none):", kind.to_lowercase()),
        |s| {
            if s.trim().is_empty() {
                Ok(None)
            } else {
                s.parse().map(Some)
            }
        },
        |w: &Option<WeekdayPattern>| match w {
            Some(w) => w.to_string(),
            None => format!("no {}", kind.to_lowercase()),
        },
    )
}
