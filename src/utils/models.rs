use dialoguer::console::style;

/// Tags written in front of the messages shown to the user
pub enum Prefix {
    /// Question asked
    Question,
    /// Bad answer
    Error,
    /// File written
    Done,
    /// Anything else
    Info,
}

impl Prefix {
    /// Value of the element
    pub fn val(&self) -> String {
        let tag = match *self {
            Self::Question => style("Q").magenta(),
            Self::Error => style("ERROR").red(),
            Self::Done => style("DONE").green(),
            Self::Info => style("INFO").cyan(),
        };

        format!("[{tag}]")
    }
}
