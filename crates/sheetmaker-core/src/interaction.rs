//! Interaction adapter seam between the session and the terminal
//!
//! The session never reads stdin or writes stdout itself. Everything goes
//! through `InteractionAdapter`, so tests can feed scripted answers and the
//! binary can plug in a real terminal.

use thiserror::Error;

/// Errors an interaction adapter can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    /// User pressed Ctrl+C
    #[error("operation cancelled by user")]
    Cancelled,

    /// Input stream reached end of file
    #[error("input closed")]
    InputClosed,

    /// Underlying IO failure
    #[error("io error: {0}")]
    Io(String),
}

pub type InteractionResult<T> = Result<T, InteractionError>;

/// Handle for an in-flight progress indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressHandle {
    id: u64,
    message: String,
}

impl ProgressHandle {
    pub fn new(id: u64, message: &str) -> Self {
        Self {
            id,
            message: message.to_string(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Presentation and input primitives used by the session
pub trait InteractionAdapter {
    /// Read one line of free text; an empty line is a valid answer
    fn ask_text(&self, prompt: &str, default: Option<&str>) -> InteractionResult<String>;

    /// Clear the screen and redraw the application title
    fn clear_and_show_title(&self);

    /// Show a numbered menu, one item per line
    fn show_menu(&self, items: &[String]) {
        for item in items {
            self.print_info(item);
        }
    }

    fn start_progress(&self, message: &str) -> ProgressHandle;

    fn end_progress(&self, handle: ProgressHandle, success: bool);

    fn print_info(&self, message: &str);

    fn print_warning(&self, message: &str);

    fn print_error(&self, message: &str);

    fn print_success(&self, message: &str);

    fn print_header(&self, message: &str) {
        self.print_info(message);
    }
}

/// Default answers recognized as "yes"
pub const DEFAULT_AFFIRMATIVES: &[&str] = &["y", "yes", "s", "sim"];

/// Set of answers recognized as "yes"; anything else means "no"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affirmatives {
    words: Vec<String>,
}

impl Affirmatives {
    /// Build from a synonym list; matching is trimmed and case-insensitive
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn is_affirmative(&self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        self.words.iter().any(|w| *w == answer)
    }
}

impl Default for Affirmatives {
    fn default() -> Self {
        Self::new(DEFAULT_AFFIRMATIVES)
    }
}

/// Ask a yes/no question; only a recognized affirmative answer is "yes"
pub fn ask_yes_no(
    adapter: &dyn InteractionAdapter,
    affirmatives: &Affirmatives,
    prompt: &str,
) -> InteractionResult<bool> {
    let answer = adapter.ask_text(&format!("{} (Y/n)", prompt), None)?;
    Ok(affirmatives.is_affirmative(&answer))
}
