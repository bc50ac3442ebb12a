use crate::report::{Report, Row};

pub const PROMPT_STATUS: &str = "Enter miles and press Enter to convert.";
pub const INVALID_STATUS: &str = "Please enter a valid, non-negative number.";

/// State of an interactive conversion session: the rows currently on display, a status line and
/// the message of the last rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    rows: Vec<Row>,
    status: String,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            status: PROMPT_STATUS.to_string(),
            error: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `text` and show the result. Rejected input leaves the rows of the previous
    /// conversion in place.
    pub fn submit(&mut self, text: &str) -> bool {
        match Report::from_input(text) {
            Ok(report) => {
                self.rows = report.rows();
                self.status = report.status();
                self.error = None;
                true
            }
            Err(err) => {
                tracing::debug!(%err, input = %text, "rejected input");
                self.status = INVALID_STATUS.to_string();
                self.error = Some(format!("Invalid input: {}", err));
                false
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
