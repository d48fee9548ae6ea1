//! Per-page outcomes and their console lines.

use std::fmt;
use std::path::PathBuf;

/// What happened to one page.
///
/// Fatal conditions are not outcomes; they surface as [`Error`](crate::Error)
/// and end the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The main content element was written to disk.
    Saved {
        /// Bare file name, as reported on the console.
        file_name: String,
        /// Full path written.
        path: PathBuf,
        /// Bytes written.
        bytes: usize,
    },

    /// Status 200, but no main content element in the page.
    ContentNotFound,

    /// Any status other than 200.
    HttpStatus(u16),
}

impl PageOutcome {
    /// Whether a file was written.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Saved { file_name, .. } => write!(f, "Blog post saved as {file_name}"),
            Self::ContentNotFound => f.write_str("Main content not found."),
            Self::HttpStatus(status) => {
                write!(f, "Failed to retrieve the page. Status code: {status}")
            }
        }
    }
}

/// An outcome tagged with the page it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub index: u32,
    pub url: String,
    pub outcome: PageOutcome,
}
