//! Configuration options for a scrape run.
//!
//! The `Options` struct names the pages to fetch and where their content goes.
//! Defaults reproduce the fixed four-part object file series.

use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Placeholder substituted with the page index in both templates.
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Default page URL template.
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://blog.cloudflare.com/how-to-execute-an-object-file-part-{index}/";

/// Default output file name template.
pub const DEFAULT_FILE_TEMPLATE: &str = "blog_post{index}.html";

/// Configuration options for a scrape run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the standard series.
///
/// # Example
///
/// ```rust
/// use blog_pull::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.page_indices().count(), 4);
///
/// // Customize specific fields
/// let options = Options {
///     output_dir: "downloads".into(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Page URL template containing `{index}`.
    ///
    /// Default: `https://blog.cloudflare.com/how-to-execute-an-object-file-part-{index}/`
    pub url_template: String,

    /// Output file name template containing `{index}`.
    ///
    /// Default: `blog_post{index}.html`
    pub file_template: String,

    /// First page index (inclusive).
    ///
    /// Default: `1`
    pub first_index: u32,

    /// Last page index (inclusive). A value below `first_index` selects no pages.
    ///
    /// Default: `4`
    pub last_index: u32,

    /// Directory the output files are written into.
    ///
    /// Default: `.` (the current working directory)
    pub output_dir: PathBuf,
}

impl Options {
    /// Page indices in processing order.
    #[must_use]
    pub fn page_indices(&self) -> RangeInclusive<u32> {
        self.first_index..=self.last_index
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            file_template: DEFAULT_FILE_TEMPLATE.to_string(),
            first_index: 1,
            last_index: 4,
            output_dir: PathBuf::from("."),
        }
    }
}
