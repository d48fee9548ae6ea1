//! Page targets: the URL to fetch and the file to write for each index.

use std::path::PathBuf;

use url::Url;

use crate::error::{Error, Result};
use crate::options::{Options, INDEX_PLACEHOLDER};

/// One page of the series, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    /// 1-based page index.
    pub index: u32,
    /// URL to request.
    pub url: Url,
    /// Bare output file name, e.g. `blog_post2.html`.
    pub file_name: String,
    /// `file_name` joined onto the output directory.
    pub output_path: PathBuf,
}

/// Substitute `index` into a template.
#[inline]
#[must_use]
pub fn fill_template(template: &str, index: u32) -> String {
    template.replace(INDEX_PLACEHOLDER, &index.to_string())
}

/// Build the URL for page `index`.
///
/// # Example
///
/// ```rust
/// use blog_pull::{pages, Options};
///
/// let url = pages::page_url(&Options::default(), 3)?;
/// assert_eq!(
///     url.as_str(),
///     "https://blog.cloudflare.com/how-to-execute-an-object-file-part-3/"
/// );
/// # Ok::<(), blog_pull::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn page_url(options: &Options, index: u32) -> Result<Url> {
    let raw = fill_template(&options.url_template, index);
    Url::parse(&raw).map_err(|source| Error::InvalidUrl { url: raw, source })
}

/// Output file name for page `index`.
#[must_use]
pub fn output_file_name(options: &Options, index: u32) -> String {
    fill_template(&options.file_template, index)
}

/// Resolve every page in `options`, in processing order.
///
/// Fails on the first template that does not yield a valid URL, before any
/// request is made.
#[allow(clippy::missing_errors_doc)]
pub fn targets(options: &Options) -> Result<Vec<PageTarget>> {
    options
        .page_indices()
        .map(|index| {
            let file_name = output_file_name(options, index);
            Ok(PageTarget {
                index,
                url: page_url(options, index)?,
                output_path: options.output_dir.join(&file_name),
                file_name,
            })
        })
        .collect()
}
