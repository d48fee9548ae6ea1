//! The fetch-and-extract loop.
//!
//! Pages are processed strictly in index order, one request at a time. A
//! non-200 status or a page without main content is reported and skipped. A
//! transport or write failure ends the run: pages after it are not requested.

use std::fs;

use tracing::{debug, error, info};

use crate::error::{Error, Result};
use crate::extract::extract_main_content_bytes;
use crate::fetch::Fetcher;
use crate::options::Options;
use crate::pages::{self, PageTarget};
use crate::result::{PageOutcome, PageReport};

/// Runs the loop over every page named by its [`Options`].
#[derive(Debug, Clone)]
pub struct Scraper<F> {
    fetcher: F,
    options: Options,
}

impl<F: Fetcher> Scraper<F> {
    #[must_use]
    pub fn new(fetcher: F, options: Options) -> Self {
        Self { fetcher, options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Fetch one page and, when it holds main content, write it to disk.
    ///
    /// The output file is truncated and rewritten, never appended to. The
    /// output directory is not created.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] when no response arrives, [`Error::Write`] when
    /// the output file cannot be written.
    pub fn process_page(&self, target: &PageTarget) -> Result<PageOutcome> {
        debug!(index = target.index, url = %target.url, "requesting page");
        let page = self.fetcher.get(&target.url)?;

        if !page.is_ok() {
            info!(index = target.index, status = page.status, "page not retrieved");
            return Ok(PageOutcome::HttpStatus(page.status));
        }

        let Some(fragment) = extract_main_content_bytes(&page.body, page.content_type.as_deref())
        else {
            info!(index = target.index, "main content not found");
            return Ok(PageOutcome::ContentNotFound);
        };

        fs::write(&target.output_path, fragment.as_bytes()).map_err(|source| Error::Write {
            path: target.output_path.clone(),
            source,
        })?;
        info!(
            index = target.index,
            path = %target.output_path.display(),
            bytes = fragment.len(),
            "saved main content"
        );

        Ok(PageOutcome::Saved {
            file_name: target.file_name.clone(),
            path: target.output_path.clone(),
            bytes: fragment.len(),
        })
    }

    /// Process every page in order, calling `on_page` as each one finishes.
    ///
    /// Reports already delivered through `on_page` stay valid when a later
    /// page fails.
    ///
    /// # Errors
    ///
    /// Invalid URL templates fail before any request. Otherwise the first
    /// error from [`Scraper::process_page`] is returned as-is.
    pub fn run<R>(&self, mut on_page: R) -> Result<Vec<PageReport>>
    where
        R: FnMut(&PageReport),
    {
        let targets = pages::targets(&self.options)?;
        let mut reports = Vec::with_capacity(targets.len());

        for target in &targets {
            let outcome = self.process_page(target).inspect_err(|err| {
                error!(index = target.index, error = %err, "aborting run");
            })?;

            let report = PageReport {
                index: target.index,
                url: target.url.to_string(),
                outcome,
            };
            on_page(&report);
            reports.push(report);
        }

        let saved = reports.iter().filter(|r| r.outcome.is_saved()).count();
        debug!(pages = reports.len(), saved, "run complete");
        Ok(reports)
    }
}
