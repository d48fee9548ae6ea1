//! Fetch the four-part object file series and save each post's main content
//! into the current directory as `blog_post{N}.html`.
//!
//! Takes no arguments. Set `RUST_LOG` for diagnostics on stderr.

use blog_pull::{logging, HttpFetcher, Options, Scraper};

fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("blog-pull: failed to initialize logging: {err}");
    }

    let result = HttpFetcher::new().and_then(|fetcher| {
        Scraper::new(fetcher, Options::default()).run(|report| println!("{}", report.outcome))
    });

    if let Err(err) = result {
        eprintln!("blog-pull error: {err}");
        std::process::exit(1);
    }
}
