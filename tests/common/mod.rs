//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod page_server;

use blog_pull::{Error, FetchedPage, Fetcher, Result};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::net::TcpListener;
use url::Url;

/// One scripted reply: a page, or a transport failure.
pub enum Reply {
    Page(FetchedPage),
    Refused,
}

/// Replays scripted replies in request order and records every URL requested.
pub struct ScriptedFetcher {
    replies: RefCell<VecDeque<Reply>>,
    requested: RefCell<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl Fetcher for ScriptedFetcher {
    fn get(&self, url: &Url) -> Result<FetchedPage> {
        self.requested.borrow_mut().push(url.to_string());
        match self.replies.borrow_mut().pop_front() {
            Some(Reply::Page(page)) => Ok(page),
            Some(Reply::Refused) => Err(refused(url)),
            None => panic!("unexpected request for {url}"),
        }
    }
}

/// 200 response with a UTF-8 HTML body.
pub fn html(body: &str) -> Reply {
    Reply::Page(FetchedPage {
        status: 200,
        content_type: Some("text/html; charset=utf-8".to_string()),
        body: body.as_bytes().to_vec(),
    })
}

/// Response with the given status and an HTML body.
pub fn status(status: u16, body: &str) -> Reply {
    Reply::Page(FetchedPage {
        status,
        content_type: Some("text/html".to_string()),
        body: body.as_bytes().to_vec(),
    })
}

/// URL of a local port nothing listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// A genuine connection-refused transport error for `url`.
pub fn refused(url: &Url) -> Error {
    let source = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("client")
        .get(closed_port_url())
        .send()
        .expect_err("nothing listens on a closed port");
    Error::Transport {
        url: url.to_string(),
        source,
    }
}

/// HTTP fetcher for talking to [`page_server`], ignoring any proxy settings
/// in the environment.
pub fn local_fetcher() -> blog_pull::HttpFetcher {
    let client = reqwest::blocking::Client::builder()
        .no_proxy()
        .build()
        .expect("client");
    blog_pull::HttpFetcher::with_client(client)
}
