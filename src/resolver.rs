//! Resolving ISBNs to catalog book ids.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::{debug, info, warn};

use crate::error::Result;

/// Something that can turn an ISBN into the canonical URL of a book page.
pub trait BookUrlResolver {
    fn resolve(&self, isbn: &str) -> Result<String>;
}

/// Resolves ISBNs through the catalog's search endpoint, which redirects a
/// unique ISBN match straight to the book page.
pub struct HttpSearchResolver {
    client: Client,
    base_url: String,
}

impl HttpSearchResolver {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::limited(10))
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("ReviewBlaster/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpSearchResolver {
            client,
            base_url: base_url.into(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

impl BookUrlResolver for HttpSearchResolver {
    fn resolve(&self, isbn: &str) -> Result<String> {
        let response = self
            .client
            .get(self.search_url())
            .query(&[("q", isbn)])
            .send()?
            .error_for_status()?;
        Ok(response.url().to_string())
    }
}

/// The part of a book URL after the last `show/`; the whole URL if absent.
pub fn book_id_from_url(url: &str) -> String {
    url.rsplit("show/").next().unwrap_or(url).to_string()
}

/// Resolves each ISBN in order. ISBNs that fail to resolve are logged and skipped.
pub fn resolve_book_ids<R: BookUrlResolver + ?Sized>(
    isbns: &[String],
    resolver: &R,
) -> Vec<String> {
    info!("Started retrieving url for {} books...", isbns.len());
    let mut ids = Vec::with_capacity(isbns.len());
    for isbn in isbns {
        match resolver.resolve(isbn) {
            Ok(url) => {
                let id = book_id_from_url(&url);
                debug!(%isbn, %url, %id, "Resolved book");
                ids.push(id);
            }
            Err(e) => warn!(%isbn, error = %e, "Could not resolve ISBN; skipping"),
        }
    }
    info!("Successfully retrieved urls for {} books.", ids.len());
    ids
}

/// Writes one book id per line, creating parent directories as needed.
pub fn write_book_ids(path: &Path, ids: &[String]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    for id in ids {
        writeln!(out, "{}", id)?;
    }
    out.flush()?;
    Ok(())
}
