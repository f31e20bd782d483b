use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::extract::extract_books;
use crate::fetch;
use crate::formats::BookRecord;

/// How a pagination loop decides it has run off the end.
///
/// The two signals are deliberately not unified: a category's last page can
/// still answer 200 with an empty card set, while the numeric catalogue
/// template relies on emptiness alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopPolicy {
    /// A page extracting zero records ends the loop; any non-success status
    /// is an error.
    EmptyPage,
    /// A non-success status ends the loop before parsing; an empty record
    /// set after a success response also ends it.
    NonSuccessStatus,
}

/// Fetches pages 1, 2, 3, ... from `page_url` until `policy` says stop,
/// concatenating each page's records in page order.
///
/// Fetches never retry; a transport error aborts the whole scrape.
pub fn collect_pages(
    client: &Client,
    page_url: impl Fn(u32) -> anyhow::Result<Url>,
    policy: StopPolicy,
    delay: Option<Duration>,
) -> anyhow::Result<Vec<BookRecord>> {
    let mut records = Vec::new();
    let mut page = 1_u32;

    loop {
        let url = page_url(page)?;
        let response = fetch::get_page(client, &url)?;

        if !response.status.is_success() {
            match policy {
                StopPolicy::NonSuccessStatus => {
                    tracing::debug!(%url, status = %response.status, "pagination ended by status");
                    break;
                }
                StopPolicy::EmptyPage => {
                    anyhow::bail!("unexpected status {} for {url}", response.status);
                }
            }
        }

        let page_records = extract_books(&response.body, &url);
        if page_records.is_empty() {
            tracing::debug!(%url, "no book cards; pagination ended");
            break;
        }

        tracing::info!(%url, records = page_records.len(), "scraped listing page");
        records.extend(page_records);
        page += 1;

        if let Some(delay) = delay {
            thread::sleep(delay);
        }
    }

    Ok(records)
}
