use std::time::Duration;

use anyhow::Context as _;
use url::Url;

pub const SITE_URL: &str = "http://books.toscrape.com/";
pub const CATEGORY_NAME: &str = "romance_8";
pub const DEFAULT_DELAY_SECS: u64 = 3;

/// Everything a scrape run needs, passed explicitly into the entry points.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: Url,
    pub category: String,
    /// Blocking sleep between page fetches; `None` disables it.
    pub delay: Option<Duration>,
}

impl ScrapeConfig {
    pub fn new(base_url: &str, category: &str, delay: Option<Duration>) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("parse base url: {base_url}"))?;

        Ok(Self {
            base_url,
            category: category.to_owned(),
            delay,
        })
    }

    pub fn home_url(&self) -> Url {
        self.base_url.clone()
    }

    pub fn catalogue_page_url(&self, page: u32) -> anyhow::Result<Url> {
        self.base_url
            .join(&format!("catalogue/page-{page}.html"))
            .with_context(|| format!("build catalogue url for page {page}"))
    }

    pub fn category_index_url(&self) -> anyhow::Result<Url> {
        self.base_url
            .join(&format!(
                "catalogue/category/books/{}/index.html",
                self.category
            ))
            .with_context(|| format!("build category index url for: {}", self.category))
    }
}
