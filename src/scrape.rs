use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use reqwest::blocking::Client;
use url::Url;

use crate::cli::{Cli, Command};
use crate::config::ScrapeConfig;
use crate::export;
use crate::extract::extract_books;
use crate::fetch;
use crate::formats::BookRecord;
use crate::paginate::{StopPolicy, collect_pages};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let delay = if cli.no_delay {
        None
    } else {
        Some(Duration::from_secs(cli.delay_secs))
    };
    let config = ScrapeConfig::new(&cli.base_url, &cli.category, delay)?;
    let out_dir = PathBuf::from(&cli.out);
    let client = fetch::build_client()?;

    match cli.command {
        Some(Command::Home) => {
            let records = scrape_home(&client, &config).context("scrape home page")?;
            write_dataset("home", &records, &out_dir.join("books_home.csv"))?;
        }
        Some(Command::Catalogue) => {
            let records = scrape_catalogue(&client, &config).context("scrape catalogue")?;
            write_dataset("all", &records, &out_dir.join("books_all.csv"))?;
        }
        Some(Command::Category) => {
            let records = scrape_category(&client, &config)
                .with_context(|| format!("scrape category: {}", config.category))?;
            let path = out_dir.join(format!("books_{}.csv", config.category));
            write_dataset(&config.category, &records, &path)?;
        }
        None => {
            let home = scrape_home(&client, &config).context("scrape home page")?;
            write_dataset("home", &home, &out_dir.join("books_home.csv"))?;

            let all = scrape_catalogue(&client, &config).context("scrape catalogue")?;
            write_dataset("all", &all, &out_dir.join("books_all.csv"))?;

            let category = scrape_category(&client, &config)
                .with_context(|| format!("scrape category: {}", config.category))?;
            let path = out_dir.join(format!("books_{}.csv", config.category));
            write_dataset(&config.category, &category, &path)?;
        }
    }

    Ok(())
}

fn write_dataset(name: &str, records: &[BookRecord], path: &Path) -> anyhow::Result<()> {
    export::write_csv(records, path)
        .with_context(|| format!("write dataset: {}", path.display()))?;
    println!("[OK] {name}: {} rows -> {}", records.len(), path.display());
    Ok(())
}

/// Single fetch of the home listing page; no pagination.
pub fn scrape_home(client: &Client, config: &ScrapeConfig) -> anyhow::Result<Vec<BookRecord>> {
    let url = config.home_url();
    let response = fetch::get_page(client, &url)?;
    if !response.status.is_success() {
        anyhow::bail!("unexpected status {} for {url}", response.status);
    }

    Ok(extract_books(&response.body, &url))
}

/// Walks the numbered catalogue (`catalogue/page-1.html`, `-2`, ...) until a
/// page yields no book cards.
pub fn scrape_catalogue(client: &Client, config: &ScrapeConfig) -> anyhow::Result<Vec<BookRecord>> {
    collect_pages(
        client,
        |page| config.catalogue_page_url(page),
        StopPolicy::EmptyPage,
        config.delay,
    )
}

/// Walks one category's pages until the site answers with a non-success
/// status for the next page number.
pub fn scrape_category(client: &Client, config: &ScrapeConfig) -> anyhow::Result<Vec<BookRecord>> {
    let index_url = config.category_index_url()?;
    scrape_category_from(client, &index_url, config.delay)
}

pub fn scrape_category_from(
    client: &Client,
    index_url: &Url,
    delay: Option<Duration>,
) -> anyhow::Result<Vec<BookRecord>> {
    validate_category_index_url(index_url)?;

    collect_pages(
        client,
        |page| category_page_url(index_url, page),
        StopPolicy::NonSuccessStatus,
        delay,
    )
}

/// Page 1 is the caller-supplied index URL verbatim; page n>1 swaps the
/// URL's last path segment for `page-{n}.html`.
pub fn category_page_url(index_url: &Url, page: u32) -> anyhow::Result<Url> {
    if page == 1 {
        return Ok(index_url.clone());
    }

    index_url
        .join(&format!("page-{page}.html"))
        .with_context(|| format!("derive category url for page {page}"))
}

/// The page-2+ derivation only works when the index URL ends in a
/// filename-like segment (e.g. `index.html`), so reject anything else up
/// front instead of walking mis-derived URLs.
fn validate_category_index_url(url: &Url) -> anyhow::Result<()> {
    let last_segment = url.path().rsplit('/').next().unwrap_or_default();
    if last_segment.is_empty() || !last_segment.contains('.') {
        anyhow::bail!("category url must end in a filename-like segment such as index.html: {url}");
    }

    Ok(())
}
