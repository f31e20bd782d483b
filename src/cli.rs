use clap::{Parser, Subcommand};

use crate::config;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Site base URL (listing pages are derived from it).
    #[arg(long, default_value = config::SITE_URL)]
    pub base_url: String,

    /// Category slug for the category scrape (e.g. "romance_8").
    #[arg(long, default_value = config::CATEGORY_NAME)]
    pub category: String,

    /// Output directory for CSV files (created if absent).
    #[arg(long, default_value = "output")]
    pub out: String,

    /// Seconds to sleep between page fetches (politeness).
    #[arg(long, default_value_t = config::DEFAULT_DELAY_SECS)]
    pub delay_secs: u64,

    /// Disable the inter-request delay entirely.
    #[arg(long)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// With no subcommand, all three datasets are scraped in sequence.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape the home listing page only.
    Home,
    /// Scrape the whole numbered catalogue.
    Catalogue,
    /// Scrape one category end to end.
    Category,
}
