#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod formats;
pub mod logging;
pub mod paginate;
pub mod scrape;
