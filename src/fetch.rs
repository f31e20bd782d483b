use anyhow::Context as _;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use url::Url;

pub struct PageResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Plain GET client: no custom headers, no cookies, and no request timeout.
/// A hung request therefore blocks the whole run; that limitation is part of
/// the documented behavior rather than something this crate papers over.
pub fn build_client() -> anyhow::Result<Client> {
    Client::builder().build().context("build http client")
}

pub fn get_page(client: &Client, url: &Url) -> anyhow::Result<PageResponse> {
    tracing::debug!(%url, "GET listing page");

    let response = client
        .get(url.clone())
        .send()
        .with_context(|| format!("GET {url}"))?;

    let status = response.status();
    let body = response
        .text()
        .with_context(|| format!("read response body: {url}"))?;

    Ok(PageResponse { status, body })
}
