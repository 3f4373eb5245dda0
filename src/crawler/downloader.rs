use std::time::Duration;

use anyhow::Result;
use bytes::Bytes;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use tracing::{Dispatch, debug, info, instrument};

use crate::config::HttpConfig;
use crate::error::FetchError;
use crate::logger;

/// Sequential HTTP GETs; any non-ok status ends the run.
pub struct Downloader {
    client: Client,
    dispatch: Dispatch,
}

impl Downloader {
    pub fn new(config: &HttpConfig, dispatch: Dispatch) -> Result<Self> {
        let user_agent = match &config.user_agent {
            Some(agent) => agent.clone(),
            None => ua_generator::ua::spoof_ua().to_owned(),
        };
        tracing::dispatcher::with_default(&dispatch, || {
            debug!("Using user agent: {}", user_agent);
        });

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, dispatch })
    }

    pub async fn page(&self, url: &str) -> Result<String, FetchError> {
        logger::scoped(&self.dispatch, || self.fetch_page(url)).await
    }

    pub async fn pdf(&self, url: &str) -> Result<Bytes, FetchError> {
        logger::scoped(&self.dispatch, || self.fetch_pdf(url)).await
    }

    #[instrument(name = "page", skip(self))]
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        info!("Fetching catalog page");
        let response = self.get(url).await?;
        response.text().await.map_err(|source| FetchError::Request {
            url: url.to_owned(),
            source,
        })
    }

    #[instrument(name = "pdf", skip(self))]
    async fn fetch_pdf(&self, url: &str) -> Result<Bytes, FetchError> {
        info!("Downloading PDF");
        let response = self.get(url).await?;
        response.bytes().await.map_err(|source| FetchError::Request {
            url: url.to_owned(),
            source,
        })
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_owned(),
                source,
            })?;

        let status = response.status();
        check_status(url, status.as_u16(), &reason_text(&response))?;
        Ok(response)
    }
}

/// The phrase the server sent, else the standard one for the code.
fn reason_text(response: &Response) -> String {
    if let Some(phrase) = response.extensions().get::<ReasonPhrase>() {
        return String::from_utf8_lossy(phrase.as_bytes()).into_owned();
    }
    response
        .status()
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_owned()
}

/// Any code below 400 counts as ok.
pub fn check_status(url: &str, code: u16, reason: &str) -> Result<(), FetchError> {
    if code < 400 {
        return Ok(());
    }
    Err(FetchError::Status {
        url: url.to_owned(),
        code,
        reason: reason.to_owned(),
    })
}
