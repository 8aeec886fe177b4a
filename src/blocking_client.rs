use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::BoxDiceError;
use crate::client::{classify_failure, default_headers, ensure_trailing_slash};
use crate::types::{ApiConfig, Page};

/// Blocking client for the BoxDice website API.
///
/// This is the synchronous counterpart of [`crate::BoxDiceClient`] for
/// scripts and tools without an async runtime. It exposes the generic JSON
/// transport and pagination surface; the typed resource operations live on
/// the async client.
#[derive(Debug)]
pub struct BlockingBoxDiceClient {
    base_url: Url,
    headers: reqwest::header::HeaderMap,
    http: reqwest::blocking::Client,
}

impl BlockingBoxDiceClient {
    /// Creates a client for `https://<domain>/website_api/`.
    pub fn new(config: &ApiConfig) -> Result<Self, BoxDiceError> {
        let base = format!("https://{}/website_api/", config.domain);
        let parsed =
            Url::parse(&base).map_err(|_| BoxDiceError::InvalidDomain(config.domain.clone()))?;

        Ok(Self {
            base_url: parsed,
            headers: default_headers(&config.api_key)?,
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Creates a client against an explicit base URL.
    ///
    /// The URL is normalized to include a trailing slash, so relative endpoint
    /// paths join correctly.
    pub fn with_base_url(
        base_url: impl AsRef<str>,
        api_key: &str,
    ) -> Result<Self, BoxDiceError> {
        let parsed = Url::parse(base_url.as_ref())
            .map_err(|_| BoxDiceError::InvalidBaseUrl(base_url.as_ref().to_owned()))?;

        Ok(Self {
            base_url: ensure_trailing_slash(parsed),
            headers: default_headers(api_key)?,
            http: reqwest::blocking::Client::new(),
        })
    }

    /// Sends a request and parses the response as JSON.
    ///
    /// Use [`Self::request_json_with_query`] when query parameters are needed.
    pub fn request_json(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Value, BoxDiceError> {
        self.request_json_with_query(method, endpoint, &[], body)
    }

    /// Sends a request with query parameters and parses the response as JSON.
    ///
    /// Classification matches the async client: 401 becomes
    /// [`BoxDiceError::Authentication`], 429 becomes
    /// [`BoxDiceError::RateLimit`], other non-2xx statuses become
    /// [`BoxDiceError::Api`]. Successful responses with an empty body parse as
    /// [`Value::Null`].
    pub fn request_json_with_query(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, BoxDiceError> {
        let url = self.build_url(endpoint)?;
        let mut request = self
            .http
            .request(method, url)
            .headers(self.headers.clone());

        if !query.is_empty() {
            request = request.query(query);
        }

        if let Some(json_body) = body {
            request = request.json(&json_body);
        }

        let response = request.send()?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let payload = response.text()?;

        if !status.is_success() {
            return Err(classify_failure(status, &response_headers, payload));
        }

        if payload.trim().is_empty() {
            Ok(Value::Null)
        } else {
            Ok(serde_json::from_str(&payload)?)
        }
    }

    /// Sends a cursor-aware `GET` and parses the response as a [`Page`].
    ///
    /// To fetch page N+1, pass the previous page's `paging.next` value back
    /// as the `after` parameter; omitting it restarts from page 1.
    pub fn get_paginated<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<Page<T>, BoxDiceError> {
        let value = self.request_json_with_query(Method::GET, endpoint, params, None)?;
        Ok(serde_json::from_value(value)?)
    }

    fn build_url(&self, endpoint: &str) -> Result<Url, BoxDiceError> {
        let relative = endpoint.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_err(|_| BoxDiceError::InvalidEndpoint(endpoint.to_owned()))
    }
}
