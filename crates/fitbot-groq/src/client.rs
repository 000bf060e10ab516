use async_stream::try_stream;

use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client as HttpClient, Response,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::debug;

use crate::{
    api_v1::ChatCompletionRequest,
    error::GroqError,
    lifecycle::StreamLifecycle,
    sse::{Frame, LineBuffer, decode_frame},
};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Minimal HTTP client for Groq’s *chat/completions* endpoint.
///
/// * Streaming only: one request ▶ one stream of text deltas.
/// * Accepts the `api_v1` request struct defined in this crate.
/// * Shares a single `reqwest::Client`, so cloning `GroqClient` is cheap.
#[derive(Clone)]
pub struct GroqClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl GroqClient {
    /// Convenience constructor with a default `reqwest` client and the public
    /// Groq endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http(api_key, HttpClient::new(), None)
    }

    /// Build with a custom `reqwest::Client` and/or base URL, e.g. for a
    /// proxy or a local mock server.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// Perform a **streaming** chat completion and yield the non-empty text
    /// deltas of the first choice in arrival order.
    ///
    /// * A blank API key fails with [`GroqError::MissingApiKey`] before any
    ///   request is sent.
    /// * `timeout` bounds the wait for response headers only; a long reply
    ///   may keep streaming past it.
    /// * Undecodable frames are skipped. `[DONE]` ends the stream and nothing
    ///   after it is read. A body that ends without `[DONE]` ends the stream
    ///   normally.
    /// * Dropping the stream releases the connection.
    pub fn chat_completion_stream(
        &self,
        mut request: ChatCompletionRequest,
        timeout: Duration,
    ) -> impl Stream<Item = Result<String, GroqError>> + '_ {
        request.stream = Some(true);

        try_stream! {
            let mut lifecycle = StreamLifecycle::new();

            let resp = match self.open(&request, timeout, &mut lifecycle).await {
                Ok(resp) => resp,
                Err(err) => {
                    lifecycle.failed(&err);
                    Err(err)?
                }
            };

            let body = resp.bytes_stream();
            futures_util::pin_mut!(body);

            let mut lines = LineBuffer::default();
            let mut exhausted = false;

            loop {
                let line = if let Some(line) = lines.next_line() {
                    line
                } else if exhausted {
                    match lines.finish() {
                        Some(line) => line,
                        None => break,
                    }
                } else {
                    match body.next().await {
                        Some(Ok(chunk)) => lines.extend(&chunk),
                        Some(Err(err)) => {
                            let err = GroqError::from(err);
                            lifecycle.failed(&err);
                            Err(err)?
                        }
                        None => exhausted = true,
                    }
                    continue;
                };

                match decode_frame(&line) {
                    Frame::Delta(text) => {
                        lifecycle.frame();
                        yield text;
                    }
                    Frame::Done => break,
                    Frame::Skip => {}
                    Frame::Malformed(reason) => lifecycle.skipped(&reason),
                }
            }

            lifecycle.done();
        }
    }

    /// Send the request and return the response once its status is known to
    /// be a success.
    async fn open(
        &self,
        request: &ChatCompletionRequest,
        timeout: Duration,
        lifecycle: &mut StreamLifecycle,
    ) -> Result<Response, GroqError> {
        if self.api_key.trim().is_empty() {
            return Err(GroqError::MissingApiKey);
        }

        let headers = self.headers()?;
        let url = format!("{}/chat/completions", self.base.trim_end_matches('/'));

        debug!(
            %url,
            model = %request.model,
            messages = request.messages.len(),
            "dispatching streaming chat completion"
        );
        lifecycle.dispatched();

        let pending = self.http.post(url).headers(headers).json(request).send();
        let resp = tokio::time::timeout(timeout, pending)
            .await
            .map_err(|_| GroqError::Timeout(timeout))??;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = match resp.text().await {
                Ok(body) => body,
                Err(err) => {
                    debug!(%status, error = %err, "could not read error response body");
                    String::new()
                }
            };
            return Err(GroqError::Api { status, body });
        }

        Ok(resp)
    }

    fn headers(&self) -> Result<HeaderMap, GroqError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );
        Ok(headers)
    }
}
