use super::title::extract_share_id;
use super::{PasteBackend, UploadFailure, UploadResult};
use crate::error::Result;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Characters of the response body echoed to the log.
const BODY_PREVIEW_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct HttpParams {
    pub endpoint: String,
    pub lang: String,
    pub expire: String,
    pub timeout: Option<Duration>,
}

/// Form body posted for every paste. Field order is the wire order.
#[derive(Serialize)]
struct PasteForm<'a> {
    lang: &'a str,
    text: &'a str,
    expire: &'a str,
    password: &'a str,
    title: &'a str,
}

pub struct HttpPasteBackend {
    client: Client,
    params: HttpParams,
}

impl HttpPasteBackend {
    pub fn new(params: HttpParams) -> Result<Self> {
        let client = Client::builder().timeout(params.timeout).build()?;
        Ok(Self::with_client(params, client))
    }

    pub fn with_client(params: HttpParams, client: Client) -> Self {
        Self { client, params }
    }
}

fn body_preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}

impl PasteBackend for HttpPasteBackend {
    fn submit(&self, text: &str) -> UploadResult {
        let form = PasteForm {
            lang: &self.params.lang,
            text,
            expire: &self.params.expire,
            password: "",
            title: "",
        };

        let resp = self
            .client
            .post(&self.params.endpoint)
            .form(&form)
            .send()
            .map_err(|e| UploadFailure::Transport(e.to_string()))?;

        let status = resp.status();
        info!(
            endpoint = %self.params.endpoint,
            content_len = text.len(),
            status = status.as_u16(),
            "paste request answered"
        );
        let body = resp
            .text()
            .map_err(|e| UploadFailure::Transport(e.to_string()))?;
        info!(body = %body_preview(&body), "response body");

        if status != StatusCode::OK {
            return Err(UploadFailure::Status(status.as_u16()));
        }
        match extract_share_id(&body) {
            None => Err(UploadFailure::MissingTitle),
            Some(id) if id.is_empty() => Err(UploadFailure::EmptyIdentifier),
            Some(id) => Ok(id),
        }
    }
}
