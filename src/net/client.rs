use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::common::SentimentReport;

pub struct SentimentClient {
    http: reqwest::Client,
    api_url: String,
}

impl SentimentClient {
    pub fn new(api_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
        }
    }

    /// Posts the transcript and returns the parsed report. A non-200 answer
    /// is logged and mapped to `Ok(None)`; transport failures bubble up.
    pub async fn request_sentiment(
        &self,
        chat_json: &Value,
    ) -> Result<Option<SentimentReport>, reqwest::Error> {
        let response = self
            .http
            .post(&self.api_url)
            .header(CONTENT_TYPE, "application/json; charset=UTF-8")
            .json(chat_json)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            log::error!("Error {}: {}", status.as_u16(), body);
            return Ok(None);
        }

        log::info!("Sentiment endpoint answered with status {}", status.as_u16());
        let report = response.json::<SentimentReport>().await?;
        log::debug!("Received report: {report:?}");

        Ok(Some(report))
    }
}
