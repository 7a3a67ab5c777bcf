use chrono::NaiveDateTime;
use thiserror::Error;

use crate::common::SentimentReport;

#[derive(Debug, Error)]
pub enum ChartDataError {
    #[error("invalid timestamp `{raw}`")]
    Timestamp {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid sentiment value `{raw}`")]
    Sentiment {
        raw: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Parsed series backing the chart, kept in report order.
#[derive(Debug)]
pub struct AppState {
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
}

impl AppState {
    /// Parses every entry up front; a single bad entry aborts the whole
    /// chart rather than plotting a partial series.
    pub fn from_report(report: &SentimentReport) -> Result<Self, ChartDataError> {
        let mut timestamps = Vec::with_capacity(report.sentiments.len());
        let mut values = Vec::with_capacity(report.sentiments.len());

        for entry in &report.sentiments {
            let timestamp =
                parse_timestamp(&entry.timestamp).map_err(|source| ChartDataError::Timestamp {
                    raw: entry.timestamp.clone(),
                    source,
                })?;
            let value = entry
                .sentiment
                .as_f64()
                .map_err(|source| ChartDataError::Sentiment {
                    raw: entry.sentiment.to_string(),
                    source,
                })?;

            timestamps.push(timestamp);
            values.push(value);
        }

        Ok(Self { timestamps, values })
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Chart coordinates: epoch seconds on x, sentiment score on y.
    pub fn plot_points(&self) -> Vec<[f64; 2]> {
        self.timestamps
            .iter()
            .zip(&self.values)
            .map(|(timestamp, value)| [timestamp.and_utc().timestamp() as f64, *value])
            .collect()
    }
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    // The endpoint stamps entries in UTC with a trailing Z designator.
    raw.strip_suffix('Z').unwrap_or(raw).parse()
}
