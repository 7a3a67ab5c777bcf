use std::fmt;

use serde::{Deserialize, Serialize};

/// Report returned by the sentiment endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentReport {
    pub sentiments: Vec<SentimentEntry>,
}

/// One scored measurement within a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentEntry {
    /// ISO-8601 date-time, usually with a trailing `Z`.
    pub timestamp: String,
    pub sentiment: SentimentScore,
}

/// The endpoint emits scores either as JSON numbers or as numeric strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SentimentScore {
    Number(f64),
    Text(String),
}

impl SentimentScore {
    pub fn as_f64(&self) -> Result<f64, std::num::ParseFloatError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(raw) => raw.trim().parse(),
        }
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(raw) => f.write_str(raw),
        }
    }
}
