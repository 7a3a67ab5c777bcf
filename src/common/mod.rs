pub mod types;

pub use types::{SentimentEntry, SentimentReport, SentimentScore};
