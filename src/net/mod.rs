pub mod client;

pub use client::SentimentClient;
