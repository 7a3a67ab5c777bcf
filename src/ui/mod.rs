pub mod app;
pub mod components;
pub mod state;

pub use app::SentimentApp;
pub use state::AppState;
