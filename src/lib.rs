pub mod activities;
pub mod app;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod state;
pub mod ui;
pub mod upstream;

pub use app::router;
pub use state::AppState;
pub use upstream::{resolve_base_url, PredictorClient};
