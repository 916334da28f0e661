pub mod models;
pub mod routes;
pub mod server;

mod error;
mod params;
mod state;

pub use anagram_config::ServerConfig;
pub use error::{Result, WebError};
pub use server::{router, start_server};
pub use state::AppState;
