//! User service: list, read and create rows of a MySQL `user` table over HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::User;
pub use routes::{app, common_routes, common_routes_with_ready, user_routes};
pub use state::AppState;
pub use store::{InMemoryUserStore, MySqlUserStore, UserStore};
