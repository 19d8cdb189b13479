//! HTTP inbound adapter exposing the photo and account API.

pub mod app;
pub mod auth_gate;
pub mod credential_config;
pub mod error;
pub mod fallback;
pub mod health;
pub mod photos;
pub mod schemas;
pub mod state;
pub mod users;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
