//! # API Module
//!
//! HTTP endpoints of the short-lived login server.
//!
//! - [`callback`] - receives Spotify's redirect, checks the anti-forgery
//!   `state`, exchanges the code for a token and hands the outcome to the
//!   waiting login flow through a one-shot channel.
//! - [`health`] - liveness probe returning status and version.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use discover_sync::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::CallbackState;
pub use callback::LoginOutcome;
pub use callback::callback;
pub use health::health;
