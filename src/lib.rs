//! Discover Weekly Sync Library
//!
//! This library keeps a Spotify playlist topped up with the Discover Weekly
//! tracks the user liked enough to save to their library. It contains the
//! interactive OAuth flow that stores a token in S3 and the scheduled sync flow
//! that reuses (and refreshes) that token.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints served by the local OAuth callback server
//! - `cli` - The two flows as invoked by the binaries
//! - `config` - Configuration loaded from the environment
//! - `error` - Typed errors for every failing step
//! - `management` - Token persistence in object storage
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API and accounts client
//! - `sync` - Playlist resolution and track migration
//! - `types` - Data structures and type definitions
//! - `utils` - Small pure helpers
//!
//! # Example
//!
//! ```
//! use discover_sync::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> discover_sync::Res<()> {
//!     config::load_env().await?;
//!     let cfg = config::SyncConfig::from_env()?;
//!     cli::sync(&cfg).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod sync;
pub mod types;
pub mod utils;

/// A convenient Result type alias for the entry points.
///
/// Library functions return typed errors from [`error`]; the binaries and
/// the lambda handler collapse them into this boxed form.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Loading token from s3://{}/{}", bucket, key);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("successfully added {} tracks to playlist {}", count, name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Every failure in this tool is fatal, so the entry points funnel errors
/// through this macro. The process terminates with exit code 1 and the
/// message names the step that failed.
///
/// # Example
///
/// ```
/// error!("could not get playlists: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for conditions worth noticing that do not stop the run, such as a
/// truncated playlist page or a browser that failed to open.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
