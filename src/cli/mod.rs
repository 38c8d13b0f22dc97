//! # CLI Module
//!
//! The two flows as the binaries invoke them.
//!
//! - [`auth`] - one-time interactive login; stores the token in S3
//! - [`sync`] - one sync run; used by both `discover-sync sync` and the
//!   lambda handler
//!
//! Both return typed errors. The callers log them with `error!`, which
//! terminates the process with a non-zero status.
//!
//! ```bash
//! discover-sync auth     # log in once, token goes to s3://$BUCKET/$TOKEN_FILE
//! discover-sync sync     # run the weekly sync locally
//! ```

mod auth;
mod sync;

pub use auth::acquire_token;
pub use auth::auth;
pub use auth::store_token;
pub use sync::print_report;
pub use sync::sync;
