//! Error types for the stats fetch path.
//!
//! There are exactly two failure kinds: a non-success HTTP status and a
//! transport-level failure (connect error, timeout, undecodable body).
//! Missing fields in an otherwise successful response are not errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("stats API returned {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
