//! Client library for the remote run control plane.
//!
//! [`RunApi`] is the seam the runner depends on; [`TfeClient`] implements it
//! over the JSON:API HTTP interface.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
mod jsonapi;

pub use api::RunApi;
pub use config::ClientConfig;
pub use error::ClientError;
pub use http::TfeClient;
