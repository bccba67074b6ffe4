//! Student performance prediction pipeline and dashboard server.
//!
//! Raw form fields -> preprocessing -> linear model score -> performance band
//! plus canned recommendations. Model artifacts are trained offline by the
//! `train` binary and loaded once at server startup.

pub mod analytics;
pub mod artifacts;
pub mod data;
pub mod error;
pub mod model;
pub mod preprocess;
pub mod recommend;
pub mod server;
pub mod train;
