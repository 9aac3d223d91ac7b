//! SmartFocus Model Fetcher Library
//!
//! This library provides the download/extract/rename pipeline behind the
//! `modelfetch` CLI.

pub mod core;
pub mod error;
pub mod utils;
