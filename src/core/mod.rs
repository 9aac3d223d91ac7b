pub mod config;
pub mod download;
pub mod extract;
pub mod pipeline;
