pub mod args;
pub mod config;
pub mod converter;
pub mod error;
pub mod filter;
pub mod media;
pub mod processor;
pub mod scan;
