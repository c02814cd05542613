//! Search Radar problems by title keyword and print them as JSON.

pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod query;
pub mod record;
pub mod search;
