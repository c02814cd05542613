pub mod tracing_init;

use crate::config::settings::Overrides;
use crate::search::SearchRequest;
use clap::{ArgAction, Parser};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "search_radar",
    author,
    version,
    about = "Search Radar problems by title and print them as JSON",
    long_about = "Searches Radar for problems whose title contains KEYWORD and prints\n\
                  id, title, state, classification, priority and lastModifiedAt\n\
                  for each match as a JSON array.\n\n\
                  Authentication uses RADAR_ACCESS_TOKEN when set, otherwise the SSO\n\
                  signon endpoint via `curl --negotiate` (requires a Kerberos ticket).\n\n\
                  Examples:\n  \
                  search_radar 'audio dropout'\n  \
                  search_radar --all-words 'audio dropout'\n  \
                  search_radar -v crash 2>search.log"
)]
pub struct Cli {
    /// Text to match inside problem titles; `%` and `_` act as wildcards
    #[arg(value_name = "KEYWORD", allow_hyphen_values = true)]
    pub keyword: String,

    /// Match titles containing every word of KEYWORD, in any order
    #[arg(long)]
    pub all_words: bool,

    /// Radar web service root URL
    #[arg(long, value_name = "URL", help = "Radar web service URL [env: RADAR_BASE_URL]")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Increase logging verbosity
    #[arg(
        short = 'v',
        action = ArgAction::Count,
        help = "Increase logging verbosity (-v for debug, -vv for trace)"
    )]
    pub verbosity: u8,
}

impl Cli {
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
        }
    }

    #[must_use]
    pub fn search_request(&self) -> SearchRequest {
        SearchRequest {
            keyword: self.keyword.clone(),
            all_words: self.all_words,
        }
    }
}

/// Exit status after clap has reported a parse outcome.
///
/// Usage errors exit 1. `--help` and `--version` exit 0, unless writing them
/// to stdout failed.
#[must_use]
pub fn parse_failure_exit_code(err: &clap::Error, printed: &io::Result<()>) -> i32 {
    i32::from(printed.is_err() || err.use_stderr())
}
