use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Scottish offshore wind and energy news, fetched, filtered and cached")]
#[command(version)]
pub struct Cli {
    /// Log pipeline activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List cached or freshly fetched articles within a date range
    Show {
        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Last day to include (YYYY-MM-DD), defaults to today
        #[arg(long)]
        to: Option<String>,

        /// Ignore the cache and fetch the feed again
        #[arg(long)]
        refresh: bool,
    },

    /// Fetch the feed now and replace the cache
    Refresh,

    /// Show the age and size of the cached entry
    Status,
}
