use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "shakesearch",
    about = "Case-insensitive substring search over a single text corpus",
    version
)]
pub struct Cli {
    /// Corpus text file, loaded once at startup
    #[arg(long, env = "SHAKESEARCH_CORPUS", default_value = "completeworks.txt")]
    pub corpus: PathBuf,

    /// HTTP port
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Bind address
    #[arg(long, env = "SHAKESEARCH_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Directory served for every path other than /search
    #[arg(long, env = "SHAKESEARCH_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Without a subcommand the HTTP server is started
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one search and print the snippets as JSON
    Query {
        /// Text to search for
        query: String,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,

        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        page_size: i64,
    },
}
