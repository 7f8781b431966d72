use clap::Parser;

#[derive(Parser)]
#[command(name = "asesor")]
#[command(about = "Book and manage academic tutoring sessions from the terminal")]
#[command(version)]
pub struct Cli {
    /// Backend URL (overrides api.base_url)
    #[arg(long)]
    pub(crate) server: Option<String>,

    /// Per-request timeout in seconds (overrides api.timeout_secs)
    #[arg(long)]
    pub(crate) timeout: Option<u64>,

    /// Log level: off, error, warn, info, debug, trace (overrides logging.level)
    #[arg(long)]
    pub(crate) log_level: Option<String>,
}
