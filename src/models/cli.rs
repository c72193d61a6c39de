use clap::Parser;

#[derive(clap::Parser)]
#[command(
    about = "List today's comic releases that match your favorites",
    after_help = "Settings can also be overridden with TODAY_COMICS_* environment variables \
                  (target_url, favorite_titles, timeout_secs, log_fetch_failures, malformed_items)."
)]
pub struct Cli {
    /// Optional settings file (json, toml or yaml)
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Print every title on the listing, not just favorites
    #[arg(short, long)]
    pub all: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}
