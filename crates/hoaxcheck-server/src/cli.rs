use clap::{Parser, Subcommand};
use hoaxcheck_core::Domain;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hoaxcheck")]
#[command(
    author,
    version,
    about = "Indonesian news and social-media hoax detection"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (ignored if it does not exist)
    #[arg(short, long, global = true, default_value = "hoaxcheck.yaml", env = "HOAXCHECK_CONFIG")]
    pub config: PathBuf,

    /// Directory holding the model and vectorizer artifacts
    #[arg(long, global = true, env = "HOAXCHECK_ARTIFACTS_DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI and detection API
    Serve {
        /// Listen port
        #[arg(short, long)]
        port: Option<u16>,

        /// Listen address
        #[arg(short, long)]
        address: Option<String>,
    },

    /// Classify one text and print the result
    Detect {
        /// Text domain: berita (news) or sosmed (social media)
        #[arg(short, long, value_parser = parse_domain)]
        domain: Domain,

        /// Text to classify; read from stdin when omitted
        text: Option<String>,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_domain(s: &str) -> Result<Domain, String> {
    s.parse()
}
