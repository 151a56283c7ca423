use anyhow::Result;
use clap::{Parser, Subcommand};
use maturity_scout::cli::batch_cmd::BatchInput;
use maturity_scout::cli::logging::{self, LogFormat};
use maturity_scout::cli::{analyze_cmd, batch_cmd};
use maturity_scout::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mscout",
    about = "Score how digitally mature a company website is",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON to stdout
    #[arg(long, global = true)]
    json: bool,

    /// Suppress progress and informational output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit diagnostic logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    user_agent: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a single domain or URL
    Analyze {
        url: String,

        /// Write the result as a CSV row to this file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Analyze many domains, one after another
    Batch {
        /// File with one URL per line (stdin when omitted)
        #[arg(short, long, conflicts_with = "csv")]
        file: Option<PathBuf>,

        /// Delimited file; the first URL-looking cell of each row is used
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write all results, lowest score first, to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,

        /// Milliseconds to wait between sites
        #[arg(long)]
        pacing_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Output helpers read these, so every command sees the same mode.
    if cli.json {
        std::env::set_var("MSCOUT_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("MSCOUT_QUIET", "1");
    }
    if cli.verbose {
        std::env::set_var("MSCOUT_VERBOSE", "1");
    }
    if cli.no_color {
        std::env::set_var("MSCOUT_NO_COLOR", "1");
    }
    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    logging::init(cli.verbose, log_format);

    let mut config = Config::from_env();
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs);
    }
    if let Some(ua) = cli.user_agent {
        config = config.with_user_agent(ua);
    }

    match cli.command {
        Command::Analyze { url, export } => {
            analyze_cmd::run(&url, &config, export.as_deref()).await
        }
        Command::Batch {
            file,
            csv,
            export,
            pacing_ms,
        } => {
            if let Some(ms) = pacing_ms {
                config = config.with_pacing_ms(ms);
            }
            let input = match (file, csv) {
                (_, Some(path)) => BatchInput::Tabular(path),
                (Some(path), None) => BatchInput::List(path),
                (None, None) => BatchInput::Stdin,
            };
            batch_cmd::run(input, &config, export.as_deref()).await
        }
    }
}
