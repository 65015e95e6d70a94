use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;
use ytshuffle_cli::commands::source::{SourceArgs, WriteArgs};
use ytshuffle_cli::config::Config;
use ytshuffle_cli::{OutputFormat, commands};

#[derive(Parser)]
#[command(name = "ytshuffle")]
#[command(author, version)]
#[command(
    about = "Open a random YouTube link from your exported browser bookmarks",
    long_about = "ytshuffle extracts YouTube links from a Netscape-format bookmarks export, \
                  keeps them as a CSV or Excel playlist, and opens a randomly chosen song \
                  in your browser. Running without a subcommand is the same as `ytshuffle play`."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (JSON)
    #[arg(
        short,
        long,
        global = true,
        env = "YTSHUFFLE_CONFIG",
        value_name = "FILE"
    )]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a random song and open it in the browser
    Play {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        write: WriteArgs,

        /// Print the pick without launching a browser
        #[arg(long)]
        no_open: bool,
    },

    /// Convert a playlist source into a CSV or Excel file
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file; the extension (.csv or .xlsx) selects the format
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },

    /// Show every song in a playlist source
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Play {
        source: SourceArgs::default(),
        write: WriteArgs::default(),
        no_open: false,
    });

    let load_config = || -> Result<Config> {
        let config = Config::discover(cli.config.as_deref())?;
        tracing::debug!("Using configuration: {:?}", config);
        Ok(config)
    };

    match command {
        Commands::Play {
            source,
            write,
            no_open,
        } => commands::play::execute(&source, &write, no_open, &load_config()?, cli.format),
        Commands::Export { source, output } => {
            commands::export::execute(&source, &output, &load_config()?)
        }
        Commands::List { source } => {
            commands::list::execute(&source, &load_config()?, cli.format)
        }
        Commands::Completion { shell } => {
            commands::completion::execute(shell, &mut Cli::command())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(
                "ytshuffle=debug,ytshuffle_cli=debug,ytshuffle_core=debug,ytshuffle_browser=debug",
            )
        } else {
            EnvFilter::new(
                "warn,ytshuffle=info,ytshuffle_cli=info,ytshuffle_core=info,ytshuffle_browser=info",
            )
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_play_reads_and_writes_in_one_run() {
        let cli = Cli::try_parse_from([
            "ytshuffle",
            "play",
            "--read-from-csv",
            "songs.csv",
            "--write-to-csv",
            "copy.csv",
            "--write-to-xlsx",
            "copy.xlsx",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Play { source, write, .. }) => {
                assert_eq!(source.csv, Some(Some(PathBuf::from("songs.csv"))));
                assert_eq!(write.csv, Some(Some(PathBuf::from("copy.csv"))));
                assert_eq!(write.xlsx, Some(Some(PathBuf::from("copy.xlsx"))));
            }
            _ => panic!("expected the play subcommand"),
        }
    }
}
