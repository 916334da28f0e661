use anagram_config::ConfigOverrides;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Output format for offline commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "anagrams")]
#[command(about = "anagrams - an in-memory anagram dictionary served over HTTP")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses config file value or defaults to 'info'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (defaults to ~/.config/anagrams/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Newline-delimited word list to seed the dictionary (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print statistics for the dictionary word list
    Stats {
        #[arg(short = 'f', long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the anagrams of a word found in the dictionary word list
    Group {
        word: String,

        /// Keep at most this many anagrams
        #[arg(long)]
        limit: Option<usize>,

        /// Leave the word itself out of the result
        #[arg(long = "exclude-self")]
        exclude_self: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    /// Explicit log level, if one was requested on the command line
    pub fn level_override(&self) -> Option<LevelFilter> {
        if self.verbose {
            Some(LevelFilter::DEBUG)
        } else {
            self.log_level.map(Into::into)
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        let (host, port) = match &self.command {
            Commands::Serve { host, port } => (host.clone(), *port),
            _ => (None, None),
        };
        ConfigOverrides {
            host,
            port,
            dictionary: self.dictionary.clone(),
            log_level: self
                .level_override()
                .map(|level| level.to_string().to_lowercase()),
        }
    }
}
