use super::commands;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log progress at info level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Composition, classification and geometry statistics for a PDB file
    Report {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Dump the raw fixed-column fields of each coordinate record
    Fields {
        #[arg(short, long)]
        input: PathBuf,
        /// Comma separated field names, e.g. `res_name,chain_id,x`. Unknown names are ignored.
        #[arg(short, long, value_delimiter = ',')]
        fields: Option<Vec<String>>,
        /// Read HETATM records (waters excluded) instead of ATOM records
        #[arg(long)]
        hetatm: bool,
    },
}

impl Cli {
    pub fn init_logging(&self) {
        let level = if self.verbose { "info" } else { "warn" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    }

    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Report { input, format } => commands::report::execute(input, format),
            Commands::Fields {
                input,
                fields,
                hetatm,
            } => commands::fields::execute(input, fields, hetatm),
        }
    }
}
