use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "structmap")]
#[command(about = "Heuristic C source structure mapper", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a codebase and emit its structure tree as JSON
    Analyze {
        /// Root directory to scan
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Project name for the root node (defaults to the directory name)
        #[arg(long)]
        project_name: Option<String>,

        /// Threshold configuration file (defaults to <path>/structmap.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Increase log verbosity (-v: debug, -vv: trace)
        #[arg(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}
