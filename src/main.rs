use anyhow::Result;
use clap::Parser;

use structmap::cli::{Cli, Commands};
use structmap::config::StructmapConfig;
use structmap::io::output::create_writer;
use structmap::io::walker::CodebaseWalker;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            output,
            project_name,
            config,
            verbose,
        } => {
            init_logging(verbose);

            let root = path.canonicalize().unwrap_or(path);
            let config = StructmapConfig::load(config.as_deref(), &root)?;

            let mut walker =
                CodebaseWalker::new(root.clone()).with_thresholds(config.thresholds);
            if let Some(name) = project_name {
                walker = walker.with_project_name(name);
            }

            let tree = walker.walk()?;
            create_writer(output.clone())?.write_tree(&tree)?;

            let functions = structmap::core::metrics::collect_functions(&tree);
            let max = functions.iter().map(|f| f.complexity).max().unwrap_or(0);
            log::info!(
                "Scanned {} functions, max cyclomatic complexity {}",
                functions.len(),
                max
            );

            match output {
                Some(path) => log::info!("Scan complete. Output written to {}", path.display()),
                None => log::info!("Scan complete."),
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(filter)
        .init();
}
