mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use rowlab::{config, generate, process};
use rowlab_db::pool::{init_pool, DbPool};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on the verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "rowlab=trace,rowlab_db=debug".to_string()
        } else {
            "rowlab=info,rowlab_db=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Seed { count } => seed(cli.config.as_deref(), count),
        Commands::Scan => scan(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("rowlab {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn open_pool(config: &config::Config) -> Result<DbPool> {
    let db_path = config.database.path.to_string_lossy();
    tracing::info!("Opening database at {}", db_path);
    Ok(init_pool(&db_path)?)
}

fn seed(config_path: Option<&std::path::Path>, count: Option<u64>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let count = count.unwrap_or(config.seed.count);
    let pool = open_pool(&config)?;

    let report = generate::run(&pool, count)?;

    println!("Successfully inserted {} records", report.inserted);
    println!("Table now holds {} records", report.total);
    println!("Elapsed: {:.2} seconds", report.elapsed.as_secs_f64());

    Ok(())
}

fn scan(config_path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let pool = open_pool(&config)?;

    let report = process::run(&pool)?;

    println!(
        "Processing completed: {} records in {:.2} seconds",
        report.processed,
        report.elapsed.as_secs_f64()
    );
    if report.processed < report.fetched {
        println!(
            "({} ids fetched, {} no longer present)",
            report.fetched,
            report.fetched - report.processed
        );
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Database: {}", config.database.path.display());
            println!("  Default seed count: {}", config.seed.count);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Database: {}", config.database.path.display());
            println!("  Default seed count: {}", config.seed.count);
        }
    }

    Ok(())
}
