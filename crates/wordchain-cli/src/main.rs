use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordchain_infrastructure::{ConfigService, TomlWordPairRepository};

mod commands;

#[derive(Parser)]
#[command(name = "wordchain-admin")]
#[command(about = "Manage Word Chain pairs and sample chains", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.config/wordchain/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Word pair store, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pairs_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage stored word pairs
    Pairs {
        #[command(subcommand)]
        action: PairsAction,
    },
    /// Sample a chain from the stored pairs
    Generate {
        /// Seed for a reproducible chain
        #[arg(long)]
        seed: Option<u64>,
        /// Walks to try before giving up (defaults to the configured value)
        #[arg(long)]
        max_attempts: Option<usize>,
    },
    /// Show corpus statistics
    Stats,
}

#[derive(Subcommand)]
enum PairsAction {
    /// Add one pair
    Add {
        first_word: String,
        second_word: String,
    },
    /// List all pairs
    List,
    /// Import pairs from a TOML store file or a plain-text list
    Import { file: PathBuf },
    /// Remove every pair
    Clear {
        /// Skip the safety check
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigService::load(cli.config.as_deref())?;
    let path = match cli.pairs_file {
        Some(path) => path,
        None => ConfigService::word_pairs_path(&config)?,
    };
    let repository = TomlWordPairRepository::new(path);

    match cli.command {
        Commands::Pairs { action } => match action {
            PairsAction::Add {
                first_word,
                second_word,
            } => commands::pairs::add(&repository, &first_word, &second_word).await?,
            PairsAction::List => commands::pairs::list(&repository).await?,
            PairsAction::Import { file } => commands::pairs::import(&repository, &file).await?,
            PairsAction::Clear { yes } => commands::pairs::clear(&repository, yes).await?,
        },
        Commands::Generate { seed, max_attempts } => {
            let max_attempts = max_attempts.unwrap_or(config.game.max_attempts);
            commands::generate::run(&repository, seed, max_attempts).await?
        }
        Commands::Stats => commands::generate::stats(&repository).await?,
    }

    Ok(())
}
