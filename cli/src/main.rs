mod swipe;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use trivet_core::{
    render_grocery_list, write_grocery_list, Config, Groceries, LikedMeals, MealStore, StoreError,
};

#[derive(Parser)]
#[command(name = "trivet")]
#[command(about = "Swipe through random meals and build a grocery list", long_about = None)]
struct Cli {
    /// Storage directory (default: TRIVET_DATA_DIR or ~/.trivet/store)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swipe through random meals, liking or skipping each one
    Swipe,
    /// Print the saved grocery list
    List,
    /// Print the saved liked meals
    Meals,
    /// Write the saved grocery list to a file
    Export {
        /// Output path
        #[arg(long, default_value = "grocery-list.txt")]
        output: PathBuf,
    },
    /// Fetch and print one random meal without starting a session
    Peek,
    /// Reset the saved state to empty
    Reset,
    /// Delete the storage directory
    Clear,
}

/// Console logging, filtered by RUST_LOG.
fn init_telemetry() {
    let fmt_layer = tracing_subscriber::fmt::layer();
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_telemetry();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        endpoint = %config.endpoint,
        "configuration loaded"
    );

    match cli.command {
        Commands::Swipe => swipe::run(&config).await?,
        Commands::List => list(&config)?,
        Commands::Meals => meals(&config)?,
        Commands::Export { output } => export(&config, &output)?,
        Commands::Peek => peek().await?,
        Commands::Reset => reset(&config)?,
        Commands::Clear => clear(&config)?,
    }

    Ok(())
}

fn open_store(config: &Config) -> MealStore {
    MealStore::new(config.data_dir.clone())
}

/// Load saved state, turning "nothing saved" into None.
fn load_saved(config: &Config) -> Result<Option<(LikedMeals, Groceries)>> {
    match open_store(config).load() {
        Ok(state) => Ok(Some(state)),
        Err(StoreError::NotFound) => Ok(None),
        Err(e) => Err(e).context("failed to load saved state"),
    }
}

fn list(config: &Config) -> Result<()> {
    let Some((_, groceries)) = load_saved(config)? else {
        println!("No saved state found. Run `trivet swipe` and save first.");
        return Ok(());
    };

    if groceries.is_empty() {
        println!("Grocery list is empty.");
    } else {
        print!("{}", render_grocery_list(&groceries));
    }
    Ok(())
}

fn meals(config: &Config) -> Result<()> {
    let Some((liked, _)) = load_saved(config)? else {
        println!("No saved state found. Run `trivet swipe` and save first.");
        return Ok(());
    };

    if liked.is_empty() {
        println!("No liked meals yet.");
        return Ok(());
    }
    for (name, source) in &liked {
        if source.is_empty() {
            println!("{}", name);
        } else {
            println!("{} ({})", name, source);
        }
    }
    Ok(())
}

fn export(config: &Config, output: &Path) -> Result<()> {
    let Some((_, groceries)) = load_saved(config)? else {
        println!("No saved state found. Run `trivet swipe` and save first.");
        return Ok(());
    };

    write_grocery_list(&groceries, output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Wrote {} ({} items)", output.display(), groceries.len());
    Ok(())
}

async fn peek() -> Result<()> {
    let meal = trivet_core::fetch_random_meal()
        .await
        .context("failed to fetch a meal")?;
    swipe::print_card(&meal);
    Ok(())
}

fn reset(config: &Config) -> Result<()> {
    open_store(config)
        .save(&LikedMeals::new(), &Groceries::new())
        .context("failed to reset saved state")?;
    println!("Saved state reset to empty.");
    Ok(())
}

fn clear(config: &Config) -> Result<()> {
    open_store(config)
        .clear()
        .context("failed to clear stored data")?;
    println!("Removed stored data under {}", config.data_dir.display());
    Ok(())
}
