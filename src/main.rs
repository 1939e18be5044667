use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use retailflow::api::CatalogClient;
use retailflow::config::Config;
use retailflow::logging::init_tracing;
use retailflow::ui::{runtime, Route};

#[derive(Parser, Debug)]
#[command(name = "retailflow", version, about = "Terminal storefront and inventory viewer")]
struct Cli {
    /// Path to config file (default: ~/.config/retailflow/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override catalog base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Override inventory page size
    #[arg(long)]
    page_size: Option<u64>,

    /// Screen to open on start
    #[arg(long, value_enum, default_value_t = StartScreen::Home)]
    screen: StartScreen,

    /// Open the detail view of a product on start
    #[arg(long)]
    product: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StartScreen {
    Home,
    Inventory,
    Catalogue,
}

impl From<StartScreen> for Route {
    fn from(screen: StartScreen) -> Self {
        match screen {
            StartScreen::Home => Route::Home,
            StartScreen::Inventory => Route::Inventory,
            StartScreen::Catalogue => Route::Catalogue,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' does not exist", path.display());
            }
            Config::load_from(path)
        }
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let log_path = init_tracing(&config.logging).context("Failed to open log file")?;
    tracing::info!(base_url = %config.api.base_url, "Starting RetailFlow");

    let client = CatalogClient::new(&config.api)?;
    runtime::run(config, client, start_route(&cli)).await?;

    tracing::info!(log = %log_path.display(), "Exited");
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(page_size) = cli.page_size {
        config.ui.page_size = page_size;
    }
}

fn start_route(cli: &Cli) -> Route {
    match cli.product {
        Some(id) => Route::Product(id),
        None => cli.screen.into(),
    }
}
