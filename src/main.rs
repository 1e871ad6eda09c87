use clap::{Parser, Subcommand};
use queue_scout::backend::BackendClient;
use queue_scout::config::{self, Config};
use queue_scout::display;
use queue_scout::error::AppError;
use queue_scout::location::platform::{ConfiguredLocationProvider, ConfiguredPermissionProbe};
use queue_scout::location::{PermissionGate, resolve_default_region};
use queue_scout::state::Selection;
use queue_scout::persist;
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "queue-scout", about = "Queue wait-time estimates for planned visits")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-run location-based region resolution and save the result
    Locate,
    /// List supported regions
    Regions,
    /// List stores in a region (defaults to the saved region)
    Stores {
        #[arg(long)]
        region: Option<String>,
    },
    /// List dates with data for a store (defaults to the saved store)
    Dates {
        #[arg(long)]
        store_id: Option<u32>,
    },
    /// Show the queue statistics snapshot for a store and date
    Stats {
        #[arg(long)]
        store_id: Option<u32>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Estimate the ticket-draw time and wait for a planned visit time
    Analyze {
        #[arg(long)]
        store_id: Option<u32>,
        /// Planned visit time, HH:MM within business hours
        #[arg(long)]
        time: String,
        /// Also print the classified per-record history
        #[arg(long)]
        history: bool,
    },
}

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt().with_target(false).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    let config = config::load_from_path(&cli.config)?;
    tracing::info!(app = config.app.name, "starting");

    let client = BackendClient::new(config.base_url(), config.request_timeout())?;
    let selection_path = config.selection_path();
    let mut selection = persist::load(&selection_path);

    // Startup region resolution, same three steps as a manual `locate`.
    if selection.region.is_none() && !matches!(cli.command, Command::Locate) {
        if let Some(region) = locate_region(&config, &client).await {
            selection.set_region(region);
            persist::save(&selection_path, &selection);
        }
    }

    let outcome = run_command(cli.command, &config, &client, &mut selection).await;

    match outcome {
        Ok(changed) => {
            if changed {
                persist::save(&selection_path, &selection);
            }
            Ok(())
        }
        Err(err) => {
            present(&err);
            std::process::exit(1);
        }
    }
}

/// Run the permission -> locate -> nearest-match sequence once.
async fn locate_region(config: &Config, client: &BackendClient) -> Option<String> {
    let supported = match client.regions().await {
        Ok(regions) => regions,
        Err(err) => {
            present(&err);
            return None;
        }
    };

    let probe = ConfiguredPermissionProbe::new(config.permission_state(), config.prompt_response());
    let provider = ConfiguredLocationProvider::new(config.coordinate());
    let mut gate = PermissionGate::new(probe);

    resolve_default_region(&mut gate, &provider, &supported, config.fallback_region()).await
}

/// Execute one subcommand. Returns whether the selection changed.
async fn run_command(
    command: Command,
    config: &Config,
    client: &BackendClient,
    selection: &mut Selection,
) -> Result<bool, AppError> {
    match command {
        Command::Locate => match locate_region(config, client).await {
            Some(region) => {
                println!("Resolved region: {region}");
                selection.set_region(region);
                Ok(true)
            }
            None => {
                println!("No region could be resolved.");
                Ok(false)
            }
        },
        Command::Regions => {
            let regions = client.regions().await?;
            for region in &regions {
                println!("{region}");
            }
            Ok(false)
        }
        Command::Stores { region } => {
            let region = region
                .or_else(|| selection.region.clone())
                .ok_or_else(|| missing("no region selected; pass --region or run `locate`"))?;
            let stores = client.stores(&region).await?;
            for store in &stores {
                println!("{:>6}  {}", store.id, store.name);
            }
            selection.set_region(region);
            Ok(true)
        }
        Command::Dates { store_id } => {
            let store_id = store_id
                .or(selection.store_id)
                .ok_or_else(|| missing("no store selected; pass --store-id"))?;
            let dates = client.dates(store_id).await?;
            for date in &dates {
                println!("{date}");
            }
            selection.set_store(store_id);
            Ok(true)
        }
        Command::Stats { store_id, date } => {
            let store_id = store_id
                .or(selection.store_id)
                .ok_or_else(|| missing("no store selected; pass --store-id"))?;
            let date = date
                .or_else(|| selection.date.clone())
                .ok_or_else(|| missing("no date selected; pass --date"))?;
            let stats = client.queue_stats(store_id, &date).await?;
            print!("{}", display::render_queue_stats(&stats));
            selection.set_store(store_id);
            selection.set_date(date);
            Ok(true)
        }
        Command::Analyze {
            store_id,
            time,
            history,
        } => {
            let store_id = store_id
                .or(selection.store_id)
                .ok_or_else(|| missing("no store selected; pass --store-id"))?;
            let analysis = client.analyze_dining_time(store_id, &time).await?;
            print!("{}", display::render_report(&analysis.report));
            print!("{}", display::render_suggestion(&analysis.suggestion));
            if history {
                print!("{}", display::render_history(&analysis.history));
            }
            selection.set_store(store_id);
            Ok(true)
        }
    }
}

fn missing(hint: &str) -> AppError {
    AppError::MissingSelection(hint.to_string())
}

/// Print an error the way its severity demands. Blocking notices wait for an
/// explicit acknowledgment; transient ones just print and move on.
fn present(err: &AppError) {
    let notice = err.notice();
    eprintln!("{}", display::render_notice(&notice));
    if notice.blocking {
        eprintln!("Press Enter to continue.");
        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    }
}

#[cfg(test)]
mod tests {
    use queue_scout::config;

    #[test]
    fn default_config_is_valid_toml() -> Result<(), Box<dyn std::error::Error>> {
        let config = config::load_default()?;
        assert_eq!(config.app.name, "queue-scout");
        assert_eq!(config.fallback_region(), "杭州");
        Ok(())
    }
}
