use clap::Parser;
use search_radar::auth::Authenticator;
use search_radar::cli::tracing_init::init_tracing;
use search_radar::cli::{parse_failure_exit_code, Cli};
use search_radar::client::RadarClient;
use search_radar::config::manager::ConfigManager;
use search_radar::config::settings::Settings;
use search_radar::error::Error;
use search_radar::search::run_search;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let printed = e.print();
            std::process::exit(parse_failure_exit_code(&e, &printed));
        }
    };

    init_tracing(cli.verbosity);

    if let Err(e) = run(&cli).await {
        tracing::debug!(error = ?e, "search failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<(), Error> {
    let file_config = ConfigManager::new()?.load()?;
    let settings = Settings::resolve(&cli.overrides(), file_config)?;

    let client = RadarClient::new(&settings, Authenticator::from_settings(&settings))?;

    let mut stdout = std::io::stdout().lock();
    run_search(&client, &cli.search_request(), &mut stdout).await?;
    Ok(())
}
