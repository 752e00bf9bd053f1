#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use hemicycle_web::{
    app::build_router,
    assembly::HttpAssemblyClient,
    build_info::BuildInfo,
    config::Config,
    state::AppState,
};

/// Citizen-transparency web front-end for French parliamentary data.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    // Load and validate configuration first (fail-fast)
    let config = Config::load_from(&cli.config).map_err(|e| anyhow::anyhow!("{e}"))?;

    // Set up logging from config
    std::env::set_var("RUST_LOG", &config.logging.level);
    tracing_subscriber::fmt::init();

    // Init banner so container logs clearly show startup
    let build_info = BuildInfo::from_env();
    tracing::info!(
        version = %build_info.version,
        git_sha = %build_info.git_sha,
        build_time = %build_info.build_time,
        "hemicycle-web starting up"
    );

    // Upstream API client
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.api.timeout_secs))
        .build()?;
    let api = Arc::new(HttpAssemblyClient::with_client(
        http_client,
        config.api.base_url.clone(),
    ));
    tracing::info!(base_url = %config.api.base_url, "upstream parliamentary API configured");

    let state = Arc::new(AppState::new(&config, api, build_info));
    let app = build_router(state, &config.security_headers);

    // Start the server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting server at http://{addr}/deputes");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
