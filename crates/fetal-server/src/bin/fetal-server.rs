use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fetal_artifacts::ArtifactStore;
use fetal_core::config::ConfigOverrides;
use fetal_core::FetalConfig;
use fetal_inference::InferencePipeline;
use fetal_server::{router, AppState};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "fetal-server",
    version,
    about = "Serve fetal health classification over HTTP",
    long_about = "Loads the fitted scaler and classifier once, then serves the \
        form page at / and JSON predictions at /api/predict.\n\n\
        Startup fails, without binding, if either artifact cannot be loaded."
)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Scaler artifact, overrides artifacts.scaler_path
    #[arg(long)]
    scaler: Option<String>,

    /// Classifier artifact, overrides artifacts.classifier_path
    #[arg(long)]
    model: Option<String>,

    /// Bind host, overrides server.host
    #[arg(long)]
    host: Option<String>,

    /// Bind port, overrides server.port
    #[arg(short, long)]
    port: Option<u16>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            scaler_path: self.scaler.clone(),
            classifier_path: self.model.clone(),
            host: self.host.clone(),
            port: self.port,
            log_level: ConfigOverrides::log_level_for_verbosity(self.verbose),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = FetalConfig::resolve(cli.config.as_deref(), cli.overrides())
        .context("invalid configuration")?;

    fetal_observability::init_tracing(&config.observability);

    let store = ArtifactStore::load(&config.artifacts).context("cannot load model artifacts")?;
    let state = AppState::new(InferencePipeline::from_store(store));

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    info!(%addr, "fetal-server listening on http://{addr}");
    axum::serve(listener, router(state))
        .await
        .context("server error")?;
    Ok(())
}
