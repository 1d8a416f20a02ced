//! Run the HTTP server.

use anyhow::Result;
use ketquamn_seo::SiteConfig;
use tracing::info;

use crate::state::AppState;

pub async fn run(config: SiteConfig, bind: &str) -> Result<()> {
    info!("starting ketquamn v{}", env!("CARGO_PKG_VERSION"));
    let state = AppState::from_config(config).into_shared();
    info!(sink = state.sink.name(), "analytics sink selected");
    crate::serve(state, bind).await
}
