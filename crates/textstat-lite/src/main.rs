//! textstat-lite server entry point

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textstat_lite::{bind_addr_from_env, run_server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
  // Initialize logging
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  let bind_addr = bind_addr_from_env();
  tracing::info!(bind_addr = %bind_addr, "configuration loaded");

  run_server(&bind_addr).await
}
