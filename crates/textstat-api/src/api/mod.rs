//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{get_health, get_root, post_analyze};
pub use routes::{create_router, run_server};
pub use state::AppState;
