use std::sync::Arc;

use tokio::net::TcpListener;

use encyclopedia::logger::Logger;
use encyclopedia::{app_router, AppState, Config, FileStore, WikiError};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("Failed to initialize logger: {e}");
    }

    let config = Config::from_env()?;
    let store = FileStore::new(config.entries_dir.as_ref().clone());
    store.ensure_dir()?;

    let state = AppState {
        store: Arc::new(store),
        static_dir: config.static_dir.clone(),
    };
    let app = app_router(state);

    let addr = config.socket_addr()?;
    log::info!("Encyclopedia listening on http://{} (entries in {:?})", addr, config.entries_dir);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
