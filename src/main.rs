use tokio::net::TcpListener;

use flatwiki::logger::Logger;
use flatwiki::{build_router, AppState, Config, PageStore, TemplateComponent, WikiError};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    if let Err(e) = Logger::init() {
        eprintln!("Logger already initialized: {}", e);
    }

    let config = Config::from_env()?;
    let store = PageStore::new(config.data_dir.clone());
    store.ensure_dir()?;
    let templates = TemplateComponent::load(&config.template_dir)?;

    let app = build_router(AppState::new(store, templates));

    let addr = config.socket_addr()?;
    log::info!("Wiki listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(WikiError::from)
}
