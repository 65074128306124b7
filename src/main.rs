use anyhow::{Context, Result};
use std::sync::Arc;

use taskdeck::api::HttpTaskApi;
use taskdeck::config::Config;
use taskdeck::constants::ENV_ID_TOKEN;
use taskdeck::logger::Logger;
use taskdeck::session::SessionHolder;
use taskdeck::storage::LocalStorage;
use taskdeck::tasks::TaskStoreClient;
use taskdeck::ui::{self, AppComponent};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some(flag) = args.first() {
        match flag.as_str() {
            "--generate-config" => {
                let path = match args.get(1) {
                    Some(path) => path.into(),
                    None => Config::get_default_config_path()?,
                };
                return Config::generate_default_config(path);
            }
            "--help" | "-h" => {
                println!("Usage: taskdeck [--generate-config [PATH]]");
                println!();
                println!("Set {} to sign in with a Google ID token on startup.", ENV_ID_TOKEN);
                return Ok(());
            }
            other => anyhow::bail!("Unknown argument '{}'. Try --help.", other),
        }
    }

    let config = Config::load()?;
    let logger = Logger::from_config(config.logging.enabled)?;

    let database_path = config.storage.resolve_database_path()?;
    let store = LocalStorage::open(&database_path)
        .await
        .with_context(|| format!("Failed to open local store at {}", database_path.display()))?;

    let api = HttpTaskApi::new(&config.api.base_url, config.api.request_timeout())?;
    logger.log(format!("Main: Using task service at {}", api.base_url()));

    let session = SessionHolder::new(Arc::new(store), logger.clone());
    let task_store = TaskStoreClient::new(Arc::new(api), logger.clone());

    let mut app = AppComponent::new(session, task_store, logger.clone(), &config.display);
    app.restore().await;

    if !app.state().is_signed_in() {
        if let Ok(token) = std::env::var(ENV_ID_TOKEN) {
            logger.log(format!("Main: Signing in from {}", ENV_ID_TOKEN));
            app.login(&token).await;
        }
    }

    ui::run_app(app).await
}
