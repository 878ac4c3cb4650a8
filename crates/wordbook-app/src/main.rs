use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordbook_core::Catalog;
use wordbook_dictionary::OxfordClient;
use wordbook_io::{FileLanguageStore, FilePhotoStore};

pub mod camera;
pub mod controller;
pub mod events;
pub mod io;
pub mod lookup;
pub mod root;
pub mod settings;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::lookup::DictionaryLookupController;
use self::root::AppRootController;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = settings::load_config()?;
    init_tracing(config.log_json);

    let catalog = Arc::new(Catalog::from_config(&config.locale)?);
    let photos = Arc::new(FilePhotoStore::from_config(&config.storage));
    let languages = Arc::new(FileLanguageStore::from_config(&config.storage));
    tracing::info!("Storing data in {}", config.storage.document_dir.display());

    if !config.dictionary.has_credentials() {
        tracing::warn!("OXFORD_APP_ID / OXFORD_APP_KEY not set, lookups will fail");
    }
    let service = Arc::new(OxfordClient::new(&config.dictionary)?);

    let root = AppRootController::new(photos, languages, catalog.clone(), config.locale.clone());
    let lookup = DictionaryLookupController::new(service, catalog, root.subscribe());
    let app = AppController::new(root, lookup, config.event_queue_capacity);

    let mut tasks = app.spawn_tasks();
    let cancel = app.cancel_token();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = cancel.cancelled() => {
            tracing::info!("Shutdown requested from the app");
        }
    }

    app.shutdown();
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("Task exited with error: {e}"),
            Err(e) => tracing::error!("Task panicked: {e}"),
        }
    }

    // The stdin reader sits on a blocking thread the runtime would otherwise wait on
    std::process::exit(0);
}
