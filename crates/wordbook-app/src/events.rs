use kanal::AsyncReceiver;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordbook_types::AppEvent;

use crate::lookup::DictionaryLookupController;
use crate::root::AppRootController;

pub mod capture_photo;
pub mod lookup_word;

use capture_photo::handle_photo_capture;
use lookup_word::handle_lookup;

/// App's main loop
pub async fn event_loop(
    root: AppRootController,
    lookup: DictionaryLookupController,
    host_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    // Lookups and photo saves run here so input keeps flowing while they wait on I/O
    let mut tasks = JoinSet::new();

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = host_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );
        if !handle_events(&root, &lookup, &mut tasks, event) {
            cancel.cancel();
            break;
        }

        while let Some(result) = tasks.try_join_next() {
            if let Err(e) = result {
                tracing::error!("[EVENT_LOOP] Task failed: {}", e);
            }
        }
    }

    tracing::info!("[EVENT_LOOP] Stopping, {} task(s) in flight", tasks.len());
    tasks.shutdown().await;
    Ok(())
}

/// Dispatch one event; returns false when the app should stop
fn handle_events(
    root: &AppRootController,
    lookup: &DictionaryLookupController,
    tasks: &mut JoinSet<()>,
    event: AppEvent,
) -> bool {
    match event {
        AppEvent::ToggleCamera => root.toggle_camera(),
        AppEvent::ShowCamera => root.show_camera(),
        AppEvent::CloseCamera => root.close_camera(),
        AppEvent::PhotoCaptured(data) => handle_photo_capture(root, data, tasks),
        AppEvent::UpdateLanguage(code) => {
            // Persistence finishes on its own
            let _ = root.update_language(&code);
        }
        AppEvent::LookupWord(word) => handle_lookup(lookup, Some(&word), tasks),
        AppEvent::OpenDetail(word) => handle_lookup(lookup, word.as_deref(), tasks),
        AppEvent::Shutdown => {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            return false;
        }
    }

    true
}
