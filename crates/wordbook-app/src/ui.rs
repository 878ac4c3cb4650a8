use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use wordbook_core::locale::{CAMERA_HIDDEN, CAMERA_VISIBLE, LOADING, TITLE};
use wordbook_core::{AppState, Catalog};
use wordbook_types::{LookupResult, LookupState, ProfilePhoto};

/// Re-render the console screen whenever app or lookup state changes
pub async fn ui_loop(
    mut app_rx: watch::Receiver<AppState>,
    mut lookup_rx: watch::Receiver<LookupResult>,
    catalog: Arc<Catalog>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let screen = {
            let app = app_rx.borrow_and_update();
            let lookup = lookup_rx.borrow_and_update();
            render_screen(&app, &lookup, &catalog)
        };
        println!("{screen}");

        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = app_rx.changed() => changed?,
            changed = lookup_rx.changed() => changed?,
        }
    }

    tracing::debug!("[UI] Render loop stopped");
    Ok(())
}

pub fn render_screen(app: &AppState, lookup: &LookupResult, catalog: &Catalog) -> String {
    let lang = app.language.as_str();
    let mut lines = Vec::new();

    let tabs = ["TabNav.Tabs.Search", "TabNav.Tabs.Fav", "TabNav.Tabs.Setting"]
        .map(|key| catalog.localize(lang, key));
    lines.push(format!(
        "== {} [{}] | {} ==",
        catalog.localize(lang, TITLE),
        lang,
        tabs.join(" / ")
    ));

    let photo = match &app.profile_photo {
        ProfilePhoto::Bundled(path) => path.clone(),
        ProfilePhoto::Encoded(bytes) => format!("{} bytes", bytes.len()),
    };
    let camera = if app.camera_visible {
        CAMERA_VISIBLE
    } else {
        CAMERA_HIDDEN
    };
    lines.push(format!(
        "{}: {} | {}",
        catalog.localize(lang, "DrawerNav.Screens.MyProfile"),
        photo,
        catalog.localize(lang, camera)
    ));

    match &lookup.state {
        LookupState::Idle => {}
        LookupState::Loading => lines.push(catalog.localize(lang, LOADING)),
        LookupState::Error(message) => lines.push(format!("! {message}")),
        LookupState::Success(def) => {
            lines.push(def.word.clone());
            for entry in &def.entries {
                let said = entry.pronunciations.first().map(String::as_str).unwrap_or("");
                lines.push(format!("  {} /{}/", entry.category, said));
                for (i, sense) in entry.senses.iter().enumerate() {
                    lines.push(format!("    {}. {}", i + 1, sense.definitions.join("; ")));
                    for example in &sense.examples {
                        lines.push(format!("       \"{example}\""));
                    }
                }
            }
        }
    }

    lines.join("\n")
}
