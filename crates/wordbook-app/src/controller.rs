use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordbook_core::Catalog;
use wordbook_types::AppEvent;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::lookup::DictionaryLookupController;
use crate::root::AppRootController;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub host_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            host_to_app: kanal::bounded_async(capacity.max(1)),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    root: AppRootController,
    lookup: DictionaryLookupController,
    catalog: Arc<Catalog>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(
        root: AppRootController,
        lookup: DictionaryLookupController,
        event_queue_capacity: usize,
    ) -> Self {
        let catalog = root.catalog().clone();

        Self {
            channels: ChannelSet::new(event_queue_capacity),
            root,
            lookup,
            catalog,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Handle for anything that wants to inject host events
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn events(&self) -> AsyncSender<AppEvent> {
        self.channels.host_to_app.0.clone()
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        self.spawn_core(&mut tasks);

        // Console watcher
        tasks.spawn(watcher_io(
            self.cancel_token.child_token(),
            self.channels.host_to_app.0.clone(),
        ));

        tasks
    }

    /// Everything except the console watcher
    pub fn spawn_core(&self, tasks: &mut JoinSet<anyhow::Result<()>>) {
        // Startup restore, screens render defaults until it lands
        let root = self.root.clone();
        tasks.spawn(async move {
            root.initialize().await;
            Ok(())
        });

        // Event loop, the app stops with it
        let events = event_loop(
            self.root.clone(),
            self.lookup.clone(),
            self.channels.host_to_app.1.clone(),
            self.cancel_token.clone(),
        );
        let cancel = self.cancel_token.clone();
        tasks.spawn(async move {
            let result = events.await;
            cancel.cancel();
            result
        });

        // UI loop
        tasks.spawn(ui_loop(
            self.root.subscribe(),
            self.lookup.subscribe(),
            self.catalog.clone(),
            self.cancel_token.child_token(),
        ));
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
