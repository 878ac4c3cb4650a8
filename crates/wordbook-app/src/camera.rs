use std::sync::Arc;

use tokio::sync::watch;
use wordbook_core::{AppState, CameraController};

/// Camera capability handed to views in place of the root controller
#[derive(Clone)]
pub struct CameraHandle {
    state: Arc<watch::Sender<AppState>>,
}

impl CameraHandle {
    pub(crate) fn new(state: Arc<watch::Sender<AppState>>) -> Self {
        Self { state }
    }

    fn set_visible(&self, visible: bool) {
        let changed = self.state.send_if_modified(|s| {
            if s.camera_visible == visible {
                return false;
            }
            s.camera_visible = visible;
            true
        });

        if changed {
            tracing::debug!("Camera visible: {}", visible);
        }
    }
}

impl CameraController for CameraHandle {
    fn toggle(&self) {
        self.state.send_modify(|s| s.camera_visible = !s.camera_visible);
        tracing::debug!("Camera visible: {}", self.state.borrow().camera_visible);
    }

    fn show(&self) {
        self.set_visible(true);
    }

    fn close(&self) {
        self.set_visible(false);
    }
}
