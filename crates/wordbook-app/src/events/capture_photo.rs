use tokio::task::JoinSet;

use crate::root::AppRootController;

pub fn handle_photo_capture(root: &AppRootController, data: String, tasks: &mut JoinSet<()>) {
    if !root.snapshot().camera_visible {
        tracing::warn!("Photo arrived while the camera is closed, ignoring");
        return;
    }

    // Closed in event order, so a capture queued right behind this one is dropped
    root.close_camera();
    tracing::debug!("Captured image: {} chars", data.len());

    let root = root.clone();
    tasks.spawn(async move {
        root.capture_photo(&data).await;
    });
}
