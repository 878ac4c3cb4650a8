/// Narrow handle views get for driving the camera overlay.
///
/// Views never see the controller that owns the camera flag; they hold one of
/// these instead.
pub trait CameraController: Send + Sync {
    fn toggle(&self);

    fn show(&self);

    fn close(&self);
}
