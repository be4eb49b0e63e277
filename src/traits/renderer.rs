use glam::Mat4;

/// Consumer of the per-frame view transform
pub trait ViewConsumer {
    /// Set the active camera transform before any draw calls are issued
    fn set_view(&mut self, view: Mat4);

    /// Rebuild whatever device-dependent state was lost (surface, depth buffer)
    fn on_device_reset(&mut self);
}
