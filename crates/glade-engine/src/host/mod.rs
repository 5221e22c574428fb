//! Surface lifecycle: binds a backdrop to a host's surface, frame scheduler
//! and resize notifications.
//!
//! The host owns the actual callbacks (requestAnimationFrame, window resize
//! events, a test harness). It calls `BackdropMount::on_frame` when a
//! requested frame fires and `BackdropMount::on_resize` when the viewport
//! changes. Dropping the mount cancels the pending frame and removes the
//! resize subscription, so teardown is a single release on every path.

use crate::api::backdrop::Backdrop;
use crate::api::config::BackdropConfig;
use crate::api::types::{FrameRequest, ResizeSubscription, SurfaceSize};
use crate::renderer::traits::Painter;

/// Platform services a mounted backdrop needs.
pub trait Host {
    type Surface: Painter;

    /// Bind the drawable surface. `None` when it or its paint context is unavailable.
    fn acquire_surface(&self) -> Option<Self::Surface>;

    /// Current viewport size in pixels.
    fn viewport(&self) -> SurfaceSize;

    /// Seed for the scene RNG when the config does not pin one.
    fn seed(&self) -> u64;

    /// Schedule one frame callback at display cadence.
    fn request_frame(&self) -> Option<FrameRequest>;

    fn cancel_frame(&self, request: FrameRequest);

    /// Start delivering viewport-resize notifications.
    fn subscribe_resize(&self) -> Option<ResizeSubscription>;

    fn unsubscribe_resize(&self, subscription: ResizeSubscription);
}

/// A backdrop in the `Mounted` state. `Unmounted` is the absence of one.
pub struct BackdropMount<H: Host> {
    host: H,
    surface: H::Surface,
    backdrop: Backdrop,
    pending: Option<FrameRequest>,
    resize: Option<ResizeSubscription>,
}

impl<H: Host> BackdropMount<H> {
    /// Mount on `host`: size the surface, generate the scene, subscribe to
    /// resize and schedule the first frame.
    ///
    /// Returns `None` without registering anything if the surface is unavailable.
    pub fn mount(host: H, config: BackdropConfig) -> Option<Self> {
        let Some(mut surface) = host.acquire_surface() else {
            log::debug!("backdrop: no drawable surface, skipping mount");
            return None;
        };

        let size = host.viewport();
        surface.set_size(size);
        let backdrop = Backdrop::new(config, size, host.seed());

        // Built before acquiring anything else, so Drop covers every later step.
        let mut mount = Self {
            host,
            surface,
            backdrop,
            pending: None,
            resize: None,
        };
        mount.resize = mount.host.subscribe_resize();
        mount.schedule();

        log::info!(
            "backdrop: mounted at {}x{} ({} fireflies, {} trees)",
            size.width,
            size.height,
            mount.backdrop.scene().fireflies().len(),
            mount.backdrop.scene().trees().len()
        );
        Some(mount)
    }

    fn schedule(&mut self) {
        self.pending = self.host.request_frame();
        if self.pending.is_none() {
            log::warn!("backdrop: frame request failed, animation stopped");
        }
    }

    /// The scheduled frame fired: render it and schedule the next one.
    pub fn on_frame(&mut self) {
        self.pending = None;
        self.backdrop.render(&mut self.surface);
        self.schedule();
    }

    /// The viewport changed: rebind the surface size. Entities are kept.
    pub fn on_resize(&mut self) {
        let size = self.host.viewport();
        log::debug!("backdrop: resize to {}x{}", size.width, size.height);
        self.surface.set_size(size);
        self.backdrop.resize(size);
    }

    /// Tear down. Equivalent to dropping the mount.
    pub fn unmount(self) {}

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn surface(&self) -> &H::Surface {
        &self.surface
    }

    /// Whether a frame callback is currently pending.
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    fn release(&mut self) {
        if let Some(request) = self.pending.take() {
            self.host.cancel_frame(request);
        }
        if let Some(subscription) = self.resize.take() {
            self.host.unsubscribe_resize(subscription);
        }
    }
}

impl<H: Host> Drop for BackdropMount<H> {
    fn drop(&mut self) {
        self.release();
        log::debug!(
            "backdrop: unmounted after {} frames",
            self.backdrop.frame_count()
        );
    }
}
