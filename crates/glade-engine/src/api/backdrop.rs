use crate::api::config::BackdropConfig;
use crate::api::types::SurfaceSize;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::renderer::traits::Painter;
use crate::systems::frame::render_frame;
use crate::systems::generate::generate_scene;

/// One running backdrop: entity sets, current surface size, RNG and config.
///
/// The scene is generated once in `new`. `resize` only updates the stored
/// size; entities keep the coordinates they were generated with and drift
/// back into view through wraparound.
pub struct Backdrop {
    scene: Scene,
    size: SurfaceSize,
    rng: Rng,
    config: BackdropConfig,
    frame: u64,
}

impl Backdrop {
    /// Generate the scene for `size`. `seed` is used when the config has none.
    pub fn new(config: BackdropConfig, size: SurfaceSize, seed: u64) -> Self {
        let mut rng = Rng::new(config.seed.unwrap_or(seed));
        let scene = generate_scene(size, &config, &mut rng);
        Self {
            scene,
            size,
            rng,
            config,
            frame: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    /// Frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Store new surface dimensions. Never regenerates entities.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Render one frame into `painter`.
    pub fn render<P: Painter>(&mut self, painter: &mut P) {
        render_frame(painter, &mut self.scene, self.size, &self.config, &mut self.rng);
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recorder::RecordingPainter;

    #[test]
    fn config_seed_overrides_host_seed() {
        let config = BackdropConfig {
            seed: Some(99),
            ..BackdropConfig::default()
        };
        let a = Backdrop::new(config.clone(), SurfaceSize::new(800.0, 600.0), 1);
        let b = Backdrop::new(config, SurfaceSize::new(800.0, 600.0), 2);
        assert_eq!(a.scene().fireflies(), b.scene().fireflies());
    }

    #[test]
    fn resize_keeps_entities() {
        let mut backdrop = Backdrop::new(BackdropConfig::default(), SurfaceSize::new(800.0, 600.0), 5);
        let fireflies = backdrop.scene().fireflies().to_vec();
        let trees = backdrop.scene().trees().to_vec();

        backdrop.resize(SurfaceSize::new(400.0, 300.0));

        assert_eq!(backdrop.size(), SurfaceSize::new(400.0, 300.0));
        assert_eq!(backdrop.scene().fireflies(), fireflies.as_slice());
        assert_eq!(backdrop.scene().trees(), trees.as_slice());
    }

    #[test]
    fn render_counts_frames_and_keeps_entity_counts() {
        let mut backdrop = Backdrop::new(BackdropConfig::default(), SurfaceSize::new(800.0, 600.0), 6);
        let mut p = RecordingPainter::new();
        for _ in 0..50 {
            backdrop.render(&mut p);
        }
        assert_eq!(backdrop.frame_count(), 50);
        assert_eq!(backdrop.scene().fireflies().len(), 100);
        assert_eq!(backdrop.scene().trees().len(), 30);
    }

    #[test]
    fn shrunk_surface_wraps_fireflies_back_in() {
        let mut backdrop = Backdrop::new(BackdropConfig::default(), SurfaceSize::new(800.0, 600.0), 7);
        backdrop.resize(SurfaceSize::new(400.0, 300.0));
        let mut p = RecordingPainter::new();
        backdrop.render(&mut p);
        for f in backdrop.scene().fireflies() {
            assert!(f.pos.x <= 400.0 && f.pos.y <= 300.0, "pos = {:?}", f.pos);
        }
    }
}
