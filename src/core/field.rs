use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::burst::{BurstPhase, BurstState};
use super::color::Hsba;
use super::config::{validate_viewport, FieldConfig, FieldError};
use super::noise::{NoiseField, PerlinNoise};
use super::palette::PaletteId;
use super::shard::{FrameParams, Shard};
use super::surface::Surface;

/// Owns the palette, the animation clock, the shard pool and the click burst.
///
/// Pointer positions come in as canvas pixels (origin top-left) and are
/// converted to field space, whose origin is the viewport centre. Burst timing
/// uses a millisecond clock supplied by the caller; the animation clock is
/// independent of it and advances a fixed step per tick.
pub struct FieldController<N = PerlinNoise> {
    config: FieldConfig,
    palette_id: PaletteId,
    background: Hsba,
    shards: Vec<Shard>,
    time: f32,
    burst: BurstState,
    viewport: Vec2,
    rng: StdRng,
    noise: N,
}

impl FieldController<PerlinNoise> {
    pub fn new(viewport: Vec2, config: FieldConfig) -> Result<Self, FieldError> {
        // Perlin seeds are 32-bit; fold the high half in so distinct seeds stay distinct.
        let noise_seed = (config.seed ^ (config.seed >> 32)) as u32;
        Self::with_noise(viewport, config, PerlinNoise::new(noise_seed))
    }
}

impl<N: NoiseField> FieldController<N> {
    pub fn with_noise(viewport: Vec2, config: FieldConfig, noise: N) -> Result<Self, FieldError> {
        config.validate()?;
        validate_viewport(viewport.x, viewport.y)?;
        let palette_id = PaletteId::default();
        let mut field = Self {
            rng: StdRng::seed_from_u64(config.seed),
            shards: Vec::with_capacity(config.num_shards),
            background: palette_id.palette().background_hsba(),
            config,
            palette_id,
            time: 0.0,
            burst: BurstState::default(),
            viewport,
            noise,
        };
        field.initialize(viewport)?;
        Ok(field)
    }

    /// Start from the first palette and a fresh pool sized to `viewport`.
    pub fn initialize(&mut self, viewport: Vec2) -> Result<(), FieldError> {
        validate_viewport(viewport.x, viewport.y)?;
        self.viewport = viewport;
        self.apply_palette(PaletteId::default());
        self.rebuild_pool();
        Ok(())
    }

    /// Rebuild the pool for the current viewport, keeping palette and clocks.
    pub fn reinitialize(&mut self) {
        self.rebuild_pool();
    }

    fn rebuild_pool(&mut self) {
        let half = self.half_extent();
        let palette = self.palette_id.palette();
        self.shards.clear();
        for _ in 0..self.config.num_shards {
            self.shards.push(Shard::spawn(&mut self.rng, half, palette));
        }
        log::debug!(
            "rebuilt {} shards for {:.0}x{:.0}",
            self.shards.len(),
            self.viewport.x,
            self.viewport.y
        );
    }

    /// Advance one frame and draw it from a blank background.
    pub fn tick<S: Surface + ?Sized>(
        &mut self,
        pointer: Vec2,
        now_ms: f64,
        surface: &mut S,
    ) -> BurstPhase {
        surface.clear(self.background);
        self.time += self.config.time_step;

        let phase = self.burst.advance(now_ms, &self.config.burst);
        let frame = FrameParams {
            pointer: self.to_field(pointer),
            time: self.time,
            half_extent: self.half_extent(),
            phase,
            burst_active: self.burst.active,
            burst_origin: self.burst.origin,
            burst_elapsed_ms: self.burst.elapsed(now_ms),
            tuning: self.config.burst,
        };

        for shard in &mut self.shards {
            shard.update(&frame, &mut self.rng, &self.noise);
            shard.render(&frame, &self.noise, surface);
        }
        phase
    }

    /// Viewport changed: rebuild everything for the new size.
    pub fn on_resize<S: Surface + ?Sized>(
        &mut self,
        viewport: Vec2,
        surface: &mut S,
    ) -> Result<(), FieldError> {
        validate_viewport(viewport.x, viewport.y)?;
        self.viewport = viewport;
        self.rebuild_pool();
        surface.clear(self.background);
        log::info!("field resized to {:.0}x{:.0}", viewport.x, viewport.y);
        Ok(())
    }

    /// Start a burst at the pointer and switch to the other palette.
    pub fn on_click<S: Surface + ?Sized>(&mut self, pointer: Vec2, now_ms: f64, surface: &mut S) {
        let origin = self.to_field(pointer);
        self.burst.trigger(origin, now_ms);
        log::debug!("burst at ({:.1}, {:.1}) t={:.0}ms", origin.x, origin.y, now_ms);
        self.toggle_palette();
        surface.clear(self.background);
    }

    pub fn toggle_palette(&mut self) -> PaletteId {
        self.apply_palette(self.palette_id.toggled());
        self.palette_id
    }

    pub fn apply_palette(&mut self, id: PaletteId) {
        self.palette_id = id;
        let palette = id.palette();
        self.background = palette.background_hsba();
        for shard in &mut self.shards {
            shard.set_palette(palette);
        }
        log::info!("palette: {}", id.name());
    }

    #[inline]
    pub fn to_field(&self, screen: Vec2) -> Vec2 {
        screen - self.half_extent()
    }

    #[inline]
    pub fn half_extent(&self) -> Vec2 {
        self.viewport * 0.5
    }

    pub fn shards(&self) -> &[Shard] {
        &self.shards
    }

    pub fn palette_id(&self) -> PaletteId {
        self.palette_id
    }

    pub fn background(&self) -> Hsba {
        self.background
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn burst(&self) -> &BurstState {
        &self.burst
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}
