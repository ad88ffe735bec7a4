use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

use super::burst::{alarm_index, BurstPhase, BurstTuning};
use super::color::Hsba;
use super::constants::*;
use super::noise::NoiseField;
use super::palette::{alarm_color, Palette};
use super::surface::Surface;

pub type ShardVertices = SmallVec<[Vec2; SHARD_VERTICES_MAX]>;

/// Read-only view of the controller's shared state for one tick.
///
/// Positions are in field space: origin at the viewport centre, y down.
#[derive(Clone, Copy, Debug)]
pub struct FrameParams {
    pub pointer: Vec2,
    pub time: f32,
    pub half_extent: Vec2,
    pub phase: BurstPhase,
    pub burst_active: bool,
    pub burst_origin: Vec2,
    pub burst_elapsed_ms: f64,
    pub tuning: BurstTuning,
}

/// One polygonal particle.
#[derive(Clone, Debug)]
pub struct Shard {
    pub pos: Vec2,
    pub vel: Vec2,
    pub acc: Vec2,
    /// Degrees.
    pub rotation: f32,
    /// Degrees per tick.
    pub rotation_speed: f32,
    pub size: f32,
    pub vertices: ShardVertices,
    /// Phase offset into the noise field.
    pub id: f32,
    palette: &'static Palette,
}

#[inline]
fn symmetric<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    if half > 0.0 {
        rng.gen_range(-half..half)
    } else {
        0.0
    }
}

#[inline]
fn remap(v: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (v - in_lo) / (in_hi - in_lo) * (out_hi - out_lo)
}

/// Unit vector pointing from `origin` to `pos`; a random direction when the
/// two coincide.
pub fn outward_direction<R: Rng + ?Sized>(pos: Vec2, origin: Vec2, rng: &mut R) -> Vec2 {
    let dir = (pos - origin).normalize_or_zero();
    if dir == Vec2::ZERO || !dir.is_finite() {
        Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU))
    } else {
        dir
    }
}

/// Jagged polygon of `count` vertices around the origin.
pub fn jagged_polygon<R: Rng + ?Sized>(rng: &mut R, size: f32, count: usize) -> ShardVertices {
    let jitter = size * SHARD_JAGGEDNESS;
    (0..count)
        .map(|i| {
            let angle = (i as f32 / count as f32 * 360.0).to_radians();
            let r = size / 2.0 + symmetric(rng, jitter);
            Vec2::from_angle(angle) * r
        })
        .collect()
}

impl Shard {
    /// Random shard placed uniformly inside `half_extent` around the origin.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, half_extent: Vec2, palette: &'static Palette) -> Self {
        let pos = Vec2::new(symmetric(rng, half_extent.x), symmetric(rng, half_extent.y));
        let vel = Vec2::new(
            symmetric(rng, INITIAL_SPEED_MAX),
            symmetric(rng, INITIAL_SPEED_MAX),
        );
        let size = rng.gen_range(SHARD_SIZE_MIN..SHARD_SIZE_MAX);
        let count = rng.gen_range(SHARD_VERTICES_MIN..=SHARD_VERTICES_MAX);
        let vertices = jagged_polygon(rng, size, count);
        Self {
            pos,
            vel,
            acc: Vec2::ZERO,
            rotation: rng.gen_range(0.0..360.0),
            rotation_speed: symmetric(rng, ROTATION_SPEED_MAX),
            size,
            vertices,
            id: rng.gen_range(0.0..SHARD_ID_MAX),
            palette,
        }
    }

    pub fn palette(&self) -> &'static Palette {
        self.palette
    }

    pub fn set_palette(&mut self, palette: &'static Palette) {
        self.palette = palette;
    }

    pub fn update<R, N>(&mut self, frame: &FrameParams, rng: &mut R, noise: &N)
    where
        R: Rng + ?Sized,
        N: NoiseField + ?Sized,
    {
        if frame.phase.is_frozen() {
            self.vel = Vec2::ZERO;
            self.acc = Vec2::ZERO;
            self.rotation_speed = 0.0;
            return;
        }

        self.rotation_speed = symmetric(rng, ROTATION_SPEED_MAX);

        let n = noise.sample3(
            self.pos.x * NOISE_POSITION_SCALE,
            self.pos.y * NOISE_POSITION_SCALE,
            self.id + frame.time * NOISE_TIME_SCALE,
        );
        let angle = (n * 360.0 * NOISE_ANGLE_TURNS).to_radians();
        self.acc += Vec2::from_angle(angle) * NOISE_FORCE;

        self.acc += attraction(self.pos, frame.pointer);

        if let Some(progress) = frame.phase.shatter_progress() {
            self.apply_burst(frame.burst_origin, &frame.tuning, progress, rng);
        }

        self.integrate();
        self.rotation += self.rotation_speed;
        self.wrap(frame.half_extent);
    }

    /// Adds the one-off outward kick when this shard is in range early in the
    /// shatter. Returns whether the kick was applied.
    pub fn apply_burst<R: Rng + ?Sized>(
        &mut self,
        origin: Vec2,
        tuning: &BurstTuning,
        progress: f32,
        rng: &mut R,
    ) -> bool {
        if self.pos.distance(origin) >= tuning.radius {
            return false;
        }
        if progress >= BURST_IMPULSE_WINDOW || self.vel.length() >= BURST_IMPULSE_MAX_SPEED {
            return false;
        }
        self.acc += outward_direction(self.pos, origin, rng) * tuning.force;
        true
    }

    fn integrate(&mut self) {
        self.vel = (self.vel + self.acc).clamp_length_max(MAX_SPEED);
        self.pos += self.vel;
        self.acc *= ACCEL_DAMPING;
    }

    /// Toroidal wrap: leaving one edge by more than `size` re-enters at the other.
    pub fn wrap(&mut self, half_extent: Vec2) {
        let lim_x = half_extent.x + self.size;
        let lim_y = half_extent.y + self.size;
        if self.pos.x > lim_x {
            self.pos.x = -lim_x;
        } else if self.pos.x < -lim_x {
            self.pos.x = lim_x;
        }
        if self.pos.y > lim_y {
            self.pos.y = -lim_y;
        } else if self.pos.y < -lim_y {
            self.pos.y = lim_y;
        }
    }

    pub fn color<N: NoiseField + ?Sized>(&self, frame: &FrameParams, noise: &N) -> Hsba {
        if frame.burst_active && frame.phase.is_frozen() {
            return alarm_color(alarm_index(frame.burst_elapsed_ms));
        }

        let base = self
            .palette
            .blend(noise.sample1(self.id + frame.time * COLOR_SHIFT_RATE));
        let flicker_s = noise.sample1(self.id + frame.time * FLICKER_RATE);
        let flicker_b = noise.sample1(self.id + frame.time * FLICKER_RATE + FLICKER_BRIGHTNESS_OFFSET);
        let s = (base.s + remap(flicker_s, 0.0, 1.0, -FLICKER_SPAN, FLICKER_SPAN))
            .clamp(SATURATION_FLOOR, 100.0);
        let b = (base.b + remap(flicker_b, 0.0, 1.0, -FLICKER_SPAN, FLICKER_SPAN))
            .clamp(BRIGHTNESS_FLOOR, 100.0);
        Hsba::new(base.h, s, b, SHARD_ALPHA)
    }

    pub fn render<N, S>(&self, frame: &FrameParams, noise: &N, surface: &mut S)
    where
        N: NoiseField + ?Sized,
        S: Surface + ?Sized,
    {
        let color = self.color(frame, noise);
        surface.fill_polygon(
            self.pos + frame.half_extent,
            self.rotation.to_radians(),
            &self.vertices,
            color,
        );
    }
}

/// Pull toward the pointer, fading linearly from [`ATTRACTION_MAX`] at the
/// pointer to zero at [`ATTRACTION_RADIUS`].
pub fn attraction(pos: Vec2, pointer: Vec2) -> Vec2 {
    let to_pointer = pointer - pos;
    let dist = to_pointer.length();
    if dist >= ATTRACTION_RADIUS {
        return Vec2::ZERO;
    }
    let strength = remap(dist, 0.0, ATTRACTION_RADIUS, ATTRACTION_MAX, 0.0);
    to_pointer.normalize_or_zero() * strength
}
