// Host-side tests for shard physics and colour.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod burst {
        include!("../src/core/burst.rs");
    }
    pub mod color {
        include!("../src/core/color.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod noise {
        include!("../src/core/noise.rs");
    }
    pub mod palette {
        include!("../src/core/palette.rs");
    }
    pub mod shard {
        include!("../src/core/shard.rs");
    }
    pub mod surface {
        include!("../src/core/surface.rs");
    }
}

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sim::burst::*;
use sim::constants::*;
use sim::noise::*;
use sim::palette::*;
use sim::shard::*;
use sim::surface::*;

const HALF: Vec2 = Vec2::new(400.0, 300.0);
const FAR_POINTER: Vec2 = Vec2::new(10_000.0, 10_000.0);

fn tuning() -> BurstTuning {
    BurstTuning {
        freeze_ms: BURST_FREEZE_MS,
        shatter_ms: BURST_SHATTER_MS,
        radius: BURST_RADIUS,
        force: BURST_FORCE,
    }
}

fn frame(phase: BurstPhase) -> FrameParams {
    FrameParams {
        pointer: FAR_POINTER,
        time: 0.0,
        half_extent: HALF,
        phase,
        burst_active: phase != BurstPhase::Idle,
        burst_origin: Vec2::ZERO,
        burst_elapsed_ms: 0.0,
        tuning: tuning(),
    }
}

fn spawn(seed: u64) -> (Shard, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let shard = Shard::spawn(&mut rng, HALF, &PALETTE_EMBER);
    (shard, rng)
}

#[test]
fn spawned_shards_respect_shape_ranges() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let s = Shard::spawn(&mut rng, HALF, &PALETTE_EMBER);
        assert!(s.pos.x.abs() <= HALF.x && s.pos.y.abs() <= HALF.y);
        assert!(s.vel.x.abs() <= INITIAL_SPEED_MAX && s.vel.y.abs() <= INITIAL_SPEED_MAX);
        assert!(s.size >= SHARD_SIZE_MIN && s.size < SHARD_SIZE_MAX);
        assert!((SHARD_VERTICES_MIN..=SHARD_VERTICES_MAX).contains(&s.vertices.len()));
        assert!(s.id >= 0.0 && s.id < SHARD_ID_MAX);
        assert!(s.rotation >= 0.0 && s.rotation < 360.0);
        for v in &s.vertices {
            let r = v.length();
            let jitter = s.size * SHARD_JAGGEDNESS;
            assert!(r >= s.size / 2.0 - jitter - 1e-3 && r <= s.size / 2.0 + jitter + 1e-3);
        }
    }
}

#[test]
fn spawn_in_empty_viewport_sits_at_origin() {
    let mut rng = StdRng::seed_from_u64(1);
    let s = Shard::spawn(&mut rng, Vec2::ZERO, &PALETTE_EMBER);
    assert_eq!(s.pos, Vec2::ZERO);
}

#[test]
fn polygon_vertices_are_evenly_spaced_in_angle() {
    let mut rng = StdRng::seed_from_u64(3);
    let verts = jagged_polygon(&mut rng, 10.0, 4);
    assert_eq!(verts.len(), 4);
    for (i, v) in verts.iter().enumerate() {
        let expected = (i as f32 * 90.0).to_radians();
        let angle = v.y.atan2(v.x).rem_euclid(std::f32::consts::TAU);
        assert!((angle - expected).abs() < 1e-3, "vertex {i}: {angle} vs {expected}");
    }
}

#[test]
fn frozen_update_stops_everything() {
    let (mut s, mut rng) = spawn(11);
    s.vel = Vec2::new(3.0, -2.0);
    s.acc = Vec2::new(0.5, 0.5);
    s.rotation_speed = 4.0;
    let (pos, rotation) = (s.pos, s.rotation);
    s.update(&frame(BurstPhase::Freezing), &mut rng, &ConstantNoise(0.3));
    assert_eq!(s.vel, Vec2::ZERO);
    assert_eq!(s.acc, Vec2::ZERO);
    assert_eq!(s.rotation_speed, 0.0);
    assert_eq!(s.pos, pos);
    assert_eq!(s.rotation, rotation);
}

#[test]
fn rotation_speed_is_redrawn_every_tick() {
    let (mut s, mut rng) = spawn(12);
    let mut seen = Vec::new();
    for _ in 0..20 {
        let before = s.rotation;
        s.update(&frame(BurstPhase::Idle), &mut rng, &ConstantNoise(0.3));
        assert!(s.rotation_speed.abs() <= ROTATION_SPEED_MAX);
        assert!((s.rotation - before - s.rotation_speed).abs() < 1e-3);
        seen.push(s.rotation_speed);
    }
    seen.dedup();
    assert!(seen.len() > 1, "rotation speed never changed");
}

#[test]
fn constant_noise_pushes_in_a_fixed_direction() {
    let (mut s, mut rng) = spawn(13);
    s.vel = Vec2::ZERO;
    s.acc = Vec2::ZERO;
    // 0.25 * 4 turns = one full turn, i.e. angle 0 -> +x
    s.update(&frame(BurstPhase::Idle), &mut rng, &ConstantNoise(0.25));
    assert!((s.vel.x - NOISE_FORCE).abs() < 1e-4, "{:?}", s.vel);
    assert!(s.vel.y.abs() < 1e-4);
    // Acceleration is damped, not cleared
    assert!((s.acc.x - NOISE_FORCE * ACCEL_DAMPING).abs() < 1e-4);
}

#[test]
fn wrap_reflects_to_the_opposite_edge() {
    let (mut s, _) = spawn(16);
    let lim = HALF + Vec2::splat(s.size);
    s.pos = Vec2::new(lim.x + 1.0, -lim.y - 1.0);
    s.wrap(HALF);
    assert_eq!(s.pos, Vec2::new(-lim.x, lim.y));
    s.pos = Vec2::new(lim.x, 0.0);
    s.wrap(HALF);
    assert_eq!(s.pos, Vec2::new(lim.x, 0.0));
}

#[test]
fn attraction_fades_linearly_with_distance() {
    let f = attraction(Vec2::ZERO, Vec2::new(50.0, 0.0));
    assert!((f.x - ATTRACTION_MAX * 0.5).abs() < 1e-6);
    assert_eq!(f.y, 0.0);
    assert_eq!(attraction(Vec2::ZERO, Vec2::new(0.0, ATTRACTION_RADIUS)), Vec2::ZERO);
    assert_eq!(attraction(Vec2::ZERO, Vec2::new(500.0, 0.0)), Vec2::ZERO);
    // Sitting on the pointer gives no direction to pull in
    assert_eq!(attraction(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
}

#[test]
fn outward_direction_is_unit_even_at_the_origin() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let d = outward_direction(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), &mut rng);
        assert!(d.is_finite());
        assert!((d.length() - 1.0).abs() < 1e-4);
    }
    let d = outward_direction(Vec2::new(3.0, 4.0), Vec2::ZERO, &mut rng);
    assert!((d - Vec2::new(0.6, 0.8)).length() < 1e-6);
}

#[test]
fn burst_impulse_fires_only_in_range_and_early() {
    let t = tuning();
    let (mut s, mut rng) = spawn(18);

    s.pos = Vec2::ZERO;
    s.vel = Vec2::ZERO;
    s.acc = Vec2::ZERO;
    assert!(s.apply_burst(Vec2::ZERO, &t, 0.0, &mut rng));
    assert!(s.acc.is_finite());
    assert!((s.acc.length() - BURST_FORCE).abs() < 1e-3);

    s.acc = Vec2::ZERO;
    s.pos = Vec2::new(BURST_RADIUS + 1.0, 0.0);
    assert!(!s.apply_burst(Vec2::ZERO, &t, 0.0, &mut rng));

    s.pos = Vec2::new(10.0, 0.0);
    assert!(!s.apply_burst(Vec2::ZERO, &t, BURST_IMPULSE_WINDOW, &mut rng));
    assert_eq!(s.acc, Vec2::ZERO);

    assert!(s.apply_burst(Vec2::ZERO, &t, 0.05, &mut rng));
    assert!(s.acc.x > 0.0);
}

#[test]
fn shatter_update_caps_the_kick() {
    let (mut s, mut rng) = spawn(19);
    s.pos = Vec2::new(20.0, 0.0);
    s.vel = Vec2::ZERO;
    s.acc = Vec2::ZERO;
    let f = frame(BurstPhase::Shattering { progress: 0.0 });
    s.update(&f, &mut rng, &ConstantNoise(0.0));
    assert!((s.vel.length() - MAX_SPEED).abs() < 1e-3);
    assert!(s.vel.x > 0.0);
}

#[test]
fn frozen_burst_renders_alarm_colors() {
    let (s, _) = spawn(20);
    let mut f = frame(BurstPhase::Freezing);
    f.burst_elapsed_ms = 0.0;
    assert_eq!(s.color(&f, &ConstantNoise(0.5)), alarm_color(0));
    f.burst_elapsed_ms = 60.0;
    assert_eq!(s.color(&f, &ConstantNoise(0.5)), alarm_color(1));
    f.burst_elapsed_ms = 149.0;
    assert_eq!(s.color(&f, &ConstantNoise(0.5)), alarm_color(2));
}

#[test]
fn normal_color_blends_and_flickers() {
    let (s, _) = spawn(21);
    let f = frame(BurstPhase::Idle);

    // Mid noise: accent1, no flicker offset
    let c = s.color(&f, &ConstantNoise(0.5));
    let accent1 = PALETTE_EMBER.accent1.to_hsba();
    assert!((c.h - accent1.h).abs() < 1e-3);
    assert!((c.s - 100.0).abs() < 1e-3 && (c.b - 100.0).abs() < 1e-3);
    assert!((c.a - SHARD_ALPHA).abs() < 1e-6);

    // Zero noise: primary, flicker pulls saturation and brightness down 15
    let c = s.color(&f, &ConstantNoise(0.0));
    let primary = PALETTE_EMBER.primary.to_hsba();
    assert!((c.h - primary.h).abs() < 1e-3);
    assert!((c.s - 85.0).abs() < 1e-3, "{c:?}");
    assert!((c.b - 85.0).abs() < 1e-3, "{c:?}");
}

#[test]
fn flicker_stays_within_floors() {
    let noise = PerlinNoise::new(22);
    let mut rng = StdRng::seed_from_u64(22);
    for palette in [&PALETTE_EMBER, &PALETTE_NEON] {
        for i in 0..300 {
            let s = Shard::spawn(&mut rng, HALF, palette);
            let mut f = frame(BurstPhase::Idle);
            f.time = i as f32 * 0.37;
            let c = s.color(&f, &noise);
            assert!(c.s >= SATURATION_FLOOR && c.s <= 100.0, "{c:?}");
            assert!(c.b >= BRIGHTNESS_FLOOR && c.b <= 100.0, "{c:?}");
        }
    }
}

#[test]
fn render_draws_polygon_in_canvas_space() {
    let (mut s, _) = spawn(23);
    s.pos = Vec2::new(-10.0, 20.0);
    s.rotation = 90.0;
    let mut surface = RecordingSurface::new();
    s.render(&frame(BurstPhase::Idle), &ConstantNoise(0.5), &mut surface);
    assert_eq!(surface.commands.len(), 1);
    match &surface.commands[0] {
        DrawCommand::Polygon {
            center,
            rotation,
            vertices,
            ..
        } => {
            assert_eq!(*center, Vec2::new(390.0, 320.0));
            assert!((rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
            assert_eq!(vertices.as_slice(), s.vertices.as_slice());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn palette_can_be_swapped() {
    let (mut s, _) = spawn(24);
    assert_eq!(s.palette(), &PALETTE_EMBER);
    s.set_palette(&PALETTE_NEON);
    assert_eq!(s.palette(), &PALETTE_NEON);
}

#[test]
fn perlin_noise_is_deterministic_and_bounded() {
    let a = PerlinNoise::new(42);
    let b = PerlinNoise::new(42);
    for i in 0..200 {
        let x = i as f32 * 0.13;
        let v = a.sample3(x, x * 0.5, 1234.5 + x);
        assert!((0.0..=1.0).contains(&v), "{v}");
        assert_eq!(v, b.sample3(x, x * 0.5, 1234.5 + x));
        assert_eq!(a.sample1(x), a.sample3(x, 0.0, 0.0));
    }
}
