// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(DEFAULT_NUM_SHARDS > 0);
    assert!(DEFAULT_TIME_STEP > 0.0);
    assert!(MAX_SPEED > 0.0);
    assert!(ACCEL_DAMPING > 0.0 && ACCEL_DAMPING < 1.0);
    assert!(SHARD_JAGGEDNESS >= 0.0 && SHARD_JAGGEDNESS < 0.5);
    assert!(SHARD_ALPHA > 0.0 && SHARD_ALPHA <= 1.0);
    assert!(SATURATION_FLOOR <= 100.0 && BRIGHTNESS_FLOOR <= 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    assert!(SHARD_SIZE_MIN < SHARD_SIZE_MAX);
    assert!(SHARD_VERTICES_MIN >= 3 && SHARD_VERTICES_MIN <= SHARD_VERTICES_MAX);

    // The speed cap sits below the impulse gate, so every in-range shard gets kicked
    assert!(MAX_SPEED < BURST_IMPULSE_MAX_SPEED);

    // Attraction is a local nudge compared with the burst
    assert!(ATTRACTION_RADIUS < BURST_RADIUS);
    assert!(ATTRACTION_MAX < NOISE_FORCE);

    // At least two flashes fit inside the freeze
    assert!(ALARM_FLASH_MS * 2.0 <= BURST_FREEZE_MS);
    assert!(BURST_IMPULSE_WINDOW > 0.0 && BURST_IMPULSE_WINDOW < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn overlay_constants_are_sane() {
    assert!(PIP_WIDTH > 0.0);
    assert!(PIP_MARGIN >= 0.0);
    assert!(CAPTURE_WIDTH > 0 && CAPTURE_HEIGHT > 0);
    assert!(!INFO_BOX_ID.starts_with('#'));
    assert_ne!(INFO_ICON_COLLAPSED, INFO_ICON_EXPANDED);
}
