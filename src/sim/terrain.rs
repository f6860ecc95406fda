//! Rolling terrain and coin placement for the hill climb
//!
//! Terrain is a pure function of world x (three summed sine waves), so nothing
//! about it is stored. Coordinates are screen-space: y grows downward, so a
//! smaller y is higher on screen.

use glam::DVec2;

use crate::consts::*;

/// Baseline terrain height before the hills are added
const TERRAIN_BASE: f64 = HILL_VIEW_HEIGHT - 48.0;

/// (amplitude, wavenumber, phase) for each hill layer
const HILL_LAYERS: [(f64, f64, f64); 3] = [(16.0, 0.01, 0.0), (8.0, 0.021, 1.7), (12.0, 0.005, 3.1)];

/// Terrain surface height at world x
#[inline]
pub fn terrain_y(x: f64) -> f64 {
    HILL_LAYERS
        .iter()
        .fold(TERRAIN_BASE, |y, &(amp, k, phase)| y + (x * k + phase).sin() * amp)
}

/// Symmetric finite difference of the terrain around x
///
/// Not divided by the stencil width; callers pair it with `SLOPE_RUN`.
#[inline]
pub fn slope(x: f64) -> f64 {
    terrain_y(x + SLOPE_EPS) - terrain_y(x - SLOPE_EPS)
}

/// Car body angle (radians) when resting on the terrain at world x
#[inline]
pub fn surface_angle(x: f64) -> f64 {
    slope(x).atan2(SLOPE_RUN)
}

/// World position of coin `index`
///
/// Even-indexed coins float a little higher.
pub fn coin_at(index: i64) -> DVec2 {
    let x = index as f64 * COIN_SPACING + COIN_START_X;
    let lift = if index % 2 == 0 { COIN_EVEN_LIFT } else { 0.0 };
    DVec2::new(x, terrain_y(x) - COIN_LIFT - lift)
}

/// Coin bucket containing world x (may be negative when reversing past the start)
#[inline]
pub fn coin_bucket(world_x: f64) -> i64 {
    (world_x / COIN_SPACING).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_at_origin() {
        let expected =
            152.0 + 0.0 + (1.7f64).sin() * 8.0 + (3.1f64).sin() * 12.0;
        assert!((terrain_y(0.0) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_terrain_stays_in_band() {
        // Amplitudes sum to 36 around a 152 baseline
        for i in -2000..2000 {
            let y = terrain_y(i as f64 * 3.7);
            assert!(y >= 152.0 - 36.0 && y <= 152.0 + 36.0, "y={y}");
        }
    }

    #[test]
    fn test_slope_matches_difference() {
        let x = 321.5;
        assert_eq!(slope(x), terrain_y(x + 1.0) - terrain_y(x - 1.0));
    }

    #[test]
    fn test_flat_slope_gives_level_angle() {
        assert_eq!(0.0f64.atan2(SLOPE_RUN), 0.0);
        // Downhill to the right (y increasing) tilts the car clockwise on screen
        let x = (0..1000)
            .map(|i| i as f64)
            .find(|&x| slope(x) > 0.1)
            .expect("terrain has a downhill stretch");
        assert!(surface_angle(x) > 0.0);
    }

    #[test]
    fn test_coin_positions() {
        let c0 = coin_at(0);
        assert_eq!(c0.x, 140.0);
        assert!((c0.y - (terrain_y(140.0) - 24.0)).abs() < 1e-12);

        let c1 = coin_at(1);
        assert_eq!(c1.x, 260.0);
        assert!((c1.y - (terrain_y(260.0) - 18.0)).abs() < 1e-12);
    }

    #[test]
    fn test_coin_bucket_floors() {
        assert_eq!(coin_bucket(0.0), 0);
        assert_eq!(coin_bucket(119.9), 0);
        assert_eq!(coin_bucket(120.0), 1);
        assert_eq!(coin_bucket(-0.5), -1);
    }
}
