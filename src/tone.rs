//! Gamma-domain tone adjustments for 8-bit samples.
//!
//! Brightening happens in a linear-light approximation of the sRGB transfer
//! curve: multiplying encoded values directly would over- or under-shoot
//! perceived brightness, so samples are linearized with a 2.2 power law,
//! scaled, and re-encoded. Darkening is plain scaling in encoded space —
//! at typical factors (0.5–0.7) the gamma error is not visible.

/// Display gamma approximating the sRGB transfer curve.
const GAMMA: f32 = 2.2;

/// Brighten one 8-bit sample by `factor` in linear light.
///
/// The sample is normalized to `[0, 1]`, linearized with a 2.2 power law,
/// scaled by `factor`, clamped to `[0, 1]`, re-encoded, and truncated back
/// to u8. For any positive `factor` the mapping is monotonically
/// non-decreasing in the input; a factor of 1.0 is the identity up to one
/// unit of truncation error.
///
/// Factors above ~4.0 clip a widening band of highlights to white. The
/// clamp prevents overflow at the cost of highlight detail.
#[must_use]
pub fn boost(encoded: u8, factor: f32) -> u8 {
    let linear = (f32::from(encoded) / 255.0).powf(GAMMA);
    let boosted = (linear * factor).clamp(0.0, 1.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (boosted.powf(1.0 / GAMMA) * 255.0) as u8
    }
}

/// Darken one 8-bit sample by `factor` directly in encoded space.
///
/// The result is truncated to u8; factors above 1.0 saturate at 255.
#[must_use]
pub fn darken(encoded: u8, factor: f32) -> u8 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        (f32::from(encoded) * factor).clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boost_is_monotonic_for_positive_factors() {
        for factor in [0.5, 1.0, 2.5, 4.0] {
            let mut prev = boost(0, factor);
            for v in 1..=255u8 {
                let cur = boost(v, factor);
                assert!(
                    cur >= prev,
                    "boost({v}, {factor}) = {cur} < boost({}, {factor}) = {prev}",
                    v - 1
                );
                prev = cur;
            }
        }
    }

    #[test]
    fn boost_with_unit_factor_is_identity_within_rounding() {
        for v in 0..=255u8 {
            let out = boost(v, 1.0);
            let diff = (i32::from(out) - i32::from(v)).abs();
            assert!(diff <= 1, "boost({v}, 1.0) = {out}");
        }
    }

    #[test]
    fn boost_saturates_instead_of_overflowing() {
        assert_eq!(boost(255, 4.0), 255);
        assert_eq!(boost(200, 100.0), 255);
        assert_eq!(boost(0, 4.0), 0);
    }

    #[test]
    fn boost_brightens_midtones() {
        let v = boost(128, 2.5);
        assert!(v > 128);
        assert!(v <= 255);
    }

    #[test]
    fn darken_truncates_in_encoded_space() {
        // 128 * 0.6 = 76.8, truncated
        assert_eq!(darken(128, 0.6), 76);
        assert_eq!(darken(0, 0.6), 0);
        assert_eq!(darken(255, 1.0), 255);
    }

    #[test]
    fn darken_saturates_above_unit_factor() {
        assert_eq!(darken(200, 2.0), 255);
    }
}
