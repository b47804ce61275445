/// Scaled values this close to a `.5` boundary count as exact ties.
const TIE_TOLERANCE: f64 = 1e-9;

/// Rounds to two decimal places, half away from zero.
///
/// `2.345 * 100.0` lands on `234.49999999999997` in binary, so a plain
/// `(x * 100.0).round()` would give `2.34`. Every input whose scaled value
/// sits within [`TIE_TOLERANCE`] of a `.5` is treated as a written tie and
/// pushed outward, random draws included: `8.995` becomes `9.0`, not the
/// `8.99` a bare `f64::round` would produce.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let fraction = scaled.fract().abs();
    let rounded = if (fraction - 0.5).abs() < TIE_TOLERANCE {
        scaled.trunc() + scaled.signum()
    } else {
        scaled.round()
    };
    rounded / 100.0
}
