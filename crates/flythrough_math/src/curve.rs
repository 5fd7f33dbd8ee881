//! Corridor path curve
//!
//! The curve maps a corridor index to a lateral (X) offset. It is flat up to
//! `curve_start`, then follows a sinusoid whose amplitude ramps linearly from
//! zero to full strength over `smoothing` index-units:
//!
//! ```text
//! n        = max(0, index - curve_start)
//! smooth   = min(1, n / smoothing)
//! offset   = sin(n * frequency) * amplitude * smooth
//! ```
//!
//! Block placement evaluates it at integer indices and the camera evaluates it
//! at fractional indices, so both trace the same path at different resolutions.

use serde::{Serialize, Deserialize};

/// Evaluate the curve with the default frequency
///
/// Equivalent to `PathCurve::new(curve_start, amplitude, smoothing)?.offset(index)`
/// without the validation step. `smoothing` must be positive; callers that take
/// parameters from outside should go through [`PathCurve::new`] instead.
#[inline]
pub fn offset(index: f32, curve_start: f32, amplitude: f32, smoothing: f32) -> f32 {
    evaluate(index, curve_start, amplitude, smoothing, PathCurve::DEFAULT_FREQUENCY)
}

#[inline]
fn ramp_factor(n: f32, smoothing: f32) -> f32 {
    (n / smoothing).min(1.0)
}

#[inline]
fn evaluate(index: f32, curve_start: f32, amplitude: f32, smoothing: f32, frequency: f32) -> f32 {
    let n = (index - curve_start).max(0.0);
    (n * frequency).sin() * amplitude * ramp_factor(n, smoothing)
}

/// Validated curve parameters
///
/// Deserialization goes through [`PathCurve::new`], so it rejects the same
/// smoothing values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveParams")]
pub struct PathCurve {
    curve_start: f32,
    amplitude: f32,
    smoothing: f32,
    frequency: f32,
}

/// Unvalidated form of [`PathCurve`] as it appears in serialized data
#[derive(Deserialize)]
struct CurveParams {
    curve_start: f32,
    amplitude: f32,
    smoothing: f32,
    #[serde(default = "default_frequency")]
    frequency: f32,
}

fn default_frequency() -> f32 {
    PathCurve::DEFAULT_FREQUENCY
}

impl TryFrom<CurveParams> for PathCurve {
    type Error = CurveError;

    fn try_from(params: CurveParams) -> Result<Self, Self::Error> {
        Ok(PathCurve::new(params.curve_start, params.amplitude, params.smoothing)?
            .with_frequency(params.frequency))
    }
}

impl PathCurve {
    /// Oscillation frequency in radians per index-unit
    pub const DEFAULT_FREQUENCY: f32 = 0.3;

    /// Create a curve, rejecting a non-positive or non-finite smoothing window
    pub fn new(curve_start: f32, amplitude: f32, smoothing: f32) -> Result<Self, CurveError> {
        if !(smoothing.is_finite() && smoothing > 0.0) {
            return Err(CurveError::InvalidSmoothing(smoothing));
        }
        Ok(Self {
            curve_start,
            amplitude,
            smoothing,
            frequency: Self::DEFAULT_FREQUENCY,
        })
    }

    /// Replace the oscillation frequency
    pub fn with_frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Index at which bending begins
    #[inline]
    pub fn curve_start(&self) -> f32 {
        self.curve_start
    }

    /// Peak lateral offset
    #[inline]
    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    /// Ramp-in window in index-units
    #[inline]
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    #[inline]
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Distance past the start of the curve, zero before it
    #[inline]
    pub fn distance_past_start(&self, index: f32) -> f32 {
        (index - self.curve_start).max(0.0)
    }

    /// Ramp-in factor in `[0, 1]` at the given index
    #[inline]
    pub fn ramp(&self, index: f32) -> f32 {
        ramp_factor(self.distance_past_start(index), self.smoothing)
    }

    /// Lateral offset at a (possibly fractional) corridor index
    #[inline]
    pub fn offset(&self, index: f32) -> f32 {
        evaluate(index, self.curve_start, self.amplitude, self.smoothing, self.frequency)
    }

    /// Evaluate the curve into a [`SamplePoint`]
    #[inline]
    pub fn sample(&self, index: f32) -> SamplePoint {
        SamplePoint {
            index,
            offset: self.offset(index),
        }
    }

    /// Upper bound on `|offset|` for any index
    #[inline]
    pub fn max_offset(&self) -> f32 {
        self.amplitude.abs()
    }
}

/// A point on the curve
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    /// Corridor index (fractional in camera sampling)
    pub index: f32,
    /// Lateral offset at that index
    pub offset: f32,
}

/// Invalid curve or sampling configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveError {
    /// Smoothing window must be positive and finite
    InvalidSmoothing(f32),
    /// Frame remapping needs at least one frame and one corridor index
    EmptyRange {
        total_frames: u32,
        length: u32,
    },
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::InvalidSmoothing(s) => {
                write!(f, "Invalid smoothing window: {} (must be > 0)", s)
            }
            CurveError::EmptyRange { total_frames, length } => {
                write!(
                    f,
                    "Empty sampling range: {} frames over a corridor of length {}",
                    total_frames, length
                )
            }
        }
    }
}

impl std::error::Error for CurveError {}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn reference_curve() -> PathCurve {
        PathCurve::new(15.0, 6.0, 15.0).unwrap()
    }

    #[test]
    fn test_zero_before_curve_start() {
        let curve = reference_curve();
        for i in 0..=15 {
            assert_eq!(curve.offset(i as f32), 0.0, "index {}", i);
        }
        assert_eq!(curve.offset(7.25), 0.0);
        assert_eq!(curve.offset(-3.0), 0.0);
    }

    #[test]
    fn test_zero_at_curve_start() {
        assert_eq!(reference_curve().offset(15.0), 0.0);
    }

    #[test]
    fn test_bounded_by_amplitude() {
        let curve = reference_curve();
        let mut index = 0.0;
        while index < 200.0 {
            assert!(curve.offset(index).abs() <= curve.amplitude() + EPSILON, "index {}", index);
            index += 0.037;
        }
    }

    #[test]
    fn test_bounded_with_negative_amplitude() {
        let curve = PathCurve::new(0.0, -4.0, 2.0).unwrap();
        assert_eq!(curve.max_offset(), 4.0);
        for i in 0..500 {
            assert!(curve.offset(i as f32 * 0.1).abs() <= 4.0 + EPSILON);
        }
    }

    #[test]
    fn test_continuous_across_curve_start() {
        let curve = reference_curve();
        let below = curve.offset(15.0 - 1e-3);
        let above = curve.offset(15.0 + 1e-3);
        assert_eq!(below, 0.0);
        assert!(above.abs() < 1e-4, "jump of {}", above);
    }

    #[test]
    fn test_ramp_strictly_increasing_inside_window() {
        let curve = reference_curve();
        let mut previous = curve.ramp(15.0);
        assert_eq!(previous, 0.0);
        for step in 1..150 {
            let index = 15.0 + step as f32 * 0.1;
            let ramp = curve.ramp(index);
            assert!(ramp > previous, "ramp not increasing at {}", index);
            previous = ramp;
        }
        assert!(previous < 1.0);
    }

    #[test]
    fn test_ramp_saturates() {
        let curve = reference_curve();
        assert_eq!(curve.ramp(30.0), 1.0);
        assert_eq!(curve.ramp(1000.0), 1.0);
    }

    #[test]
    fn test_saturated_offset_is_plain_sine() {
        let curve = reference_curve();
        for i in 30..120 {
            let n = i as f32 - 15.0;
            assert_eq!(curve.offset(i as f32), (n * 0.3).sin() * 6.0, "index {}", i);
        }
    }

    #[test]
    fn test_deterministic() {
        let curve = reference_curve();
        for i in 0..600 {
            let index = i as f32 * 0.123;
            assert_eq!(curve.offset(index).to_bits(), curve.offset(index).to_bits());
        }
    }

    #[test]
    fn test_reference_values() {
        let curve = reference_curve();
        assert_eq!(curve.offset(15.0), 0.0);

        // Saturated: sin(4.5) * 6
        let at_30 = curve.offset(30.0);
        assert!(approx_eq(at_30, 4.5f32.sin() * 6.0));
        assert!((at_30 - -5.865).abs() < 1e-3, "offset(30) = {}", at_30);

        // Ramping: sin(1.5) * 6 * (5 / 15)
        let at_20 = curve.offset(20.0);
        assert!(approx_eq(at_20, 1.5f32.sin() * 6.0 * (5.0 / 15.0)));
        assert!((at_20 - 1.995).abs() < 1e-3, "offset(20) = {}", at_20);
    }

    #[test]
    fn test_free_function_matches_curve() {
        let curve = reference_curve();
        for i in 0..240 {
            let index = i as f32 * 0.25;
            assert_eq!(offset(index, 15.0, 6.0, 15.0), curve.offset(index));
        }
    }

    #[test]
    fn test_with_frequency() {
        let curve = reference_curve().with_frequency(0.5);
        assert_eq!(curve.frequency(), 0.5);
        assert_eq!(curve.offset(40.0), (25.0f32 * 0.5).sin() * 6.0);
    }

    #[test]
    fn test_sample_point() {
        let curve = reference_curve();
        let p = curve.sample(20.0);
        assert_eq!(p.index, 20.0);
        assert_eq!(p.offset, curve.offset(20.0));
    }

    #[test]
    fn test_rejects_invalid_smoothing() {
        assert_eq!(PathCurve::new(15.0, 6.0, 0.0), Err(CurveError::InvalidSmoothing(0.0)));
        assert_eq!(PathCurve::new(15.0, 6.0, -2.0), Err(CurveError::InvalidSmoothing(-2.0)));
        assert!(PathCurve::new(15.0, 6.0, f32::NAN).is_err());
        assert!(PathCurve::new(15.0, 6.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = CurveError::InvalidSmoothing(0.0);
        assert!(err.to_string().contains("smoothing"));
        let err = CurveError::EmptyRange { total_frames: 0, length: 60 };
        assert!(err.to_string().contains("0 frames"));
    }

    #[test]
    fn test_deserialize_validates_smoothing() {
        let curve: PathCurve =
            toml::from_str("curve_start = 15.0\namplitude = 6.0\nsmoothing = 15.0\n").unwrap();
        assert_eq!(curve, reference_curve());

        for smoothing in ["0.0", "-15.0"] {
            let source = format!("curve_start = 15.0\namplitude = 6.0\nsmoothing = {}\n", smoothing);
            assert!(toml::from_str::<PathCurve>(&source).is_err(), "smoothing {}", smoothing);
        }
    }

    #[test]
    fn test_serialized_curve_reloads() {
        let curve = reference_curve().with_frequency(0.5);
        let text = toml::to_string(&curve).unwrap();
        let reloaded: PathCurve = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, curve);
    }
}
