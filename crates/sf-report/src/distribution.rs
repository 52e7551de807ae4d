//! Surface pressure distribution sampled along the chord.

use crate::report::{AirfoilReport, RegionKind};
use serde::Serialize;
use sf_airfoil::Surface;

/// Samples of undisturbed stream ahead of and behind the airfoil.
pub const FREESTREAM_SAMPLES: usize = 30;
/// Samples per face.
pub const FACE_SAMPLES: usize = 50;
/// Chord-normalized sample spacing.
pub const SAMPLE_SPACING: f64 = 0.01;

/// Gauge pressure `(p - p_inf) / p_inf` at one chord station.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistributionPoint {
    pub x_over_c: f64,
    pub upper: f64,
    pub lower: f64,
}

/// Piecewise-constant distribution from `x/c = -0.3` to `1.29`.
///
/// Stations ahead of the leading edge and behind the trailing edge read 0.
pub fn pressure_distribution(report: &AirfoilReport) -> Vec<DistributionPoint> {
    let total = 2 * FREESTREAM_SAMPLES + 2 * FACE_SAMPLES;
    (0..total)
        .map(|i| {
            let x_over_c = (i as f64 - FREESTREAM_SAMPLES as f64) * SAMPLE_SPACING;
            let gauge = |surface| match face_at(i) {
                Some(kind) => report.region(surface, kind).freestream_pressure_ratio - 1.0,
                None => 0.0,
            };
            DistributionPoint {
                x_over_c,
                upper: gauge(Surface::Upper),
                lower: gauge(Surface::Lower),
            }
        })
        .collect()
}

fn face_at(sample: usize) -> Option<RegionKind> {
    let on_body = sample.checked_sub(FREESTREAM_SAMPLES)?;
    match on_body / FACE_SAMPLES {
        0 => Some(RegionKind::FrontFace),
        1 => Some(RegionKind::RearFace),
        _ => None,
    }
}
