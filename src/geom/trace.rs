//! Debug trace of a spiral as line segments.
//!
//! Walks the centerline in fixed arc-length steps, samples
//! `position_at_distance` at each step, and hands consecutive point pairs
//! to a sink. The sink is a pure side-effect boundary (a viewport, a file,
//! a collector); the walk itself owns no rendering state.

use super::centerline::Centerline;
use super::core::Point3;
use super::spiral::{SpiralError, SpiralSampler};

/// Receives consecutive spiral sample points as line segments.
pub trait LineSink {
    fn segment(&mut self, a: Point3, b: Point3);
}

/// Options for the trace walk.
#[derive(Debug, Clone, Copy)]
pub struct TraceOptions {
    /// Arc-length step between consecutive samples.
    pub step: f64,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self { step: 0.1 }
    }
}

/// A [`LineSink`] that collects segments into a vector.
#[derive(Debug, Default, Clone)]
pub struct SegmentCollector {
    pub segments: Vec<(Point3, Point3)>,
}

impl LineSink for SegmentCollector {
    fn segment(&mut self, a: Point3, b: Point3) {
        self.segments.push((a, b));
    }
}

/// Walk the spiral from distance 0 to the centerline's total length in
/// `options.step` increments, emitting a segment per step to `sink`.
///
/// Runs to completion once started; there is no early-exit hook. A
/// non-positive or non-finite step emits nothing.
pub fn trace_spiral<C: Centerline, S: LineSink + ?Sized>(
    sampler: &SpiralSampler<C>,
    sink: &mut S,
    options: TraceOptions,
) -> Result<(), SpiralError> {
    let length = sampler
        .centerline()
        .ok_or(SpiralError::MissingCenterline)?
        .total_length();
    if !options.step.is_finite() || options.step <= 0.0 {
        log::warn!("spiral trace skipped: step {} is not positive", options.step);
        return Ok(());
    }

    let mut last = sampler.position_at_distance(0.0)?;
    let mut distance = 0.0;
    let mut emitted = 0usize;
    while distance < length {
        distance += options.step;
        let current = sampler.position_at_distance(distance)?;
        sink.segment(last, current);
        last = current;
        emitted += 1;
    }

    log::debug!("spiral trace emitted {emitted} segments over length {length}");
    Ok(())
}

/// Like [`trace_spiral`], but treats an absent sink as a silent no-op.
pub fn trace_spiral_into<C: Centerline>(
    sampler: &SpiralSampler<C>,
    sink: Option<&mut dyn LineSink>,
    options: TraceOptions,
) -> Result<(), SpiralError> {
    match sink {
        Some(sink) => trace_spiral(sampler, sink, options),
        None => Ok(()),
    }
}
