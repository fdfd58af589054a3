mod centerline;
mod core;
mod profile;
mod spiral;
mod trace;

pub use centerline::{Centerline, CenterlineError, PolylineCenterline, RailFrame};
pub use core::{Point3, Tolerance, Transform, Vec3};
pub use profile::{PiecewiseLinearProfile, ProfileError, RadiusProfile};
pub use spiral::{SpiralConfig, SpiralError, SpiralSampler};
pub use trace::{
    LineSink, SegmentCollector, TraceOptions, trace_spiral, trace_spiral_into,
};

#[cfg(test)]
mod tests;
