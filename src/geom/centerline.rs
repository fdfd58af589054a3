//! Centerline curve collaborator.
//!
//! The spiral sampler only needs two things from the curve it winds around:
//! its total arc length, and an oriented frame at a given arc-length
//! distance. Any conforming implementation works (precomputed polyline,
//! analytic curve, NURBS); this module defines the capability trait and a
//! bundled arc-length-parameterized polyline.

use super::core::{Point3, Tolerance, Vec3};

/// Oriented frame at a point on a centerline.
///
/// All three axes are unit length and mutually perpendicular. `forward` is
/// the travel direction along the curve, `right` and `up` span the plane
/// perpendicular to it.
#[derive(Debug, Clone, Copy)]
pub struct RailFrame {
    /// Point on the centerline.
    pub origin: Point3,
    /// Tangent direction along the curve.
    pub forward: Vec3,
    /// Right direction, perpendicular to `forward`.
    pub right: Vec3,
    /// Up direction, `forward x right`, completing the right-handed frame.
    pub up: Vec3,
}

/// An arc-length queryable curve with orientation.
pub trait Centerline {
    /// Total arc length of the curve.
    fn total_length(&self) -> f64;

    /// Oriented frame at arc-length `distance`. Out-of-range distances are
    /// handled by the implementation (the bundled polyline clamps).
    fn frame_at(&self, distance: f64) -> RailFrame;
}

#[derive(Debug, thiserror::Error)]
pub enum CenterlineError {
    #[error("centerline requires at least 2 points")]
    TooFewPoints,
    #[error("centerline points must be finite")]
    NonFinitePoints,
    #[error("centerline has zero length")]
    DegenerateRail,
    #[error("reference up direction is zero or non-finite")]
    InvalidReferenceUp,
}

/// Picks a unit vector perpendicular to `v` by crossing with the world axis
/// least aligned with it. `v` must be unit length.
fn orthogonal_unit_vector(v: Vec3) -> Vec3 {
    let reference = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vec3::X
    } else if v.y.abs() <= v.z.abs() {
        Vec3::Y
    } else {
        Vec3::Z
    };
    reference
        .cross(v)
        .normalized()
        .unwrap_or(Vec3::Y)
}

/// Arc-length parameterized polyline centerline.
///
/// Frames are built from the segment tangent and a fixed reference up
/// direction, so orientation stays stable along straight stretches and
/// changes only where the tangent does.
#[derive(Debug, Clone)]
pub struct PolylineCenterline {
    points: Vec<Point3>,
    /// `cumulative[i]` is the arc length from the start to `points[i]`.
    cumulative: Vec<f64>,
    reference_up: Vec3,
}

impl PolylineCenterline {
    /// Build a centerline through `points` with world Z as the reference up.
    pub fn new(points: Vec<Point3>) -> Result<Self, CenterlineError> {
        Self::with_reference_up(points, Vec3::Z)
    }

    /// Build a centerline through `points` with an explicit reference up.
    ///
    /// Consecutive points closer than the default geometric tolerance are
    /// merged. Fails if fewer than two distinct points remain.
    pub fn with_reference_up(
        points: Vec<Point3>,
        reference_up: Vec3,
    ) -> Result<Self, CenterlineError> {
        if points.len() < 2 {
            return Err(CenterlineError::TooFewPoints);
        }
        if points.iter().any(|p| !p.is_finite()) {
            return Err(CenterlineError::NonFinitePoints);
        }
        let reference_up = reference_up
            .normalized()
            .ok_or(CenterlineError::InvalidReferenceUp)?;

        let tol = Tolerance::default_geom();
        let mut cleaned: Vec<Point3> = Vec::with_capacity(points.len());
        for p in points {
            if cleaned
                .last()
                .copied()
                .is_some_and(|prev| tol.approx_eq_point3(prev, p))
            {
                continue;
            }
            cleaned.push(p);
        }
        if cleaned.len() < 2 {
            return Err(CenterlineError::DegenerateRail);
        }

        let mut cumulative = Vec::with_capacity(cleaned.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in cleaned.windows(2) {
            total += pair[1].sub_point(pair[0]).length();
            cumulative.push(total);
        }

        Ok(Self {
            points: cleaned,
            cumulative,
            reference_up,
        })
    }

    /// Straight two-point centerline from `start` to `end`.
    pub fn straight(start: Point3, end: Point3) -> Result<Self, CenterlineError> {
        Self::new(vec![start, end])
    }

    /// The (deduplicated) points the centerline passes through.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Index of the segment containing arc-length `distance` (already
    /// clamped into `[0, total_length]`).
    fn segment_index(&self, distance: f64) -> usize {
        let upper = self.cumulative.partition_point(|&len| len <= distance);
        upper.clamp(1, self.cumulative.len() - 1) - 1
    }
}

impl Centerline for PolylineCenterline {
    fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn frame_at(&self, distance: f64) -> RailFrame {
        let distance = distance.clamp(0.0, self.total_length());
        let i = self.segment_index(distance);
        let (a, b) = (self.points[i], self.points[i + 1]);

        let segment = b.sub_point(a);
        let segment_len = segment.length();
        let t = if segment_len > 0.0 {
            (distance - self.cumulative[i]) / segment_len
        } else {
            0.0
        };

        // Dedup during construction guarantees a non-degenerate segment.
        let forward = segment.normalized().unwrap_or(Vec3::X);
        let right = {
            let cross = self.reference_up.cross(forward);
            if Tolerance::ZERO_LENGTH.is_zero_vec3(cross) {
                // Tangent is parallel to the reference up.
                orthogonal_unit_vector(forward)
            } else {
                cross.normalized().unwrap_or_else(|| orthogonal_unit_vector(forward))
            }
        };
        let up = forward.cross(right).normalized().unwrap_or(self.reference_up);

        RailFrame {
            origin: a.lerp(b, t),
            forward,
            right,
            up,
        }
    }
}
