//! Spiral sampling around a centerline curve.
//!
//! A spiral here is a point orbiting the centerline's local frame: at
//! normalized progress `alpha` along the curve, the sampler rotates the
//! frame's right axis about its forward axis by the winding angle for that
//! `alpha`, scales it by the resolved radius, and offsets the frame origin
//! by the result. One `alpha` drives centerline position, winding angle,
//! and radius resolution together, so the three stay mutually consistent
//! even on non-uniformly parameterized curves.

use super::centerline::Centerline;
use super::core::{Point3, Transform};
use super::profile::RadiusProfile;

/// Degrees of winding contributed by one full spiral turn.
const DEGREES_PER_TURN: f64 = 360.0;

/// Winding and radius parameters for a spiral. Plain data; fields may be
/// changed freely between queries.
#[derive(Debug, Clone, Copy)]
pub struct SpiralConfig {
    /// Angular offset in degrees where winding begins.
    pub theta_start: f64,
    /// Number of full 360-degree windings from start to end of the
    /// centerline. May be fractional.
    pub spiral_count: f64,
    /// Radius at the start of the centerline when no profile is attached.
    pub default_radius: f64,
    /// Radius at the end of the centerline when no profile is attached.
    pub default_end_radius: f64,
    /// Multiplier applied to sampled radius-profile values.
    pub curve_scalar: f64,
    /// Winding direction flag. Declared for callers but not currently
    /// consumed: rotation is always a right-hand turn about the forward
    /// axis.
    // TODO: negate the rotation sense when this is false.
    pub clockwise: bool,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            theta_start: 0.0,
            spiral_count: 1.0,
            default_radius: 100.0,
            default_end_radius: 100.0,
            curve_scalar: 1.0,
            clockwise: true,
        }
    }
}

impl SpiralConfig {
    /// Total winding angle in degrees across the whole centerline.
    #[must_use]
    pub fn theta_max(&self) -> f64 {
        self.theta_start + self.spiral_count * DEGREES_PER_TURN
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpiralError {
    #[error("no centerline curve is attached")]
    MissingCenterline,
    #[error("centerline has zero or negative length")]
    DegenerateCurve,
    #[error("total winding angle is zero")]
    DegenerateWinding,
}

/// Computes points and transforms on a spiral wound around a centerline.
///
/// The centerline and the optional radius profile are attached once and
/// reused across many queries; every query is stateless and leaves the
/// sampler untouched.
pub struct SpiralSampler<C> {
    /// Winding and radius parameters, freely mutable between queries.
    pub config: SpiralConfig,
    centerline: Option<C>,
    profile: Option<Box<dyn RadiusProfile>>,
}

impl<C: Centerline> SpiralSampler<C> {
    /// Sampler with no centerline attached. Queries fail with
    /// [`SpiralError::MissingCenterline`] until one is set.
    #[must_use]
    pub fn new(config: SpiralConfig) -> Self {
        Self {
            config,
            centerline: None,
            profile: None,
        }
    }

    /// Sampler wound around `centerline`.
    #[must_use]
    pub fn with_centerline(config: SpiralConfig, centerline: C) -> Self {
        Self {
            config,
            centerline: Some(centerline),
            profile: None,
        }
    }

    pub fn set_centerline(&mut self, centerline: C) {
        self.centerline = Some(centerline);
    }

    #[must_use]
    pub fn centerline(&self) -> Option<&C> {
        self.centerline.as_ref()
    }

    /// Attach a radius profile, overriding the linear default-radius
    /// interpolation.
    pub fn set_profile(&mut self, profile: Box<dyn RadiusProfile>) {
        self.profile = Some(profile);
    }

    /// Detach the radius profile and fall back to linear interpolation.
    pub fn clear_profile(&mut self) {
        self.profile = None;
    }

    fn attached_centerline(&self) -> Result<&C, SpiralError> {
        self.centerline.as_ref().ok_or(SpiralError::MissingCenterline)
    }

    /// Radius at normalized progress `alpha`.
    ///
    /// With a profile attached, sampling is anchored at zero: the input is
    /// `alpha * t_max` and the profile's declared lower domain bound is
    /// ignored. Profiles whose domain starts above zero are therefore
    /// sampled from zero up, not across `[t_min, t_max]`.
    fn resolve_radius(&self, alpha: f64) -> f64 {
        match self.profile.as_deref() {
            Some(profile) => {
                let (_, t_max) = profile.domain();
                profile.sample(alpha * t_max) * self.config.curve_scalar
            }
            None => {
                let c = &self.config;
                c.default_radius + (c.default_end_radius - c.default_radius) * alpha
            }
        }
    }

    /// Point on the spiral surface at arc-length `distance` along the
    /// centerline.
    ///
    /// Negative distances are clamped to zero. Distances are not clamped at
    /// the far end; behavior past the curve is whatever the centerline's
    /// `frame_at` does there. The winding angle is derived from normalized
    /// progress, so windings are distributed evenly over arc length.
    pub fn position_at_distance(&self, distance: f64) -> Result<Point3, SpiralError> {
        let rail = self.attached_centerline()?;
        let distance = distance.max(0.0);
        let length = rail.total_length();
        if !length.is_finite() || length <= 0.0 {
            return Err(SpiralError::DegenerateCurve);
        }

        let alpha = distance / length;
        let frame = rail.frame_at(distance);
        let theta = self.config.theta_max() * alpha;
        let radius = self.resolve_radius(alpha);

        let offset = frame.right.rotated_about(frame.forward, theta.to_radians());
        Ok(frame.origin + offset * radius)
    }

    /// Point on the spiral surface at winding angle `theta` degrees.
    ///
    /// `theta` is clamped into the interval between 0 and the total winding
    /// angle. Unlike [`Self::position_at_distance`], the rotation uses the
    /// clamped input angle directly rather than an angle re-derived from
    /// `alpha`; the two entry points agree where both are exact but are
    /// deliberately independent code paths.
    pub fn position_at_angle(&self, theta: f64) -> Result<Point3, SpiralError> {
        let rail = self.attached_centerline()?;
        let theta_max = self.config.theta_max();
        if theta_max == 0.0 {
            return Err(SpiralError::DegenerateWinding);
        }

        // Order the clamp endpoints so a negative total angle still forms
        // a valid interval.
        let theta = theta.clamp(theta_max.min(0.0), theta_max.max(0.0));
        let alpha = theta / theta_max;
        let distance = rail.total_length() * alpha;
        let frame = rail.frame_at(distance);
        let radius = self.resolve_radius(alpha);

        let offset = frame.right.rotated_about(frame.forward, theta.to_radians());
        Ok(frame.origin + offset * radius)
    }

    /// Full transform on the spiral surface at arc-length `distance`.
    ///
    /// The translation equals [`Self::position_at_distance`] for the same
    /// input. The orientation is the centerline frame with its right and up
    /// axes rotated by the winding angle about the forward axis, laid out
    /// as X = forward, Y = right, Z = up.
    pub fn transform_at_distance(&self, distance: f64) -> Result<Transform, SpiralError> {
        let rail = self.attached_centerline()?;
        let distance = distance.max(0.0);
        let length = rail.total_length();
        if !length.is_finite() || length <= 0.0 {
            return Err(SpiralError::DegenerateCurve);
        }

        let alpha = distance / length;
        let frame = rail.frame_at(distance);
        let theta_radians = (self.config.theta_max() * alpha).to_radians();
        let radius = self.resolve_radius(alpha);

        let right = frame.right.rotated_about(frame.forward, theta_radians);
        let up = frame.up.rotated_about(frame.forward, theta_radians);
        let origin = frame.origin + right * radius;
        Ok(Transform::from_axes(origin, frame.forward, right, up))
    }
}
