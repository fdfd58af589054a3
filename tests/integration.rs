use spiral_engine::geom::{
    Centerline, PiecewiseLinearProfile, Point3, PolylineCenterline, SegmentCollector,
    SpiralConfig, SpiralSampler, Tolerance, TraceOptions, Vec3, trace_spiral,
};

fn ramp_rail() -> PolylineCenterline {
    // A bent, non-planar centerline: along X, then diagonally up in Y/Z.
    PolylineCenterline::new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(10.0, 0.0, 0.0),
        Point3::new(10.0, 10.0, 5.0),
        Point3::new(20.0, 10.0, 5.0),
    ])
    .expect("ramp rail")
}

#[test]
fn spiral_points_stay_on_the_configured_radius() {
    let config = SpiralConfig {
        spiral_count: 3.0,
        default_radius: 2.0,
        default_end_radius: 2.0,
        ..SpiralConfig::default()
    };
    let rail = ramp_rail();
    let length = rail.total_length();
    let sampler = SpiralSampler::with_centerline(config, rail.clone());
    let tol = Tolerance::LOOSE;

    for i in 0..=20 {
        let distance = length * f64::from(i) / 20.0;
        let point = sampler.position_at_distance(distance).expect("query");
        assert!(point.is_finite());
        let frame = rail.frame_at(distance);
        let offset = point.sub_point(frame.origin);
        assert!(tol.approx_eq_f64(offset.length(), 2.0));
        // The offset lies in the plane perpendicular to the rail tangent.
        assert!(tol.approx_zero_f64(offset.dot(frame.forward)));
    }
}

#[test]
fn profile_driven_spiral_end_to_end() {
    let config = SpiralConfig {
        curve_scalar: 0.5,
        ..SpiralConfig::default()
    };
    let rail = PolylineCenterline::straight(Point3::ORIGIN, Point3::new(100.0, 0.0, 0.0))
        .expect("rail");
    let mut sampler = SpiralSampler::with_centerline(config, rail);
    sampler.set_profile(Box::new(
        PiecewiseLinearProfile::new(vec![(0.0, 8.0), (50.0, 40.0)]).expect("profile"),
    ));
    let tol = Tolerance::default_geom();

    // alpha 0.5 samples the profile at t = 25 (zero-anchored), giving 24,
    // scaled by 0.5.
    let point = sampler.position_at_distance(50.0).expect("query");
    let offset = point.sub_point(Point3::new(50.0, 0.0, 0.0));
    assert!(tol.approx_eq_f64(offset.length(), 12.0));
}

#[test]
fn transform_orientation_tracks_the_rail() {
    let sampler = SpiralSampler::with_centerline(SpiralConfig::default(), ramp_rail());
    let tol = Tolerance::default_geom();

    let xform = sampler.transform_at_distance(5.0).expect("query");
    // First segment runs along X, so the transform's X axis does too.
    assert!(tol.approx_eq_vec3(xform.apply_vec(Vec3::X), Vec3::X));
}

#[test]
fn traced_polyline_approximates_the_spiral() {
    let config = SpiralConfig {
        default_radius: 1.0,
        default_end_radius: 1.0,
        ..SpiralConfig::default()
    };
    let rail = ramp_rail();
    let length = rail.total_length();
    let sampler = SpiralSampler::with_centerline(config, rail);

    let mut collector = SegmentCollector::default();
    trace_spiral(&sampler, &mut collector, TraceOptions { step: 0.25 }).expect("trace");

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let expected = (length / 0.25).ceil() as usize;
    assert!(collector.segments.len() >= expected);

    let tol = Tolerance::default_geom();
    for pair in collector.segments.windows(2) {
        assert!(tol.approx_eq_point3(pair[0].1, pair[1].0));
    }
}
