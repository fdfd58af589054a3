use crate::geom::{
    Point3, PolylineCenterline, SegmentCollector, SpiralConfig, SpiralError, SpiralSampler,
    Tolerance, TraceOptions, trace_spiral, trace_spiral_into,
};

fn unit_rail_sampler() -> SpiralSampler<PolylineCenterline> {
    let rail = PolylineCenterline::straight(Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0))
        .expect("straight rail");
    SpiralSampler::with_centerline(SpiralConfig::default(), rail)
}

#[test]
fn trace_emits_one_segment_per_step() {
    let sampler = unit_rail_sampler();
    let mut collector = SegmentCollector::default();

    // Step 0.25 over a length-1 rail: samples at 0.25, 0.5, 0.75, 1.0.
    trace_spiral(&sampler, &mut collector, TraceOptions { step: 0.25 }).expect("trace");
    assert_eq!(collector.segments.len(), 4);

    let tol = Tolerance::default_geom();
    let start = sampler.position_at_distance(0.0).expect("query");
    let end = sampler.position_at_distance(1.0).expect("query");
    assert!(tol.approx_eq_point3(collector.segments[0].0, start));
    assert!(tol.approx_eq_point3(collector.segments[3].1, end));
}

#[test]
fn trace_segments_are_connected() {
    let sampler = unit_rail_sampler();
    let mut collector = SegmentCollector::default();
    trace_spiral(&sampler, &mut collector, TraceOptions { step: 0.125 }).expect("trace");

    let tol = Tolerance::default_geom();
    for pair in collector.segments.windows(2) {
        assert!(tol.approx_eq_point3(pair[0].1, pair[1].0));
    }
}

#[test]
fn trace_with_default_step_covers_the_rail() {
    let sampler = unit_rail_sampler();
    let mut collector = SegmentCollector::default();
    trace_spiral(&sampler, &mut collector, TraceOptions::default()).expect("trace");
    // Step 0.1 over length 1: at least 10 segments, last one at or past the end.
    assert!(collector.segments.len() >= 10);
}

#[test]
fn trace_without_sink_is_a_no_op() {
    let sampler = unit_rail_sampler();
    trace_spiral_into(&sampler, None, TraceOptions::default()).expect("no-op trace");
}

#[test]
fn trace_with_sink_option_still_collects() {
    let sampler = unit_rail_sampler();
    let mut collector = SegmentCollector::default();
    trace_spiral_into(
        &sampler,
        Some(&mut collector),
        TraceOptions { step: 0.5 },
    )
    .expect("trace");
    assert_eq!(collector.segments.len(), 2);
}

#[test]
fn trace_requires_a_centerline() {
    let sampler = SpiralSampler::<PolylineCenterline>::new(SpiralConfig::default());
    let mut collector = SegmentCollector::default();
    let result = trace_spiral(&sampler, &mut collector, TraceOptions::default());
    assert!(matches!(result, Err(SpiralError::MissingCenterline)));
    assert!(collector.segments.is_empty());
}

#[test]
fn non_positive_step_emits_nothing() {
    let sampler = unit_rail_sampler();
    let mut collector = SegmentCollector::default();
    trace_spiral(&sampler, &mut collector, TraceOptions { step: 0.0 }).expect("trace");
    trace_spiral(&sampler, &mut collector, TraceOptions { step: -1.0 }).expect("trace");
    assert!(collector.segments.is_empty());
}
