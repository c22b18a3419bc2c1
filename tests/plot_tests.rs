use gpui::{point, px, size, Bounds, Point};
use gpui_plot_quiz::{
    AxisSpec, DataPoint, LineSpec, OverlayOutcome, Plot, PlotConfig, PlotMode, PlotObservers,
    PlotSpec, PointerInput, ShadeRange, TouchPhase,
};
use std::cell::RefCell;
use std::rc::Rc;

// With the default gutters this gives a 500 x 400 plot rectangle at (48, 16).
const OUTER: (f32, f32) = (564.0, 452.0);

fn spec(mode: PlotMode) -> PlotSpec {
    PlotSpec::new(
        AxisSpec::new(0.0, 10.0, 1.0).with_label("t"),
        AxisSpec::new(0.0, 10.0, 1.0).with_label("v"),
    )
    .with_mode(mode)
}

fn sized(mut plot: Plot) -> Plot {
    plot.resize(Bounds::new(point(px(0.0), px(0.0)), size(px(OUTER.0), px(OUTER.1))));
    plot
}

fn screen(x: f64, y: f64) -> Point<f64> {
    Point::new(48.0 + x * 50.0, 416.0 - y * 40.0)
}

type Log<T> = Rc<RefCell<Vec<T>>>;

fn plot_with_logs(spec: PlotSpec) -> (Plot, Log<Vec<DataPoint>>, Log<DataPoint>) {
    let points: Log<Vec<DataPoint>> = Rc::default();
    let reads: Log<DataPoint> = Rc::default();
    let (p, r) = (points.clone(), reads.clone());
    let observers = PlotObservers::new()
        .on_points_change(move |list| p.borrow_mut().push(list.to_vec()))
        .on_value_read(move |value| r.borrow_mut().push(value));
    let plot = Plot::new(spec, PlotConfig::default(), observers).expect("valid spec");
    (sized(plot), points, reads)
}

#[test]
fn test_toggle_same_spot_twice_leaves_store_empty() {
    let (mut plot, points, _) = plot_with_logs(spec(PlotMode::Plot));
    let at = screen(5.0, 5.0);

    assert_eq!(
        plot.handle_input(PointerInput::Commit(at)),
        OverlayOutcome::PointAdded(DataPoint::new(5.0, 5.0))
    );
    assert_eq!(
        plot.handle_input(PointerInput::Commit(at)),
        OverlayOutcome::PointRemoved(DataPoint::new(5.0, 5.0))
    );

    assert!(plot.placed_points().is_empty());
    let log = points.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], vec![DataPoint::new(5.0, 5.0)]);
    assert!(log[1].is_empty());
}

#[test]
fn test_toggle_twice_restores_seeded_points_in_order() {
    let (mut plot, points, _) = plot_with_logs(spec(PlotMode::Plot));
    let seeded = vec![
        DataPoint::new(7.0, 1.0),
        DataPoint::new(3.0, 2.0),
        DataPoint::new(5.0, 9.0),
        DataPoint::new(1.0, 4.0),
    ];
    plot.set_placed_points(seeded.clone());
    let preview = plot.preview().to_vec();

    let at = screen(4.0, 6.0);
    plot.handle_input(PointerInput::Commit(at));
    assert_eq!(plot.placed_points().len(), 5);
    plot.handle_input(PointerInput::Commit(at));

    assert_eq!(plot.placed_points(), seeded);
    assert_eq!(plot.preview(), preview.as_slice());
    assert_eq!(points.borrow().last(), Some(&seeded));
}

#[test]
fn test_nearby_clicks_snap_to_the_same_point() {
    let (mut plot, _, _) = plot_with_logs(spec(PlotMode::Plot));
    plot.handle_input(PointerInput::Commit(Point::new(298.0 + 7.0, 216.0 - 6.0)));
    let outcome = plot.handle_input(PointerInput::Commit(Point::new(298.0 - 8.0, 216.0 + 5.0)));
    assert_eq!(outcome, OverlayOutcome::PointRemoved(DataPoint::new(5.0, 5.0)));
}

#[test]
fn test_read_mode_emits_once_per_commit() {
    let (mut plot, points, reads) = plot_with_logs(spec(PlotMode::Read));
    let outcome = plot.handle_input(PointerInput::Commit(screen(3.2, 6.9)));
    assert_eq!(outcome, OverlayOutcome::ValueRead(DataPoint::new(3.0, 7.0)));
    assert_eq!(*reads.borrow(), vec![DataPoint::new(3.0, 7.0)]);
    assert!(points.borrow().is_empty());
    assert!(plot.placed_points().is_empty());

    plot.handle_input(PointerInput::Commit(screen(3.0, 7.0)));
    assert_eq!(reads.borrow().len(), 2);
}

#[test]
fn test_view_mode_ignores_pointer() {
    let (mut plot, points, reads) = plot_with_logs(spec(PlotMode::View));
    for input in [
        PointerInput::Move(screen(5.0, 5.0)),
        PointerInput::Commit(screen(5.0, 5.0)),
        PointerInput::Cancel,
    ] {
        assert_eq!(plot.handle_input(input), OverlayOutcome::Ignored);
    }
    assert!(plot.crosshair().is_none());
    assert!(points.borrow().is_empty());
    assert!(reads.borrow().is_empty());
}

#[test]
fn test_move_tracks_quantized_crosshair() {
    let (mut plot, _, _) = plot_with_logs(spec(PlotMode::Read));
    let outcome = plot.handle_input(PointerInput::Move(screen(2.4, 8.6)));
    assert_eq!(outcome, OverlayOutcome::Tracked(DataPoint::new(2.0, 9.0)));

    let crosshair = plot.crosshair().expect("crosshair after move");
    assert_eq!(crosshair.data, DataPoint::new(2.0, 9.0));
    assert_eq!(crosshair.readout, "t = 2, v = 9");
    assert!((crosshair.screen.x - screen(2.0, 9.0).x).abs() < 1e-9);

    assert_eq!(plot.handle_input(PointerInput::Cancel), OverlayOutcome::Cancelled);
    assert!(plot.crosshair().is_none());
    assert_eq!(plot.handle_input(PointerInput::Cancel), OverlayOutcome::Ignored);
}

#[test]
fn test_margin_keeps_boundary_reachable() {
    let (mut plot, _, _) = plot_with_logs(spec(PlotMode::Plot));
    let outcome = plot.handle_input(PointerInput::Commit(Point::new(40.0, 424.0)));
    assert_eq!(outcome, OverlayOutcome::PointAdded(DataPoint::new(0.0, 0.0)));
}

#[test]
fn test_outside_hit_region_is_ignored() {
    let (mut plot, points, _) = plot_with_logs(spec(PlotMode::Plot));
    assert_eq!(
        plot.handle_input(PointerInput::Commit(Point::new(10.0, 216.0))),
        OverlayOutcome::Ignored
    );
    assert_eq!(
        plot.handle_input(PointerInput::Move(Point::new(300.0, 445.0))),
        OverlayOutcome::Ignored
    );
    assert!(points.borrow().is_empty());
    assert!(plot.crosshair().is_none());
}

#[test]
fn test_leaving_hit_region_clears_crosshair() {
    let (mut plot, _, _) = plot_with_logs(spec(PlotMode::Read));
    plot.handle_input(PointerInput::Move(screen(5.0, 5.0)));
    assert!(plot.crosshair().is_some());

    assert_eq!(
        plot.handle_input(PointerInput::Move(Point::new(300.0, 445.0))),
        OverlayOutcome::Cancelled
    );
    assert!(plot.crosshair().is_none());
    assert!(plot.scene().crosshair.is_none());

    assert_eq!(
        plot.handle_input(PointerInput::Move(Point::new(300.0, 445.0))),
        OverlayOutcome::Ignored
    );
}

#[test]
fn test_touch_commits_on_release() {
    let (mut plot, _, _) = plot_with_logs(spec(PlotMode::Plot));
    let at = screen(4.0, 6.0);
    assert_eq!(
        plot.handle_input(PointerInput::from_touch(TouchPhase::Started, at)),
        OverlayOutcome::Tracked(DataPoint::new(4.0, 6.0))
    );
    assert_eq!(
        plot.handle_input(PointerInput::from_touch(TouchPhase::Moved, at)),
        OverlayOutcome::Tracked(DataPoint::new(4.0, 6.0))
    );
    assert!(plot.placed_points().is_empty());
    assert_eq!(
        plot.handle_input(PointerInput::from_touch(TouchPhase::Ended, at)),
        OverlayOutcome::PointAdded(DataPoint::new(4.0, 6.0))
    );

    plot.handle_input(PointerInput::from_touch(TouchPhase::Cancelled, at));
    assert!(plot.crosshair().is_none());
    assert_eq!(plot.placed_points().len(), 1);
}

#[test]
fn test_preview_is_sorted_but_store_keeps_order() {
    let (mut plot, _, _) = plot_with_logs(spec(PlotMode::Plot));
    plot.handle_input(PointerInput::Commit(screen(7.0, 1.0)));
    plot.handle_input(PointerInput::Commit(screen(3.0, 2.0)));
    plot.handle_input(PointerInput::Commit(screen(5.0, 9.0)));

    let xs = |points: &[DataPoint]| points.iter().map(|p| p.x).collect::<Vec<_>>();
    assert_eq!(xs(&plot.placed_points()), vec![7.0, 3.0, 5.0]);
    assert_eq!(xs(plot.preview()), vec![3.0, 5.0, 7.0]);

    let scene = plot.scene();
    assert_eq!(scene.placed.markers.len(), 3);
    assert_eq!(scene.placed.preview.len(), 3);
    assert!(scene.placed.preview.windows(2).all(|w| w[0].x <= w[1].x));
}

#[test]
fn test_set_placed_points_quantizes_and_notifies() {
    let (mut plot, points, _) = plot_with_logs(spec(PlotMode::Plot));
    plot.set_placed_points(vec![DataPoint::new(2.4, 11.0), DataPoint::new(-1.0, 3.6)]);
    let expected = vec![DataPoint::new(2.0, 10.0), DataPoint::new(0.0, 4.0)];
    assert_eq!(plot.placed_points(), expected);
    assert_eq!(*points.borrow(), vec![expected]);

    // Restored points toggle off like clicked ones.
    let outcome = plot.handle_input(PointerInput::Commit(screen(2.0, 10.0)));
    assert_eq!(outcome, OverlayOutcome::PointRemoved(DataPoint::new(2.0, 10.0)));
}

#[test]
fn test_undo_and_clear() {
    let (mut plot, points, _) = plot_with_logs(spec(PlotMode::Plot));
    plot.handle_input(PointerInput::Commit(screen(1.0, 1.0)));
    plot.handle_input(PointerInput::Commit(screen(2.0, 2.0)));

    assert_eq!(plot.undo_last_point(), Some(DataPoint::new(2.0, 2.0)));
    assert_eq!(plot.placed_points(), vec![DataPoint::new(1.0, 1.0)]);
    assert_eq!(plot.preview(), &[DataPoint::new(1.0, 1.0)]);

    plot.clear_placed_points();
    assert!(plot.placed_points().is_empty());
    assert!(plot.preview().is_empty());
    assert_eq!(plot.undo_last_point(), None);
    assert_eq!(points.borrow().len(), 4);
}

#[test]
fn test_set_mode_drops_crosshair_and_changes_behaviour() {
    let (mut plot, _, reads) = plot_with_logs(spec(PlotMode::Plot));
    plot.handle_input(PointerInput::Move(screen(5.0, 5.0)));
    assert!(plot.crosshair().is_some());

    plot.set_mode(PlotMode::Read);
    assert!(plot.crosshair().is_none());
    plot.handle_input(PointerInput::Commit(screen(5.0, 5.0)));
    assert_eq!(reads.borrow().len(), 1);
    assert!(plot.placed_points().is_empty());

    plot.set_mode(PlotMode::View);
    assert_eq!(
        plot.handle_input(PointerInput::Commit(screen(5.0, 5.0))),
        OverlayOutcome::Ignored
    );
}

#[test]
fn test_resize_is_idempotent() {
    let (mut plot, _, _) = plot_with_logs(spec(PlotMode::Read));
    let outer = Bounds::new(point(px(0.0), px(0.0)), size(px(OUTER.0), px(OUTER.1)));
    assert!(!plot.resize(outer));

    let rect = plot.mapper().plot_rect();
    assert_eq!(rect.origin, point(px(48.0), px(16.0)));
    assert_eq!(rect.size, size(px(500.0), px(400.0)));

    assert!(plot.resize(Bounds::new(point(px(10.0), px(10.0)), size(px(300.0), px(200.0)))));
}

#[test]
fn test_scene_contains_shading_lines_and_zero_line() {
    let spec = PlotSpec::new(AxisSpec::new(0.0, 10.0, 1.0), AxisSpec::new(-5.0, 5.0, 1.0))
        .with_line(LineSpec::new("f", vec![DataPoint::new(0.0, -2.0), DataPoint::new(10.0, 2.0)]))
        .with_line(LineSpec::new("g", vec![DataPoint::new(3.0, 3.0)]))
        .with_shade_range(ShadeRange::new(0.0, 10.0))
        .with_zero_line(true);
    let (plot, _, _) = plot_with_logs(spec);

    assert_eq!(plot.shaded_regions().len(), 2);
    let scene = plot.scene();
    assert_eq!(scene.shades.len(), 2);
    assert_eq!(scene.lines.len(), 2);
    assert_eq!(scene.lines[0].segment_count(), 1);
    assert_eq!(scene.lines[1].segment_count(), 0);
    assert_eq!(scene.lines[1].markers.len(), 1);
    assert!(!scene.zero_line.is_empty());
    assert!(scene.zero_line.iter().all(|s| s.from.y == s.to.y));
    assert!(scene.crosshair.is_none());
}
