use gpui_plot_quiz::{
    AxisId, AxisSpec, Plot, PlotConfig, PlotMode, PlotObservers, PlotSpec, ShadeRange, SpecError,
};

const JSON: &str = r#"{
    "xAxis": { "min": 0, "max": 50, "step": 10, "snapStep": 5, "label": "time" },
    "yAxis": { "min": -10, "max": 10, "step": 5 },
    "lines": [
        { "id": "f", "colorToken": "primary", "points": [{ "x": 0, "y": -5 }, { "x": 50, "y": 5 }] }
    ],
    "shadeRanges": [{ "fromX": 10, "toX": 40 }],
    "zeroLineVisible": true,
    "mode": "read"
}"#;

#[test]
fn test_spec_from_json() {
    let spec: PlotSpec = serde_json::from_str(JSON).unwrap();
    assert_eq!(spec.x_axis.snap_step(), 5.0);
    assert_eq!(spec.x_axis.label, "time");
    assert_eq!(spec.lines[0].color_token, "primary");
    assert_eq!(spec.lines[0].points.len(), 2);
    assert_eq!(spec.shade_ranges, vec![ShadeRange::new(10.0, 40.0)]);
    assert!(spec.zero_line_visible);
    assert_eq!(spec.mode, PlotMode::Read);
    assert!(spec.validate().is_ok());
}

#[test]
fn test_snap_step_defaults_to_step() {
    let spec: PlotSpec = serde_json::from_str(JSON).unwrap();
    assert_eq!(spec.y_axis.snap_step, None);
    assert_eq!(spec.y_axis.snap_step(), 5.0);

    let json = serde_json::to_value(&spec.y_axis).unwrap();
    assert!(json.get("snapStep").is_none());
}

#[test]
fn test_minimal_spec_defaults_to_view_mode() {
    let spec: PlotSpec = serde_json::from_str(
        r#"{ "xAxis": { "min": 0, "max": 1, "step": 1 }, "yAxis": { "min": 0, "max": 1, "step": 1 } }"#,
    )
    .unwrap();
    assert_eq!(spec.mode, PlotMode::View);
    assert!(spec.lines.is_empty());
    assert!(!spec.zero_line_visible);
}

#[test]
fn test_axis_validation() {
    assert_eq!(
        AxisSpec::new(5.0, 5.0, 1.0).validate(AxisId::X),
        Err(SpecError::InvalidRange {
            axis: AxisId::X,
            min: 5.0,
            max: 5.0
        })
    );
    assert_eq!(
        AxisSpec::new(0.0, 5.0, 0.0).validate(AxisId::Y),
        Err(SpecError::InvalidStep {
            axis: AxisId::Y,
            step: 0.0
        })
    );
    assert_eq!(
        AxisSpec::new(0.0, 5.0, 1.0).with_snap_step(-1.0).validate(AxisId::X),
        Err(SpecError::InvalidSnapStep {
            axis: AxisId::X,
            snap_step: -1.0
        })
    );
    assert_eq!(
        AxisSpec::new(f64::NEG_INFINITY, 5.0, 1.0).validate(AxisId::Y),
        Err(SpecError::NonFiniteBound { axis: AxisId::Y })
    );
}

#[test]
fn test_plot_rejects_bad_spec() {
    let spec = PlotSpec::new(AxisSpec::new(0.0, 10.0, 1.0), AxisSpec::new(0.0, 10.0, 1.0))
        .with_shade_range(ShadeRange::new(0.0, 5.0))
        .with_shade_range(ShadeRange::new(8.0, 3.0));
    let err = Plot::new(spec, PlotConfig::default(), PlotObservers::new()).unwrap_err();
    assert_eq!(
        err,
        SpecError::InvalidShadeRange {
            index: 1,
            from_x: 8.0,
            to_x: 3.0
        }
    );
    assert!(err.to_string().contains("shade range #1"));
}

#[test]
fn test_error_messages_name_the_axis() {
    let err = AxisSpec::new(10.0, 0.0, 1.0).validate(AxisId::Y).unwrap_err();
    assert_eq!(err.to_string(), "y axis max (0) must be greater than min (10)");
}

#[test]
fn test_config_round_trips_through_json() {
    let config = PlotConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: PlotConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
