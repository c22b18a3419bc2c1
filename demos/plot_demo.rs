use gpui::prelude::*;
use gpui::*;
use gpui_plot_quiz::{
    AxisSpec, ClearPoints, DataPoint, LineSpec, Plot, PlotConfig, PlotMode, PlotObservers,
    PlotSpec, PlotTheme, PlotView, ShadeRange, UndoPoint,
};
use rand::Rng;

/// A quiz question as it would arrive from a content backend.
const QUESTION: &str = r#"{
    "xAxis": { "min": 0, "max": 20, "step": 2, "snapStep": 1, "label": "t" },
    "yAxis": { "min": -10, "max": 10, "step": 5, "snapStep": 1, "label": "v" },
    "zeroLineVisible": true,
    "mode": "plot"
}"#;

struct DemoApp {
    plots: Vec<Entity<PlotView>>,
}

impl DemoApp {
    fn new(cx: &mut Context<Self>) -> eyre::Result<Self> {
        let base: PlotSpec = serde_json::from_str(QUESTION)?;

        let mut rng = rand::rng();
        let mut points = Vec::new();
        let mut y: f64 = 0.0;
        for x in (0..=20).step_by(2) {
            points.push(DataPoint::new(x as f64, y));
            y = (y + rng.random_range(-4.0..4.0)).clamp(-9.0, 9.0);
        }
        let walk = LineSpec::new("walk", points).with_color_token("primary");

        let read_spec = base
            .clone()
            .with_line(walk.clone())
            .with_shade_range(ShadeRange::new(4.0, 16.0))
            .with_mode(PlotMode::Read);
        let read_plot = Plot::new(
            read_spec,
            PlotConfig::default(),
            PlotObservers::new().on_value_read(|value| {
                tracing::info!(x = value.x, y = value.y, "read");
            }),
        )?;

        let plot_spec = PlotSpec::new(
            AxisSpec::new(-5.0, 5.0, 1.0).with_snap_step(0.5).with_label("x"),
            AxisSpec::new(-5.0, 5.0, 1.0).with_snap_step(0.5).with_label("y"),
        )
        .with_zero_line(true)
        .with_mode(base.mode);
        let answer_plot = Plot::new(
            plot_spec,
            PlotConfig::default(),
            PlotObservers::new().on_points_change(|points| {
                tracing::info!(count = points.len(), ?points, "answer changed");
            }),
        )?;

        let theme = PlotTheme::default();
        let plots = vec![
            cx.new(|cx| PlotView::new(read_plot, theme.clone(), cx)),
            cx.new(|cx| {
                let mut view = PlotView::new(answer_plot, theme.clone(), cx);
                view.set_placed_points(vec![DataPoint::new(-2.2, 1.1)], cx);
                view
            }),
        ];
        Ok(Self { plots })
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .bg(gpui::white())
            .children(
                self.plots
                    .iter()
                    .map(|plot| div().flex_1().h_full().p_4().child(plot.clone())),
            )
    }
}

fn main() {
    Application::new().run(|cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("cmd-z", UndoPoint, None),
            KeyBinding::new("ctrl-z", UndoPoint, None),
            KeyBinding::new("escape", ClearPoints, None),
        ]);

        let result = cx.open_window(WindowOptions::default(), |_window, cx| {
            cx.new(|cx| match DemoApp::new(cx) {
                Ok(app) => app,
                Err(err) => {
                    eprintln!("invalid plot: {err:?}");
                    DemoApp { plots: Vec::new() }
                }
            })
        });
        if let Err(err) = result {
            eprintln!("failed to open window: {err:?}");
        }
    });
}
