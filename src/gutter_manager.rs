use gpui::*;
use serde::{Deserialize, Serialize};

/// Space reserved around the plot rectangle for axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gutters {
    pub left: Pixels,
    pub right: Pixels,
    pub top: Pixels,
    pub bottom: Pixels,
}

impl Default for Gutters {
    fn default() -> Self {
        Self {
            left: px(48.0),
            right: px(16.0),
            top: px(16.0),
            bottom: px(36.0),
        }
    }
}

pub struct GutterManager;

impl GutterManager {
    /// The plot rectangle left once the gutters are carved out of `outer`.
    /// Never negative in size.
    pub fn plot_rect(outer: Bounds<Pixels>, gutters: &Gutters) -> Bounds<Pixels> {
        let width = (outer.size.width - gutters.left - gutters.right).max(px(0.0));
        let height = (outer.size.height - gutters.top - gutters.bottom).max(px(0.0));
        Bounds::new(
            point(outer.origin.x + gutters.left, outer.origin.y + gutters.top),
            size(width, height),
        )
    }

    /// `plot_rect` grown by `margin` on every side, so that points on the
    /// axis boundary stay reachable.
    pub fn hit_region(plot_rect: Bounds<Pixels>, margin: Pixels) -> Bounds<Pixels> {
        Bounds::new(
            point(plot_rect.origin.x - margin, plot_rect.origin.y - margin),
            size(
                plot_rect.size.width + margin * 2.0,
                plot_rect.size.height + margin * 2.0,
            ),
        )
    }
}
