use std::collections::BTreeMap;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Plot, PlotPoints, Points, Polygon};

use crate::color::POINT_GREY;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter plot of the plotted subset and translate Ctrl-drag
/// box selections into graph-selection events.
///
/// Point order follows the plotted subset, so the emitted indices are
/// positions within that subset, not dataset row ids.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    // Snapshot coordinates up front; the plot closure must not borrow state.
    let coords: Vec<[f64; 2]> = state
        .plotted
        .iter()
        .map(|&idx| {
            let row = &state.dataset.rows[idx];
            [row.x, row.y]
        })
        .collect();

    let series = if state.color_by_month {
        let mut by_month: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
        for (&idx, &xy) in state.plotted.iter().zip(coords.iter()) {
            by_month
                .entry(state.dataset.rows[idx].month.clone())
                .or_default()
                .push(xy);
        }
        by_month
            .into_iter()
            .map(|(month, pts)| {
                let color = state.color_map.color_for(&month);
                (month, pts, color)
            })
            .collect()
    } else {
        vec![("tweets".to_string(), coords.clone(), POINT_GREY)]
    };

    // Ctrl turns dragging into box selection instead of panning.
    let selecting = ui.input(|i| i.modifiers.ctrl);

    let mut anchor = state.selection_anchor;
    let mut event: Option<Option<Vec<usize>>> = None;

    Plot::new("tweet_scatter")
        .show_axes([false, false])
        .allow_boxed_zoom(!selecting)
        .allow_drag(!selecting)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (month, pts, color) in series {
                let points = Points::new(PlotPoints::from(pts))
                    .name(month)
                    .color(color)
                    .radius(2.0);
                plot_ui.points(points);
            }

            let response = plot_ui.response().clone();
            let pointer = plot_ui.pointer_coordinate();

            if selecting && response.drag_started() {
                anchor = pointer.map(|p| [p.x, p.y]);
            }

            if let Some(a) = anchor {
                let current = pointer.map(|p| [p.x, p.y]).unwrap_or(a);

                let rect = Polygon::new(PlotPoints::from(vec![
                    [a[0], a[1]],
                    [current[0], a[1]],
                    [current[0], current[1]],
                    [a[0], current[1]],
                ]))
                .fill_color(Color32::from_rgba_unmultiplied(100, 150, 250, 30))
                .stroke(Stroke::new(1.0, Color32::LIGHT_BLUE));
                plot_ui.polygon(rect);

                if response.drag_stopped() {
                    event = Some(box_selection(&coords, a, current));
                    anchor = None;
                }
            }
        });

    state.selection_anchor = anchor;
    if let Some(ev) = event {
        state.on_graph_selection(ev);
    }
}

/// Indices (into the plotted point order) of all points inside the box
/// spanned by two opposite corners. `None` when the box is degenerate,
/// i.e. the user clicked without dragging out an area.
fn box_selection(coords: &[[f64; 2]], a: [f64; 2], b: [f64; 2]) -> Option<Vec<usize>> {
    if a == b {
        return None;
    }
    let x_lo = a[0].min(b[0]);
    let x_hi = a[0].max(b[0]);
    let y_lo = a[1].min(b[1]);
    let y_hi = a[1].max(b[1]);

    Some(
        coords
            .iter()
            .enumerate()
            .filter(|(_, [x, y])| *x >= x_lo && *x <= x_hi && *y >= y_lo && *y <= y_hi)
            .map(|(i, _)| i)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_collects_points_inside_in_plotted_order() {
        let coords = [[0.0, 0.0], [1.0, 1.0], [5.0, 5.0], [2.0, 0.5]];
        let picked = box_selection(&coords, [2.5, 2.0], [-0.5, -0.5]).unwrap();
        assert_eq!(picked, vec![0, 1, 3]);
    }

    #[test]
    fn degenerate_box_is_a_cleared_selection() {
        let coords = [[0.0, 0.0]];
        assert_eq!(box_selection(&coords, [1.0, 1.0], [1.0, 1.0]), None);
    }

    #[test]
    fn box_edges_are_inclusive() {
        let coords = [[1.0, 1.0], [2.0, 2.0]];
        let picked = box_selection(&coords, [1.0, 1.0], [2.0, 2.0]).unwrap();
        assert_eq!(picked, vec![0, 1]);
    }
}
