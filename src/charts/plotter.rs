//! Chart Plotter Module
//! Price history and next-value histogram drawn with egui_plot.

use crate::config::constants::chart::{
    HISTOGRAM_HEADROOM, HISTOGRAM_HEIGHT, HISTORY_HEIGHT, HISTORY_MAX_Y, HISTORY_MIN_X,
    MARKER_RADIUS, PICK_RADIUS,
};
use crate::config::constants::text::{HISTOGRAM_Y_LABEL, HISTORY_X_LABEL, HISTORY_Y_LABEL};
use crate::market::PriceHistory;
use crate::stats::Estimate;
use egui::{Align2, Color32, Pos2};
use egui_plot::{
    Bar, BarChart, GridMark, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Points, Text,
};

pub const PRICE_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

/// Index of the marker closest to `pointer`, if any lies within `radius`.
pub fn nearest_point(points: &[Pos2], pointer: Pos2, radius: f32) -> Option<usize> {
    let radius_sq = radius * radius;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| (i, p.distance_sq(pointer)))
        .filter(|&(_, d)| d <= radius_sq)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

/// Draws the tracker's two charts.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the price history as a connected scatter.
    ///
    /// Hovering a marker shows its time and value; returns the index of the
    /// marker clicked this frame.
    pub fn draw_history_chart(ui: &mut egui::Ui, history: &PriceHistory) -> Option<usize> {
        let points = history.points();
        let x_max = (points.len() as f64).max(HISTORY_MIN_X);

        let plot_response = Plot::new("price_history")
            .height(HISTORY_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .x_axis_label(HISTORY_X_LABEL)
            .y_axis_label(HISTORY_Y_LABEL)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [0.0, 0.0],
                    [x_max, HISTORY_MAX_Y],
                ));

                if history.is_empty() {
                    return None;
                }

                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(PRICE_COLOR)
                        .width(1.5)
                        .name("PAWScoin"),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(MARKER_RADIUS)
                        .filled(true)
                        .color(PRICE_COLOR),
                );

                let pointer = plot_ui.response().hover_pos()?;
                let screen: Vec<Pos2> = points
                    .iter()
                    .map(|&[x, y]| plot_ui.screen_from_plot(PlotPoint::new(x, y)))
                    .collect();
                nearest_point(&screen, pointer, PICK_RADIUS)
            });

        let hovered = plot_response.inner?;
        let sample = history.get(hovered)?;
        let clicked = plot_response.response.clicked();

        plot_response.response.on_hover_ui_at_pointer(|ui| {
            ui.label(sample.tooltip_text());
        });

        clicked.then_some(hovered)
    }

    /// Draw one coloured bar per bucket with its share printed on top.
    pub fn draw_probability_chart(ui: &mut egui::Ui, estimate: &Estimate) {
        let labels: Vec<String> = estimate
            .rows
            .iter()
            .map(|row| row.bucket.label.clone())
            .collect();
        let bar_count = labels.len();
        let y_max = estimate.max_share() + HISTOGRAM_HEADROOM;

        Plot::new("next_value_odds")
            .height(HISTOGRAM_HEIGHT)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .y_axis_label(HISTOGRAM_Y_LABEL)
            // One tick per bar so every range label is drawn
            .x_grid_spacer(move |_input| {
                (0..bar_count)
                    .map(|i| GridMark {
                        value: i as f64,
                        step_size: 1.0,
                    })
                    .collect()
            })
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx >= 0.0 && (mark.value - idx).abs() < 1e-6 {
                    labels.get(idx as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [-0.6, 0.0],
                    [bar_count as f64 - 0.4, y_max],
                ));

                let bars: Vec<Bar> = estimate
                    .rows
                    .iter()
                    .enumerate()
                    .map(|(i, row)| {
                        Bar::new(i as f64, row.share)
                            .width(0.8)
                            .fill(row.bucket.color)
                            .name(format!(
                                "{}: {} из {} (теор. {:.2}%)",
                                row.bucket.label,
                                row.count,
                                estimate.total(),
                                row.bucket.exact_share()
                            ))
                    })
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars));

                for (i, row) in estimate.rows.iter().enumerate() {
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(i as f64, row.share + 0.5),
                            format!("{:.2}%", row.share),
                        )
                        .anchor(Align2::CENTER_BOTTOM),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearest_point_empty() {
        assert_eq!(nearest_point(&[], Pos2::new(0.0, 0.0), 6.0), None);
    }

    #[test]
    fn test_nearest_point_outside_radius() {
        let points = [Pos2::new(10.0, 10.0), Pos2::new(50.0, 50.0)];
        assert_eq!(nearest_point(&points, Pos2::new(30.0, 30.0), 6.0), None);
    }

    #[test]
    fn test_nearest_point_picks_closest() {
        let points = [
            Pos2::new(10.0, 10.0),
            Pos2::new(14.0, 10.0),
            Pos2::new(40.0, 40.0),
        ];
        assert_eq!(nearest_point(&points, Pos2::new(13.0, 10.0), 6.0), Some(1));
        assert_eq!(nearest_point(&points, Pos2::new(11.0, 10.0), 6.0), Some(0));
        assert_eq!(nearest_point(&points, Pos2::new(40.0, 45.0), 6.0), Some(2));
    }

    #[test]
    fn test_nearest_point_radius_is_inclusive() {
        let points = [Pos2::new(0.0, 0.0)];
        assert_eq!(nearest_point(&points, Pos2::new(6.0, 0.0), 6.0), Some(0));
        assert_eq!(nearest_point(&points, Pos2::new(6.1, 0.0), 6.0), None);
    }
}
