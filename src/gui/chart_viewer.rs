//! Chart Viewer Widget
//! Stacks the always-visible price history over the toggleable histogram.

use crate::charts::ChartPlotter;
use crate::config::constants::text::{HISTOGRAM_TITLE, HISTORY_TITLE};
use crate::market::PriceHistory;
use crate::stats::Estimate;
use egui::RichText;

const CHART_SPACING: f32 = 10.0;

#[derive(Default)]
pub struct ChartViewer {
    probability_visible: bool,
}

impl ChartViewer {
    /// The histogram starts hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_probability(&mut self) {
        self.probability_visible = !self.probability_visible;
    }

    pub fn probability_visible(&self) -> bool {
        self.probability_visible
    }

    /// Draw both charts. Returns the history index clicked this frame.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        history: &PriceHistory,
        estimate: &Estimate,
    ) -> Option<usize> {
        ui.add_space(CHART_SPACING);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(HISTORY_TITLE).size(14.0).strong());
        });
        let clicked = ChartPlotter::draw_history_chart(ui, history);

        if self.probability_visible {
            ui.add_space(CHART_SPACING);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(HISTOGRAM_TITLE).size(14.0).strong());
            });
            ChartPlotter::draw_probability_chart(ui, estimate);
        }

        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let mut viewer = ChartViewer::new();
        assert!(!viewer.probability_visible());
        viewer.toggle_probability();
        assert!(viewer.probability_visible());
        viewer.toggle_probability();
        assert!(!viewer.probability_visible());
    }
}
