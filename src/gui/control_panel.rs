//! Control Panel Widget
//! Price readout, countdown and the copy / exit buttons.

use crate::config::constants::text::{COPY_BUTTON, EXIT_BUTTON};
use egui::RichText;

/// Actions from control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPanelAction {
    None,
    CopyPrice,
    Exit,
}

/// Text of the big price label; `?` until the first draw.
pub fn price_label(price: Option<u8>) -> String {
    match price {
        Some(p) => format!("Цена 1 PAWSкоина: {} очков", p),
        None => "Цена 1 PAWSкоина: ? очков".to_string(),
    }
}

pub fn countdown_label(seconds: u32) -> String {
    format!("До обновления: {} сек", seconds)
}

/// Top panel with the current price and the two buttons.
#[derive(Default)]
pub struct ControlPanel;

impl ControlPanel {
    pub fn new() -> Self {
        Self
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        price: Option<u8>,
        seconds: u32,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(RichText::new(price_label(price)).size(20.0));
            ui.add_space(5.0);
            ui.label(RichText::new(countdown_label(seconds)).size(14.0));
            ui.add_space(5.0);

            if ui.button(COPY_BUTTON).clicked() {
                action = ControlPanelAction::CopyPrice;
            }
            ui.add_space(5.0);
            if ui.button(EXIT_BUTTON).clicked() {
                action = ControlPanelAction::Exit;
            }
        });

        action
    }
}
