//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod countdown;

pub use app::PawsTrackerApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use countdown::{Countdown, SecondTicker, Tick};
