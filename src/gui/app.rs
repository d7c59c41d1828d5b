//! PAWScoin Tracker Main Application
//! Owns the simulation state and drives it from the egui frame loop.

use crate::config::constants::simulation::SAMPLE_COUNT;
use crate::config::constants::text::TIME_FORMAT;
use crate::config::constants::timer::{COUNTDOWN_SECS, TICK};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, Countdown, SecondTicker, Tick};
use crate::market::{price_quote, PriceGenerator, PriceHistory};
use crate::stats::{BucketLayout, Estimate, EstimatorError, LayoutError, ProbabilityEstimator};
use chrono::{DateTime, Local};
use rand::Rng;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid bucket layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("Invalid estimator settings: {0}")]
    Estimator(#[from] EstimatorError),
}

/// Main application window.
pub struct PawsTrackerApp<R: Rng = rand::rngs::StdRng> {
    generator: PriceGenerator<R>,
    estimator: ProbabilityEstimator,
    history: PriceHistory,
    estimate: Estimate,
    countdown: Countdown,
    ticker: SecondTicker,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl PawsTrackerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, AppError> {
        Self::with_generator(PriceGenerator::from_entropy())
    }
}

impl<R: Rng> PawsTrackerApp<R> {
    /// Build the app around a given price source and draw the first price.
    pub fn with_generator(generator: PriceGenerator<R>) -> Result<Self, AppError> {
        let estimator = ProbabilityEstimator::new(BucketLayout::standard()?, SAMPLE_COUNT)?;
        let estimate = estimator.empty_estimate();

        let mut app = Self {
            generator,
            estimator,
            history: PriceHistory::new(),
            estimate,
            countdown: Countdown::new(COUNTDOWN_SECS),
            ticker: SecondTicker::new(TICK, Instant::now()),
            control_panel: ControlPanel::new(),
            chart_viewer: ChartViewer::new(),
        };

        app.refresh_price(Local::now());
        // The first tick runs immediately, the rest once per second
        app.on_tick(Local::now());

        Ok(app)
    }

    /// Draw a price, record it and recompute the histogram.
    fn refresh_price(&mut self, now: DateTime<Local>) {
        let price = self.generator.next_price();
        self.history.push(price, now);
        self.estimate = self.estimator.estimate(self.generator.rng_mut());
        self.countdown.reset();

        log::info!(
            "PAWScoin price {} at {} ({} updates)",
            price,
            now.format(TIME_FORMAT),
            self.history.len()
        );
    }

    fn on_tick(&mut self, now: DateTime<Local>) {
        match self.countdown.tick() {
            Tick::Display(seconds) => log::trace!("{} s until refresh", seconds),
            Tick::Refresh => self.refresh_price(now),
        }
    }

    pub fn current_price(&self) -> Option<u8> {
        self.history.latest().map(|s| s.value)
    }

    /// Clipboard text for the copy button, stamped with the time of the copy.
    pub fn current_price_quote(&self, now: DateTime<Local>) -> Option<String> {
        self.current_price()
            .map(|price| price_quote(&now.format(TIME_FORMAT).to_string(), price))
    }

    fn copy_current_price(&self, ctx: &egui::Context) {
        if let Some(text) = self.current_price_quote(Local::now()) {
            log::info!("Copied: {}", text);
            ctx.copy_text(text);
        }
    }

    fn copy_sample(&self, ctx: &egui::Context, idx: usize) {
        if let Some(sample) = self.history.get(idx) {
            let text = sample.clipboard_text();
            log::info!("Copied: {}", text);
            ctx.copy_text(text);
        }
    }
}

impl<R: Rng> eframe::App for PawsTrackerApp<R> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ticker.poll(Instant::now()) {
            self.on_tick(Local::now());
        }

        if !ctx.wants_keyboard_input() && ctx.input(|i| i.key_pressed(egui::Key::O)) {
            self.chart_viewer.toggle_probability();
            log::debug!(
                "Probability chart visible: {}",
                self.chart_viewer.probability_visible()
            );
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let price = self.current_price();
                let seconds = self.countdown.shown();
                let action = self.control_panel.show(ui, price, seconds);

                match action {
                    ControlPanelAction::CopyPrice => self.copy_current_price(ctx),
                    ControlPanelAction::Exit => {
                        log::info!("Exit requested");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                    ControlPanelAction::None => {}
                }

                if let Some(idx) = self.chart_viewer.show(ui, &self.history, &self.estimate) {
                    self.copy_sample(ctx, idx);
                }
            });
        });

        ctx.request_repaint_after(self.ticker.until_next(Instant::now()));
    }
}
