//! Price History
//! Append-only record of every price drawn during the session.

use crate::config::constants::text::TIME_FORMAT;
use chrono::{DateTime, Local};

/// A single drawn price and the moment it was drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSample {
    pub value: u8,
    pub at: DateTime<Local>,
}

impl PriceSample {
    pub fn clock(&self) -> String {
        self.at.format(TIME_FORMAT).to_string()
    }

    /// Text placed on the clipboard when the sample is clicked.
    pub fn clipboard_text(&self) -> String {
        price_quote(&self.clock(), self.value)
    }

    pub fn tooltip_text(&self) -> String {
        format!("{}\n{} очков", self.clock(), self.value)
    }
}

/// "price at HH:MM:SS - N points"
pub fn price_quote(clock: &str, value: u8) -> String {
    format!("Цена на {} - {} очков", clock, value)
}

/// Values and timestamps kept in two index-aligned sequences.
#[derive(Debug, Default, Clone)]
pub struct PriceHistory {
    values: Vec<u8>,
    timestamps: Vec<DateTime<Local>>,
}

impl PriceHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: u8, at: DateTime<Local>) {
        self.values.push(value);
        self.timestamps.push(at);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<PriceSample> {
        let value = *self.values.get(idx)?;
        let at = *self.timestamps.get(idx)?;
        Some(PriceSample { value, at })
    }

    pub fn latest(&self) -> Option<PriceSample> {
        self.len().checked_sub(1).and_then(|idx| self.get(idx))
    }

    #[cfg(test)]
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    #[cfg(test)]
    pub fn timestamps(&self) -> &[DateTime<Local>] {
        &self.timestamps
    }

    /// Plot coordinates: x is the update index, y the price.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| [i as f64, v as f64])
            .collect()
    }
}
