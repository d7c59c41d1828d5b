//! Market module - simulated PAWScoin prices and their history

mod generator;
mod history;

pub use generator::{draw, exact_share, PriceGenerator};
pub use history::{price_quote, PriceHistory};
