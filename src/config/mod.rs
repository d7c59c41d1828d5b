//! Configuration module - hardcoded constants for the tracker

pub mod constants;
