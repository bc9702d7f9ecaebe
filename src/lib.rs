//! Football Charts - World Cup statistics rendered as interactive charts
//!
//! Loads tabular and boundary data, shapes it into chart series and lays out
//! three charts: games by year, a map of the top ten nations and a
//! switchable per-nation metric.

pub mod charts;
pub mod config;
pub mod controller;
pub mod data;
pub mod gui;
pub mod tooltip;
