//! polarfit library — application logic for the polar fitting tool.

pub mod app;
pub mod config;
pub mod errors;
