// Crate root library declaration and module exports.
pub mod action;
pub mod cli;
pub mod config;
pub mod context;
pub mod controller;
pub mod logging;
pub mod model;
pub mod repository;
pub mod stats;
pub mod storage;
pub mod view;

#[cfg(feature = "tui")]
pub mod tui;
