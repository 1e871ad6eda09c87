pub mod analysis;
pub mod backend;
pub mod config;
pub mod display;
pub mod error;
pub mod geo;
pub mod location;
pub mod persist;
pub mod state;
