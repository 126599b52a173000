// HTTP server modules
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

pub mod config;

// Message persistence
pub mod store;

// Completion proxy
pub mod completion;
