// Role catalog, distribution and dealing engine
pub mod core;

// Environment configuration
pub mod config;

// API models (requests/responses)
pub mod models;

// HTTP routes
pub mod routes;

// Application state
pub mod state;
