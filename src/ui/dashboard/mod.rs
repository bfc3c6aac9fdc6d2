//! Deck dashboard
//!
//! State, update logic and rendering of the section deck

pub mod components;
pub mod renderer;
pub mod state;
pub mod updaters;
pub mod utils;

pub use renderer::render_dashboard;
pub use state::DashboardState;
