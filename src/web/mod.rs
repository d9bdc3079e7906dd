//! Web server module
//!
//! Provides the HTTP surface: the form page and the results page.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
