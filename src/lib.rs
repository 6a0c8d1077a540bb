//! Flatwiki - a minimal wiki server
//!
//! Pages are plain files named after their title. Clients view, edit and
//! save them over HTTP under `/data/{view,edit,save}/<title>`.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod router;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use types::{AppState, Page};
pub use services::{extract_title, Action, PageStore, Route, Title};
pub use components::{Renderer, TemplateComponent};
pub use router::build_router;
