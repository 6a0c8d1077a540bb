use std::sync::Arc;

use crate::components::Renderer;
use crate::services::{PageStore, Title};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PageStore>,
    pub renderer: Arc<dyn Renderer>,
}

impl AppState {
    pub fn new(store: PageStore, renderer: impl Renderer + 'static) -> Self {
        Self { store: Arc::new(store), renderer: Arc::new(renderer) }
    }
}

/// A wiki page: a title and its raw content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: Title,
    pub body: Vec<u8>,
}

impl Page {
    /// Empty page used when editing a title that has no file yet
    pub fn blank(title: Title) -> Self {
        Self { title, body: Vec::new() }
    }
}
