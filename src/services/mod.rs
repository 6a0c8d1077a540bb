pub mod page_store;
pub mod title;

pub use page_store::PageStore;
pub use title::{extract_title, Action, Route, Title};
