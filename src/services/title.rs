//! Page titles and the routes that carry them.
//!
//! Every title that reaches the page store passes through here. The pattern
//! whitelists ASCII letters and digits, so a title can be joined onto the data
//! directory without any further path checks.

use std::fmt;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::errors::WikiError;

static ROUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/data/(edit|save|view)/([A-Za-z0-9]+)$").expect("route pattern is valid")
});

const FRONT_PAGE: &str = "FrontPage";

/// A validated page title: non-empty, `[A-Za-z0-9]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    /// Accept `raw` only if it is made of ASCII letters and digits
    pub fn parse(raw: &str) -> Result<Self, WikiError> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Ok(Self(raw.to_string()))
        } else {
            debug!("Rejected title: {:?}", raw);
            Err(WikiError::NotFound)
        }
    }

    /// The page `/` redirects to
    pub fn front_page() -> Self {
        Self(FRONT_PAGE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Edit,
    Save,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Edit => "edit",
            Action::Save => "save",
        }
    }

    /// The action named by a `/data/<segment>/` path segment
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "view" => Some(Action::View),
            "edit" => Some(Action::Edit),
            "save" => Some(Action::Save),
            _ => None,
        }
    }

    /// URL path of this action for `title`, e.g. `/data/view/FrontPage`
    pub fn path_for(self, title: &Title) -> String {
        format!("/data/{}/{}", self.as_str(), title)
    }
}

/// An (action, title) pair parsed from a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub action: Action,
    pub title: Title,
}

impl Route {
    /// Match `path` against `^/data/(edit|save|view)/([A-Za-z0-9]+)$`.
    ///
    /// Anything that does not match is `NotFound`; no title is produced.
    pub fn parse(path: &str) -> Result<Self, WikiError> {
        let caps = ROUTE_PATTERN.captures(path).ok_or_else(|| {
            debug!("Path does not match route pattern: {:?}", path);
            WikiError::NotFound
        })?;

        let action = Action::from_segment(&caps[1]).ok_or(WikiError::NotFound)?;
        Ok(Self { action, title: Title(caps[2].to_string()) })
    }
}

/// Extract just the title from a request path
pub fn extract_title(path: &str) -> Result<Title, WikiError> {
    Route::parse(path).map(|route| route.title)
}
