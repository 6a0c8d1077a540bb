use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::errors::WikiError;
use crate::types::Page;
use crate::utils::escape_html;

/// Turns a page into response bytes for a named view
pub trait Renderer: Send + Sync {
    fn render(&self, view: &str, page: &Page) -> Result<Vec<u8>, WikiError>;
}

const BUILTIN_TEMPLATES: [(&str, &str); 2] = [
    ("view", include_str!("../../tmpl/view.html")),
    ("edit", include_str!("../../tmpl/edit.html")),
];

/// Placeholder-substitution templates, loaded once at startup
#[derive(Debug, Clone)]
pub struct TemplateComponent {
    templates: HashMap<String, String>,
}

impl TemplateComponent {
    /// Templates compiled into the binary
    pub fn new() -> Self {
        let templates = BUILTIN_TEMPLATES
            .iter()
            .map(|(name, tpl)| (name.to_string(), tpl.to_string()))
            .collect();
        Self { templates }
    }

    /// Load `<dir>/view.html` and `<dir>/edit.html`, keeping the built-in copy
    /// of any template that has no file there.
    pub fn load(dir: &Path) -> Result<Self, WikiError> {
        let mut component = Self::new();
        for (name, _) in BUILTIN_TEMPLATES {
            let path = dir.join(format!("{}.html", name));
            match fs::read_to_string(&path) {
                Ok(tpl) => {
                    info!("Loaded template {:?}", path);
                    component.templates.insert(name.to_string(), tpl);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("No template at {:?}, using built-in {}", path, name);
                }
                Err(e) => {
                    return Err(WikiError::TemplateError(format!("{}: {}", path.display(), e)));
                }
            }
        }
        Ok(component)
    }
}

impl Renderer for TemplateComponent {
    fn render(&self, view: &str, page: &Page) -> Result<Vec<u8>, WikiError> {
        let tpl = self.templates.get(view).ok_or_else(|| {
            WikiError::RenderError(format!("template \"{}.html\" is not defined", view))
        })?;

        let body = String::from_utf8_lossy(&page.body);
        let html = tpl
            .replace("{{TITLE}}", &escape_html(page.title.as_str()))
            .replace("{{BODY}}", &escape_html(&body));
        Ok(html.into_bytes())
    }
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Title;

    fn page(title: &str, body: &str) -> Page {
        Page { title: Title::parse(title).unwrap(), body: body.as_bytes().to_vec() }
    }

    #[test]
    fn view_template_shows_title_and_escaped_body() {
        let templates = TemplateComponent::new();
        let html = templates.render("view", &page("Test1", "<b>hi</b>")).unwrap();
        let html = String::from_utf8(html).unwrap();

        assert!(html.contains("<h1>Test1</h1>"));
        assert!(html.contains("href=\"/data/edit/Test1\""));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
    }

    #[test]
    fn edit_template_posts_to_save() {
        let templates = TemplateComponent::new();
        let html = String::from_utf8(templates.render("edit", &page("Draft", "")).unwrap()).unwrap();

        assert!(html.contains("action=\"/data/save/Draft\""));
        assert!(html.contains("<textarea name=\"body\" rows=\"20\" cols=\"80\"></textarea>"));
    }

    #[test]
    fn unknown_view_is_render_error() {
        let templates = TemplateComponent::new();
        let err = templates.render("history", &page("A", "")).unwrap_err();
        assert!(matches!(err, WikiError::RenderError(msg) if msg.contains("history.html")));
    }

    #[test]
    fn load_prefers_files_and_falls_back_to_builtins() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join("view.html"), "<p>{{TITLE}}: {{BODY}}</p>").unwrap();

        let templates = TemplateComponent::load(temp_dir.path()).unwrap();
        let view = templates.render("view", &page("A", "b")).unwrap();
        assert_eq!(view, b"<p>A: b</p>");

        let edit = String::from_utf8(templates.render("edit", &page("A", "b")).unwrap()).unwrap();
        assert!(edit.contains("Editing A"));
    }
}
