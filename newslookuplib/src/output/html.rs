//! HTML rendering through a minijinja template.
//!
//! The template receives the whole [`LookupResult`] (`header`,
//! `state_groups`, and each group's `entries`). It is always registered
//! under an `.html` name, so values are HTML-escaped on output.

use std::path::Path;

use minijinja::Environment;

use crate::data::records::LookupResult;
use crate::error::LookupError;
use crate::Result;

/// Built-in results page
const NEWS_TEMPLATE: &str = include_str!("../../templates/news.html");

const TEMPLATE_NAME: &str = "news.html";

/// A parsed HTML template, ready to render any number of results.
#[derive(Debug, Clone)]
pub struct HtmlTemplate {
    env: Environment<'static>,
}

impl HtmlTemplate {
    /// The page compiled into the library.
    pub fn embedded() -> Result<Self> {
        Self::from_source(NEWS_TEMPLATE)
    }

    /// Parse a template from source text.
    pub fn from_source(source: impl Into<String>) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template_owned(TEMPLATE_NAME, source.into())
            .map_err(LookupError::TemplateParse)?;
        Ok(Self { env })
    }

    /// Read and parse a template file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LookupError::TemplateRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded html template");
        Self::from_source(source)
    }

    /// Render `result` into a complete document.
    pub fn render(&self, result: &LookupResult) -> Result<String> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(LookupError::Render)?;
        template.render(result).map_err(LookupError::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::records::{Entry, StateGroup};
    use std::fs;
    use tempfile::tempdir;

    fn result(header: &str, states: &[&str]) -> LookupResult {
        let groups = states
            .iter()
            .map(|s| StateGroup {
                state: s.to_string(),
                entries: vec![Entry::new(*s, "Fresno", "Bee", 1922, 1950, "MF 100")],
            })
            .collect();
        LookupResult::new(header, groups)
    }

    #[test]
    fn test_embedded_page() {
        let page = HtmlTemplate::embedded()
            .unwrap()
            .render(&result("1930", &["CA", "NY"]))
            .unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>1930</h1>"));
        assert!(page.contains("<h2>CA</h2>"));
        assert!(page.contains("<h2>NY</h2>"));
        assert!(page.contains("<td>MF 100</td>"));
        assert!(page.contains(r#"<td class="year">1922</td>"#));
    }

    #[test]
    fn test_embedded_page_hides_redundant_state() {
        let template = HtmlTemplate::embedded().unwrap();
        let page = template.render(&result("CA", &["CA"])).unwrap();
        assert!(!page.contains("<h2>"));

        let page = template.render(&result("1930", &["CA"])).unwrap();
        assert!(page.contains("<h2>CA</h2>"));
    }

    #[test]
    fn test_embedded_page_empty_result() {
        let page = HtmlTemplate::embedded()
            .unwrap()
            .render(&LookupResult::new("TX", vec![]))
            .unwrap();
        assert!(page.contains("No holdings found."));
        assert!(!page.contains("<table>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let template = HtmlTemplate::from_source("{{ header }}").unwrap();
        let page = template
            .render(&LookupResult::new("<B>&", vec![]))
            .unwrap();
        assert_eq!(page, "&lt;B&gt;&amp;");
    }

    #[test]
    fn test_custom_template_sees_structure() {
        let template = HtmlTemplate::from_source(
            "{% for g in state_groups %}{{ g.state }}:{{ g.entries|length }};{% endfor %}",
        )
        .unwrap();
        let page = template.render(&result("X", &["CA", "NY"])).unwrap();
        assert_eq!(page, "CA:1;NY:1;");
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let template = HtmlTemplate::embedded().unwrap();
        let data = result("1930", &["CA", "NY"]);
        assert_eq!(template.render(&data).unwrap(), template.render(&data).unwrap());
    }

    #[test]
    fn test_malformed_template() {
        let err = HtmlTemplate::from_source("{% for x in %}").unwrap_err();
        assert!(matches!(err, LookupError::TemplateParse(_)));
    }

    #[test]
    fn test_execution_failure_is_render_error() {
        let template = HtmlTemplate::from_source("{{ header + 1 }}").unwrap();
        let err = template.render(&result("X", &[])).unwrap_err();
        assert!(matches!(err, LookupError::Render(_)));
        assert!(err.to_string().starts_with("[HTML] failed to execute template"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "<p>{{ header }}</p>").unwrap();

        let page = HtmlTemplate::from_file(&path)
            .unwrap()
            .render(&result("NY", &[]))
            .unwrap();
        assert_eq!(page, "<p>NY</p>");
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempdir().unwrap();
        let err = HtmlTemplate::from_file(dir.path().join("absent.html")).unwrap_err();
        assert!(matches!(err, LookupError::TemplateRead { .. }));
    }
}
