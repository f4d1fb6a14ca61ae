//! The catalog: long-lived handles shared by every lookup.
//!
//! A `Catalog` is built once at startup and is read-only afterwards. It is
//! `Send + Sync`, so adapters can share one instance behind an `Arc` and run
//! lookups concurrently.

use crate::data::records::LookupResult;
use crate::data::store::{CatalogStore, SqliteStore};
use crate::options::{CatalogOptions, LookupRequest, OutputFormat};
use crate::output::{render_text, HtmlTemplate};
use crate::query::lookup;
use crate::Result;

/// Store and template bundled for lookups.
pub struct Catalog {
    store: Box<dyn CatalogStore>,
    template: HtmlTemplate,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    /// Assemble a catalog from already-initialized parts.
    pub fn new(store: impl CatalogStore + 'static, template: HtmlTemplate) -> Self {
        Self {
            store: Box::new(store),
            template,
        }
    }

    /// Open the SQLite database and load the template named by `options`.
    pub fn open(options: &CatalogOptions) -> Result<Self> {
        let store = SqliteStore::open(&options.database)?;
        let template = match &options.template {
            Some(path) => HtmlTemplate::from_file(path)?,
            None => HtmlTemplate::embedded()?,
        };
        tracing::debug!(database = %options.database.display(), "catalog opened");
        Ok(Self::new(store, template))
    }

    /// Validate and run a lookup.
    pub fn lookup(&self, request: &LookupRequest) -> Result<LookupResult> {
        lookup(self.store.as_ref(), request)
    }

    /// Render a result in the requested format.
    pub fn render(&self, result: &LookupResult, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => render_text(result),
            OutputFormat::Html => self.template.render(result),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)? + "\n"),
        }
    }

    pub fn template(&self) -> &HtmlTemplate {
        &self.template
    }
}
