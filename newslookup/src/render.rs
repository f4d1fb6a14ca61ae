//! Lookup-and-render glue shared by the command line and the HTTP server.

use newslookuplib::{Catalog, LookupRequest, OutputFormat, Result};

/// Pick the output format from the `--html` / `--json` flags.
pub fn format_from_flags(html: bool, json: bool) -> OutputFormat {
    if html {
        OutputFormat::Html
    } else if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    }
}

/// Run `request` against `catalog` and render it as `format`.
pub fn render_lookup(
    catalog: &Catalog,
    request: &LookupRequest,
    format: OutputFormat,
) -> Result<String> {
    let result = catalog.lookup(request)?;
    tracing::debug!(
        header = %result.header,
        states = result.state_groups.len(),
        entries = result.entry_count(),
        ?format,
        "rendering lookup"
    );
    catalog.render(&result, format)
}
