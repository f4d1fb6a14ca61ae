//! Output formatting: present lookup results as text or HTML.
//!
//! This module handles the final stage of the pipeline - turning a grouped
//! [`LookupResult`] into a document. It provides:
//!
//! - **Text**: a column-aligned plain-text table (`render_text`)
//! - **HTML**: a page rendered through a template (`HtmlTemplate`)
//!
//! Both renderers are pure functions of the result: no state is kept between
//! calls, so rendering the same result twice yields the same output.
//!
//! ## Example
//!
//! ```rust,ignore
//! use newslookuplib::output::HtmlTemplate;
//!
//! let text = result.to_text()?;
//! let page = result.to_html(&HtmlTemplate::embedded()?)?;
//! ```

pub mod html;
pub mod text;

pub use html::HtmlTemplate;
pub use text::render_text;

use crate::data::records::LookupResult;
use crate::Result;

impl LookupResult {
    /// Render as a column-aligned text table
    pub fn to_text(&self) -> Result<String> {
        render_text(self)
    }

    /// Render through an HTML template
    pub fn to_html(&self, template: &HtmlTemplate) -> Result<String> {
        template.render(self)
    }
}
