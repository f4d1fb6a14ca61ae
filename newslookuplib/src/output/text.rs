//! Plain-text rendering of a lookup result.
//!
//! Layout:
//!
//! ```text
//! HEADER
//!
//! STATE
//!
//! city      title        begin    end    call number
//!
//! ```
//!
//! City and title are padded to the widest value in the whole result so the
//! columns line up across states. The state line is left out when the result
//! holds a single state that is also the header.

use crate::data::records::LookupResult;
use crate::Result;

/// Gap between columns
const SEPARATOR: &str = "    ";

/// Widest city and title across every entry, in characters.
fn column_widths(result: &LookupResult) -> (usize, usize) {
    result.entries().fold((0, 0), |(city, title), e| {
        (
            city.max(e.city.chars().count()),
            title.max(e.title.chars().count()),
        )
    })
}

/// True when the only group is the state the header already names.
fn suppress_state_label(result: &LookupResult) -> bool {
    match result.state_groups.as_slice() {
        [only] => only.state.to_uppercase() == result.header.to_uppercase(),
        _ => false,
    }
}

/// Render `result` as a column-aligned text table.
///
/// Infallible in practice; returns `Result` to match the HTML renderer.
pub fn render_text(result: &LookupResult) -> Result<String> {
    let (max_city, max_title) = column_widths(result);
    let suppress = suppress_state_label(result);

    let mut buf = String::new();
    push_line(&mut buf, &result.header);
    push_line(&mut buf, "");

    for group in &result.state_groups {
        if !suppress {
            push_line(&mut buf, &group.state);
            push_line(&mut buf, "");
        }

        for e in &group.entries {
            let line = format!(
                "{:<cw$}{SEPARATOR}{:<tw$}{SEPARATOR}{}{SEPARATOR}{}{SEPARATOR}{}",
                e.city,
                e.title,
                e.begin,
                e.end,
                e.call_no,
                cw = max_city,
                tw = max_title,
            );
            push_line(&mut buf, &line);
        }

        push_line(&mut buf, "");
    }

    Ok(buf)
}

fn push_line(buf: &mut String, line: &str) {
    buf.push_str(line);
    buf.push('\n');
}
