//! HTML escaping for text interpolated into activity markup.
//!
//! Every backend-provided string (activity name, description, schedule,
//! participant identifier) passes through [`escape_html`] before it is
//! inserted into the page. The escaped set is wider than what HTML text
//! nodes strictly need so the same output is also safe inside quoted and
//! unquoted attribute values.

#[cfg(test)]
#[path = "html_test.rs"]
mod html_test;

/// Escape `& < > " ' ` = /` as HTML character references.
///
/// Returns the input unchanged (but owned) when nothing needs escaping.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match entity_for(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

fn entity_for(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        '`' => Some("&#96;"),
        '=' => Some("&#61;"),
        '/' => Some("&#47;"),
        _ => None,
    }
}
