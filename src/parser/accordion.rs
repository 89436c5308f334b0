//! Helpers shared by the accordion-style pages.

use scraper::{ElementRef, Selector};

/// Inner HTML of the first descendant matching `selector`, or the empty
/// string when no such node exists.
pub fn field(scope: ElementRef, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|node| node.inner_html())
        .unwrap_or_default()
}

/// Reassembles a rich-text field that the portal splits across sibling
/// paragraph and list nodes: the inner HTML of every `.tinymce-p` and `ul`
/// descendant in document order, each followed by a newline.
pub fn rich_text(scope: ElementRef) -> String {
    scope
        .select(selector!(".tinymce-p, ul"))
        .fold(String::new(), |mut acc, node| {
            acc.push_str(&node.inner_html());
            acc.push('\n');
            acc
        })
}

/// Numeric entry id from the portal's element-id convention: the piece
/// after the first `-`, minus its five-character prefix, parsed as an
/// integer.  Ids that do not fit the convention map to 0.
pub fn entry_id(element_id: Option<&str>) -> u32 {
    element_id
        .and_then(|id| id.split('-').nth(1))
        .and_then(|tail| tail.get(5..))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::entry_id;

    #[test]
    fn entry_id_parses_portal_convention() {
        assert_eq!(entry_id(Some("accordion-inner4711")), 4711);
        assert_eq!(entry_id(Some("x-inner0")), 0);
    }

    #[test]
    fn entry_id_defaults_to_zero() {
        assert_eq!(entry_id(None), 0);
        assert_eq!(entry_id(Some("")), 0);
        assert_eq!(entry_id(Some("no_separator")), 0);
        assert_eq!(entry_id(Some("accordion-xy")), 0);
        assert_eq!(entry_id(Some("accordion-innerabc")), 0);
    }
}
