use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use std::cell::{Cell, RefCell};

/// Separator between the identifier and the site name in the page title.
pub const TITLE_SEPARATOR: &str = " - ";

/// Text of the first `<title>` element, entities decoded.
pub fn page_title(html: &str) -> Option<String> {
    let titles_seen = Cell::new(0usize);
    let raw = RefCell::new(String::new());

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("title", |_el| {
                    titles_seen.set(titles_seen.get() + 1);
                    Ok(())
                }),
                // only the first title counts
                text!("title", |t| {
                    if titles_seen.get() == 1 {
                        raw.borrow_mut().push_str(t.as_str());
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .ok()?;

    if titles_seen.get() == 0 {
        return None;
    }
    // lol_html hands over title text undecoded
    Some(html_escape::decode_html_entities(&raw.into_inner()).into_owned())
}

/// Share identifier: the title segment before " - ", trimmed.
/// `Some("")` means a title was present but carried no identifier.
pub fn extract_share_id(html: &str) -> Option<String> {
    let title = page_title(html)?;
    let head = title.split(TITLE_SEPARATOR).next().unwrap_or("");
    Some(head.trim().to_string())
}
