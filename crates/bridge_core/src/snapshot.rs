use serde::Serialize;

use crate::{
    find_source_location, structural_path, ElementLike, ReporterConfig, SelectionRect,
    SelectionSource,
};

/// Everything the parent frame learns about one captured selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSnapshot {
    #[serde(rename = "selectedText")]
    pub text: String,
    pub html: Option<String>,
    pub tag_name: Option<String>,
    pub class_name: Option<String>,
    pub id: Option<String>,
    pub text_content: Option<String>,
    #[serde(rename = "xpath")]
    pub path: String,
    pub file: Option<String>,
    pub line: Option<i64>,
    pub rect: SelectionRect,
    pub url: String,
    pub timestamp: u64,
}

/// Reads the current selection from `source` and builds a snapshot.
///
/// Returns `None` when there is no usable selection: the API reports none,
/// the trimmed text is empty, or there is no range to measure.
pub fn capture_selection<S: SelectionSource>(
    source: &S,
    config: &ReporterConfig,
    timestamp: u64,
) -> Option<SelectionSnapshot> {
    let raw = source.selected_text()?;
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let range = source.first_range()?;
    let container = range.common_ancestor.into_container();
    Some(build_snapshot(
        text,
        container.as_ref(),
        range.rect,
        source.page_url(),
        timestamp,
        config,
    ))
}

/// Assembles a snapshot for `text` selected inside `container`.
pub fn build_snapshot<E: ElementLike>(
    text: &str,
    container: Option<&E>,
    rect: SelectionRect,
    url: String,
    timestamp: u64,
    config: &ReporterConfig,
) -> SelectionSnapshot {
    let location = find_source_location(container, config);
    SelectionSnapshot {
        text: text.trim().to_string(),
        html: container.map(|el| truncate_chars(&el.outer_html(), config.max_markup_chars)),
        tag_name: container.map(ElementLike::tag_name),
        class_name: container.and_then(|el| el.attribute("class")),
        id: container.and_then(|el| el.attribute("id")),
        text_content: container.map(|el| truncate_chars(&el.text_content(), config.max_text_chars)),
        path: structural_path(container),
        file: location.file,
        line: location.line,
        rect,
        url,
        timestamp,
    }
}

/// Keeps at most `max_chars` characters of `text`, never splitting one.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}
