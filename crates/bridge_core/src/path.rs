use crate::ElementLike;

/// Encodes an element's position so it can be located again later.
///
/// An element with its own non-empty `id` short-circuits to an id selector.
/// Everything else gets a root-first chain of lower-case tag names, each
/// suffixed with a 1-based `[n]` when earlier siblings share the tag.
/// Ancestor ids are never consulted.
pub fn structural_path<E: ElementLike>(element: Option<&E>) -> String {
    let Some(element) = element else {
        return String::new();
    };

    if let Some(id) = element.attribute("id").filter(|id| !id.is_empty()) {
        return format!("//*[@id=\"{id}\"]");
    }

    let mut segments = Vec::new();
    let mut current = Some(element.clone());
    while let Some(node) = current {
        segments.push(segment_for(&node));
        current = node.parent_element();
    }

    if segments.is_empty() {
        return String::new();
    }
    segments.reverse();
    format!("/{}", segments.join("/"))
}

fn segment_for<E: ElementLike>(element: &E) -> String {
    // Siblings match on the tag exactly as the DOM reports it; only the
    // emitted segment is lower-cased.
    let raw_tag = element.tag_name();
    let mut same_tag_before = 0usize;
    let mut sibling = element.previous_element_sibling();
    while let Some(node) = sibling {
        if node.tag_name() == raw_tag {
            same_tag_before += 1;
        }
        sibling = node.previous_element_sibling();
    }

    let tag = raw_tag.to_ascii_lowercase();

    if same_tag_before > 0 {
        format!("{tag}[{}]", same_tag_before + 1)
    } else {
        tag
    }
}
