use serde::Serialize;

/// Read-only view of a DOM element, enough to locate and describe it.
///
/// Implemented for synthetic trees in tests, for `scraper` documents, and for
/// live `web_sys::Element`s in the frame script.
pub trait ElementLike: Clone {
    /// Tag name as the backing document reports it (HTML DOMs upper-case it).
    fn tag_name(&self) -> String;
    fn attribute(&self, name: &str) -> Option<String>;
    fn parent_element(&self) -> Option<Self>;
    fn previous_element_sibling(&self) -> Option<Self>;
    fn outer_html(&self) -> String;
    fn text_content(&self) -> String;

    /// Whether this element is the document body, where ancestor walks stop.
    fn is_document_body(&self) -> bool {
        self.tag_name().eq_ignore_ascii_case("body")
    }
}

/// The common ancestor container of a selection range.
#[derive(Debug, Clone, PartialEq)]
pub enum AncestorNode<E> {
    /// A text node; its parent element (if any) is the container.
    Text { parent: Option<E> },
    Element(E),
    /// Document, fragment, or anything else that is not an element.
    Other,
}

impl<E> AncestorNode<E> {
    /// Resolves the container element for this ancestor.
    pub fn into_container(self) -> Option<E> {
        match self {
            AncestorNode::Text { parent } => parent,
            AncestorNode::Element(element) => Some(element),
            AncestorNode::Other => None,
        }
    }
}

/// Bounding rectangle of a range in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SelectionRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
            width,
            height,
        }
    }
}

/// First range of the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionRange<E> {
    pub common_ancestor: AncestorNode<E>,
    pub rect: SelectionRect,
}

/// Access to the page's current selection.
pub trait SelectionSource {
    type Element: ElementLike;

    /// Stringified selection, or `None` when the selection API is unavailable.
    fn selected_text(&self) -> Option<String>;
    /// First range of the selection, if there is one.
    fn first_range(&self) -> Option<SelectionRange<Self::Element>>;
    fn page_url(&self) -> String;
}
