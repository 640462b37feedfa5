use bridge_core::{AncestorNode, ElementLike, SelectionRange, SelectionRect, SelectionSource};
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("no element matches `{0}`")]
    NoMatch(String),
}

/// Element of a parsed static document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlElement<'a>(ElementRef<'a>);

impl<'a> HtmlElement<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self(element)
    }

    pub fn element_ref(&self) -> ElementRef<'a> {
        self.0
    }
}

impl ElementLike for HtmlElement<'_> {
    fn tag_name(&self) -> String {
        self.0.value().name().to_string()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent().and_then(ElementRef::wrap).map(HtmlElement)
    }

    fn previous_element_sibling(&self) -> Option<Self> {
        self.0.prev_siblings().find_map(ElementRef::wrap).map(HtmlElement)
    }

    fn outer_html(&self) -> String {
        self.0.html()
    }

    fn text_content(&self) -> String {
        self.0.text().collect()
    }
}

/// Classifies a tree node the way a range's common ancestor is classified.
fn ancestor_for(node: NodeRef<'_, Node>) -> AncestorNode<HtmlElement<'_>> {
    match node.value() {
        Node::Text(_) => AncestorNode::Text {
            parent: node.parent().and_then(ElementRef::wrap).map(HtmlElement),
        },
        Node::Element(_) => match ElementRef::wrap(node) {
            Some(element) => AncestorNode::Element(HtmlElement(element)),
            None => AncestorNode::Other,
        },
        _ => AncestorNode::Other,
    }
}

#[derive(Debug, Clone)]
struct StaticSelection<'a> {
    text: String,
    common_ancestor: AncestorNode<HtmlElement<'a>>,
    rect: SelectionRect,
}

/// A parsed document with a selection set by the caller.
///
/// Static markup has no layout, so the selection rectangle is whatever was
/// last given to [`HtmlPage::set_rect`] (zero by default).
#[derive(Debug)]
pub struct HtmlPage<'a> {
    document: &'a Html,
    url: String,
    rect: SelectionRect,
    selection: Option<StaticSelection<'a>>,
}

impl<'a> HtmlPage<'a> {
    pub fn new(document: &'a Html, url: impl Into<String>) -> Self {
        Self {
            document,
            url: url.into(),
            rect: SelectionRect::default(),
            selection: None,
        }
    }

    /// First element matching the CSS `selector`.
    pub fn element(&self, selector: &str) -> Result<HtmlElement<'a>, SelectError> {
        let parsed = Selector::parse(selector).map_err(|err| SelectError::InvalidSelector {
            selector: selector.to_string(),
            message: err.to_string(),
        })?;
        self.document
            .select(&parsed)
            .next()
            .map(HtmlElement)
            .ok_or_else(|| SelectError::NoMatch(selector.to_string()))
    }

    /// Selects `text` inside the first element matching `selector`.
    ///
    /// When `text` lies within one of the element's own text nodes, that text
    /// node is the common ancestor; otherwise the selection spans children
    /// and the element itself is.
    pub fn select(&mut self, selector: &str, text: &str) -> Result<(), SelectError> {
        let element = self.element(selector)?.element_ref();
        let text_node = element.children().find(|child| match child.value() {
            Node::Text(content) => content.contains(text),
            _ => false,
        });
        let common_ancestor = match text_node {
            Some(node) => ancestor_for(node),
            None => ancestor_for(*element),
        };
        self.selection = Some(StaticSelection {
            text: text.to_string(),
            common_ancestor,
            rect: self.rect,
        });
        Ok(())
    }

    /// Selects `text` with the document itself as the common ancestor.
    pub fn select_document(&mut self, text: &str) {
        self.selection = Some(StaticSelection {
            text: text.to_string(),
            common_ancestor: ancestor_for(self.document.tree.root()),
            rect: self.rect,
        });
    }

    /// Rectangle reported for subsequent selections.
    pub fn set_rect(&mut self, rect: SelectionRect) {
        self.rect = rect;
        if let Some(selection) = self.selection.as_mut() {
            selection.rect = rect;
        }
    }

    /// Collapses the selection; the page then reports empty text.
    pub fn clear(&mut self) {
        self.selection = None;
    }
}

impl<'a> SelectionSource for HtmlPage<'a> {
    type Element = HtmlElement<'a>;

    fn selected_text(&self) -> Option<String> {
        Some(
            self.selection
                .as_ref()
                .map(|selection| selection.text.clone())
                .unwrap_or_default(),
        )
    }

    fn first_range(&self) -> Option<SelectionRange<HtmlElement<'a>>> {
        self.selection.as_ref().map(|selection| SelectionRange {
            common_ancestor: selection.common_ancestor.clone(),
            rect: selection.rect,
        })
    }

    fn page_url(&self) -> String {
        self.url.clone()
    }
}
