use bridge_core::{AncestorNode, ElementLike, SelectionRange, SelectionRect, SelectionSource};
use wasm_bindgen::JsCast;
use web_sys::{Element, Node, Window};

/// Live DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebElement(Element);

impl WebElement {
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl ElementLike for WebElement {
    fn tag_name(&self) -> String {
        self.0.tag_name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn parent_element(&self) -> Option<Self> {
        self.0.parent_element().map(WebElement)
    }

    fn previous_element_sibling(&self) -> Option<Self> {
        self.0.previous_element_sibling().map(WebElement)
    }

    fn outer_html(&self) -> String {
        self.0.outer_html()
    }

    fn text_content(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn is_document_body(&self) -> bool {
        let node: &Node = self.0.as_ref();
        self.0
            .owner_document()
            .and_then(|document| document.body())
            .is_some_and(|body| body.is_same_node(Some(node)))
    }
}

fn classify(node: Node) -> AncestorNode<WebElement> {
    if node.node_type() == Node::TEXT_NODE {
        return AncestorNode::Text {
            parent: node.parent_element().map(WebElement),
        };
    }
    match node.dyn_into::<Element>() {
        Ok(element) => AncestorNode::Element(WebElement(element)),
        Err(_) => AncestorNode::Other,
    }
}

/// The window's live selection.
#[derive(Debug, Clone)]
pub struct WebSelection {
    window: Window,
}

impl WebSelection {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    fn selection(&self) -> Option<web_sys::Selection> {
        self.window.get_selection().ok().flatten()
    }
}

impl SelectionSource for WebSelection {
    type Element = WebElement;

    fn selected_text(&self) -> Option<String> {
        self.selection()
            .map(|selection| String::from(selection.to_string()))
    }

    fn first_range(&self) -> Option<SelectionRange<WebElement>> {
        let selection = self.selection()?;
        if selection.range_count() == 0 {
            return None;
        }
        let range = selection.get_range_at(0).ok()?;
        let ancestor = range.common_ancestor_container().ok()?;
        let bounds = range.get_bounding_client_rect();
        Some(SelectionRange {
            common_ancestor: classify(ancestor),
            rect: SelectionRect {
                top: bounds.top(),
                left: bounds.left(),
                bottom: bounds.bottom(),
                right: bounds.right(),
                width: bounds.width(),
                height: bounds.height(),
            },
        })
    }

    fn page_url(&self) -> String {
        self.window.location().href().unwrap_or_default()
    }
}
