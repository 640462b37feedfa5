//! Synthetic element trees for exercising the core without a browser.
#![allow(dead_code)]

use std::rc::Rc;
use std::sync::Once;

use bridge_core::{AncestorNode, ElementLike, SelectionRange, SelectionRect, SelectionSource};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bridge_logging::initialize_for_tests);
}

#[derive(Debug)]
struct FakeNode {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// Builds a tree top-down; ids are indices into the node list.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<FakeNode>,
}

impl TreeBuilder {
    /// Starts a document with `<html><body>`; returns the body id.
    pub fn page() -> (Self, usize) {
        let mut builder = Self::default();
        let html = builder.push(None, "HTML");
        let body = builder.child(html, "BODY");
        (builder, body)
    }

    pub fn child(&mut self, parent: usize, tag: &str) -> usize {
        let id = self.push(Some(parent), tag);
        self.nodes[parent].children.push(id);
        id
    }

    pub fn attr(&mut self, id: usize, name: &str, value: &str) -> &mut Self {
        self.nodes[id].attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn text(&mut self, id: usize, text: &str) -> &mut Self {
        self.nodes[id].text = text.to_string();
        self
    }

    pub fn build(self) -> FakeTree {
        FakeTree(Rc::new(self.nodes))
    }

    fn push(&mut self, parent: Option<usize>, tag: &str) -> usize {
        self.nodes.push(FakeNode {
            tag: tag.to_string(),
            attrs: Vec::new(),
            text: String::new(),
            parent,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }
}

#[derive(Debug, Clone)]
pub struct FakeTree(Rc<Vec<FakeNode>>);

impl FakeTree {
    pub fn element(&self, id: usize) -> FakeElement {
        FakeElement {
            nodes: Rc::clone(&self.0),
            index: id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FakeElement {
    nodes: Rc<Vec<FakeNode>>,
    index: usize,
}

impl FakeElement {
    fn node(&self) -> &FakeNode {
        &self.nodes[self.index]
    }

    fn at(&self, index: usize) -> Self {
        Self {
            nodes: Rc::clone(&self.nodes),
            index,
        }
    }
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.nodes, &other.nodes) && self.index == other.index
    }
}

impl ElementLike for FakeElement {
    fn tag_name(&self) -> String {
        self.node().tag.clone()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.node()
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    fn parent_element(&self) -> Option<Self> {
        self.node().parent.map(|index| self.at(index))
    }

    fn previous_element_sibling(&self) -> Option<Self> {
        let parent = self.node().parent?;
        let siblings = &self.nodes[parent].children;
        let position = siblings.iter().position(|&id| id == self.index)?;
        position.checked_sub(1).map(|prev| self.at(siblings[prev]))
    }

    fn outer_html(&self) -> String {
        let node = self.node();
        let tag = node.tag.to_ascii_lowercase();
        let attrs: String = node
            .attrs
            .iter()
            .map(|(key, value)| format!(" {key}=\"{value}\""))
            .collect();
        let children: String = node
            .children
            .iter()
            .map(|&id| self.at(id).outer_html())
            .collect();
        format!("<{tag}{attrs}>{}{children}</{tag}>", node.text)
    }

    fn text_content(&self) -> String {
        let node = self.node();
        let mut text = node.text.clone();
        for &id in &node.children {
            text.push_str(&self.at(id).text_content());
        }
        text
    }
}

/// A page whose selection the test sets directly.
#[derive(Debug, Clone, Default)]
pub struct FakeSelection {
    pub text: Option<String>,
    pub range: Option<SelectionRange<FakeElement>>,
    pub url: String,
}

impl FakeSelection {
    pub fn inside(element: &FakeElement, text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            range: Some(SelectionRange {
                common_ancestor: AncestorNode::Text {
                    parent: Some(element.clone()),
                },
                rect: SelectionRect::from_origin_size(10.0, 20.0, 100.0, 16.0),
            }),
            url: "http://localhost:5173/".to_string(),
        }
    }
}

impl SelectionSource for FakeSelection {
    type Element = FakeElement;

    fn selected_text(&self) -> Option<String> {
        self.text.clone()
    }

    fn first_range(&self) -> Option<SelectionRange<FakeElement>> {
        self.range.clone()
    }

    fn page_url(&self) -> String {
        self.url.clone()
    }
}
