// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rendering: projects the catalog into a described view tree.
//
// Rendering is a pure function of state. The `Grid` holds the cards that are
// currently on the page, and `ViewNode` describes the markup they produce.
// The UI shell builds its live card elements from `card_view`'s tree;
// `to_html` serialises the same tree for static output.

use std::fmt::Write as _;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::escape::escape_html;
use crate::types::ServiceRecord;

/// CSS class of the card container.
pub const GRID_CLASS: &str = "services-grid";
/// CSS class of one card.
pub const CARD_CLASS: &str = "service-card";

/// Elements with no closing tag.
const VOID_TAGS: &[&str] = &["img", "br", "hr", "input", "meta", "link"];

/// A described piece of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Element {
        tag: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<ViewNode>,
    },
    Text(String),
}

impl ViewNode {
    pub fn element(tag: &'static str) -> Self {
        Self::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Builder-style attribute setter. No-op on text nodes.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Builder-style child append. No-op on text nodes.
    pub fn child(mut self, node: ViewNode) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Value of attribute `name`, if this is an element that has it.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str()),
            Self::Text(_) => None,
        }
    }

    /// Tag name, if this is an element.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Element { tag, .. } => Some(*tag),
            Self::Text(_) => None,
        }
    }

    /// First direct child element with tag `tag`.
    pub fn find_child(&self, tag: &str) -> Option<&ViewNode> {
        self.children().iter().find(|c| c.tag() == Some(tag))
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            Self::Element { children, .. } => children,
            Self::Text(_) => &[],
        }
    }

    /// Concatenated text content of this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Self::Text(t) => t.clone(),
            Self::Element { children, .. } => children.iter().map(Self::text_content).collect(),
        }
    }

    /// Serialise to HTML, escaping every text node and attribute value.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(t) => out.push_str(&escape_html(t)),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    // Writing into a String cannot fail.
                    let _ = write!(out, " {name}=\"{}\"", escape_html(value));
                }
                if VOID_TAGS.contains(tag) {
                    out.push_str(" />");
                    return;
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }
}

/// The card container: holds the records currently rendered as cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cards: Vec<ServiceRecord>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[ServiceRecord] {
        &self.cards
    }

    /// The record stored on card `index`.
    pub fn card(&self, index: usize) -> Option<&ServiceRecord> {
        self.cards.get(index)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Describe the container and all its cards.
    pub fn view(&self) -> ViewNode {
        self.cards
            .iter()
            .fold(ViewNode::element("div").attr("class", GRID_CLASS), |grid, r| {
                grid.child(card_view(r))
            })
    }
}

/// Describe one card: the record as data attributes plus an image and heading.
pub fn card_view(record: &ServiceRecord) -> ViewNode {
    ViewNode::element("div")
        .attr("class", CARD_CLASS)
        .attr("data-title", record.title.as_str())
        .attr("data-description", record.description.as_str())
        .attr("data-img", record.image_ref.as_str())
        .child(
            ViewNode::element("img")
                .attr("src", record.image_ref.as_str())
                .attr("alt", record.title.as_str()),
        )
        .child(ViewNode::element("h3").child(ViewNode::text(record.title.as_str())))
}

/// Paint `catalog` into `container`, replacing whatever it held.
///
/// A missing container is logged and otherwise ignored.
pub fn render(catalog: &Catalog, container: Option<&mut Grid>) {
    let Some(grid) = container else {
        warn!(
            "no .{GRID_CLASS} container on the page; service cards will not be shown"
        );
        return;
    };
    grid.clear();
    grid.cards.extend(catalog.iter().cloned());
    debug!(cards = grid.cards.len(), "services rendered");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SENTINEL_TITLE, build_catalog};

    #[test]
    fn cards_follow_catalog_order() {
        let catalog = build_catalog();
        let mut grid = Grid::new();
        render(&catalog, Some(&mut grid));

        let rendered: Vec<&str> = grid.cards().iter().map(|r| r.title.as_str()).collect();
        let expected: Vec<&str> = catalog.titles().collect();
        assert_eq!(rendered, expected);
        assert_eq!(rendered.last(), Some(&SENTINEL_TITLE));
    }

    #[test]
    fn rendering_twice_replaces_content() {
        let catalog = build_catalog();
        let mut grid = Grid::new();
        render(&catalog, Some(&mut grid));
        let first = grid.view();
        render(&catalog, Some(&mut grid));
        assert_eq!(grid.view(), first);
        assert_eq!(grid.cards().len(), catalog.len());
    }

    #[test]
    fn missing_container_is_not_fatal() {
        render(&build_catalog(), None);
    }

    #[test]
    fn card_carries_data_attributes() {
        let record = ServiceRecord::new("Rudrabhishek", "Shiva ritual", "images/rudra.jpg");
        let node = card_view(&record);
        assert_eq!(node.get_attr("class"), Some(CARD_CLASS));
        assert_eq!(node.get_attr("data-title"), Some("Rudrabhishek"));
        assert_eq!(node.get_attr("data-description"), Some("Shiva ritual"));
        assert_eq!(node.get_attr("data-img"), Some("images/rudra.jpg"));
        assert_eq!(node.children()[0].get_attr("alt"), Some("Rudrabhishek"));
        assert_eq!(node.text_content(), "Rudrabhishek");
    }

    #[test]
    fn card_parts_are_reachable_by_tag() {
        let node = card_view(&ServiceRecord::new("Graha Shanti", "d", "images/graha.jpg"));
        assert_eq!(node.tag(), Some("div"));

        let img = node.find_child("img").unwrap();
        assert_eq!(img.get_attr("src"), Some("images/graha.jpg"));
        assert_eq!(img.get_attr("alt"), Some("Graha Shanti"));
        assert_eq!(node.find_child("h3").map(ViewNode::text_content).as_deref(), Some("Graha Shanti"));
        assert!(node.find_child("p").is_none());
        assert_eq!(ViewNode::text("x").tag(), None);
    }

    #[test]
    fn hostile_title_renders_as_literal_text() {
        let record = ServiceRecord::new(r#"A & B <x>" onload="y"#, "d", "i.jpg");
        let html = card_view(&record).to_html();

        assert!(html.contains("<h3>A &amp; B &lt;x&gt;&quot; onload=&quot;y</h3>"));
        assert!(html.contains(r#"alt="A &amp; B &lt;x&gt;&quot; onload=&quot;y""#));
        assert!(!html.contains("<x>"));
        assert!(!html.contains(r#"" onload=""#));
    }

    #[test]
    fn void_elements_self_close() {
        let html = ViewNode::element("img").attr("src", "a.jpg").to_html();
        assert_eq!(html, r#"<img src="a.jpg" />"#);
    }

    #[test]
    fn grid_view_wraps_cards() {
        let mut grid = Grid::new();
        render(&build_catalog(), Some(&mut grid));
        let view = grid.view();
        assert_eq!(view.get_attr("class"), Some(GRID_CLASS));
        assert_eq!(view.children().len(), 7);
        assert!(view.to_html().starts_with(r#"<div class="services-grid"><div class="service-card""#));
    }
}
