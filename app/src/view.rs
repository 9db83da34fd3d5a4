//! The view tree: an immutable description of what the shell displays.
//!
//! Nodes carry symbolic [`Style`] tokens rather than CSS. The mapping to real
//! classes lives in [`crate::theme`].

/// Named presentation directives understood by a [`crate::theme::StyleSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    PaddingGenerous,
    AlignCenter,
    SizeDisplay,
    SizeLarge,
    WeightBold,
    ColorAccent,
    ColorMuted,
    MarginTopSmall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Container,
    Heading,
    Text,
}

impl NodeKind {
    /// HTML element a node of this kind is emitted as.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Container => "div",
            NodeKind::Heading => "h1",
            NodeKind::Text => "p",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewNode {
    Container {
        styles: &'static [Style],
        children: Vec<ViewNode>,
    },
    Heading {
        styles: &'static [Style],
        text: &'static str,
    },
    Text {
        styles: &'static [Style],
        text: &'static str,
    },
}

impl ViewNode {
    pub fn container(styles: &'static [Style], children: Vec<ViewNode>) -> Self {
        ViewNode::Container { styles, children }
    }

    pub fn heading(styles: &'static [Style], text: &'static str) -> Self {
        ViewNode::Heading { styles, text }
    }

    pub fn text(styles: &'static [Style], text: &'static str) -> Self {
        ViewNode::Text { styles, text }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            ViewNode::Container { .. } => NodeKind::Container,
            ViewNode::Heading { .. } => NodeKind::Heading,
            ViewNode::Text { .. } => NodeKind::Text,
        }
    }

    pub fn styles(&self) -> &'static [Style] {
        match self {
            ViewNode::Container { styles, .. }
            | ViewNode::Heading { styles, .. }
            | ViewNode::Text { styles, .. } => styles,
        }
    }

    /// Literal payload of a heading or text node. Containers have none.
    pub fn text_payload(&self) -> Option<&'static str> {
        match self {
            ViewNode::Container { .. } => None,
            ViewNode::Heading { text, .. } | ViewNode::Text { text, .. } => Some(text),
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Container { children, .. } => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_have_no_children() {
        let h = ViewNode::heading(&[Style::WeightBold], "hi");
        assert_eq!(h.kind(), NodeKind::Heading);
        assert!(h.children().is_empty());
        assert_eq!(h.text_payload(), Some("hi"));
    }

    #[test]
    fn container_keeps_child_order() {
        let node = ViewNode::container(
            &[],
            vec![ViewNode::text(&[], "a"), ViewNode::text(&[], "b")],
        );
        let texts: Vec<_> = node.children().iter().filter_map(|c| c.text_payload()).collect();
        assert_eq!(texts, ["a", "b"]);
        assert_eq!(node.text_payload(), None);
    }

    #[test]
    fn tags_follow_kind() {
        assert_eq!(NodeKind::Container.tag(), "div");
        assert_eq!(NodeKind::Heading.tag(), "h1");
        assert_eq!(NodeKind::Text.tag(), "p");
    }
}
