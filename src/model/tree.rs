//! Render tree produced by the display blocks.

use serde::Serialize;

/// Semantic role of a render node.
///
/// Roles describe what a region *is*, not how it looks. Exporters decide
/// the concrete markup for each role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Root of a composed page.
    Page,
    /// Identity block: tag, heading, byline.
    Header,
    /// Short classification label.
    Tag,
    /// Headings with level 1-6.
    Heading(u8),
    /// Connective plus author ("by J. Doe").
    Byline,
    /// Titled container. The title lives in the node's `text`.
    Section,
    /// Literal prose.
    Paragraph,
}

impl Role {
    /// Whether nodes with this role carry their own text.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Role::Tag | Role::Heading(_) | Role::Byline | Role::Paragraph
        )
    }
}

/// A node in the render tree.
///
/// Leaves carry text verbatim; containers carry children. A `Section` carries
/// both: its title as text and its body as children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderNode {
    pub role: Role,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RenderNode>,
}

impl RenderNode {
    /// Create a text-bearing node. `role` must be a leaf role.
    pub fn leaf(role: Role, text: impl Into<String>) -> Self {
        debug_assert!(role.is_leaf(), "{role:?} is not a leaf role");
        Self {
            role,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Create a container node. Leaf roles are rejected in debug builds.
    pub fn container(role: Role, children: Vec<RenderNode>) -> Self {
        debug_assert!(!role.is_leaf(), "{role:?} is a leaf role");
        Self {
            role,
            text: String::new(),
            children,
        }
    }

    /// Create a titled section wrapping `children`.
    pub fn section(title: impl Into<String>, children: Vec<RenderNode>) -> Self {
        Self {
            role: Role::Section,
            text: title.into(),
            children,
        }
    }

    /// Depth-first, pre-order traversal starting at this node.
    pub fn iter(&self) -> DfsIter<'_> {
        DfsIter { stack: vec![self] }
    }

    /// First node (pre-order) with the given role.
    pub fn find(&self, role: Role) -> Option<&RenderNode> {
        self.iter().find(|n| n.role == role)
    }

    /// Text of the first node with the given role.
    pub fn text_of(&self, role: Role) -> Option<&str> {
        self.find(role).map(|n| n.text.as_str())
    }
}

/// Pre-order iterator over a render tree.
pub struct DfsIter<'a> {
    stack: Vec<&'a RenderNode>,
}

impl<'a> Iterator for DfsIter<'a> {
    type Item = &'a RenderNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenderNode {
        RenderNode::container(
            Role::Page,
            vec![
                RenderNode::container(
                    Role::Header,
                    vec![
                        RenderNode::leaf(Role::Tag, "Fiction"),
                        RenderNode::leaf(Role::Heading(1), "Title"),
                    ],
                ),
                RenderNode::section("About", vec![RenderNode::leaf(Role::Paragraph, "Body")]),
            ],
        )
    }

    #[test]
    fn test_dfs_is_pre_order() {
        let roles: Vec<Role> = sample().iter().map(|n| n.role).collect();
        assert_eq!(
            roles,
            vec![
                Role::Page,
                Role::Header,
                Role::Tag,
                Role::Heading(1),
                Role::Section,
                Role::Paragraph,
            ]
        );
    }

    #[test]
    fn test_leaf_roles() {
        assert!(Role::Tag.is_leaf());
        assert!(Role::Heading(3).is_leaf());
        assert!(Role::Byline.is_leaf());
        assert!(Role::Paragraph.is_leaf());
        assert!(!Role::Page.is_leaf());
        assert!(!Role::Header.is_leaf());
        assert!(!Role::Section.is_leaf());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not a leaf role")]
    fn test_leaf_rejects_container_role() {
        let _ = RenderNode::leaf(Role::Header, "x");
    }

    #[test]
    fn test_text_of() {
        let tree = sample();
        assert_eq!(tree.text_of(Role::Heading(1)), Some("Title"));
        assert_eq!(tree.text_of(Role::Section), Some("About"));
        assert_eq!(tree.text_of(Role::Byline), None);
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let json = serde_json::to_string(&RenderNode::leaf(Role::Heading(2), "x")).unwrap();
        assert_eq!(json, r#"{"role":{"heading":2},"text":"x"}"#);
    }
}
