//! Tree rendering
//!
//! Depth-first, two spaces of indent per level. Each line is the node title,
//! styled by health, followed by ` -- description` when there is one.

use crossterm::style::{Color, ContentStyle};

use super::graph::{NodeId, ResourceTree};
use super::health::Health;
use crate::models::ResourceKind;

/// Indent added per tree level
pub const INDENT: &str = "  ";

/// Health to terminal style mapping
///
/// `Palette::plain()` never emits escape sequences, so its output can be
/// compared byte for byte.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    ok: Option<ContentStyle>,
    warning: Option<ContentStyle>,
    critical: Option<ContentStyle>,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        if color { Self::colored() } else { Self::plain() }
    }

    pub fn plain() -> Self {
        Self::default()
    }

    pub fn colored() -> Self {
        let fg = |color| ContentStyle {
            foreground_color: Some(color),
            ..ContentStyle::default()
        };
        Self {
            ok: Some(fg(Color::Green)),
            warning: Some(fg(Color::Yellow)),
            critical: Some(fg(Color::Red)),
        }
    }

    pub fn is_colored(&self) -> bool {
        self.ok.is_some() || self.warning.is_some() || self.critical.is_some()
    }

    fn style(&self, health: Health) -> Option<ContentStyle> {
        match health {
            Health::Ok => self.ok,
            Health::Warning => self.warning,
            Health::Critical => self.critical,
            Health::Unset => None,
        }
    }

    pub fn paint(&self, health: Health, text: &str) -> String {
        match self.style(health) {
            Some(style) => style.apply(text).to_string(),
            None => text.to_string(),
        }
    }
}

/// Render the whole tree from the cluster root
pub fn render(tree: &ResourceTree, palette: &Palette) -> String {
    let mut out = String::new();
    render_node(tree, tree.root(), "", palette, &mut out);
    out
}

fn render_node(tree: &ResourceTree, id: NodeId, indent: &str, palette: &Palette, out: &mut String) {
    let node = tree.node(id);

    out.push_str(indent);
    out.push_str(&palette.paint(node.health, &node.title));
    if !node.health_detail.is_empty() {
        out.push_str(" -- ");
        out.push_str(&node.health_detail);
    }
    out.push('\n');

    let child_indent = format!("{}{}", indent, INDENT);
    for child in sorted_children(tree, id) {
        render_node(tree, child, &child_indent, palette, out);
    }
}

/// Children in render order: services first, then by kind name; within a
/// kind, insertion order is kept.
pub fn sorted_children(tree: &ResourceTree, id: NodeId) -> Vec<NodeId> {
    let mut children: Vec<NodeId> = tree.node(id).children().collect();
    children.sort_by_key(|child| {
        let kind = tree.node(*child).kind();
        (!kind.is(ResourceKind::Service), kind.as_str())
    });
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        PodDetails, RecordMeta, ReplicaSetDetails, ResourceDetails, ResourceRecord,
        ServiceDetails,
    };

    fn record(name: &str, details: ResourceDetails) -> ResourceRecord {
        ResourceRecord::new(RecordMeta::new("default", name), details)
    }

    #[test]
    fn test_empty_tree() {
        let tree = ResourceTree::new();
        assert_eq!(render(&tree, &Palette::plain()), "kubernetes\n");
    }

    #[test]
    fn test_children_sort_services_first_then_kind() {
        let mut tree = ResourceTree::new();
        let ns = tree.insert(ResourceRecord::namespace("default"));
        tree.attach(tree.root(), ns);

        let pod_b = tree.insert(record("b", ResourceDetails::Pod(PodDetails::default())));
        let rs = tree.insert(record("a", ResourceDetails::ReplicaSet(ReplicaSetDetails::default())));
        let pod_a = tree.insert(record("a", ResourceDetails::Pod(PodDetails::default())));
        let svc = tree.insert(record("z", ResourceDetails::Service(ServiceDetails::default())));
        for child in [pod_b, rs, pod_a, svc] {
            tree.attach(ns, child);
        }

        assert_eq!(sorted_children(&tree, ns), vec![svc, pod_b, pod_a, rs]);
    }

    #[test]
    fn test_description_and_indent() {
        let mut tree = ResourceTree::new();
        let ns = tree.insert(ResourceRecord::namespace("default"));
        tree.attach(tree.root(), ns);
        let pod = tree.insert(record(
            "web",
            ResourceDetails::Pod(PodDetails::default()),
        ));
        tree.attach(ns, pod);

        assert_eq!(
            render(&tree, &Palette::plain()),
            "kubernetes\n  ns/default\n    po/web -- 0/0 up, 0/0 rdy\n"
        );
    }

    #[test]
    fn test_plain_palette_adds_no_escapes() {
        let palette = Palette::plain();
        assert!(!palette.is_colored());
        assert_eq!(palette.paint(Health::Critical, "po/web"), "po/web");
    }

    #[test]
    fn test_colored_palette_styles_by_health() {
        let palette = Palette::new(true);
        assert!(palette.is_colored());

        let critical = palette.paint(Health::Critical, "po/web");
        assert!(critical.contains("po/web"));
        // crossterm drops colours entirely when NO_COLOR is set
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(critical.contains('\u{1b}'));
            assert_ne!(critical, palette.paint(Health::Ok, "po/web"));
        }

        // Unset carries no style even when colouring is on
        assert_eq!(palette.paint(Health::Unset, "ns/default"), "ns/default");
    }
}
