//! Debug printers.

use std::fmt::Display;

use crate::types::LinkStore;
use crate::util::InOrder;

/// One line per node, in key order:
///
/// ```text
/// color=black value=20 left_value=10 right_value=30
/// ```
pub fn print_in_order<S, F, D>(store: &S, root: Option<u32>, label: F) -> String
where
    S: LinkStore + ?Sized,
    F: Fn(u32) -> D,
    D: Display,
{
    let mut out = String::new();
    for node in InOrder::new(store, root) {
        let link = store.link(node);
        out.push_str(&format!("color={} value={}", link.color.as_str(), label(node)));
        if let Some(l) = link.l {
            out.push_str(&format!(" left_value={}", label(l)));
        }
        if let Some(r) = link.r {
            out.push_str(&format!(" right_value={}", label(r)));
        }
        out.push('\n');
    }
    out
}

/// Box-drawing dump of the tree shape. Missing children of inner nodes are
/// shown as `∅`.
pub fn print_tree<S, F, D>(store: &S, root: Option<u32>, label: F) -> String
where
    S: LinkStore + ?Sized,
    F: Fn(u32) -> D,
    D: Display,
{
    print_node(store, root, &label, "")
}

fn print_node<S, F, D>(store: &S, node: Option<u32>, label: &F, tab: &str) -> String
where
    S: LinkStore + ?Sized,
    F: Fn(u32) -> D,
    D: Display,
{
    let Some(i) = node else {
        return "∅".to_string();
    };
    let link = store.link(i);
    let mut out = format!("{} {}", link.color.as_str(), label(i));
    if link.l.is_none() && link.r.is_none() {
        return out;
    }

    let children = [link.l, link.r];
    for (n, child) in children.into_iter().enumerate() {
        let is_last = n == children.len() - 1;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        out.push('\n');
        out.push_str(tab);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(&print_node(store, child, label, &child_tab));
    }
    out
}
