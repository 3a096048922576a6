//! Org chart flattening.
//!
//! Turns the nested group tree served upstream into a parent-linked list
//! that views can scan and filter without recursion.

use crate::models::{FlattenedNode, OrgNode};

/// Flatten `root` into pre-order: each group precedes its children, and
/// children keep their given order.
///
/// The root carries no parent link. Every other entry links to its direct
/// parent's id, whatever that id is (including none). Never fails.
pub fn flatten(root: &OrgNode) -> Vec<FlattenedNode> {
    let mut flat = Vec::with_capacity(root.subtree_len());
    push_subtree(root, &mut flat);
    flat
}

/// Flatten several top-level groups in order. Each root carries no parent link.
pub fn flatten_forest(roots: &[OrgNode]) -> Vec<FlattenedNode> {
    let capacity = roots.iter().map(OrgNode::subtree_len).sum();
    let mut flat = Vec::with_capacity(capacity);
    for root in roots {
        push_subtree(root, &mut flat);
    }
    flat
}

// Explicit stack so deep charts cannot overflow the call stack.
fn push_subtree(root: &OrgNode, flat: &mut Vec<FlattenedNode>) {
    let mut stack: Vec<(&OrgNode, Option<i64>)> = vec![(root, None)];

    while let Some((node, parent_group_id)) = stack.pop() {
        flat.push(FlattenedNode::from_org_node(node, parent_group_id));
        // Reversed so the first child is popped first.
        stack.extend(node.child_groups.iter().rev().map(|child| (child, node.id)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoleTier;
    use std::collections::HashMap;

    fn sample_tree() -> OrgNode {
        OrgNode::new(1, "Nodal Office")
            .with_role(RoleTier::NodalOfficer)
            .with_child(
                OrgNode::new(2, "IT").with_child(
                    OrgNode::new(3, "HOD IT")
                        .with_role(RoleTier::HeadOfDepartment)
                        .with_child(OrgNode::new(4, "Network").as_service_category())
                        .with_child(OrgNode::new(5, "Hardware").as_service_category()),
                ),
            )
            .with_child(OrgNode::new(6, "HR"))
    }

    fn parent_of(node: &OrgNode) -> HashMap<i64, Option<i64>> {
        let mut parents = HashMap::new();
        let mut stack = vec![(node, None)];
        while let Some((n, parent)) = stack.pop() {
            parents.insert(n.id.unwrap(), parent);
            for child in &n.child_groups {
                stack.push((child, n.id));
            }
        }
        parents
    }

    #[test]
    fn test_flatten_is_pre_order() {
        let flat = flatten(&sample_tree());
        let ids: Vec<_> = flat.iter().map(|n| n.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_flatten_emits_every_node_once() {
        let tree = sample_tree();
        let flat = flatten(&tree);
        assert_eq!(flat.len(), tree.subtree_len());

        let mut ids: Vec<_> = flat.iter().map(|n| n.id.unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), flat.len());
    }

    #[test]
    fn test_flatten_links_each_node_to_its_direct_parent() {
        let tree = sample_tree();
        let expected = parent_of(&tree);

        for node in flatten(&tree) {
            assert_eq!(node.parent_group_id, expected[&node.id.unwrap()]);
        }
    }

    #[test]
    fn test_subtree_root_has_no_parent() {
        let tree = sample_tree();
        let subtree = &tree.child_groups[0];
        let flat = flatten(subtree);

        assert_eq!(flat[0].id, Some(2));
        assert!(flat[0].is_root());
        assert_eq!(flat[1].parent_group_id, Some(2));
    }

    #[test]
    fn test_flatten_single_node() {
        let flat = flatten(&OrgNode::new(42, "Lonely"));
        assert_eq!(flat.len(), 1);
        assert!(flat[0].is_root());
    }

    #[test]
    fn test_flatten_is_repeatable() {
        let tree = sample_tree();
        assert_eq!(flatten(&tree), flatten(&tree));
    }

    #[test]
    fn test_missing_id_is_carried_through() {
        let mut anonymous = OrgNode::new(0, "No id");
        anonymous.id = None;
        let tree = OrgNode::new(1, "root").with_child(anonymous.with_child(OrgNode::new(3, "leaf")));

        let flat = flatten(&tree);
        assert_eq!(flat[1].id, None);
        assert_eq!(flat[1].parent_group_id, Some(1));
        assert_eq!(flat[2].parent_group_id, None);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut node = OrgNode::new(100_000, "leaf");
        for id in (0..100_000).rev() {
            node = OrgNode::new(id, "level").with_child(node);
        }

        let flat = flatten(&node);
        assert_eq!(flat.len(), 100_001);
        assert_eq!(flat[100_000].parent_group_id, Some(99_999));

        // Drop iteratively as well; the derived drop glue recurses.
        let mut stack = vec![node];
        while let Some(mut n) = stack.pop() {
            stack.append(&mut n.child_groups);
        }
    }

    #[test]
    fn test_flatten_forest_keeps_roots_unlinked() {
        let roots = vec![
            OrgNode::new(1, "North").with_child(OrgNode::new(2, "Ops")),
            OrgNode::new(3, "South"),
        ];
        let flat = flatten_forest(&roots);

        let ids: Vec<_> = flat.iter().map(|n| n.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(flat[0].is_root());
        assert!(flat[2].is_root());
        assert_eq!(flat[1].parent_group_id, Some(1));
    }
}
