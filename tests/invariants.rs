//! Property tests checking the tree invariants after arbitrary sequences of operations, against a `BTreeSet` as the control model.

use std::collections::BTreeSet;

use avl_arena::{AvlTree, BinarySearchTree, NodeRef, Storage, Node, Traversable, TraversalOrder};
use proptest::prelude::*;

const N_OPS: usize = 300;

#[derive(Debug, Clone)]
enum Op {
    Insert(u16),
    Remove(u16),
    Contains(u16),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    // A small key domain makes removals and duplicate insertions hit existing keys often.
    let key = 0..128_u16;
    prop_oneof![
        3 => key.clone().prop_map(Op::Insert),
        2 => key.clone().prop_map(Op::Remove),
        1 => key.prop_map(Op::Contains),
    ]
}

fn measured_height<K, S>(node: Option<NodeRef<'_, K, S>>) -> isize
where S: Storage<Element = Node<K>> {
    node.map_or(-1, |node| {
        1 + measured_height(node.left_child()).max(measured_height(node.right_child()))
    })
}

/// Walks the whole tree, asserting that cached heights match measured ones, and returns the largest absolute balance factor seen.
fn validate_tree_structure<K, S>(tree: &BinarySearchTree<K, S>) -> isize
where
    K: Ord,
    S: Storage<Element = Node<K>>,
{
    fn visit<K: Ord, S>(node: Option<NodeRef<'_, K, S>>, worst: &mut isize)
    where S: Storage<Element = Node<K>> {
        let node = match node {
            Some(node) => node,
            None => return,
        };
        assert_eq!(node.height(), measured_height(Some(node)));
        let balance_factor =
            measured_height(node.left_child()) - measured_height(node.right_child());
        assert_eq!(node.balance_factor(), balance_factor);
        *worst = (*worst).max(balance_factor.abs());
        if let Some(left) = node.left_child() {
            assert!(left.key() < node.key());
        }
        if let Some(right) = node.right_child() {
            assert!(right.key() > node.key());
        }
        visit(node.left_child(), worst);
        visit(node.right_child(), worst);
    }
    let mut worst = 0;
    visit(tree.root(), &mut worst);
    assert_eq!(tree.height(), measured_height(tree.root()));
    worst
}

proptest! {
    /// Apply random operations to an AVL tree and a control model, asserting
    /// that they agree and that the tree stays balanced after every mutation.
    #[test]
    fn prop_avl_matches_model(ops in prop::collection::vec(arbitrary_op(), 0..N_OPS)) {
        let mut tree = AvlTree::<u16>::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key), model.insert(key));
                }
                Op::Remove(key) => {
                    let expected = model.take(&key);
                    prop_assert_eq!(tree.remove(&key), expected);
                    prop_assert!(!tree.contains(&key));
                }
                Op::Contains(key) => {
                    prop_assert_eq!(tree.contains(&key), model.contains(&key));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
            prop_assert!(validate_tree_structure(tree.as_unbalanced()) <= 1);
        }

        let in_order: Vec<_> = tree.traverse(TraversalOrder::In).copied().collect();
        let expected: Vec<_> = model.iter().copied().collect();
        prop_assert_eq!(in_order, expected);
        prop_assert_eq!(tree.min(), model.iter().next());
        prop_assert_eq!(tree.max(), model.iter().next_back());
    }

    /// The unbalanced tree agrees with the model as well, but is allowed to
    /// lean arbitrarily.
    #[test]
    fn prop_bst_matches_model(ops in prop::collection::vec(arbitrary_op(), 0..N_OPS)) {
        let mut tree = BinarySearchTree::<u16>::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => {
                    prop_assert_eq!(tree.insert(key), model.insert(key));
                }
                Op::Remove(key) => {
                    prop_assert_eq!(tree.remove(&key), model.take(&key));
                }
                Op::Contains(key) => {
                    prop_assert_eq!(tree.get(&key), model.get(&key));
                }
            }
            prop_assert_eq!(tree.len(), model.len());
            validate_tree_structure(&tree);
        }

        let in_order: Vec<_> = tree.into_iter().copied().collect();
        let expected: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(in_order, expected);
    }

    /// Every traversal order visits each key exactly once.
    #[test]
    fn prop_traversals_visit_every_key(
        keys in prop::collection::btree_set(any::<u16>(), 0..N_OPS),
    ) {
        let tree: AvlTree<u16> = keys.iter().copied().collect();
        for &order in &TraversalOrder::ALL {
            let mut visited: Vec<_> = tree.traverse(order).copied().collect();
            visited.sort_unstable();
            let expected: Vec<_> = keys.iter().copied().collect();
            prop_assert_eq!(visited, expected);
        }
    }

    /// Inserting keys twice leaves the same tree as inserting them once.
    #[test]
    fn prop_double_insert_is_idempotent(
        keys in prop::collection::vec(any::<u16>(), 0..N_OPS),
    ) {
        let once: AvlTree<u16> = keys.iter().copied().collect();
        let mut twice = once.clone();
        twice.extend(keys.iter().copied());

        let shape = |tree: &AvlTree<u16>| tree.traverse(TraversalOrder::Pre).copied().collect::<Vec<_>>();
        prop_assert_eq!(shape(&once), shape(&twice));
        prop_assert_eq!(once.len(), twice.len());
    }
}
