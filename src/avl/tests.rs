use super::*;
use crate::traversal::PreOrder;
use alloc::{vec, vec::Vec};
use arrayvec::ArrayVec;

type ArrayAvlTree<K> = AvlTree<K, SparseStorage<Node<K>, ArrayVec<[SparseStorageSlot<Node<K>>; 4]>>>;

fn measured_height<K, S>(node: Option<NodeRef<'_, K, S>>) -> isize
where S: Storage<Element = Node<K>> {
    node.map_or(-1, |node| {
        1 + measured_height(node.left_child()).max(measured_height(node.right_child()))
    })
}

/// Checks every node: cached height against a fresh measurement, balance factor within bounds, keys in order.
fn assert_valid<K: Ord, S>(tree: &AvlTree<K, S>)
where S: Storage<Element = Node<K>> {
    let mut count = 0;
    for cursor in PreOrder::new(tree) {
        let node = NodeRef::new_raw(tree.as_unbalanced(), cursor).expect("cursor to a missing node");
        assert_eq!(node.height(), measured_height(Some(node)));
        let balance_factor =
            measured_height(node.left_child()) - measured_height(node.right_child());
        assert_eq!(node.balance_factor(), balance_factor);
        assert!(balance_factor.abs() <= 1);
        if let Some(left) = node.left_child() {
            assert!(left.key() < node.key());
        }
        if let Some(right) = node.right_child() {
            assert!(right.key() > node.key());
        }
        count += 1;
    }
    assert_eq!(count, tree.len());
    assert_eq!(tree.height(), measured_height(tree.root()));
    let keys: Vec<_> = tree.into_iter().collect();
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
}

fn preorder<K: Copy, S>(tree: &AvlTree<K, S>) -> Vec<K>
where S: Storage<Element = Node<K>> {
    tree.traverse(TraversalOrder::Pre).copied().collect()
}

#[test]
fn ascending_alphabet() {
    let tree: AvlTree<char> = ('a'..='z').collect();
    assert_eq!(tree.len(), 26);
    assert_eq!(tree.height(), 4);
    assert!(tree.balance_factors().all(|(_, factor)| (-1..=1).contains(&factor)));
    assert_eq!(tree.balance_factors().count(), 26);
    assert_valid(&tree);
}

#[test]
fn remove_from_alphabet() {
    let mut tree: AvlTree<char> = ('a'..='z').collect();
    assert_eq!(tree.remove(&'a'), Some('a'));
    assert_eq!(tree.len(), 25);
    assert!(!tree.contains(&'a'));
    for key in 'b'..='z' {
        assert!(tree.contains(&key));
    }
    assert_valid(&tree);
}

#[test]
fn balanced_child_selects_single_rotation() {
    //       5              3
    //      / \            / \
    //     3   8   -->    2   5
    //    / \                /
    //   2   4              4
    let mut tree: AvlTree<u32> = vec![5, 3, 8, 2, 4].into_iter().collect();
    assert_eq!(tree.remove(&8), Some(8));
    assert_eq!(preorder(&tree), [3, 2, 5, 4]);
    assert_valid(&tree);

    // Mirror image
    let mut tree: AvlTree<u32> = vec![5, 3, 8, 7, 9].into_iter().collect();
    assert_eq!(tree.remove(&3), Some(3));
    assert_eq!(preorder(&tree), [8, 5, 7, 9]);
    assert_valid(&tree);

    assert_eq!(Rotation::select(2, 0), Some(Rotation::Right));
    assert_eq!(Rotation::select(-2, 0), Some(Rotation::Left));
}

#[test]
fn rotation_selection() {
    assert_eq!(Rotation::select(2, 1), Some(Rotation::Right));
    assert_eq!(Rotation::select(2, -1), Some(Rotation::LeftRight));
    assert_eq!(Rotation::select(-2, -1), Some(Rotation::Left));
    assert_eq!(Rotation::select(-2, 1), Some(Rotation::RightLeft));
    for &balance_factor in &[-1, 0, 1] {
        for &child_balance_factor in &[-1, 0, 1] {
            assert_eq!(Rotation::select(balance_factor, child_balance_factor), None);
        }
    }
}

#[test]
fn double_rotations() {
    // Left-right: 3, then 1 to its left, then 2 between them
    let tree: AvlTree<u32> = vec![3, 1, 2].into_iter().collect();
    assert_eq!(preorder(&tree), [2, 1, 3]);
    assert_valid(&tree);
    // Right-left
    let tree: AvlTree<u32> = vec![1, 3, 2].into_iter().collect();
    assert_eq!(preorder(&tree), [2, 1, 3]);
    assert_valid(&tree);
}

#[test]
fn ascending_then_remove() {
    let mut tree: AvlTree<u32> = (1..=7).collect();
    assert_eq!(preorder(&tree), [4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(tree.height(), 2);

    assert_eq!(tree.remove(&1), Some(1));
    assert_valid(&tree);
    assert_eq!(tree.remove(&3), Some(3));
    assert_valid(&tree);
    // Removing 2 leaves 4 with an empty left subtree and a right subtree of height 1, which
    // has to be fixed by a left rotation at the root
    assert_eq!(tree.remove(&2), Some(2));
    assert_eq!(preorder(&tree), [6, 4, 5, 7]);
    assert_valid(&tree);
}

#[test]
fn predecessor_takes_place() {
    let mut tree: AvlTree<u32> = (1..=7).collect();
    assert_eq!(tree.remove(&4), Some(4));
    assert_eq!(tree.root().map(|root| *root.key()), Some(3));
    assert_eq!(preorder(&tree), [3, 2, 1, 6, 5, 7]);
    assert_valid(&tree);
}

#[test]
fn rebalances_below_removed_key() {
    // Removing the root takes its predecessor from the right edge of the left subtree, which
    // unbalances 4, the node the predecessor was removed from
    let mut tree: AvlTree<u32> =
        vec![8, 4, 12, 2, 6, 10, 14, 1, 3, 13, 15].into_iter().collect();
    assert_valid(&tree);
    assert_eq!(tree.remove(&8), Some(8));
    assert_eq!(preorder(&tree), [6, 2, 1, 4, 3, 12, 10, 14, 13, 15]);
    assert_valid(&tree);
    assert_eq!(tree.len(), 10);
}

#[test]
fn idempotence() {
    let mut once: AvlTree<u32> = (0..32).collect();
    let mut twice: AvlTree<u32> = (0..32).chain(0..32).collect();
    assert_eq!(once.len(), twice.len());
    assert_eq!(preorder(&once), preorder(&twice));
    assert!(!twice.insert(5));

    let before = preorder(&once);
    assert_eq!(once.remove(&100), None);
    assert_eq!(preorder(&once), before);
    assert_eq!(twice.remove(&16), Some(16));
    assert_eq!(twice.remove(&16), None);
}

#[test]
fn churn() {
    let mut tree = AvlTree::<u32>::new();
    // A fixed permutation of 0..97, since 37 is coprime with 97
    for key in (0..97).map(|x| (x * 37) % 97) {
        assert!(tree.insert(key));
        assert_valid(&tree);
    }
    for key in (0..97).map(|x| (x * 11) % 97).filter(|key| key % 3 != 0) {
        assert_eq!(tree.remove(&key), Some(key));
        assert!(!tree.contains(&key));
        assert_valid(&tree);
    }
    assert_eq!(tree.len(), 33);
    assert_eq!(tree.min(), Some(&0));
    assert_eq!(tree.max(), Some(&96));
    assert_eq!(tree.get(&3), Some(&3));
    assert_eq!(tree.get(&4), None);
    // Every removal left a hole which is reused by the next insertions
    assert_eq!(tree.num_holes(), 64);
    tree.extend(1000..1064);
    assert!(tree.is_dense());
    assert_valid(&tree);
}

#[test]
fn empty_tree() {
    let mut tree = AvlTree::<u32>::default();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1);
    assert!(tree.root().is_none());
    assert_eq!(tree.min(), None);
    assert_eq!(tree.remove(&0), None);
    assert!(!tree.contains(&0));
    assert_eq!(tree.balance_factors().next(), None);

    tree.insert(0);
    assert_eq!(tree.height(), 0);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}

#[test]
fn fixed_capacity() {
    let mut tree = ArrayAvlTree::<u32>::new();
    assert_eq!(tree.capacity(), 4);
    for key in 0..4 {
        assert_eq!(tree.try_insert(key), Ok(true));
    }
    // Duplicates are found before any room is needed
    assert_eq!(tree.try_insert(2), Ok(false));
    let error = tree.try_insert(4).expect_err("the storage is full");
    assert_eq!(error.into_key(), 4);
    assert_eq!(tree.len(), 4);
    assert_valid(&tree);

    assert_eq!(tree.remove(&0), Some(0));
    assert_eq!(tree.try_insert(4), Ok(true));
    assert_eq!(preorder(&tree).len(), 4);
    assert_valid(&tree);
}

#[test]
#[should_panic]
fn insert_into_full_storage_panics() {
    let mut tree = ArrayAvlTree::<u32>::new();
    for key in 0..5 {
        tree.insert(key);
    }
}
