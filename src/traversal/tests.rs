use super::*;
use crate::BinarySearchTree;
use alloc::{vec, vec::Vec, string::ToString};

fn keys(tree: &BinarySearchTree<u32>, order: TraversalOrder) -> Vec<u32> {
    tree.traverse(order).copied().collect()
}

#[test]
fn orders_on_full_tree() {
    let tree: BinarySearchTree<u32> = vec![4, 2, 6, 1, 3, 5, 7].into_iter().collect();
    assert_eq!(keys(&tree, TraversalOrder::Pre), [4, 2, 1, 3, 6, 5, 7]);
    assert_eq!(keys(&tree, TraversalOrder::In), [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(keys(&tree, TraversalOrder::Post), [1, 3, 2, 5, 7, 6, 4]);
    assert_eq!(keys(&tree, TraversalOrder::Level), [4, 2, 6, 1, 3, 5, 7]);
}

#[test]
fn orders_on_lopsided_tree() {
    //     5
    //    /
    //   2
    //    \
    //     3
    //      \
    //       4
    let tree: BinarySearchTree<u32> = vec![5, 2, 3, 4].into_iter().collect();
    assert_eq!(keys(&tree, TraversalOrder::Pre), [5, 2, 3, 4]);
    assert_eq!(keys(&tree, TraversalOrder::In), [2, 3, 4, 5]);
    assert_eq!(keys(&tree, TraversalOrder::Post), [4, 3, 2, 5]);
    assert_eq!(keys(&tree, TraversalOrder::Level), [5, 2, 3, 4]);
}

#[test]
fn empty_tree() {
    let tree = BinarySearchTree::<u32>::new();
    for &order in &TraversalOrder::ALL {
        assert_eq!(tree.traverse(order).next(), None);
    }
}

#[test]
fn restartable() {
    let tree: BinarySearchTree<u32> = vec![2, 1, 3].into_iter().collect();
    let mut first = tree.traverse(TraversalOrder::In);
    assert_eq!(first.next(), Some(&1));
    // A second traversal starts over regardless of the first one
    assert_eq!(keys(&tree, TraversalOrder::In), [1, 2, 3]);
    assert_eq!(first.order(), TraversalOrder::In);
    assert_eq!(first.copied().collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn cursors() {
    let tree: BinarySearchTree<u32> = vec![2, 1, 3].into_iter().collect();
    let root = tree.cursor_to_root().expect("the tree is not empty");
    let level: Vec<_> = LevelOrder::new(&tree).collect();
    assert_eq!(level.len(), 3);
    assert_eq!(level[0], root);
    assert_eq!(tree.left_child_of(&root), Some(level[1]));
    assert_eq!(tree.right_child_of(&root), Some(level[2]));
    assert_eq!(*tree.key_of(&level[1]), 1);
    assert_eq!(PreOrder::new(&tree).count(), 3);
    assert_eq!(PostOrder::new(&tree).last(), Some(root));
}

#[test]
fn parse_order() {
    for &order in &TraversalOrder::ALL {
        assert_eq!(order.to_string().parse(), Ok(order));
    }
    assert_eq!("pre".parse(), Ok(TraversalOrder::Pre));
    assert_eq!("in".parse(), Ok(TraversalOrder::In));
    assert_eq!("post".parse(), Ok(TraversalOrder::Post));
    assert_eq!("level".parse(), Ok(TraversalOrder::Level));
    assert_eq!("In".parse::<TraversalOrder>(), Err(ParseTraversalOrderError));
    assert_eq!("".parse::<TraversalOrder>(), Err(ParseTraversalOrderError));
}
