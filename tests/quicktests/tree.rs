use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use bstree::tree::{Traversal, Tree};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`. This way we
/// can ensure that after a random smattering of inserts, deletes, and
/// rebalances both hold the same set of values.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut BTreeSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(v) => {
                assert_eq!(tree.insert(*v), set.insert(*v));
            }
            Op::Delete(v) => {
                assert_eq!(tree.delete(v), set.take(v));
            }
            Op::Rebalance => {
                tree.rebalance();
                assert!(tree.is_balanced());
            }
        }
    }
}

#[quickcheck]
fn fuzz_membership_matches_model(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);

    let in_order: Vec<i8> = tree.iter().copied().collect();
    let model: Vec<i8> = set.iter().copied().collect();

    in_order == model && set.iter().all(|v| tree.contains(v))
}

#[quickcheck]
fn build_is_balanced_and_holds_distinct_input(xs: Vec<i16>) -> bool {
    let tree = Tree::build(xs.clone());
    let distinct: BTreeSet<i16> = xs.into_iter().collect();

    let in_order: Vec<i16> = tree.iter().copied().collect();
    let expected: Vec<i16> = distinct.into_iter().collect();

    tree.is_balanced() && in_order == expected
}

#[quickcheck]
fn in_order_is_strictly_ascending(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let in_order: Vec<i8> = tree.iter().copied().collect();
    in_order.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut once = Tree::build(xs);
    once.insert(x);

    let mut twice = once.clone();
    twice.insert(x);

    once == twice
}

#[quickcheck]
fn delete_removes_exactly_one_value(xs: Vec<i8>, x: i8) -> bool {
    let mut tree = Tree::build(xs.clone());
    let mut set: BTreeSet<i8> = xs.into_iter().collect();

    let deleted = tree.delete(&x);
    let expected = set.take(&x);

    let in_order: Vec<i8> = tree.iter().copied().collect();
    let model: Vec<i8> = set.iter().copied().collect();

    deleted == expected && !tree.contains(&x) && in_order == model
}

#[quickcheck]
fn rebalance_preserves_values_and_restores_balance(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();
    do_ops(&ops, &mut tree, &mut set);

    let before: Vec<i8> = tree.iter().copied().collect();
    tree.rebalance();
    let after: Vec<i8> = tree.iter().copied().collect();

    tree.is_balanced() && before == after
}

#[quickcheck]
fn rebalance_twice_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = Tree::build(xs);
    tree.rebalance();
    let once = tree.clone();
    tree.rebalance();

    tree == once
}

#[quickcheck]
fn traversals_visit_every_node_exactly_once(xs: Vec<i8>) -> bool {
    let tree = Tree::build(xs);
    let expected: BTreeSet<i8> = tree.iter().copied().collect();

    [
        Traversal::LevelOrder,
        Traversal::PreOrder,
        Traversal::InOrder,
        Traversal::PostOrder,
    ]
    .iter()
    .all(|&order| {
        let seen = tree.values(order);
        let distinct: BTreeSet<i8> = seen.iter().map(|&&v| v).collect();
        seen.len() == expected.len() && distinct == expected
    })
}
