//! Randomized tests driving the tree with arbitrary operation sequences
//! and checking it against `std::collections::BTreeSet` as the model.

use quickcheck::{Arbitrary, Gen};

#[path = "quicktests/tree.rs"]
mod tree;

/// An enum for the various kinds of "things" to do to a binary search
/// tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree.
    Insert(T),
    /// Delete the value from the tree.
    Delete(T),
    /// Rebuild the tree into balanced shape.
    Rebalance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}
