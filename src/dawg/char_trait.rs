use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can label the edges of a word graph.
///
/// Blanket-implemented for every type meeting the bounds, so `char`, `u8`,
/// `u16` and `u32` all work out of the box.
///
/// - `Copy`: edges store labels by value
/// - `Ord`: words must arrive in lexicographic order, and edges are kept sorted
/// - `Hash`: labels are part of a node's signature in the register
/// - `Debug`: labels show up in [`BuildError`](super::BuildError) messages and logs
pub trait DawgChar: Copy + Eq + Ord + Hash + Debug {}

impl<T: Copy + Eq + Ord + Hash + Debug> DawgChar for T {}
