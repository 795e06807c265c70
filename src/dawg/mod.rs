/// The sealed word graph and its read-only node views.
pub mod automaton;
/// Incremental builder for minimal word graphs from sorted word lists.
pub mod builder;
/// Trait for types that can serve as edge labels.
pub mod char_trait;
/// Node representation and structural signatures.
pub mod node;
/// Arena the builder allocates nodes from.
pub(crate) mod node_arena;

pub use automaton::{BuildStats, Dawg, Edges, NodeRef, Words};
pub use builder::{build_dawg, BuildError, Builder, IntoWord, Result, WordBuf};
pub use char_trait::DawgChar;
pub use node::{NodeId, Signature};
