//! # wordgraph
//!
//! Builds a minimal acyclic word graph ([DAWG](https://en.wikipedia.org/wiki/Deterministic_acyclic_finite_state_automaton),
//! also known as an MA-FSA) from a sorted word list and answers exact
//! membership queries against it.
//!
//! Construction follows the incremental algorithm of
//! [Daciuk et al. (2000)](https://arxiv.org/abs/cs/0007009v1): each word is
//! added as a path, and the part of the previous path that can no longer
//! change is collapsed into a register of canonical states. The result shares
//! both prefixes and suffixes.
//!
//! ## Features
//!
//! - **Generic over labels**: `char`, `u8`, `u16`, or any type implementing
//!   [`DawgChar`](dawg::DawgChar)
//! - **Arena-backed**: nodes are addressed by [`NodeId`](dawg::NodeId) handles,
//!   no reference counting and no unsafe code
//! - **Checked input**: out-of-order words are rejected with
//!   [`BuildError::OutOfOrder`](dawg::BuildError::OutOfOrder)
//! - **Thread-safe**: a sealed [`Dawg`](dawg::Dawg) is plain data and can be
//!   queried concurrently
//!
//! ## Quick Start
//!
//! ```
//! use wordgraph::dawg::build_dawg;
//!
//! let dawg = build_dawg(["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]).unwrap();
//! assert!(dawg.accepts("CAKE"));
//! assert!(!dawg.accepts("AKE"));
//!
//! // All five words share the "AKE" suffix.
//! assert_eq!(dawg.node_count(), 5);
//! ```
//!
//! Step by step, with the builder:
//!
//! ```
//! use wordgraph::dawg::Builder;
//!
//! let mut builder = Builder::new();
//! for word in ["cat", "catnap", "cats"] {
//!     builder.insert(word)?;
//! }
//! let dawg = builder.finish();
//! assert!(dawg.accepts("catnap"));
//! assert!(!dawg.accepts("ca"));
//! # Ok::<(), wordgraph::dawg::BuildError<char>>(())
//! ```
//!
//! ## Walking the graph
//!
//! Approximate matchers and other automaton-walking algorithms traverse the
//! graph through [`NodeRef`](dawg::NodeRef):
//!
//! ```
//! use wordgraph::dawg::build_dawg;
//!
//! let dawg = build_dawg([vec![1u8, 2, 3], vec![1, 2, 4], vec![2, 3, 4]]).unwrap();
//! let node = dawg.root().get(1).and_then(|n| n.get(2)).unwrap();
//! let labels: Vec<u8> = node.edges().map(|(label, _)| label).collect();
//! assert_eq!(labels, [3, 4]);
//! ```

#![warn(missing_docs)]

/// Core word graph data structures: nodes, builder and the sealed automaton.
pub mod dawg;

pub use dawg::{build_dawg, BuildError, Builder, Dawg, DawgChar, IntoWord, NodeId, NodeRef};
