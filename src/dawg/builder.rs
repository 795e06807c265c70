use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use log::{debug, trace};
use smallvec::SmallVec;
use thiserror::Error;

use super::automaton::{BuildStats, Dawg};
use super::char_trait::DawgChar;
use super::node::{NodeId, Signature};
use super::node_arena::NodeArena;

/// Inline buffer a word is collected into before insertion or lookup.
pub type WordBuf<C> = SmallVec<[C; 32]>;

/// Trait for types that can be used as a word when building or querying a word graph.
///
/// Implemented for common string and sequence types so that [`Builder::insert`],
/// [`build_dawg`] and [`Dawg::accepts`] accept them directly.
pub trait IntoWord<C: DawgChar> {
    /// Collects this word into a label buffer.
    fn collect_word(self) -> WordBuf<C>;
}

macro_rules! impl_into_word_for_str {
    ($($ty:ty),*) => {
        $(
            impl IntoWord<char> for $ty {
                fn collect_word(self) -> WordBuf<char> {
                    self.chars().collect()
                }
            }
        )*
    };
}

impl_into_word_for_str!(&str, &&str, String, &String);

impl<C: DawgChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_slice(self)
    }
}

impl<C: DawgChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_slice(self)
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: DawgChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> WordBuf<C> {
        WordBuf::from_slice(self)
    }
}

/// Errors that can occur while building a word graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError<C: DawgChar> {
    /// A word sorted strictly before the word inserted just ahead of it.
    ///
    /// The builder is left untouched; the offending word can be skipped and
    /// construction continued.
    #[error("word {word:?} is out of order: it sorts before {previous:?}")]
    OutOfOrder {
        /// The previously inserted word.
        previous: Vec<C>,
        /// The rejected word.
        word: Vec<C>,
    },
}

/// Result alias for word graph construction.
pub type Result<T, C = char> = std::result::Result<T, BuildError<C>>;

/// A node created since the last minimization, not yet known to be canonical.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry<C: DawgChar> {
    parent: NodeId,
    label: C,
    child: NodeId,
}

/// Incremental builder of a minimal word graph.
///
/// Words must be inserted in non-decreasing lexicographic order. Each
/// insertion confirms or collapses the nodes of the previous word that lie
/// beyond the shared prefix, so at any time only the path of the most recent
/// word is unminimized. [`finish`](Builder::finish) minimizes that last path
/// and seals the graph into a queryable [`Dawg`].
///
/// ```
/// use wordgraph::dawg::Builder;
///
/// let mut builder = Builder::new();
/// builder.insert("cat").unwrap();
/// builder.insert("cats").unwrap();
/// assert!(builder.insert("car").is_err());
///
/// let dawg = builder.finish();
/// assert!(dawg.accepts("cats"));
/// assert!(!dawg.accepts("car"));
/// ```
pub struct Builder<C: DawgChar = char> {
    arena: NodeArena<C>,
    previous_word: WordBuf<C>,
    frontier: Vec<FrontierEntry<C>>,
    register: HashMap<Signature<C>, NodeId>,
    words_inserted: usize,
    distinct_words: usize,
}

impl<C: DawgChar> Builder<C> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty builder with room for roughly `nodes` nodes before
    /// reallocating.
    pub fn with_capacity(nodes: usize) -> Self {
        Builder {
            arena: NodeArena::with_capacity(nodes),
            previous_word: WordBuf::new(),
            frontier: Vec::new(),
            register: HashMap::with_capacity(nodes / 2),
            words_inserted: 0,
            distinct_words: 0,
        }
    }

    /// Adds a word to the graph being built.
    ///
    /// The word can be any type implementing [`IntoWord`], such as `&str`,
    /// `String`, `&[u8]` or `[u8; 3]`. Inserting the same word twice in a row
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::OutOfOrder`] if the word sorts before the
    /// previously inserted word. The builder is unchanged in that case.
    pub fn insert(&mut self, word: impl IntoWord<C>) -> Result<(), C> {
        let word = word.collect_word();
        self.insert_slice(&word)
    }

    fn insert_slice(&mut self, word: &[C]) -> Result<(), C> {
        if word < self.previous_word.as_slice() {
            debug!(
                "rejecting out-of-order word {word:?} after {:?}",
                self.previous_word
            );
            return Err(BuildError::OutOfOrder {
                previous: self.previous_word.to_vec(),
                word: word.to_vec(),
            });
        }
        let duplicate = self.words_inserted > 0 && word == self.previous_word.as_slice();

        let prefix_len = common_prefix_len(&self.previous_word, word);
        self.minimize(prefix_len);

        let mut node = self.frontier.last().map_or(NodeId::ROOT, |entry| entry.child);
        for &label in &word[prefix_len..] {
            let child = self.arena.alloc();
            self.arena.node_mut(node).add_edge(label, child);
            self.frontier.push(FrontierEntry {
                parent: node,
                label,
                child,
            });
            node = child;
        }
        self.arena.node_mut(node).set_final();

        self.previous_word.clear();
        self.previous_word.extend_from_slice(word);
        self.words_inserted += 1;
        if !duplicate {
            self.distinct_words += 1;
        }
        Ok(())
    }

    /// Confirms or collapses every frontier node deeper than `lower`.
    ///
    /// Entries are popped leaf first, so each child's own children are already
    /// canonical when its signature is taken.
    fn minimize(&mut self, lower: usize) {
        while self.frontier.len() > lower {
            let Some(FrontierEntry {
                parent,
                label,
                child,
            }) = self.frontier.pop()
            else {
                break;
            };

            let signature = self.arena.node(child).signature();
            match self.register.entry(signature) {
                Entry::Occupied(canonical) => {
                    let canonical = *canonical.get();
                    trace!("merging node {child} into {canonical} under {parent} via {label:?}");
                    self.arena.node_mut(parent).redirect(label, canonical);
                    self.arena.node_mut(child).clear_edges();
                }
                Entry::Vacant(slot) => {
                    slot.insert(child);
                }
            }
        }
    }

    /// Number of nodes allocated so far, including nodes already merged away.
    pub fn allocated_nodes(&self) -> usize {
        self.arena.len()
    }

    /// Number of words inserted so far, duplicates included.
    pub fn words_inserted(&self) -> usize {
        self.words_inserted
    }

    /// Minimizes the remaining path and seals the graph.
    ///
    /// Consumes the builder; the returned [`Dawg`] is immutable.
    pub fn finish(mut self) -> Dawg<C> {
        self.minimize(0);

        let nodes_allocated = self.arena.len();
        let nodes = self.arena.into_reachable();
        let stats = BuildStats {
            words_inserted: self.words_inserted,
            nodes_allocated,
            nodes_reachable: nodes.len(),
            registered: self.register.len(),
        };
        debug!(
            "sealed word graph: {} words ({} distinct), {} nodes allocated, {} reachable, {} registered",
            stats.words_inserted,
            self.distinct_words,
            stats.nodes_allocated,
            stats.nodes_reachable,
            stats.registered
        );
        Dawg::from_parts(nodes, self.distinct_words, stats)
    }
}

impl<C: DawgChar> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

fn common_prefix_len<C: DawgChar>(a: &[C], b: &[C]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Builds a minimal word graph from words in sorted order.
///
/// Words **must** be in non-decreasing lexicographic order; consecutive
/// duplicates are ignored.
///
/// # Examples
///
/// ```
/// use wordgraph::dawg::build_dawg;
///
/// let dawg = build_dawg(["APPLE", "BANANA", "CHERRY"]).unwrap();
/// assert!(dawg.accepts("BANANA"));
/// assert!(!dawg.accepts("APRICOT"));
///
/// let bytes: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
/// let dawg = build_dawg(bytes).unwrap();
/// assert!(dawg.accepts([1u8, 2, 4]));
/// assert!(!dawg.accepts([1u8, 2]));
/// ```
///
/// # Errors
///
/// Returns [`BuildError::OutOfOrder`] at the first word that sorts before its
/// predecessor.
pub fn build_dawg<C, W>(words: impl IntoIterator<Item = W>) -> Result<Dawg<C>, C>
where
    C: DawgChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.insert(word)?;
    }
    Ok(builder.finish())
}
