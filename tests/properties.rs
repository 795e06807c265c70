//! Property-based tests for word graph construction and queries.

use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;
use wordgraph::dawg::{build_dawg, BuildError, Builder, Dawg};

/// Generate ASCII words from a small alphabet so suffixes collide often.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-d]{0,8}"
}

/// Generate sorted, deduplicated dictionaries.
fn dict_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(word_strategy(), 0..40).prop_map(|set| set.into_iter().collect())
}

/// Generate Unicode dictionaries.
fn unicode_dict_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set("[aαβγ漢字]{1,6}", 1..20).prop_map(|set| set.into_iter().collect())
}

fn build(words: &[String]) -> Dawg {
    build_dawg(words).expect("sorted input")
}

proptest! {
    #[test]
    fn accepts_every_member(words in dict_strategy()) {
        let dawg = build(&words);
        for word in &words {
            prop_assert!(dawg.accepts(word), "missing {:?}", word);
        }
        prop_assert_eq!(dawg.len(), words.len());
    }

    #[test]
    fn rejects_non_members(words in dict_strategy(), probes in prop::collection::vec(word_strategy(), 0..40)) {
        let dawg = build(&words);
        let members: BTreeSet<&String> = words.iter().collect();
        for probe in &probes {
            prop_assert_eq!(dawg.accepts(probe), members.contains(probe), "probe {:?}", probe);
        }
    }

    #[test]
    fn rejects_proper_prefixes_of_members(words in dict_strategy()) {
        let dawg = build(&words);
        let members: BTreeSet<&str> = words.iter().map(String::as_str).collect();
        for word in &words {
            for (end, _) in word.char_indices() {
                let prefix = &word[..end];
                prop_assert_eq!(dawg.accepts(prefix), members.contains(prefix));
                prop_assert!(dawg.has_prefix(prefix));
            }
        }
    }

    #[test]
    fn enumerates_exactly_the_dictionary(words in unicode_dict_strategy()) {
        let dawg = build(&words);
        let listed: Vec<String> = dawg.strings().collect();
        prop_assert_eq!(listed, words);
    }

    #[test]
    fn duplicates_do_not_change_the_graph(words in dict_strategy(), repeats in prop::collection::vec(1usize..4, 40)) {
        let mut with_dups = Vec::new();
        for (word, &n) in words.iter().zip(repeats.iter().cycle()) {
            with_dups.extend(std::iter::repeat(word.clone()).take(n));
        }
        let plain = build(&words);
        let duplicated = build(&with_dups);
        prop_assert_eq!(plain.node_count(), duplicated.node_count());
        prop_assert_eq!(plain.edge_count(), duplicated.edge_count());
        prop_assert!(plain.words().eq(duplicated.words()));
    }

    #[test]
    fn graph_is_minimal(words in dict_strategy()) {
        let dawg = build(&words);
        let naive: usize = words.iter().map(|w| w.chars().count()).sum::<usize>() + 1;
        prop_assert!(dawg.node_count() <= naive);

        let root = dawg.root();
        let mut visited = HashSet::new();
        let mut signatures = HashSet::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            if !visited.insert(node.id()) {
                continue;
            }
            if node != root {
                prop_assert!(signatures.insert(node.signature()), "duplicate state {:?}", node);
            }
            stack.extend(node.edges().map(|(_, child)| child));
        }
        prop_assert_eq!(visited.len(), dawg.node_count());
    }

    #[test]
    fn out_of_order_pairs_are_rejected(a in word_strategy(), b in word_strategy()) {
        prop_assume!(a != b);
        let (hi, lo) = if a > b { (a, b) } else { (b, a) };
        let mut builder = Builder::new();
        builder.insert(hi.as_str()).unwrap();
        let err = builder.insert(lo.as_str()).unwrap_err();
        prop_assert_eq!(err, BuildError::OutOfOrder {
            previous: hi.chars().collect(),
            word: lo.chars().collect(),
        });
    }
}
