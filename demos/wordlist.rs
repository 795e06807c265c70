//! Example: a small wordlist wrapper on top of the word graph.
//!
//! Shows word lookup, prefix checking and enumeration through the read-only
//! node interface. Set `RUST_LOG=debug` to see construction statistics.
//!
//! Run with: cargo run --example wordlist

use std::io::Write;

use env_logger::Env;
use wordgraph::dawg::{build_dawg, BuildError, Dawg};

/// A convenient wrapper around a sealed word graph for word validation.
struct Wordlist {
    dawg: Dawg<char>,
}

impl Wordlist {
    fn new(words: &[&str]) -> Result<Self, BuildError<char>> {
        Ok(Wordlist {
            dawg: build_dawg(words)?,
        })
    }

    fn is_word(&self, word: &str) -> bool {
        self.dawg.accepts(word)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        self.dawg.has_prefix(prefix)
    }

    /// Returns every word that starts with `prefix`.
    fn completions(&self, prefix: &str) -> Vec<String> {
        let mut found = Vec::new();
        if let Some(start) = self.dawg.walk(prefix.chars()) {
            let mut stack = prefix.to_string();
            Self::collect_words(start, &mut stack, &mut found);
        }
        found
    }

    fn collect_words(
        node: wordgraph::dawg::NodeRef<'_, char>,
        prefix: &mut String,
        words: &mut Vec<String>,
    ) {
        if node.is_final() {
            words.push(prefix.clone());
        }
        for (ch, child) in node.edges() {
            prefix.push(ch);
            Self::collect_words(child, prefix, words);
            prefix.pop();
        }
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let wordlist = match Wordlist::new(&words) {
        Ok(wordlist) => wordlist,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if wordlist.is_word(word) { "yes" } else { "no" });
    }

    println!("\nPrefix checking:");
    for prefix in ["BA", "CAK", "MA", "FAK"] {
        println!("  {prefix}*: {}", if wordlist.has_prefix(prefix) { "yes" } else { "no" });
    }

    println!("\nCompletions of BAK: {:?}", wordlist.completions("BAK"));
    println!("\nAll words: {:?}", wordlist.dawg.strings().collect::<Vec<_>>());
    println!(
        "\n{} words in {} nodes ({} allocated during construction)",
        wordlist.dawg.len(),
        wordlist.dawg.node_count(),
        wordlist.dawg.stats().nodes_allocated
    );

    // Out-of-order input is rejected.
    if let Err(e) = build_dawg(["ZEBRA", "APPLE"]) {
        println!("\nRejected: {e}");
    }
}
