//! Char-keyed prefix trie for longest-key-first dispatch.
//!
//! Shared by the phoneme tables (short ASCII keys) and the highlighter
//! (lexicon phrases). Lookups walk the input once and report every stored
//! key that prefixes it.

use std::collections::HashMap;

struct Node<V> {
    children: HashMap<char, Node<V>>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

pub(crate) struct KeyTrie<V> {
    root: Node<V>,
    len: usize,
}

impl<V> KeyTrie<V> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            len: 0,
        }
    }

    /// Insert a key. The first value stored under a key wins; returns `false`
    /// for an empty or already-present key.
    pub fn insert<I: IntoIterator<Item = char>>(&mut self, key: I, value: V) -> bool {
        let mut node = &mut self.root;
        let mut depth = 0;
        for c in key {
            node = node.children.entry(c).or_insert_with(Node::new);
            depth += 1;
        }
        if depth == 0 || node.value.is_some() {
            return false;
        }
        node.value = Some(value);
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All stored keys that prefix `input`, longest first, as
    /// `(key length in chars, value)`.
    pub fn prefixes<I: IntoIterator<Item = char>>(&self, input: I) -> Vec<(usize, &V)> {
        let mut found = Vec::new();
        let mut node = &self.root;
        for (i, c) in input.into_iter().enumerate() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(v) = &node.value {
                found.push((i + 1, v));
            }
        }
        found.reverse();
        found
    }

    /// The longest stored key that prefixes `input`.
    pub fn longest<I: IntoIterator<Item = char>>(&self, input: I) -> Option<(usize, &V)> {
        let mut best = None;
        let mut node = &self.root;
        for (i, c) in input.into_iter().enumerate() {
            match node.children.get(&c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(v) = &node.value {
                best = Some((i + 1, v));
            }
        }
        best
    }
}
