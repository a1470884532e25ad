//! Pronunciation lattice construction.
//!
//! The lattice is a weighted multigraph over positions of the padded input
//! word. Sliding every lexicon entry across the input at every alignment,
//! each maximal shared run contributes one arc per start/end pair within the
//! run, weighted by how many entries support that exact transition.

use std::collections::{BTreeMap, HashMap};

/// Input padding byte between letters, matching an entry's `*` or `-`.
pub const WILDCARD: u8 = b'*';
/// Syllable break byte in annotated entries.
pub const BREAK: u8 = b'-';
/// Word boundary byte at both ends of inputs and entries.
pub const BOUNDARY: u8 = b'#';

/// A lattice node: the matched symbol recorded from a lexicon entry and its
/// position in the padded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    /// Symbol contributed by the lexicon entry (letter, `-`, `*`, or `#`).
    pub symbol: u8,
    /// Index into the padded input.
    pub pos: usize,
}

/// Identity of an outgoing arc: destination plus the letters strictly
/// between source and destination in the matched run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ArcKey {
    /// Destination node.
    pub to: Node,
    /// Symbols between source and destination, exclusive on both ends.
    pub label: Vec<u8>,
}

/// An arc recorded during the shortest-path pass, pointing back toward the
/// start boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InArc {
    /// Source node of the original outgoing arc.
    pub from: Node,
    /// Label of the original outgoing arc.
    pub label: Vec<u8>,
    /// Support count of the original outgoing arc.
    pub weight: usize,
}

/// Per-node adjacency and search state.
#[derive(Debug, Clone, Default)]
pub struct NodeData {
    /// Outgoing arcs with their support counts, ordered for deterministic
    /// traversal.
    pub outgoing: BTreeMap<ArcKey, usize>,
    /// Minimum-distance arcs into this node, filled by the search pass.
    pub incoming: Vec<InArc>,
    /// Hop count from the start boundary, `None` until reached.
    pub distance: Option<usize>,
}

/// Weighted multigraph over the padded input word.
#[derive(Debug)]
pub struct Lattice {
    nodes: HashMap<Node, NodeData>,
    start: Node,
    end: Node,
}

impl Lattice {
    /// Build the lattice for `word` against the annotated lexicon entries.
    ///
    /// The word is padded with a wildcard between every pair of letters and
    /// a boundary at each end, so an `L`-letter word spans `2L + 1`
    /// positions. Entries slide across the padding at every offset with at
    /// least three overlapping positions.
    pub fn build(word: &str, entries: &[String]) -> Self {
        let padded = pad(word);
        let start = Node { symbol: BOUNDARY, pos: 0 };
        let end = Node {
            symbol: BOUNDARY,
            pos: padded.len() - 1,
        };

        let mut nodes = HashMap::new();
        nodes.insert(start, NodeData::default());
        nodes.insert(end, NodeData::default());

        let mut run: Vec<(u8, usize)> = Vec::new();
        for entry in entries {
            let entry = entry.as_bytes();
            let input_len = padded.len() as isize;
            let entry_len = entry.len() as isize;

            for offset in (3 - input_len)..(entry_len - 2) {
                let lo = (-offset).max(0) as usize;
                let hi = input_len.min(entry_len - offset) as usize;
                for i in lo..hi {
                    let entry_byte = entry[(i as isize + offset) as usize];
                    if padded[i] == entry_byte
                        || (padded[i] == WILDCARD && entry_byte == BREAK)
                    {
                        run.push((entry_byte, i));
                    } else {
                        flush_run(&mut run, &mut nodes);
                    }
                }
                flush_run(&mut run, &mut nodes);
            }
        }

        Self { nodes, start, end }
    }

    /// Start boundary node.
    pub const fn start(&self) -> Node {
        self.start
    }

    /// End boundary node.
    pub const fn end(&self) -> Node {
        self.end
    }

    /// State for a node, if the node exists in this lattice.
    pub fn data(&self, node: Node) -> Option<&NodeData> {
        self.nodes.get(&node)
    }

    /// Mutable state for a node, if it exists.
    pub(crate) fn data_mut(&mut self, node: Node) -> Option<&mut NodeData> {
        self.nodes.get_mut(&node)
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[cfg(test)]
    pub(crate) fn insert_arc(&mut self, from: Node, to: Node, label: &[u8], weight: usize) {
        self.nodes.entry(to).or_default();
        let data = self.nodes.entry(from).or_default();
        *data
            .outgoing
            .entry(ArcKey {
                to,
                label: label.to_vec(),
            })
            .or_insert(0) += weight;
    }
}

/// Pad a word as `#w1*w2*...*wn#`.
fn pad(word: &str) -> Vec<u8> {
    let bytes = word.as_bytes();
    let mut padded = Vec::with_capacity(bytes.len() * 2 + 1);
    padded.push(BOUNDARY);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 {
            padded.push(WILDCARD);
        }
        padded.push(b);
    }
    padded.push(BOUNDARY);
    padded
}

/// Flush a matched run: every earlier position gains one arc to every later
/// position, labeled with the symbols strictly between them.
fn flush_run(run: &mut Vec<(u8, usize)>, nodes: &mut HashMap<Node, NodeData>) {
    for (i, &(symbol, pos)) in run.iter().enumerate() {
        let node = Node { symbol, pos };
        let data = nodes.entry(node).or_default();
        let mut label: Vec<u8> = Vec::new();
        for &(next_symbol, next_pos) in &run[i + 1..] {
            let key = ArcKey {
                to: Node {
                    symbol: next_symbol,
                    pos: next_pos,
                },
                label: label.clone(),
            };
            *data.outgoing.entry(key).or_insert(0) += 1;
            label.push(next_symbol);
        }
    }
    run.clear();
}
