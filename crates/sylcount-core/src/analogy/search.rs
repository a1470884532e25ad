//! Breadth-first shortest-distance pass over the lattice.
//!
//! Every arc costs one hop regardless of its support weight; weights matter
//! only to the scoring stage. The pass records, on each node, its hop count
//! from the start boundary and the list of arcs that realize it.

use std::collections::VecDeque;

use super::lattice::{InArc, Lattice, Node};

/// Compute hop distances from the start boundary and populate each node's
/// incoming-arc list.
///
/// A strictly shorter route updates the distance and records the arc; a
/// route tying the current distance records the arc as an alternative. With
/// `strict_incoming` set, a node's recorded arcs are dropped whenever its
/// distance improves, so the list only ever holds arcs of the final
/// distance.
pub fn shortest_paths(lattice: &mut Lattice, strict_incoming: bool) {
    let start = lattice.start();
    let mut queue: VecDeque<Node> = VecDeque::new();

    if let Some(data) = lattice.data_mut(start) {
        data.distance = Some(0);
    }
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        let Some(data) = lattice.data(node) else {
            continue;
        };
        let Some(base) = data.distance else {
            continue;
        };
        let next = base + 1;
        let arcs: Vec<(Node, Vec<u8>, usize)> = data
            .outgoing
            .iter()
            .map(|(key, &weight)| (key.to, key.label.clone(), weight))
            .collect();

        for (to, label, weight) in arcs {
            let Some(adjacent) = lattice.data_mut(to) else {
                continue;
            };
            let in_arc = InArc {
                from: node,
                label,
                weight,
            };
            match adjacent.distance {
                Some(current) if next > current => {}
                Some(current) if next == current => {
                    adjacent.incoming.push(in_arc);
                }
                _ => {
                    if strict_incoming {
                        adjacent.incoming.clear();
                    }
                    adjacent.distance = Some(next);
                    adjacent.incoming.push(in_arc);
                    queue.push_back(to);
                }
            }
        }
    }
}
