//! Path enumeration and multi-strategy election.
//!
//! Walks every minimum-length path backward from the end boundary, scores
//! each by three statistics over its arc weights, and elects a winner by
//! competition-rank voting. Duplicate renderings pool their points, so a
//! segmentation supported by many distinct routes beats a singleton.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::lattice::{BREAK, Lattice, Node};

/// A complete minimum-length path with its precomputed statistics.
struct Candidate {
    /// The segmentation this path spells, from the first letter through the
    /// closing boundary.
    rendering: Vec<u8>,
    /// Product of arc weights.
    product: u128,
    /// Population variance of arc weights.
    dispersion: f64,
    /// Minimum arc weight.
    weak_link: usize,
}

impl Candidate {
    fn from_path(rendering: Vec<u8>, weights: &[usize]) -> Option<Self> {
        if weights.is_empty() {
            return None;
        }
        let len = weights.len() as f64;
        let mean = weights.iter().sum::<usize>() as f64 / len;
        let mut product: u128 = 1;
        let mut spread = 0.0;
        let mut weak_link = usize::MAX;
        for &weight in weights {
            product = product.saturating_mul(weight as u128);
            spread += (weight as f64 - mean).powi(2);
            weak_link = weak_link.min(weight);
        }
        Some(Self {
            rendering,
            product,
            dispersion: spread / len,
            weak_link,
        })
    }
}

/// Enumerate minimum-length paths and elect the winning segmentation.
///
/// Returns the winner's syllable count (break count plus one), or `None`
/// when no complete path connects the boundaries.
pub fn elect(lattice: &Lattice) -> Option<usize> {
    let candidates = enumerate(lattice);
    if candidates.is_empty() {
        tracing::debug!("no complete shortest path");
        return None;
    }
    elect_among(&candidates)
}

/// Walk incoming arcs backward from the end boundary, depth first.
///
/// Each branch copies its accumulated rendering and weight list, so sibling
/// branches never observe each other's state. A node with no incoming arcs
/// short of the start boundary is a dead end and contributes nothing.
fn enumerate(lattice: &Lattice) -> Vec<Candidate> {
    let start = lattice.start();
    let mut candidates = Vec::new();
    let mut stack: Vec<(Node, Vec<u8>, Vec<usize>)> =
        vec![(lattice.end(), Vec::new(), Vec::new())];

    while let Some((node, path, weights)) = stack.pop() {
        if node == start {
            if let Some(candidate) = Candidate::from_path(path, &weights) {
                candidates.push(candidate);
            }
            continue;
        }
        let Some(data) = lattice.data(node) else {
            continue;
        };
        if data.incoming.is_empty() {
            continue;
        }

        let mut extended = Vec::with_capacity(path.len() + 1);
        extended.push(node.symbol);
        extended.extend_from_slice(&path);

        // Reversed pushes keep sibling order: the first recorded arc is
        // explored first.
        for arc in data.incoming.iter().rev() {
            let mut branched = Vec::with_capacity(arc.label.len() + extended.len());
            branched.extend_from_slice(&arc.label);
            branched.extend_from_slice(&extended);
            let mut branch_weights = weights.clone();
            branch_weights.push(arc.weight);
            stack.push((arc.from, branched, branch_weights));
        }
    }

    candidates
}

/// Pool per-strategy points by rendering and pick the first maximum.
fn elect_among(candidates: &[Candidate]) -> Option<usize> {
    let mut slot_of: HashMap<&[u8], usize> = HashMap::new();
    let mut renderings: Vec<&[u8]> = Vec::new();
    for candidate in candidates {
        if !slot_of.contains_key(candidate.rendering.as_slice()) {
            slot_of.insert(&candidate.rendering, renderings.len());
            renderings.push(&candidate.rendering);
        }
    }

    let mut totals = vec![0.0_f64; renderings.len()];
    award_strategy(candidates, |c| c.product, &slot_of, &mut totals);
    award_strategy(candidates, |c| c.dispersion, &slot_of, &mut totals);
    award_strategy(candidates, |c| c.weak_link, &slot_of, &mut totals);

    let mut best = 0;
    for (i, &total) in totals.iter().enumerate().skip(1) {
        if total > totals[best] {
            best = i;
        }
    }

    let winner = renderings[best];
    let syllables = winner.iter().filter(|&&b| b == BREAK).count() + 1;
    tracing::debug!(
        rendering = %String::from_utf8_lossy(winner),
        syllables,
        "elected segmentation"
    );
    Some(syllables)
}

/// Sort candidates by one statistic, descending, and add competition-rank
/// points to each rendering's total.
///
/// Ranks start at the candidate count and drop by one per distinct value
/// group; every member of a tie group receives `rank - (size - 1) / 2`.
fn award_strategy<K, F>(
    candidates: &[Candidate],
    key: F,
    slot_of: &HashMap<&[u8], usize>,
    totals: &mut [f64],
) where
    K: PartialOrd + Copy,
    F: Fn(&Candidate) -> K,
{
    let mut ranking: Vec<&Candidate> = candidates.iter().collect();
    ranking.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    let Some(first) = ranking.first() else {
        return;
    };

    let mut rank = ranking.len() as f64;
    let mut group_size = 0usize;
    let mut group_value = key(first);

    for i in 0..ranking.len() {
        let value = key(ranking[i]);
        if value < group_value {
            let points = rank - (group_size as f64 - 1.0) / 2.0;
            for member in &ranking[i - group_size..i] {
                if let Some(&slot) = slot_of.get(member.rendering.as_slice()) {
                    totals[slot] += points;
                }
            }
            rank -= 1.0;
            group_size = 1;
            group_value = value;
        } else {
            group_size += 1;
        }
    }

    let points = rank - (group_size as f64 - 1.0) / 2.0;
    for member in &ranking[ranking.len() - group_size..] {
        if let Some(&slot) = slot_of.get(member.rendering.as_slice()) {
            totals[slot] += points;
        }
    }
}
