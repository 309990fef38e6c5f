//! Agglomerative hierarchical clustering and dendrogram geometry.
//!
//! Clustering uses average linkage over Euclidean distance, updated with the
//! Lance-Williams recurrence. Average linkage is monotonic, so merges come
//! out in non-decreasing distance order and the dendrogram has no inversions.
use std::collections::HashMap;

use ndarray::{Array2, ArrayView1};

use crate::error::DataError;

/// One agglomerative merge step.
///
/// `left` and `right` are cluster ids: ids below the leaf count are original
/// items, id `n + k` is the cluster created by merge step `k`.
#[derive(Debug, Clone, Copy)]
pub struct Merge {
    pub left: usize,
    pub right: usize,
    pub distance: f64,
    pub size: usize,
}

fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

fn ordered(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Cluster the rows of `items` with average linkage, returning the `n - 1`
/// merges in the order they happened.
pub fn average_linkage(items: &Array2<f64>) -> Result<Vec<Merge>, DataError> {
    let n = items.nrows();
    if n < 2 {
        return Err(DataError::TooFewItems(n));
    }

    let mut dist: HashMap<(usize, usize), f64> = HashMap::new();
    for i in 0..n {
        for j in (i + 1)..n {
            dist.insert((i, j), euclidean(items.row(i), items.row(j)));
        }
    }

    let mut active: Vec<usize> = (0..n).collect();
    let mut sizes: HashMap<usize, usize> = (0..n).map(|i| (i, 1)).collect();
    let mut merges = Vec::with_capacity(n - 1);

    for step in 0..(n - 1) {
        let mut best: Option<((usize, usize), f64)> = None;
        for (idx, &a) in active.iter().enumerate() {
            for &b in &active[(idx + 1)..] {
                let key = ordered(a, b);
                let d = dist[&key];
                if best.map_or(true, |(_, best_d)| d < best_d) {
                    best = Some((key, d));
                }
            }
        }
        let ((a, b), distance) = best.expect("at least two active clusters");

        let new_id = n + step;
        let size_a = sizes[&a];
        let size_b = sizes[&b];
        let merged_size = size_a + size_b;

        // Lance-Williams update for average linkage
        for &c in &active {
            if c == a || c == b {
                continue;
            }
            let d_ac = dist[&ordered(a, c)];
            let d_bc = dist[&ordered(b, c)];
            let d_new = (size_a as f64 * d_ac + size_b as f64 * d_bc) / merged_size as f64;
            dist.insert(ordered(new_id, c), d_new);
        }

        active.retain(|&id| id != a && id != b);
        active.push(new_id);
        sizes.insert(new_id, merged_size);
        merges.push(Merge {
            left: a,
            right: b,
            distance,
            size: merged_size,
        });
    }

    Ok(merges)
}

/// One U-shaped dendrogram link.
///
/// `distances` and `positions` are the four corner coordinates of the link
/// along the merge-distance axis and the leaf axis respectively. `cluster`
/// is the palette group of the link, or `None` when the link sits above the
/// color threshold.
#[derive(Debug, Clone)]
pub struct DendrogramLink {
    pub distances: [f64; 4],
    pub positions: [f64; 4],
    pub cluster: Option<usize>,
}

/// Dendrogram geometry for a linkage, ready for plotting.
#[derive(Debug, Clone)]
pub struct Dendrogram {
    /// Original item indices in display order along the leaf axis.
    pub leaf_order: Vec<usize>,
    /// Axis position of each entry of `leaf_order` (leaf `k` sits at `10k + 5`).
    pub leaf_positions: Vec<f64>,
    pub links: Vec<DendrogramLink>,
}

/// Lay out the dendrogram of `merges` over `n_leaves` items.
///
/// Links whose merge distance is at most `color_threshold` are grouped into
/// the maximal sub-tree below the threshold they belong to; groups are
/// numbered in leaf-axis order. Links above the threshold get no group.
pub fn dendrogram(merges: &[Merge], n_leaves: usize, color_threshold: f64) -> Dendrogram {
    let root = n_leaves + merges.len() - 1;
    let children: HashMap<usize, (usize, usize)> = merges
        .iter()
        .enumerate()
        .map(|(k, m)| (n_leaves + k, (m.left, m.right)))
        .collect();

    // Leaf display order: depth-first, left subtree before right.
    let mut leaf_order = Vec::with_capacity(n_leaves);
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match children.get(&node) {
            Some(&(left, right)) => {
                stack.push(right);
                stack.push(left);
            }
            None => leaf_order.push(node),
        }
    }

    let mut position: HashMap<usize, f64> = leaf_order
        .iter()
        .enumerate()
        .map(|(rank, &leaf)| (leaf, 10.0 * rank as f64 + 5.0))
        .collect();
    let mut height: HashMap<usize, f64> = (0..n_leaves).map(|leaf| (leaf, 0.0)).collect();

    for (k, merge) in merges.iter().enumerate() {
        let node = n_leaves + k;
        let mid = (position[&merge.left] + position[&merge.right]) / 2.0;
        position.insert(node, mid);
        height.insert(node, merge.distance);
    }

    // Group links below the threshold by their maximal below-threshold
    // ancestor; groups are colored in leaf-axis order like the source library.
    let parent: HashMap<usize, usize> = merges
        .iter()
        .enumerate()
        .flat_map(|(k, m)| [(m.left, n_leaves + k), (m.right, n_leaves + k)])
        .collect();

    let color_root = |node: usize| -> usize {
        let mut current = node;
        while let Some(&up) = parent.get(&current) {
            if merges[up - n_leaves].distance > color_threshold {
                break;
            }
            current = up;
        }
        current
    };

    let mut roots: Vec<usize> = Vec::new();
    let mut groups: HashMap<usize, usize> = HashMap::new();
    for (k, merge) in merges.iter().enumerate() {
        if merge.distance > color_threshold {
            continue;
        }
        let root = color_root(n_leaves + k);
        if !groups.contains_key(&root) {
            roots.push(root);
        }
        groups.insert(root, 0);
    }
    roots.sort_by(|a, b| {
        position[a]
            .partial_cmp(&position[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (index, root) in roots.iter().enumerate() {
        groups.insert(*root, index);
    }

    let links = merges
        .iter()
        .enumerate()
        .map(|(k, merge)| {
            let cluster = if merge.distance > color_threshold {
                None
            } else {
                groups.get(&color_root(n_leaves + k)).copied()
            };
            DendrogramLink {
                distances: [
                    height[&merge.left],
                    merge.distance,
                    merge.distance,
                    height[&merge.right],
                ],
                positions: [
                    position[&merge.left],
                    position[&merge.left],
                    position[&merge.right],
                    position[&merge.right],
                ],
                cluster,
            }
        })
        .collect();

    let leaf_positions = (0..n_leaves).map(|k| 10.0 * k as f64 + 5.0).collect();

    Dendrogram {
        leaf_order,
        leaf_positions,
        links,
    }
}
