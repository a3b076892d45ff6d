//! Permutation-preserving genetic operators.
//!
//! These operate on `&[usize]` job sequences and always return a
//! permutation of the same jobs. A violation is a bug in the operator and
//! is caught by `debug_assert!`, never repaired.
//!
//! # Crossover
//!
//! - [`pmx_crossover`] (PMX): Goldberg & Lingle (1985) — preserves absolute position
//!
//! # Mutation
//!
//! - [`shuffle_indexes_mutation`]: per-position swap with another random position
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman Problem"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::Rng;

use crate::problem::is_permutation;

// ============================================================================
// Crossover
// ============================================================================

/// Partially Mapped Crossover (PMX) for permutations.
///
/// Two cut points are drawn uniformly from `0..=n` and sorted, giving the
/// segment `[lo, hi)`; see [`pmx_with_cuts`] for how the offspring are
/// built. An empty segment (`lo == hi`) swaps the parents.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if the parents have different lengths or either is not a
/// permutation of `0..n`.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let a = rng.random_range(0..=n);
    let b = rng.random_range(0..=n);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

    pmx_with_cuts(parent1, parent2, lo, hi)
}

/// PMX with fixed cut points `lo <= hi <= n`.
///
/// Offspring 1 keeps `parent1[lo..hi]` in place. Every other position `p`
/// takes `v = parent2[p]`; while `v` already sits in the kept segment at
/// position `i`, `v` is replaced by `parent2[i]`. Offspring 2 is built the
/// same way with the parents' roles exchanged.
///
/// # Panics
/// Panics if the parents have different lengths, either parent is not a
/// permutation of `0..n`, or the cuts are out of order.
///
/// # Examples
///
/// ```
/// use u_flowshop::ga::operators::pmx_with_cuts;
///
/// let p1 = [8, 4, 7, 3, 6, 2, 5, 1, 9, 0];
/// let p2 = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let (c1, c2) = pmx_with_cuts(&p1, &p2, 3, 8);
/// assert_eq!(c1, vec![0, 7, 4, 3, 6, 2, 5, 1, 8, 9]);
/// assert_eq!(c2, vec![8, 2, 1, 3, 4, 5, 6, 7, 9, 0]);
/// ```
pub fn pmx_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    lo: usize,
    hi: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(
        is_permutation(parent1, n) && is_permutation(parent2, n),
        "parents must be permutations of 0..{n}"
    );
    assert!(lo <= hi && hi <= n, "invalid cut points {lo}..{hi} for length {n}");

    let child1 = pmx_build_child(parent1, parent2, lo, hi);
    let child2 = pmx_build_child(parent2, parent1, lo, hi);

    debug_assert!(is_permutation(&child1, n), "PMX produced {child1:?}");
    debug_assert!(is_permutation(&child2, n), "PMX produced {child2:?}");

    (child1, child2)
}

/// Build one PMX child: keep `template[lo..hi]`, map the rest from `donor`.
fn pmx_build_child(template: &[usize], donor: &[usize], lo: usize, hi: usize) -> Vec<usize> {
    let n = template.len();

    // segment_pos[v] = position of value v inside the kept segment
    let mut segment_pos = vec![None; n];
    for (i, &v) in template.iter().enumerate().take(hi).skip(lo) {
        segment_pos[v] = Some(i);
    }

    (0..n)
        .map(|p| {
            if (lo..hi).contains(&p) {
                return template[p];
            }
            // The chain cannot cycle: donor[p] lies outside the donor's
            // segment, so it is never the image of another step.
            let mut v = donor[p];
            while let Some(i) = segment_pos[v] {
                v = donor[i];
            }
            v
        })
        .collect()
}

// ============================================================================
// Mutation
// ============================================================================

/// Shuffle-indexes mutation.
///
/// One left-to-right pass: each position `i` is, with probability `indpb`,
/// swapped with a uniformly chosen position `j != i`. A position already
/// moved may be moved again later in the pass.
///
/// Returns `true` if at least one swap happened.
///
/// # Complexity
/// O(n)
pub fn shuffle_indexes_mutation<R: Rng>(perm: &mut [usize], indpb: f64, rng: &mut R) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    let mut swapped = false;
    for i in 0..n {
        if rng.random_range(0.0..1.0) < indpb {
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            perm.swap(i, j);
            swapped = true;
        }
    }

    debug_assert!(is_permutation(perm, n), "mutation produced {perm:?}");
    swapped
}

// ============================================================================
// Tests
// ============================================================================
