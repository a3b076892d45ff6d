//! Pairwise-swap neighborhood.

/// Iterator over all pairwise-swap neighbors of a schedule.
///
/// Yields, for every `0 <= i < j < N`, the schedule with positions `i` and
/// `j` exchanged: ascending `i`, then ascending `j`. That order is the
/// tie-break used by the tabu solver, so it must stay fixed.
#[derive(Debug, Clone)]
pub struct SwapNeighborhood<'a> {
    schedule: &'a [usize],
    i: usize,
    j: usize,
}

impl<'a> SwapNeighborhood<'a> {
    /// Creates the neighborhood of `schedule`.
    pub fn new(schedule: &'a [usize]) -> Self {
        Self { schedule, i: 0, j: 1 }
    }

    /// Number of neighbors of an `n`-job schedule: `n·(n-1)/2`.
    pub fn size(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }
}

impl Iterator for SwapNeighborhood<'_> {
    /// `((i, j), neighbor)`: the swapped positions and the new schedule.
    type Item = ((usize, usize), Vec<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.schedule.len();
        if self.j >= n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= n {
                return None;
            }
        }
        let (i, j) = (self.i, self.j);
        self.j += 1;

        let mut neighbor = self.schedule.to_vec();
        neighbor.swap(i, j);
        Some(((i, j), neighbor))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.schedule.len();
        if self.i + 1 >= n {
            return (0, Some(0));
        }
        // Pairs left in row i, plus all pairs with a larger first index.
        let row = n.saturating_sub(self.j);
        let rest = Self::size(n - self.i - 1);
        (row + rest, Some(row + rest))
    }
}

impl ExactSizeIterator for SwapNeighborhood<'_> {}

/// All pairwise-swap neighbors of `schedule`, in generation order.
///
/// # Examples
///
/// ```
/// use u_flowshop::tabu::swap_neighbors;
///
/// let neighbors = swap_neighbors(&[0, 1, 2]);
/// assert_eq!(neighbors, vec![vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]]);
/// ```
pub fn swap_neighbors(schedule: &[usize]) -> Vec<Vec<usize>> {
    SwapNeighborhood::new(schedule).map(|(_, s)| s).collect()
}
