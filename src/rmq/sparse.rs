//! Sparse-table range-minimum-query structure
//!
//! Classic doubling table: `table[k][i]` holds the position of the
//! minimum over the window `[i, i + 2^k)`. Preprocessing is
//! O(n log n); queries cover any inclusive range with two overlapping
//! power-of-two windows, so `rmq` is O(1).

/// Range-minimum-query answer structure over a fixed array.
#[derive(Debug)]
pub struct RangeMinimumQuery {
    data: Vec<usize>,
    /// `table[k][i]` = position of the minimum in `[i, i + 2^k)`.
    table: Vec<Vec<usize>>,
}

impl RangeMinimumQuery {
    /// Preprocess `data` for O(1) minimum-position queries.
    pub fn new(data: Vec<usize>) -> Self {
        let n = data.len();
        let mut table: Vec<Vec<usize>> = Vec::new();
        if n > 0 {
            table.push((0..n).collect());
            let mut k = 1;
            while (1usize << k) <= n {
                let half = 1usize << (k - 1);
                let width = 1usize << k;
                let prev = &table[k - 1];
                let mut row = Vec::with_capacity(n - width + 1);
                for i in 0..=n - width {
                    let a = prev[i];
                    let b = prev[i + half];
                    row.push(if data[b] < data[a] { b } else { a });
                }
                table.push(row);
                k += 1;
            }
        }
        Self { data, table }
    }

    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of the minimum over the inclusive range between `left`
    /// and `right`. Argument order does not matter; ties resolve to the
    /// leftmost window's candidate.
    pub fn rmq(&self, left: usize, right: usize) -> usize {
        let (lo, hi) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        let len = hi - lo + 1;
        let k = (usize::BITS - 1 - len.leading_zeros()) as usize;
        let a = self.table[k][lo];
        let b = self.table[k][hi + 1 - (1usize << k)];
        if self.data[b] < self.data[a] { b } else { a }
    }
}
