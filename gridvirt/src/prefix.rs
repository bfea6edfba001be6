use alloc::vec::Vec;
use core::cmp;

/// Cumulative sizes along one axis.
///
/// `sums[i]` is the total size of the first `i` items, so `sums` always holds `len + 1`
/// entries and `sums[0] == 0`.
#[derive(Clone, Debug)]
pub(crate) struct PrefixSums {
    sums: Vec<u64>,
}

impl Default for PrefixSums {
    fn default() -> Self {
        Self {
            sums: alloc::vec![0],
        }
    }
}

impl PrefixSums {
    pub(crate) fn from_sizes(sizes: &[u32]) -> Self {
        let mut sums = Vec::with_capacity(sizes.len() + 1);
        let mut total = 0u64;
        sums.push(total);
        for &size in sizes {
            total = total.saturating_add(size as u64);
            sums.push(total);
        }
        Self { sums }
    }

    pub(crate) fn len(&self) -> usize {
        self.sums.len().saturating_sub(1)
    }

    /// Total size of the first `count` items (clamped to `len`).
    pub(crate) fn prefix(&self, count: usize) -> u64 {
        let i = cmp::min(count, self.len());
        self.sums[i]
    }

    pub(crate) fn total(&self) -> u64 {
        self.prefix(self.len())
    }

    pub(crate) fn span(&self, from: usize, count: usize) -> u64 {
        let end = self.prefix(from.saturating_add(count));
        end.saturating_sub(self.prefix(from))
    }

    /// Returns the item containing `offset`, clamped to `[0, len - 1]`.
    ///
    /// Counts the items whose end is `<= offset`, which skips zero-sized items and maps an
    /// offset past the end to the last item.
    pub(crate) fn index_at(&self, offset: u64) -> usize {
        let n = self.len();
        if n == 0 {
            return 0;
        }
        let consumed = self.sums.partition_point(|&s| s <= offset).saturating_sub(1);
        consumed.min(n - 1)
    }
}
