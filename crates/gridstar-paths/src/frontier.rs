use std::collections::BinaryHeap;

use crate::config::TieBreak;

/// A frontier entry. The same cell may be queued several times with
/// different `f`; older entries go stale and are dropped when popped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) idx: usize,
    pub(crate) f: u32,
    /// Secondary key, `h` or 0 depending on the tie-break rule.
    tie: u32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        (other.f, other.tie, other.seq).cmp(&(self.f, self.tie, self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority open list without decrease-key.
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    tie_break: TieBreak,
    next_seq: u64,
    peak: usize,
}

impl Frontier {
    pub(crate) fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            tie_break,
            next_seq: 0,
            peak: 0,
        }
    }

    /// Queue `idx` with priority `f`. Never touches existing entries.
    pub(crate) fn push(&mut self, idx: usize, f: u32, h: u32) {
        let tie = match self.tie_break {
            TieBreak::LowerH => h,
            TieBreak::Fifo => 0,
        };
        self.heap.push(Entry {
            idx,
            f,
            tie,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.peak = self.peak.max(self.heap.len());
    }

    /// Pop the entry with the smallest key.
    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier reached.
    #[inline]
    pub(crate) fn peak(&self) -> usize {
        self.peak
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(fr: &mut Frontier) -> Vec<usize> {
        std::iter::from_fn(|| fr.pop().map(|e| e.idx)).collect()
    }

    #[test]
    fn pops_lowest_f_first() {
        let mut fr = Frontier::new(TieBreak::LowerH);
        fr.push(0, 9, 0);
        fr.push(1, 3, 0);
        fr.push(2, 5, 0);
        assert_eq!(drain(&mut fr), vec![1, 2, 0]);
        assert_eq!(fr.len(), 0);
        assert_eq!(fr.peak(), 3);
    }

    #[test]
    fn lower_h_breaks_ties_then_fifo() {
        let mut fr = Frontier::new(TieBreak::LowerH);
        fr.push(10, 6, 4);
        fr.push(11, 6, 2);
        fr.push(12, 6, 4);
        fr.push(13, 6, 2);
        assert_eq!(drain(&mut fr), vec![11, 13, 10, 12]);
    }

    #[test]
    fn fifo_ignores_h() {
        let mut fr = Frontier::new(TieBreak::Fifo);
        fr.push(10, 6, 4);
        fr.push(11, 6, 2);
        fr.push(12, 5, 9);
        assert_eq!(drain(&mut fr), vec![12, 10, 11]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut fr = Frontier::new(TieBreak::LowerH);
        fr.push(4, 8, 1);
        fr.push(4, 6, 1);
        assert_eq!(fr.len(), 2);
        let first = fr.pop().unwrap();
        assert_eq!((first.idx, first.f), (4, 6));
        let second = fr.pop().unwrap();
        assert_eq!((second.idx, second.f), (4, 8));
    }
}
