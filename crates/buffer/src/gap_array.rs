// Chunk: docs/chunks/gap_array - Generic gap array with doubling growth

//! Generic gap array.
//!
//! A gap array is a contiguous vector with a movable unused region (the gap).
//! Writes at the gap are O(1) amortized; moving the gap is O(distance), which
//! amortizes well when edits cluster around an advancing cursor.
//!
//! The character store and the line index are both gap arrays, one over
//! `char` and one over `usize` offsets.

const GROWTH_FACTOR: usize = 2;

/// A contiguous array split into leading content, a gap, and trailing content.
///
/// Logical positions ignore the gap: position `p` lives at physical index `p`
/// when `p < gap_start`, and at `p + gap_len` otherwise.
#[derive(Debug, Clone)]
pub struct GapArray<T> {
    /// Physical storage: [leading content | gap | trailing content].
    storage: Vec<T>,
    /// First unused slot.
    gap_start: usize,
    /// First used slot after the gap.
    gap_end: usize,
}

impl<T: Copy + Default> GapArray<T> {
    /// Creates an empty gap array whose gap spans the whole capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: vec![T::default(); capacity],
            gap_start: 0,
            gap_end: capacity,
        }
    }

    /// Creates a gap array holding `items`, with `extra` free slots after them.
    pub fn from_slice(items: &[T], extra: usize) -> Self {
        let len = items.len();
        let capacity = len + extra;

        let mut storage = Vec::with_capacity(capacity);
        storage.extend_from_slice(items);
        storage.resize(capacity, T::default());

        Self {
            storage,
            gap_start: len,
            gap_end: capacity,
        }
    }

    /// Returns the logical length (excluding the gap).
    pub fn len(&self) -> usize {
        self.storage.len() - self.gap_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of allocated slots, gap included.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the logical position of the gap (its left boundary).
    pub fn gap_position(&self) -> usize {
        self.gap_start
    }

    fn physical(&self, pos: usize) -> usize {
        if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        }
    }

    /// Returns the element at a logical position.
    pub fn get(&self, pos: usize) -> Option<T> {
        if pos >= self.len() {
            return None;
        }
        Some(self.storage[self.physical(pos)])
    }

    /// Moves the gap so that its left boundary sits at logical position `pos`.
    ///
    /// Costs O(|pos - gap_position|).
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the logical length.
    pub fn relocate_gap(&mut self, pos: usize) {
        let len = self.len();
        assert!(
            pos <= len,
            "gap relocation to {pos} is past the logical length {len}"
        );

        let gap_len = self.gap_len();
        if pos < self.gap_start {
            // Leading block [pos, gap_start) moves to the right edge of the gap
            self.storage
                .copy_within(pos..self.gap_start, pos + gap_len);
        } else if pos > self.gap_start {
            // Trailing block [gap_end, pos + gap_len) moves into the gap's left edge
            self.storage
                .copy_within(self.gap_end..pos + gap_len, self.gap_start);
        } else {
            return;
        }

        log::trace!("gap relocated {} -> {}", self.gap_start, pos);
        self.gap_start = pos;
        self.gap_end = pos + gap_len;
    }

    /// Grows the storage until the gap holds at least `min_size` slots.
    ///
    /// Capacity doubles (or grows to exactly what is needed, if more). Leading
    /// content keeps its indices; trailing content moves to the new tail, so
    /// the gap position is unchanged.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let old_capacity = self.storage.len();
        let needed = self.len() + min_size;
        let new_capacity = (old_capacity * GROWTH_FACTOR).max(needed);
        let trailing = old_capacity - self.gap_end;

        self.storage.resize(new_capacity, T::default());
        if trailing > 0 {
            self.storage
                .copy_within(self.gap_end..old_capacity, new_capacity - trailing);
        }
        self.gap_end = new_capacity - trailing;

        log::trace!("gap array grew {} -> {} slots", old_capacity, new_capacity);
    }

    /// Writes `value` at the gap and advances the gap by one.
    ///
    /// O(1) amortized. Callers relocate the gap first to insert elsewhere.
    pub fn insert_at_gap(&mut self, value: T) {
        self.ensure_gap(1);
        self.storage[self.gap_start] = value;
        self.gap_start += 1;
    }

    /// Writes all of `values` at the gap, growing at most once.
    pub fn insert_slice_at_gap(&mut self, values: &[T]) {
        self.ensure_gap(values.len());
        let end = self.gap_start + values.len();
        self.storage[self.gap_start..end].copy_from_slice(values);
        self.gap_start = end;
    }

    /// Widens the gap leftward by one, returning the element it swallowed.
    pub fn delete_before_gap(&mut self) -> Option<T> {
        if self.gap_start == 0 {
            return None;
        }
        self.gap_start -= 1;
        Some(self.storage[self.gap_start])
    }

    /// Widens the gap rightward by one, returning the element it swallowed.
    pub fn delete_after_gap(&mut self) -> Option<T> {
        if self.gap_end >= self.storage.len() {
            return None;
        }
        let value = self.storage[self.gap_end];
        self.gap_end += 1;
        Some(value)
    }

    /// Returns the content before and after the gap.
    pub fn as_slices(&self) -> (&[T], &[T]) {
        (&self.storage[..self.gap_start], &self.storage[self.gap_end..])
    }

    /// Returns the content after the gap, mutably.
    pub fn after_gap_mut(&mut self) -> &mut [T] {
        &mut self.storage[self.gap_end..]
    }

    /// Returns an iterator over all elements in logical order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let (before, after) = self.as_slices();
        before.iter().chain(after.iter()).copied()
    }

    /// Returns an iterator over the logical range `[start, end)`, clamped to
    /// the logical length.
    pub fn range_iter(&self, start: usize, end: usize) -> impl Iterator<Item = T> + '_ {
        let end = end.min(self.len());
        let start = start.min(end);
        let split = self.gap_start;
        let gap_len = self.gap_len();

        let head = &self.storage[start.min(split)..end.min(split)];
        let tail = &self.storage[start.max(split) + gap_len..end.max(split) + gap_len];
        head.iter().chain(tail.iter()).copied()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns the number of leading elements for which `pred` holds.
    ///
    /// The content must be partitioned by `pred` (all `true` then all
    /// `false`), as with [`slice::partition_point`].
    pub fn partition_point<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let (before, after) = self.as_slices();
        let in_before = before.partition_point(&mut pred);
        if in_before < before.len() {
            in_before
        } else {
            before.len() + after.partition_point(pred)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(values: &[u32], capacity: usize) -> GapArray<u32> {
        let mut array = GapArray::with_capacity(capacity);
        for &v in values {
            array.insert_at_gap(v);
        }
        array
    }

    #[test]
    fn test_with_capacity_is_all_gap() {
        let array: GapArray<u32> = GapArray::with_capacity(8);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.gap_len(), 8);
        assert_eq!(array.gap_position(), 0);
    }

    #[test]
    fn test_insert_appends_in_order() {
        let array = filled(&[1, 2, 3], 8);
        assert_eq!(array.to_vec(), vec![1, 2, 3]);
        assert_eq!(array.len(), 3);
        assert_eq!(array.gap_position(), 3);
    }

    #[test]
    fn test_relocate_left_then_insert() {
        let mut array = filled(&[1, 3], 8);
        array.relocate_gap(1);
        array.insert_at_gap(2);
        assert_eq!(array.to_vec(), vec![1, 2, 3]);
        assert_eq!(array.gap_position(), 2);
    }

    #[test]
    fn test_relocate_right_preserves_content() {
        let mut array = filled(&[1, 2, 3, 4, 5], 8);
        array.relocate_gap(0);
        assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 5]);
        array.relocate_gap(4);
        assert_eq!(array.gap_position(), 4);
        assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 5]);
        array.relocate_gap(5);
        assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_relocate_same_position_is_noop() {
        let mut array = filled(&[1, 2], 4);
        array.relocate_gap(2);
        assert_eq!(array.gap_position(), 2);
        assert_eq!(array.gap_len(), 2);
    }

    #[test]
    #[should_panic(expected = "past the logical length")]
    fn test_relocate_past_end_panics() {
        let mut array = filled(&[1, 2], 4);
        array.relocate_gap(3);
    }

    #[test]
    fn test_growth_doubles_capacity() {
        let array = filled(&[1, 2, 3, 4, 5], 4);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 5]);
        assert_eq!(array.gap_len(), 3);
    }

    #[test]
    fn test_growth_keeps_trailing_content() {
        let mut array = filled(&[1, 2, 3, 4], 4);
        array.relocate_gap(1);
        // Gap is exhausted with three elements trailing it
        array.insert_at_gap(9);
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.to_vec(), vec![1, 9, 2, 3, 4]);
        assert_eq!(array.gap_position(), 2);
    }

    #[test]
    fn test_zero_capacity_grows() {
        let array = filled(&[7, 8, 9], 0);
        assert_eq!(array.to_vec(), vec![7, 8, 9]);
        assert!(array.capacity() >= 3);
    }

    #[test]
    fn test_insert_slice_grows_once_to_fit() {
        let mut array: GapArray<u32> = GapArray::with_capacity(2);
        array.insert_slice_at_gap(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(array.capacity(), 7);
        assert_eq!(array.to_vec(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_delete_around_gap() {
        let mut array = filled(&[1, 2, 3], 4);
        array.relocate_gap(1);
        assert_eq!(array.delete_before_gap(), Some(1));
        assert_eq!(array.delete_before_gap(), None);
        assert_eq!(array.delete_after_gap(), Some(2));
        assert_eq!(array.to_vec(), vec![3]);
        assert_eq!(array.delete_after_gap(), Some(3));
        assert_eq!(array.delete_after_gap(), None);
        assert!(array.is_empty());
    }

    #[test]
    fn test_get_with_gap_in_middle() {
        let mut array = filled(&[10, 20, 30, 40], 8);
        array.relocate_gap(2);
        assert_eq!(array.get(0), Some(10));
        assert_eq!(array.get(1), Some(20));
        assert_eq!(array.get(2), Some(30));
        assert_eq!(array.get(3), Some(40));
        assert_eq!(array.get(4), None);
    }

    #[test]
    fn test_range_iter_spans_gap() {
        let mut array = filled(&[1, 2, 3, 4, 5, 6], 10);
        array.relocate_gap(3);
        assert_eq!(array.range_iter(1, 5).collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert_eq!(array.range_iter(0, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(array.range_iter(3, 6).collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(array.range_iter(4, 100).collect::<Vec<_>>(), vec![5, 6]);
        assert_eq!(array.range_iter(5, 2).count(), 0);
    }

    #[test]
    fn test_partition_point_with_gap_anywhere() {
        let mut array = filled(&[2, 4, 6, 8], 8);
        for gap in 0..=4 {
            array.relocate_gap(gap);
            assert_eq!(array.partition_point(|&v| v <= 5), 2);
            assert_eq!(array.partition_point(|&v| v <= 0), 0);
            assert_eq!(array.partition_point(|&v| v <= 100), 4);
        }
    }

    #[test]
    fn test_after_gap_mut_adjusts_trailing_only() {
        let mut array = filled(&[1, 2, 3, 4], 8);
        array.relocate_gap(2);
        for v in array.after_gap_mut() {
            *v += 10;
        }
        assert_eq!(array.to_vec(), vec![1, 2, 13, 14]);
    }
}
