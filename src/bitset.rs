//! Compact set of truth-table row indices.
//!
//! Used for the ON-set of a [`TruthTable`][crate::table::TruthTable], for the
//! minterms covered by an [`Implicant`][crate::qmc::Implicant], and for the
//! per-pass "absorbed" marks of the prime-implicant engine.

use std::hash::{Hash, Hasher};

/// A bit set backed by a vector of u64 words.
///
/// The set grows as needed when inserting beyond the current capacity.
/// Equality and hashing ignore trailing zero words, so two sets with the same
/// members compare equal regardless of their capacity.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a new empty bit set with the given capacity (in bits).
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            count: 0,
        }
    }

    /// Creates an empty bit set with no pre-allocated capacity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a bit set containing exactly `index`.
    pub fn singleton(index: usize) -> Self {
        let mut set = Self::new(index + 1);
        set.insert(index);
        set
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        match self.words.get(word_idx) {
            Some(word) => (word >> bit_idx) & 1 != 0,
            None => false,
        }
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);

        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let mask = 1u64 << bit_idx;
        let was_clear = (self.words[word_idx] & mask) == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Returns the union of two sets.
    pub fn union(&self, other: &BitSet) -> BitSet {
        let (long, short) = if self.words.len() >= other.words.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut words = long.words.clone();
        for (w, &o) in words.iter_mut().zip(short.words.iter()) {
            *w |= o;
        }
        let count = words.iter().map(|w| w.count_ones() as usize).sum();
        BitSet { words, count }
    }

    /// Returns the members of `self` that are not in `other`.
    pub fn difference(&self, other: &BitSet) -> BitSet {
        let words: Vec<u64> = self
            .words
            .iter()
            .enumerate()
            .map(|(i, &w)| w & !other.words.get(i).copied().unwrap_or(0))
            .collect();
        let count = words.iter().map(|w| w.count_ones() as usize).sum();
        BitSet { words, count }
    }

    /// Returns the members common to both sets.
    pub fn intersection(&self, other: &BitSet) -> BitSet {
        let words: Vec<u64> = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(&w, &o)| w & o)
            .collect();
        let count = words.iter().map(|w| w.count_ones() as usize).sum();
        BitSet { words, count }
    }

    /// Returns true if the sets share at least one member.
    pub fn intersects(&self, other: &BitSet) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(&w, &o)| w & o != 0)
    }

    /// Returns an iterator over all set bit indices, in ascending order.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    fn significant_words(&self) -> &[u64] {
        let end = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1);
        &self.words[..end]
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.significant_words() == other.significant_words()
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = BitSet::empty();
        set.extend(iter);
        set
    }
}

/// Iterator over set bits in a BitSet.
pub struct BitSetIter<'a> {
    bitset: &'a BitSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * BitSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.bitset.words.len() {
                return None;
            }
            self.current_word = self.bitset.words[self.word_idx];
        }
    }
}
