//! Word-packed bit vectors used as rows of GF(2) matrices.
//!
//! Each row of a binary matrix is stored as a sequence of `u64` words, so that
//! adding two rows over GF(2) is a word-wise XOR.

/// Matrix entry types accepted as GF(2) bits, read mod 2.
pub trait Bit: Copy {
    fn is_odd(self) -> bool;
}

impl Bit for bool {
    #[inline]
    fn is_odd(self) -> bool {
        self
    }
}

macro_rules! impl_bit {
    ($($t:ty),*) => {
        $(
            impl Bit for $t {
                #[inline]
                fn is_odd(self) -> bool {
                    self % 2 != 0
                }
            }
        )*
    };
}

impl_bit!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A fixed-length vector over GF(2), backed by a vector of u64 words.
///
/// Bits beyond `len` are always zero.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct BitSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of meaningful bits
    len: usize,
}

impl BitSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates an all-zero vector of `len` bits.
    pub fn new(len: usize) -> Self {
        let num_words = len.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            len,
        }
    }

    /// Creates a vector from a slice of integers or booleans, each reduced mod 2.
    pub fn from_bits<T: Bit>(bits: &[T]) -> Self {
        let mut row = Self::new(bits.len());
        for (i, &b) in bits.iter().enumerate() {
            if b.is_odd() {
                row.set(i, true);
            }
        }
        row
    }

    /// Returns the number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the vector has no bits at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Gets the word index and bit position for a given bit index.
    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        let word = index / Self::BITS_PER_WORD;
        let bit = index % Self::BITS_PER_WORD;
        (word, bit)
    }

    /// Returns the bit at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {} out of range 0..{}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        (self.words[word_idx] >> bit_idx) & 1 == 1
    }

    /// Sets the bit at the given index to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(index < self.len, "bit index {} out of range 0..{}", index, self.len);
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        let mask = 1u64 << bit_idx;
        if value {
            self.words[word_idx] |= mask;
        } else {
            self.words[word_idx] &= !mask;
        }
    }

    /// Adds `other` into `self` over GF(2).
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[inline]
    pub fn xor_assign(&mut self, other: &BitSet) {
        assert_eq!(self.len, other.len, "length mismatch in GF(2) row addition");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= *b;
        }
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns an iterator over all set bit indices.
    pub fn iter(&self) -> BitSetIter<'_> {
        BitSetIter {
            bitset: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
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

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_new_is_zero() {
        let row = BitSet::new(100);
        assert_eq!(row.len(), 100);
        assert!(row.is_zero());
        assert_eq!(row.count_ones(), 0);
        assert!(!row.get(99));
    }

    #[test]
    fn test_empty() {
        let row = BitSet::new(0);
        assert!(row.is_empty());
        assert!(row.is_zero());
        assert_eq!(row.iter().count(), 0);
    }

    #[test]
    fn test_set_get() {
        let mut row = BitSet::new(70);
        row.set(3, true);
        row.set(64, true);
        assert!(row.get(3));
        assert!(row.get(64));
        assert!(!row.get(4));
        row.set(3, false);
        assert!(!row.get(3));
        assert_eq!(row.count_ones(), 1);
    }

    #[test]
    fn test_from_bits_other_entry_types() {
        assert_eq!(BitSet::from_bits(&[true, false, true]), BitSet::from_bits(&[1u8, 0, 1]));
        assert_eq!(BitSet::from_bits(&[1usize, 2, 3]), BitSet::from_bits(&[1u8, 0, 1]));
        assert_eq!(BitSet::from_bits(&[-1i32, 0, 4]), BitSet::from_bits(&[1u8, 0, 0]));
    }

    #[test]
    fn test_from_bits_reduces_mod_2() {
        let row = BitSet::from_bits(&[1u8, 2, 3, 0, 5]);
        let bits: Vec<_> = row.iter().collect();
        assert_eq!(bits, vec![0, 2, 4]);
    }

    #[test]
    fn test_xor_assign() {
        let mut a = BitSet::from_bits(&[1u8, 1, 0, 0]);
        let b = BitSet::from_bits(&[0u8, 1, 1, 0]);
        a.xor_assign(&b);
        assert_eq!(a, BitSet::from_bits(&[1u8, 0, 1, 0]));

        // Adding a row to itself gives zero.
        let c = a.clone();
        a.xor_assign(&c);
        assert!(a.is_zero());
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_xor_length_mismatch() {
        let mut a = BitSet::new(3);
        a.xor_assign(&BitSet::new(4));
    }

    #[test]
    fn test_iter_across_words() {
        let mut row = BitSet::new(130);
        for i in [5, 10, 3, 64, 65, 129] {
            row.set(i, true);
        }
        let indices: Vec<_> = row.iter().collect();
        assert_eq!(indices, vec![3, 5, 10, 64, 65, 129]);
    }
}
