//! Core index newtype.

/// Logical slide index as seen by the caller.
///
/// Signed: callers may decrement past zero or increment past the last view
/// (autoplay does exactly that), and the engine normalizes by wraparound.
/// The raw value is meaningful pre-normalization; comparisons between a raw
/// and a normalized index are how the engine detects out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SlideIndex(i64);

impl SlideIndex {
    /// Create a new SlideIndex from a raw (possibly out-of-range) value.
    pub fn new(index: i64) -> Self {
        Self(index)
    }

    /// Get the raw i64 value.
    pub fn get(&self) -> i64 {
        self.0
    }

    /// The next index, un-normalized. Used by autoplay advancement.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Normalize into `[0, views)` by true modulo: `((n % V) + V) % V`.
    ///
    /// Handles arbitrarily negative values, unlike the single-`+V` trick.
    /// `views <= 0` (unmeasured or empty carousel) is the identity: there is
    /// no valid range to wrap into, so the value is left untouched.
    pub fn normalize(&self, views: i64) -> Self {
        if views <= 0 {
            return *self;
        }
        Self(((self.0 % views) + views) % views)
    }
}

impl From<i64> for SlideIndex {
    fn from(index: i64) -> Self {
        Self(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_in_range_is_identity() {
        assert_eq!(SlideIndex::new(2).normalize(4), SlideIndex::new(2));
    }

    #[test]
    fn normalize_wraps_past_end() {
        assert_eq!(SlideIndex::new(5).normalize(4), SlideIndex::new(1));
    }

    #[test]
    fn normalize_wraps_negative() {
        assert_eq!(SlideIndex::new(-1).normalize(4), SlideIndex::new(3));
    }

    #[test]
    fn normalize_wraps_deeply_negative() {
        // -9 % 4 = -1 in Rust; true modulo must still land in range
        assert_eq!(SlideIndex::new(-9).normalize(4), SlideIndex::new(3));
    }

    #[test]
    fn normalize_zero_views_is_identity() {
        assert_eq!(SlideIndex::new(7).normalize(0), SlideIndex::new(7));
        assert_eq!(SlideIndex::new(7).normalize(-2), SlideIndex::new(7));
    }

    #[test]
    fn next_increments_without_wrapping() {
        assert_eq!(SlideIndex::new(3).next(), SlideIndex::new(4));
    }
}
