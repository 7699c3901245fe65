//! Copy-on-write tuning parameters.
//!
//! The kernel consults these thresholds on every mutating access to decide
//! between mutating in place, merging into a neighbor, partially copying, or
//! splitting a slice. The defaults are tuned for slices of a few thousand
//! elements; tests shrink them to drive specific policy branches.

/// Tuning parameters for the copy-on-write policies.
///
/// # Example
///
/// ```
/// use snapseq::CowConfig;
///
/// let config = CowConfig {
///     max_merge_size: 64,
///     ..CowConfig::default()
/// };
/// assert_eq!(config.copy_fraction_denom, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CowConfig {
    /// Below this slice count, policies favor creating new slices over
    /// copying existing elements.
    pub num_slices_lwm: usize,

    /// Above this slice count, policies favor copying over creating new
    /// slices, bounding fragmentation.
    pub num_slices_hwm: usize,

    /// Minimum slice size considered for splitting.
    pub min_split_size: usize,

    /// Slices at or below this size are merged whole into a modifiable
    /// previous slice during iteration copy-on-write.
    pub max_merge_size: usize,

    /// `1/copy_fraction_denom` of a slice's size counts as "near an edge";
    /// it is also the amount copied beyond the access point when iteration
    /// copy-on-write splits a slice.
    pub copy_fraction_denom: usize,

    /// Slices at or below this size are copied whole to satisfy an
    /// insertion rather than split.
    pub max_insertion_copy_size: usize,

    /// Guard band, in elements, kept between a split point and a slice
    /// edge so that degenerate splits never produce an empty slice.
    pub slice_edge_offset: usize,
}

impl Default for CowConfig {
    fn default() -> Self {
        Self {
            num_slices_lwm: 128,
            num_slices_hwm: 256,
            min_split_size: 2048,
            max_merge_size: 1024,
            copy_fraction_denom: 8,
            max_insertion_copy_size: 32,
            slice_edge_offset: 4,
        }
    }
}

impl CowConfig {
    /// The near-edge zone for a slice of `len` elements.
    #[inline]
    pub(crate) fn edge_zone(&self, len: usize) -> usize {
        len / self.copy_fraction_denom
    }
}
