//! Seeded permutation table for lattice gradient selection.
//!
//! The shuffle is driven by `ChaCha8Rng::seed_from_u64(seed)`. ChaCha8 is a
//! documented, portable stream, so a given seed yields the same table on
//! every platform and release of `rand_chacha` 0.3.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 256-entry permutation of `0..=255`, stored twice back to back so that
/// `perm[i + 1]` never needs an index wrap for `i < 511`.
#[derive(Clone, PartialEq, Eq)]
pub struct PermutationTable {
    perm: [u8; 512],
}

impl PermutationTable {
    /// Build the table for `seed` with a Fisher–Yates shuffle.
    pub fn new(seed: u32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(u64::from(seed));

        let mut source = [0u8; 256];
        for (i, v) in source.iter_mut().enumerate() {
            *v = i as u8;
        }

        // The draw range is u32 rather than usize so wasm32 and 64-bit hosts
        // consume the rng stream identically.
        for i in (1..256u32).rev() {
            let j = rng.gen_range(0..=i);
            source.swap(i as usize, j as usize);
        }

        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);

        Self { perm }
    }

    /// Wrap an explicit 256-entry permutation (mirrored internally).
    ///
    /// Entries are not checked for uniqueness; any byte sequence gives a
    /// well-defined (if lower quality) noise field.
    pub fn from_permutation(source: [u8; 256]) -> Self {
        let mut perm = [0u8; 512];
        perm[..256].copy_from_slice(&source);
        perm[256..].copy_from_slice(&source);
        Self { perm }
    }

    #[inline]
    pub(crate) fn at(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// All 512 entries.
    pub fn as_slice(&self) -> &[u8] {
        &self.perm
    }
}

impl std::fmt::Debug for PermutationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermutationTable")
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}
