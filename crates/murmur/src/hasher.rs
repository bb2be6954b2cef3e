use std::hash::{BuildHasher, Hasher};

use crate::murmur_hash64a;

/// [`Hasher`] backed by MurmurHash64A.
///
/// Each `write` rehashes the bytes seeded with the running state, so a single
/// `write` yields exactly `murmur_hash64a(bytes, seed)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MurmurHasher64 {
    state: u64,
}

impl MurmurHasher64 {
    pub fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Hasher for MurmurHasher64 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = murmur_hash64a(bytes, self.state);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildMurmurHasher64 {
    pub seed: u64,
}

impl BuildHasher for BuildMurmurHasher64 {
    type Hasher = MurmurHasher64;

    #[inline]
    fn build_hasher(&self) -> MurmurHasher64 {
        MurmurHasher64::with_seed(self.seed)
    }
}
