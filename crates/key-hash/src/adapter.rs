use bytemuck::Pod;
use hs_murmur::murmur_hash64a;
use std::marker::PhantomData;

/// Uniform "hash this key" call shape a hash table binds to.
pub trait KeyHasher<K: ?Sized> {
    type Digest;

    fn hash(&self, key: &K) -> Self::Digest;
}

/// Folds a 64-bit key to 32 bits without mixing, never returning 0.
///
/// Consumers reserve 0 as the empty-slot marker, so a fold that lands on 0 is
/// bumped to exactly 1.
#[inline]
pub const fn fold64_to_32_nonzero(key: u64) -> u32 {
    let h = (key >> 32) as u32 ^ key as u32;
    if h == 0 { 1 } else { h }
}

/// MurmurHash64A of the key's in-memory bytes with seed 0.
///
/// `Pod` keys have no padding, so equal keys always share their bytes. Those
/// bytes are in native order: digests of multi-byte keys differ between
/// little- and big-endian hosts.
///
/// Padded structs are rejected when deriving `Pod`:
///
/// ```compile_fail
/// use bytemuck::{Pod, Zeroable};
///
/// #[repr(C)]
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// struct Padded {
///     tag: u8,
///     value: u32,
/// }
///
/// hs_key_hash::hash_key(&Padded { tag: 1, value: 2 });
/// ```
#[inline]
pub fn hash_key<K: Pod>(key: &K) -> u64 {
    murmur_hash64a(bytemuck::bytes_of(key), 0)
}

/// Hasher for dense `u64` key spaces, see [`fold64_to_32_nonzero`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimpleHash32Nonzero;

impl KeyHasher<u64> for SimpleHash32Nonzero {
    type Digest = u32;

    #[inline]
    fn hash(&self, key: &u64) -> u32 {
        fold64_to_32_nonzero(*key)
    }
}

/// Hasher for fixed-size keys, see [`hash_key`].
pub struct MurmurHash64<K>(PhantomData<fn(&K)>);

impl<K> MurmurHash64<K> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K> Default for MurmurHash64<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for MurmurHash64<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for MurmurHash64<K> {}

impl<K> std::fmt::Debug for MurmurHash64<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MurmurHash64")
            .field(&std::any::type_name::<K>())
            .finish()
    }
}

impl<K: Pod> KeyHasher<K> for MurmurHash64<K> {
    type Digest = u64;

    #[inline]
    fn hash(&self, key: &K) -> u64 {
        hash_key(key)
    }
}
