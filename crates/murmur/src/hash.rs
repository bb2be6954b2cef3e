use hs_bytes_util::words;

pub const M32: u32 = 0x5bd1_e995;
pub const R32: u32 = 24;

pub const M64: u64 = 0xc6a4_a793_5bd1_e995;
pub const R64: u32 = 47;

/// MurmurHash2, 32-bit digest.
///
/// Every length is valid, the empty slice included.
#[inline]
pub fn murmur_hash32(key: &[u8], seed: u32) -> u32 {
    // lengths past u32::MAX wrap, as in the reference code
    let mut h = seed ^ key.len() as u32;

    let mut words = words::<u32>(key);
    for k in words.by_ref() {
        h = h.wrapping_mul(M32) ^ mix32(k);
    }

    // one multiply covers the whole tail, however many bytes it has
    if let Some(k) = words.tail_word() {
        h = (h ^ k).wrapping_mul(M32);
    }

    fmix32(h)
}

/// MurmurHash64A, 64-bit digest.
///
/// The length is multiplied by `M64` before it is combined with the seed.
#[inline]
pub fn murmur_hash64a(key: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (key.len() as u64).wrapping_mul(M64);

    let mut words = words::<u64>(key);
    for k in words.by_ref() {
        h = (h ^ mix64(k)).wrapping_mul(M64);
    }

    if let Some(k) = words.tail_word() {
        h = (h ^ k).wrapping_mul(M64);
    }

    fmix64(h)
}

#[inline]
fn mix32(mut k: u32) -> u32 {
    k = k.wrapping_mul(M32);
    k ^= k >> R32;
    k.wrapping_mul(M32)
}

#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 13;
    h = h.wrapping_mul(M32);
    h ^ (h >> 15)
}

#[inline]
fn mix64(mut k: u64) -> u64 {
    k = k.wrapping_mul(M64);
    k ^= k >> R64;
    k.wrapping_mul(M64)
}

#[inline]
fn fmix64(mut h: u64) -> u64 {
    h ^= h >> R64;
    h = h.wrapping_mul(M64);
    h ^ (h >> R64)
}
