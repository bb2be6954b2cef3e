//! MurmurHash2 (32-bit) and MurmurHash64A mixers.
//!
//! Words are always decoded little-endian, so a given byte sequence hashes to
//! the same digest on every host. On little-endian machines the digests match
//! Austin Appleby's reference code.
//!
//! These are not cryptographic hashes and must not be relied on for collision
//! resistance against chosen input.

pub mod hash;
mod hasher;

pub use hash::{murmur_hash32, murmur_hash64a};
pub use hasher::{BuildMurmurHasher64, MurmurHasher64};
