//! Key hashers for hash tables built on the MurmurHash mixers.

mod adapter;

pub use adapter::{KeyHasher, MurmurHash64, SimpleHash32Nonzero, fold64_to_32_nonzero, hash_key};
