use anyhow::{Context, Result};
use hs_murmur::{murmur_hash32, murmur_hash64a};
use serde::Deserialize;
use std::{fs, path::Path};

const BUILTIN_VECTORS: &str = include_str!("../data/vectors.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Murmur32,
    Murmur64a,
}

/// Known-answer vector. `input` is the key as hex-encoded bytes, so any byte
/// content can be expressed. `seed` and `digest` are hex numbers, `0x` prefix
/// optional.
#[derive(Debug, Clone, Deserialize)]
pub struct Vector {
    pub algorithm: Algorithm,
    pub input: String,
    pub seed: String,
    pub digest: String,
}

impl Vector {
    pub fn expected(&self) -> Result<u64> {
        let digest = parse_hex(&self.digest).context("Invalid digest")?;
        if self.algorithm == Algorithm::Murmur32 {
            u32::try_from(digest).context("32-bit digest out of range")?;
        }
        Ok(digest)
    }

    pub fn key(&self) -> Result<Vec<u8>> {
        parse_hex_bytes(&self.input).context("Invalid input")
    }

    pub fn compute(&self) -> Result<u64> {
        let seed = parse_hex(&self.seed).context("Invalid seed")?;
        let key = &self.key()?;

        Ok(match self.algorithm {
            Algorithm::Murmur32 => {
                let seed = u32::try_from(seed).context("32-bit seed out of range")?;
                murmur_hash32(key, seed) as u64
            }
            Algorithm::Murmur64a => murmur_hash64a(key, seed),
        })
    }

    pub fn check(&self) -> Result<()> {
        let expected = self.expected()?;
        let actual = self.compute()?;
        if expected != actual {
            anyhow::bail!(
                "{:?} of {:?} with seed {} returned {actual:#x}, expected {expected:#x}",
                self.algorithm,
                self.input,
                self.seed
            );
        }
        Ok(())
    }
}

pub fn builtin() -> Result<Vec<Vector>> {
    serde_json::from_str(BUILTIN_VECTORS).context("Failed to parse bundled vectors")
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Vector>> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read vector file {}", path.display()))?;

    serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse vector file {}", path.display()))
}

fn parse_hex(s: &str) -> Result<u64> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16).with_context(|| format!("{s:?} is not a hex number"))
}

fn parse_hex_bytes(s: &str) -> Result<Vec<u8>> {
    if s.len() % 2 != 0 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        anyhow::bail!("{s:?} is not hex encoded bytes");
    }

    s.as_bytes()
        .chunks_exact(2)
        .map(|pair| Ok(u8::from_str_radix(std::str::from_utf8(pair)?, 16)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::vectors::{self, Algorithm, Vector};

    fn vector(algorithm: Algorithm, input: &str, seed: &str, digest: &str) -> Vector {
        Vector {
            algorithm,
            input: input.to_string(),
            seed: seed.to_string(),
            digest: digest.to_string(),
        }
    }

    #[test]
    fn test_builtin_vectors_parse_and_pass() {
        let vectors = vectors::builtin().unwrap();

        assert_eq!(44, vectors.len());
        assert_eq!(Algorithm::Murmur32, vectors[0].algorithm);
        assert_eq!(Algorithm::Murmur64a, vectors[20].algorithm);
        for v in &vectors {
            v.check().unwrap();
        }
    }

    #[test]
    fn test_check_reports_mismatch() {
        let v = vector(Algorithm::Murmur32, "30313233", "0x0", "0xdd05555f");
        let err = v.check().unwrap_err().to_string();

        assert!(err.contains("0xdd05555e"), "{err}");
        assert!(err.contains("0xdd05555f"), "{err}");
    }

    #[test]
    fn test_hex_fields() {
        assert_eq!(
            0x4ccb322c4bcf1d63,
            vector(Algorithm::Murmur64a, "30", "0", "4ccb322c4bcf1d63")
                .compute()
                .unwrap()
        );
        assert!(
            vector(Algorithm::Murmur64a, "30", "0xzz", "0x0")
                .compute()
                .is_err()
        );
        assert!(
            vector(Algorithm::Murmur32, "30", "0x100000000", "0x0")
                .compute()
                .is_err()
        );
        assert!(
            vector(Algorithm::Murmur32, "30", "0x0", "0x100000000")
                .expected()
                .is_err()
        );
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("hs-vectors-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"algorithm": "murmur64a", "input": "68656c6c6f", "seed": "0x0", "digest": "0x1e68d17c457bf117"}]"#,
        )
        .unwrap();

        let loaded = vectors::load(&path);
        let _ = std::fs::remove_file(&path);
        let loaded = loaded.unwrap();

        assert_eq!(1, loaded.len());
        loaded[0].check().unwrap();
    }

    #[test]
    fn test_load_missing_file() {
        let err = vectors::load("/nonexistent/hs-vectors.json").unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read vector file"));
    }

    #[test]
    fn test_input_is_raw_bytes() {
        let v = vector(
            Algorithm::Murmur64a,
            "ed53c4a53b1bbdc2527dc3ef535fae3b",
            "0x344d1f5c",
            "0x0822b1481a92e97b",
        );
        assert_eq!(16, v.key().unwrap().len());
        v.check().unwrap();

        let v = vector(Algorithm::Murmur32, "fffe80", "0x0", "0xa30efe85");
        assert_eq!(vec![0xff, 0xfe, 0x80], v.key().unwrap());
        v.check().unwrap();

        assert!(vector(Algorithm::Murmur32, "", "0x0", "0x0").key().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_input_rejected() {
        for input in ["3", "3g", "hello", "+1", "é1"] {
            let err = vector(Algorithm::Murmur32, input, "0x0", "0x0")
                .compute()
                .unwrap_err();
            assert!(format!("{err:#}").contains("Invalid input"), "{err:#}");
        }
    }
}
