//! String hashes for animator parameter constants.
//!
//! Unity's `Animator.StringToHash` is a CRC-32 of the UTF-8 name, so the
//! default algorithm produces values that compare equal to runtime hashes.
//! FNV-1a is offered for projects that only need a stable value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reflected CRC-32 (IEEE) polynomial
pub const CRC32_POLYNOMIAL: u32 = 0xEDB8_8320;

/// FNV-1a 32-bit offset basis
pub const FNV1A_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime
pub const FNV1A_PRIME: u32 = 0x0100_0193;

const CRC32_TABLE: [u32; 256] = build_crc32_table();

const fn build_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 {
                (crc >> 1) ^ CRC32_POLYNOMIAL
            } else {
                crc >> 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC-32 of a byte slice
pub fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc = CRC32_TABLE[((crc ^ byte as u32) & 0xFF) as usize] ^ (crc >> 8);
    }
    !crc
}

/// Compute the FNV-1a 32-bit hash of a byte slice
pub fn fnv1a32(data: &[u8]) -> u32 {
    let mut hash = FNV1A_OFFSET_BASIS;
    for &byte in data {
        hash ^= byte as u32;
        hash = hash.wrapping_mul(FNV1A_PRIME);
    }
    hash
}

/// Hash used for the `<Name>Hash` animator parameter constants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Matches `Animator.StringToHash`
    #[default]
    Crc32,
    Fnv1a,
}

impl HashAlgorithm {
    /// Hash a parameter name into the signed value stored in the constant
    pub fn hash(self, name: &str) -> i32 {
        let value = match self {
            HashAlgorithm::Crc32 => crc32(name.as_bytes()),
            HashAlgorithm::Fnv1a => fnv1a32(name.as_bytes()),
        };
        value as i32
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Crc32 => f.write_str("crc32"),
            HashAlgorithm::Fnv1a => f.write_str("fnv1a"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "crc32" | "unity" => Ok(HashAlgorithm::Crc32),
            "fnv1a" | "fnv" => Ok(HashAlgorithm::Fnv1a),
            other => Err(format!("unknown hash algorithm '{}' (expected crc32 or fnv1a)", other)),
        }
    }
}
