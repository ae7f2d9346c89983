// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text hashing: bcrypt for password storage plus plain digests

use anyhow::{anyhow, bail, Result};
use clap::ValueEnum;
use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::ops::RangeInclusive;

pub const BCRYPT_COST_RANGE: RangeInclusive<u32> = 4..=15;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Bcrypt,
    Sha256,
    Sha512,
    Md5,
    Sha1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityLevel {
    High,
    Low,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashInfo {
    pub description: &'static str,
    pub security: SecurityLevel,
    pub use_case: &'static str,
}

impl HashAlgorithm {
    pub fn label(&self) -> &'static str {
        match self {
            HashAlgorithm::Bcrypt => "bcrypt (Recommended for passwords)",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Md5 => "MD5 (Not recommended for security)",
            HashAlgorithm::Sha1 => "SHA-1 (Not recommended for security)",
        }
    }

    pub fn info(&self) -> HashInfo {
        match self {
            HashAlgorithm::Bcrypt => HashInfo {
                description: "bcrypt is a password hashing function designed to be slow and secure against brute-force attacks.",
                security: SecurityLevel::High,
                use_case: "Password storage",
            },
            HashAlgorithm::Sha256 => HashInfo {
                description: "SHA-256 is a cryptographic hash function that produces a 256-bit hash value.",
                security: SecurityLevel::High,
                use_case: "Data integrity verification",
            },
            HashAlgorithm::Sha512 => HashInfo {
                description: "SHA-512 is a cryptographic hash function that produces a 512-bit hash value.",
                security: SecurityLevel::High,
                use_case: "Data integrity verification",
            },
            HashAlgorithm::Md5 => HashInfo {
                description: "MD5 is a widely used hash function producing a 128-bit hash value.",
                security: SecurityLevel::Low,
                use_case: "Checksums (not for security)",
            },
            HashAlgorithm::Sha1 => HashInfo {
                description: "SHA-1 is a cryptographic hash function producing a 160-bit hash value.",
                security: SecurityLevel::Low,
                use_case: "Legacy systems (not recommended)",
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HashResult {
    pub algorithm: HashAlgorithm,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    pub info: HashInfo,
}

/// Hash `input` with `algorithm`. `bcrypt_cost` only applies to bcrypt.
pub fn generate(input: &str, algorithm: HashAlgorithm, bcrypt_cost: u32) -> Result<HashResult> {
    if input.trim().is_empty() {
        bail!("nothing to hash: input is empty");
    }

    let (hash, cost) = match algorithm {
        HashAlgorithm::Bcrypt => {
            if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
                bail!(
                    "bcrypt salt rounds must be between {} and {} (got {})",
                    BCRYPT_COST_RANGE.start(),
                    BCRYPT_COST_RANGE.end(),
                    bcrypt_cost
                );
            }
            let hash = bcrypt::hash(input, bcrypt_cost)
                .map_err(|e| anyhow!("bcrypt hashing failed: {}", e))?;
            (hash, Some(bcrypt_cost))
        }
        HashAlgorithm::Sha256 => (hex::encode(Sha256::digest(input.as_bytes())), None),
        HashAlgorithm::Sha512 => (hex::encode(Sha512::digest(input.as_bytes())), None),
        HashAlgorithm::Md5 => (hex::encode(Md5::digest(input.as_bytes())), None),
        HashAlgorithm::Sha1 => (hex::encode(Sha1::digest(input.as_bytes())), None),
    };

    Ok(HashResult {
        algorithm,
        hash,
        cost,
        info: algorithm.info(),
    })
}

/// Check a plaintext against a bcrypt hash string.
pub fn verify_bcrypt(input: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(input, hash).map_err(|e| anyhow!("invalid bcrypt hash: {}", e))
}
