// SPDX-License-Identifier: PMPL-1.0-or-later

//! OS-backed randomness for password characters and mock video metadata.

use anyhow::{anyhow, bail, Result};

fn random_u32() -> Result<u32> {
    let mut buf = [0u8; 4];
    getrandom::getrandom(&mut buf).map_err(|e| anyhow!("OS randomness unavailable: {}", e))?;
    Ok(u32::from_le_bytes(buf))
}

/// Uniform index in `0..bound`.
///
/// Rejection sampling keeps the distribution flat: values from the short
/// final bucket of the `u32` range are drawn again rather than folded in.
pub fn random_below(bound: usize) -> Result<usize> {
    if bound == 0 {
        bail!("cannot pick from an empty range");
    }
    let bound = u32::try_from(bound).map_err(|_| anyhow!("range too large: {}", bound))?;
    let zone = u32::MAX - (u32::MAX % bound);
    loop {
        let value = random_u32()?;
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}

/// Uniform float in `[0, 1)`.
pub fn random_unit() -> Result<f64> {
    let mut buf = [0u8; 8];
    getrandom::getrandom(&mut buf).map_err(|e| anyhow!("OS randomness unavailable: {}", e))?;
    // 53 high bits fill the f64 mantissa exactly.
    Ok((u64::from_le_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64)
}

pub fn choose<T>(items: &[T]) -> Result<&T> {
    Ok(&items[random_below(items.len())?])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_below_stays_in_range() {
        for bound in [1usize, 2, 7, 62, 88] {
            for _ in 0..200 {
                assert!(random_below(bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn random_below_rejects_empty_range() {
        assert!(random_below(0).is_err());
        assert!(choose::<u8>(&[]).is_err());
    }

    #[test]
    fn random_unit_is_half_open() {
        for _ in 0..500 {
            let value = random_unit().unwrap();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn random_below_reaches_every_value() {
        let mut seen = [false; 4];
        for _ in 0..400 {
            seen[random_below(4).unwrap()] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
