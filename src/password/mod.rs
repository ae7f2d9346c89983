// SPDX-License-Identifier: PMPL-1.0-or-later

//! Password generator and strength meter

use crate::random;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

pub const LENGTH_RANGE: RangeInclusive<usize> = 4..=50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self {
            length: 16,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

impl PasswordOptions {
    /// Concatenated character set for the enabled classes, in fixed order.
    pub fn charset(&self) -> String {
        let mut charset = String::new();
        if self.uppercase {
            charset.push_str(UPPERCASE);
        }
        if self.lowercase {
            charset.push_str(LOWERCASE);
        }
        if self.numbers {
            charset.push_str(NUMBERS);
        }
        if self.symbols {
            charset.push_str(SYMBOLS);
        }
        charset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Generate a password")]
    Empty,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Empty => "Generate a password",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StrengthLabel::Empty => "white",
            StrengthLabel::Weak => "red",
            StrengthLabel::Medium => "yellow",
            StrengthLabel::Strong => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Strength {
    pub score: u8,
    pub label: StrengthLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub strength: Strength,
}

pub fn generate(options: &PasswordOptions) -> Result<GeneratedPassword> {
    if !LENGTH_RANGE.contains(&options.length) {
        bail!(
            "password length must be between {} and {} (got {})",
            LENGTH_RANGE.start(),
            LENGTH_RANGE.end(),
            options.length
        );
    }

    let charset: Vec<char> = options.charset().chars().collect();
    if charset.is_empty() {
        bail!("select at least one character class");
    }

    let mut password = String::with_capacity(options.length);
    for _ in 0..options.length {
        password.push(*random::choose(&charset)?);
    }

    let strength = strength(&password);
    Ok(GeneratedPassword {
        length: options.length,
        password,
        strength,
    })
}

pub fn strength(password: &str) -> Strength {
    if password.is_empty() {
        return Strength {
            score: 0,
            label: StrengthLabel::Empty,
        };
    }

    let length = password.chars().count();
    let checks = [
        length >= 8,
        length >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|hit| **hit).count() as u8;

    let label = match score {
        0..=2 => StrengthLabel::Weak,
        3..=4 => StrengthLabel::Medium,
        _ => StrengthLabel::Strong,
    };
    Strength { score, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_follows_class_order() {
        let options = PasswordOptions {
            uppercase: false,
            symbols: true,
            ..PasswordOptions::default()
        };
        assert_eq!(options.charset(), format!("{}{}{}", LOWERCASE, NUMBERS, SYMBOLS));
    }

    #[test]
    fn strength_scoring_matches_thresholds() {
        assert_eq!(strength("").label, StrengthLabel::Empty);
        assert_eq!(strength("abc").score, 1);
        assert_eq!(strength("abc").label, StrengthLabel::Weak);
        assert_eq!(strength("abcdefgh1").score, 3);
        assert_eq!(strength("abcdefgh1").label, StrengthLabel::Medium);
        assert_eq!(strength("Abcdefgh12").score, 4);
        assert_eq!(strength("Abcdefgh1234").score, 5);
        assert_eq!(strength("Abcdefgh1234").label, StrengthLabel::Strong);
        assert_eq!(strength("Abcdefgh123!").score, 6);
    }

    #[test]
    fn non_ascii_counts_as_symbol() {
        assert_eq!(strength("é").score, 1);
    }
}
