// SPDX-License-Identifier: PMPL-1.0-or-later

//! Symbology encoders: each turns validated input into a run of bar modules.
//!
//! `true` is a dark module (bar), `false` a light module (space). Widths are
//! in modules; the renderer decides how many pixels a module takes.

use anyhow::{anyhow, bail, Result};

// ─── Code 128 ────────────────────────────────────────────────────────

/// Bar/space widths for symbol values 0..=105, then the stop pattern.
const CODE128_PATTERNS: [&str; 107] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232", "2331112",
];

const CODE_C: u8 = 99;
const CODE_B: u8 = 100;
const CODE_A: u8 = 101;
const START_A: u8 = 103;
const START_B: u8 = 104;
const START_C: u8 = 105;
const STOP: usize = 106;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

impl CodeSet {
    fn start(self) -> u8 {
        match self {
            CodeSet::A => START_A,
            CodeSet::B => START_B,
            CodeSet::C => START_C,
        }
    }

    fn switch_to(self) -> u8 {
        match self {
            CodeSet::A => CODE_A,
            CodeSet::B => CODE_B,
            CodeSet::C => CODE_C,
        }
    }
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// A for control characters, B for everything else; decided by whichever
/// kind of character shows up first from `from` onwards.
fn text_set(bytes: &[u8], from: usize) -> CodeSet {
    for &b in &bytes[from..] {
        if b < 32 {
            return CodeSet::A;
        }
        if b >= 96 {
            return CodeSet::B;
        }
    }
    CodeSet::B
}

fn value_in(set: CodeSet, byte: u8) -> u8 {
    match set {
        CodeSet::A if byte < 32 => byte + 64,
        _ => byte - 32,
    }
}

fn fits(set: CodeSet, byte: u8) -> bool {
    match set {
        CodeSet::A => byte < 96,
        CodeSet::B => byte >= 32,
        CodeSet::C => false,
    }
}

/// Symbol values for `text`: start code, data, and checksum (no stop).
pub fn code128_values(text: &str) -> Result<Vec<u8>> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        bail!("CODE128 needs at least one character");
    }
    if let Some(bad) = text.chars().find(|c| !c.is_ascii()) {
        bail!("CODE128 cannot encode {:?} (ASCII only)", bad);
    }

    let leading = digit_run(bytes, 0);
    let mut set = if leading >= 4 || (leading == bytes.len() && leading % 2 == 0) {
        CodeSet::C
    } else {
        text_set(bytes, 0)
    };

    let mut values = vec![set.start()];
    let mut i = 0;
    while i < bytes.len() {
        if set == CodeSet::C {
            if digit_run(bytes, i) >= 2 {
                values.push((bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0'));
                i += 2;
                continue;
            }
            set = text_set(bytes, i);
            values.push(set.switch_to());
            continue;
        }

        if digit_run(bytes, i) >= 4 {
            set = CodeSet::C;
            values.push(CODE_C);
            continue;
        }

        let byte = bytes[i];
        if !fits(set, byte) {
            set = if set == CodeSet::A { CodeSet::B } else { CodeSet::A };
            values.push(set.switch_to());
        }
        values.push(value_in(set, byte));
        i += 1;
    }

    let checksum = values
        .iter()
        .enumerate()
        .map(|(pos, &value)| value as u32 * (pos.max(1) as u32))
        .sum::<u32>()
        % 103;
    values.push(checksum as u8);
    Ok(values)
}

pub fn code128(text: &str) -> Result<Vec<bool>> {
    let values = code128_values(text)?;
    let mut modules = Vec::with_capacity(values.len() * 11 + 13);
    for value in values {
        push_widths(&mut modules, CODE128_PATTERNS[value as usize]);
    }
    push_widths(&mut modules, CODE128_PATTERNS[STOP]);
    Ok(modules)
}

fn push_widths(modules: &mut Vec<bool>, widths: &str) {
    for (index, width) in widths.bytes().enumerate() {
        let dark = index % 2 == 0;
        for _ in 0..(width - b'0') {
            modules.push(dark);
        }
    }
}

fn push_bits(modules: &mut Vec<bool>, bits: &str) {
    modules.extend(bits.bytes().map(|b| b == b'1'));
}

// ─── GS1 family (EAN-13, EAN-8, UPC-A, ITF-14) ───────────────────────

/// Modulo-10 check digit with weights 3,1,3,... from the rightmost digit.
pub fn gs1_check_digit(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| d as u32 * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

fn parse_digits(text: &str, label: &str) -> Result<Vec<u8>> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        bail!("{} accepts digits only", label);
    }
    Ok(text.bytes().map(|b| b - b'0').collect())
}

/// Digits with a verified or appended check digit; `len` includes the check.
pub fn gs1_digits(text: &str, len: usize, label: &str) -> Result<Vec<u8>> {
    let mut digits = parse_digits(text, label)?;
    if digits.len() == len - 1 {
        digits.push(gs1_check_digit(&digits));
    } else if digits.len() == len {
        let expected = gs1_check_digit(&digits[..len - 1]);
        if digits[len - 1] != expected {
            bail!(
                "{} check digit is {} but {} was given",
                label,
                expected,
                digits[len - 1]
            );
        }
    } else {
        bail!("{} needs {} or {} digits", label, len - 1, len);
    }
    Ok(digits)
}

const EAN_L: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];
const EAN_G: [&str; 10] = [
    "0100111", "0110011", "0011011", "0100001", "0011101", "0111001", "0000101", "0010001",
    "0001001", "0010111",
];
const EAN_R: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];
/// Left-half parity for EAN-13, keyed by the leading digit.
const EAN13_PARITY: [&str; 10] = [
    "LLLLLL", "LLGLGG", "LLGGLG", "LLGGGL", "LGLLGG", "LGGLLG", "LGGGLL", "LGLGLG", "LGLGGL",
    "LGGLGL",
];

fn ean_halves(left: &[u8], parity: &str, right: &[u8]) -> Vec<bool> {
    let mut modules = Vec::with_capacity(95);
    push_bits(&mut modules, "101");
    for (&digit, kind) in left.iter().zip(parity.bytes()) {
        let table = if kind == b'G' { &EAN_G } else { &EAN_L };
        push_bits(&mut modules, table[digit as usize]);
    }
    push_bits(&mut modules, "01010");
    for &digit in right {
        push_bits(&mut modules, EAN_R[digit as usize]);
    }
    push_bits(&mut modules, "101");
    modules
}

pub fn ean13(digits: &[u8]) -> Vec<bool> {
    ean_halves(&digits[1..7], EAN13_PARITY[digits[0] as usize], &digits[7..])
}

pub fn ean8(digits: &[u8]) -> Vec<bool> {
    ean_halves(&digits[..4], "LLLL", &digits[4..])
}

pub fn upc_a(digits: &[u8]) -> Vec<bool> {
    ean_halves(&digits[..6], "LLLLLL", &digits[6..])
}

/// Narrow/wide pattern per digit; `1` is wide.
const ITF_PATTERNS: [&str; 10] = [
    "00110", "10001", "01001", "11000", "00101", "10100", "01100", "00011", "10010", "01010",
];
const ITF_WIDE: usize = 3;

pub fn itf(digits: &[u8]) -> Result<Vec<bool>> {
    if digits.len() % 2 != 0 {
        bail!("interleaved 2 of 5 needs an even number of digits");
    }
    let mut modules = Vec::new();
    push_bits(&mut modules, "1010");
    for pair in digits.chunks(2) {
        let bars = ITF_PATTERNS[pair[0] as usize].as_bytes();
        let spaces = ITF_PATTERNS[pair[1] as usize].as_bytes();
        for (bar, space) in bars.iter().zip(spaces) {
            let bar_width = if *bar == b'1' { ITF_WIDE } else { 1 };
            let space_width = if *space == b'1' { ITF_WIDE } else { 1 };
            modules.extend(std::iter::repeat(true).take(bar_width));
            modules.extend(std::iter::repeat(false).take(space_width));
        }
    }
    push_bits(&mut modules, "11101");
    Ok(modules)
}

// ─── MSI / Pharmacode ────────────────────────────────────────────────

pub fn msi(text: &str) -> Result<Vec<bool>> {
    let digits = parse_digits(text, "MSI")?;
    let mut modules = Vec::with_capacity(digits.len() * 12 + 7);
    push_bits(&mut modules, "110");
    for digit in digits {
        for shift in (0..4).rev() {
            let bit = if (digit >> shift) & 1 == 1 { "110" } else { "100" };
            push_bits(&mut modules, bit);
        }
    }
    push_bits(&mut modules, "1001");
    Ok(modules)
}

pub const PHARMACODE_MIN: u32 = 3;
pub const PHARMACODE_MAX: u32 = 131_070;

pub fn pharmacode(text: &str) -> Result<Vec<bool>> {
    let value: u32 = text
        .parse()
        .map_err(|_| anyhow!("Pharmacode accepts a whole number"))?;
    if !(PHARMACODE_MIN..=PHARMACODE_MAX).contains(&value) {
        bail!(
            "Pharmacode value must be between {} and {}",
            PHARMACODE_MIN,
            PHARMACODE_MAX
        );
    }

    // Built right to left: even remainders are wide bars, odd are narrow.
    let mut bars: Vec<&str> = Vec::new();
    let mut z = value;
    while z != 0 {
        if z % 2 == 0 {
            bars.push("11100");
            z = (z - 2) / 2;
        } else {
            bars.push("100");
            z = (z - 1) / 2;
        }
    }
    let mut modules = Vec::new();
    for bar in bars.iter().rev() {
        push_bits(&mut modules, bar);
    }
    // Drop the gap after the final bar.
    modules.truncate(modules.len() - 2);
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code128_patterns_are_eleven_modules() {
        for (value, pattern) in CODE128_PATTERNS.iter().enumerate() {
            let sum: u32 = pattern.bytes().map(|b| (b - b'0') as u32).sum();
            let expected = if value == STOP { 13 } else { 11 };
            assert_eq!(sum, expected, "pattern {} has width {}", value, sum);
        }
    }

    #[test]
    fn code128_text_uses_set_b() {
        let values = code128_values("PJJ123C").unwrap();
        assert_eq!(values, vec![START_B, 48, 42, 42, 17, 18, 19, 35, 55]);
    }

    #[test]
    fn code128_digits_use_set_c() {
        let values = code128_values("1234").unwrap();
        assert_eq!(values, vec![START_C, 12, 34, 82]);
    }

    #[test]
    fn code128_odd_digit_run_switches_back() {
        let values = code128_values("12345").unwrap();
        assert_eq!(&values[..5], &[START_C, 12, 34, CODE_B, 21]);
    }

    #[test]
    fn code128_switches_to_a_for_control_characters() {
        let values = code128_values("A\tB").unwrap();
        assert_eq!(&values[..4], &[START_A, 33, 73, 34]);
    }

    #[test]
    fn code128_rejects_non_ascii() {
        assert!(code128("naïve").is_err());
        assert!(code128("").is_err());
    }

    #[test]
    fn code128_module_count() {
        let modules = code128("ABC").unwrap();
        // start + 3 data + checksum, then the stop pattern
        assert_eq!(modules.len(), 5 * 11 + 13);
        assert!(modules[0]);
    }

    #[test]
    fn gs1_check_digits_match_published_examples() {
        assert_eq!(gs1_check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        assert_eq!(gs1_check_digit(&[9, 6, 3, 8, 5, 0, 7]), 4);
        assert_eq!(gs1_check_digit(&[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5]), 2);
    }

    #[test]
    fn gs1_digits_validates_given_check_digit() {
        assert_eq!(gs1_digits("96385074", 8, "EAN-8").unwrap().len(), 8);
        assert!(gs1_digits("96385075", 8, "EAN-8").is_err());
        assert!(gs1_digits("963850", 8, "EAN-8").is_err());
        assert!(gs1_digits("9638507a", 8, "EAN-8").is_err());
    }

    #[test]
    fn ean_and_upc_have_fixed_widths() {
        let ean13_digits = gs1_digits("400638133393", 13, "EAN-13").unwrap();
        assert_eq!(ean13(&ean13_digits).len(), 95);
        let ean8_digits = gs1_digits("9638507", 8, "EAN-8").unwrap();
        assert_eq!(ean8(&ean8_digits).len(), 67);
        let upc_digits = gs1_digits("03600029145", 12, "UPC").unwrap();
        assert_eq!(upc_a(&upc_digits).len(), 95);
    }

    #[test]
    fn ean13_first_digit_sets_parity() {
        // Leading 0 keeps the left half in odd parity, identical to UPC-A.
        let upc = gs1_digits("03600029145", 12, "UPC").unwrap();
        let mut ean = vec![0];
        ean.extend_from_slice(&upc);
        assert_eq!(ean13(&ean), upc_a(&upc));
    }

    #[test]
    fn itf14_width() {
        let digits = gs1_digits("1540014128876", 14, "ITF-14").unwrap();
        assert_eq!(itf(&digits).unwrap().len(), 4 + 7 * 18 + 5);
        assert!(itf(&[1, 2, 3]).is_err());
    }

    #[test]
    fn msi_encodes_bcd() {
        let modules = msi("1").unwrap();
        let bits: String = modules.iter().map(|m| if *m { '1' } else { '0' }).collect();
        assert_eq!(bits, "110".to_string() + "100100100110" + "1001");
        assert!(msi("12a").is_err());
    }

    #[test]
    fn pharmacode_bars() {
        let bits = |v: &str| -> String {
            pharmacode(v)
                .unwrap()
                .iter()
                .map(|m| if *m { '1' } else { '0' })
                .collect()
        };
        assert_eq!(bits("3"), "1001");
        assert_eq!(bits("4"), "100111");
        assert!(pharmacode("2").is_err());
        assert!(pharmacode("131071").is_err());
        assert!(pharmacode("12.5").is_err());
    }
}
