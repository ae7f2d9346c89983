// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language codes offered by the translator.
//!
//! Codes are ISO 639-1 two-letter codes, plus `zh-TW` for Traditional Chinese
//! and the `auto` pseudo-code for source-language detection.

pub const AUTO: &str = "auto";

/// `(code, English name)` in selector order. `auto` is only valid as a source.
pub const LANGUAGES: &[(&str, &str)] = &[
    (AUTO, "Auto-detect"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("da", "Danish"),
    ("no", "Norwegian"),
    ("fi", "Finnish"),
    ("pl", "Polish"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("hu", "Hungarian"),
    ("ro", "Romanian"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sr", "Serbian"),
    ("sl", "Slovenian"),
    ("et", "Estonian"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("uk", "Ukrainian"),
    ("be", "Belarusian"),
    ("mk", "Macedonian"),
    ("mt", "Maltese"),
    ("ga", "Irish"),
    ("cy", "Welsh"),
    ("is", "Icelandic"),
    ("sq", "Albanian"),
    ("az", "Azerbaijani"),
    ("hy", "Armenian"),
    ("ka", "Georgian"),
    ("he", "Hebrew"),
    ("ur", "Urdu"),
    ("fa", "Persian"),
    ("tr", "Turkish"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Filipino"),
    ("sw", "Swahili"),
    ("am", "Amharic"),
    ("bn", "Bengali"),
    ("gu", "Gujarati"),
    ("kn", "Kannada"),
    ("ml", "Malayalam"),
    ("mr", "Marathi"),
    ("ne", "Nepali"),
    ("pa", "Punjabi"),
    ("si", "Sinhala"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
];

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

pub fn is_supported(code: &str) -> bool {
    language_name(code).is_some()
}
