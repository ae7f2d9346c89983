// SPDX-License-Identifier: PMPL-1.0-or-later

//! Offline phrase table used when no translation service answers.
//!
//! Entries are matched in table order, so the order below is significant:
//! the first phrase contained in the input wins.

use super::languages;

type Phrase = (&'static str, &'static [(&'static str, &'static str)]);

pub const PHRASES: &[Phrase] = &[
    (
        "hello",
        &[
            ("es", "hola"),
            ("fr", "bonjour"),
            ("de", "hallo"),
            ("it", "ciao"),
            ("pt", "olá"),
            ("ru", "привет"),
            ("ja", "こんにちは"),
            ("ko", "안녕하세요"),
            ("zh", "你好"),
            ("ar", "مرحبا"),
            ("hi", "नमस्ते"),
            ("th", "สวัสดี"),
            ("vi", "xin chào"),
            ("nl", "hallo"),
            ("sv", "hej"),
            ("da", "hej"),
            ("no", "hei"),
            ("fi", "hei"),
            ("pl", "cześć"),
            ("cs", "ahoj"),
            ("tr", "merhaba"),
            ("he", "שלום"),
        ],
    ),
    (
        "goodbye",
        &[
            ("es", "adiós"),
            ("fr", "au revoir"),
            ("de", "auf wiedersehen"),
            ("it", "arrivederci"),
            ("pt", "tchau"),
            ("ru", "до свидания"),
            ("ja", "さようなら"),
            ("ko", "안녕히 가세요"),
            ("zh", "再见"),
            ("ar", "مع السلامة"),
            ("hi", "अलविदा"),
            ("th", "ลาก่อน"),
            ("vi", "tạm biệt"),
            ("nl", "tot ziens"),
            ("sv", "hej då"),
            ("tr", "güle güle"),
        ],
    ),
    (
        "thank you",
        &[
            ("es", "gracias"),
            ("fr", "merci"),
            ("de", "danke"),
            ("it", "grazie"),
            ("pt", "obrigado"),
            ("ru", "спасибо"),
            ("ja", "ありがとう"),
            ("ko", "감사합니다"),
            ("zh", "谢谢"),
            ("ar", "شكرا"),
            ("hi", "धन्यवाद"),
            ("th", "ขอบคุณ"),
            ("vi", "cảm ơn"),
            ("nl", "dank je"),
            ("sv", "tack"),
            ("tr", "teşekkür ederim"),
        ],
    ),
    (
        "please",
        &[
            ("es", "por favor"),
            ("fr", "s'il vous plaît"),
            ("de", "bitte"),
            ("it", "per favore"),
            ("pt", "por favor"),
            ("ru", "пожалуйста"),
            ("ja", "お願いします"),
            ("ko", "부탁합니다"),
            ("zh", "请"),
            ("ar", "من فضلك"),
            ("hi", "कृपया"),
            ("th", "โปรด"),
            ("vi", "xin vui lòng"),
        ],
    ),
    (
        "yes",
        &[
            ("es", "sí"),
            ("fr", "oui"),
            ("de", "ja"),
            ("it", "sì"),
            ("pt", "sim"),
            ("ru", "да"),
            ("ja", "はい"),
            ("ko", "네"),
            ("zh", "是"),
            ("ar", "نعم"),
            ("hi", "हाँ"),
            ("th", "ใช่"),
            ("vi", "có"),
            ("nl", "ja"),
            ("sv", "ja"),
        ],
    ),
    (
        "no",
        &[
            ("es", "no"),
            ("fr", "non"),
            ("de", "nein"),
            ("it", "no"),
            ("pt", "não"),
            ("ru", "нет"),
            ("ja", "いいえ"),
            ("ko", "아니요"),
            ("zh", "不"),
            ("ar", "لا"),
            ("hi", "नहीं"),
            ("th", "ไม่"),
            ("vi", "không"),
            ("nl", "nee"),
            ("sv", "nej"),
        ],
    ),
    (
        "excuse me",
        &[
            ("es", "disculpe"),
            ("fr", "excusez-moi"),
            ("de", "entschuldigung"),
            ("it", "scusi"),
            ("pt", "com licença"),
            ("ru", "извините"),
            ("ja", "すみません"),
            ("ko", "실례합니다"),
            ("zh", "不好意思"),
            ("ar", "عذرا"),
            ("hi", "माफ़ करें"),
        ],
    ),
    (
        "how are you",
        &[
            ("es", "¿cómo estás?"),
            ("fr", "comment allez-vous?"),
            ("de", "wie geht es dir?"),
            ("it", "come stai?"),
            ("pt", "como você está?"),
            ("ru", "как дела?"),
            ("ja", "元気ですか？"),
            ("ko", "어떻게 지내세요?"),
            ("zh", "你好吗？"),
        ],
    ),
    (
        "good morning",
        &[
            ("es", "buenos días"),
            ("fr", "bonjour"),
            ("de", "guten morgen"),
            ("it", "buongiorno"),
            ("pt", "bom dia"),
            ("ru", "доброе утро"),
            ("ja", "おはよう"),
            ("ko", "좋은 아침"),
            ("zh", "早上好"),
            ("ar", "صباح الخير"),
            ("hi", "सुप्रभात"),
        ],
    ),
    (
        "good night",
        &[
            ("es", "buenas noches"),
            ("fr", "bonne nuit"),
            ("de", "gute nacht"),
            ("it", "buonanotte"),
            ("pt", "boa noite"),
            ("ru", "спокойной ночи"),
            ("ja", "おやすみ"),
            ("ko", "좋은 밤"),
            ("zh", "晚安"),
            ("ar", "تصبح على خير"),
            ("hi", "शुभ रात्रि"),
        ],
    ),
    (
        "i love you",
        &[
            ("es", "te amo"),
            ("fr", "je t'aime"),
            ("de", "ich liebe dich"),
            ("it", "ti amo"),
            ("pt", "eu te amo"),
            ("ru", "я тебя люблю"),
            ("ja", "愛してる"),
            ("ko", "사랑해"),
            ("zh", "我爱你"),
            ("ar", "أحبك"),
            ("hi", "मैं तुमसे प्यार करता हूँ"),
        ],
    ),
    (
        "what is your name",
        &[
            ("es", "¿cómo te llamas?"),
            ("fr", "comment vous appelez-vous?"),
            ("de", "wie heißt du?"),
            ("it", "come ti chiami?"),
            ("pt", "qual é o seu nome?"),
            ("ru", "как тебя зовут?"),
            ("ja", "お名前は何ですか？"),
            ("ko", "이름이 뭐예요?"),
            ("zh", "你叫什么名字？"),
        ],
    ),
    (
        "where is",
        &[
            ("es", "¿dónde está?"),
            ("fr", "où est?"),
            ("de", "wo ist?"),
            ("it", "dove è?"),
            ("pt", "onde está?"),
            ("ru", "где находится?"),
            ("ja", "どこですか？"),
            ("ko", "어디에 있어요?"),
            ("zh", "在哪里？"),
            ("ar", "أين"),
            ("hi", "कहाँ है"),
        ],
    ),
    (
        "how much",
        &[
            ("es", "¿cuánto cuesta?"),
            ("fr", "combien ça coûte?"),
            ("de", "wie viel kostet?"),
            ("it", "quanto costa?"),
            ("pt", "quanto custa?"),
            ("ru", "сколько стоит?"),
            ("ja", "いくらですか？"),
            ("ko", "얼마예요?"),
            ("zh", "多少钱？"),
        ],
    ),
    (
        "i don't understand",
        &[
            ("es", "no entiendo"),
            ("fr", "je ne comprends pas"),
            ("de", "ich verstehe nicht"),
            ("it", "non capisco"),
            ("pt", "não entendo"),
            ("ru", "я не понимаю"),
            ("ja", "わかりません"),
            ("ko", "이해하지 못해요"),
            ("zh", "我不明白"),
        ],
    ),
    (
        "help",
        &[
            ("es", "ayuda"),
            ("fr", "aide"),
            ("de", "hilfe"),
            ("it", "aiuto"),
            ("pt", "ajuda"),
            ("ru", "помощь"),
            ("ja", "助けて"),
            ("ko", "도움"),
            ("zh", "帮助"),
            ("ar", "مساعدة"),
            ("hi", "मदद"),
            ("th", "ช่วย"),
            ("vi", "giúp đỡ"),
        ],
    ),
];

fn mapping(entry: &Phrase, target: &str) -> Option<&'static str> {
    entry
        .1
        .iter()
        .find(|(code, _)| *code == target)
        .map(|(_, text)| *text)
}

/// Look `text` up in the phrase table; `None` when nothing matches.
///
/// An exact match on the lowercased, trimmed text wins; otherwise the first
/// table entry contained in the text (and mapped for `target`) is used.
pub fn lookup(text: &str, target: &str) -> Option<&'static str> {
    let needle = text.to_lowercase();
    let needle = needle.trim();

    let exact = PHRASES
        .iter()
        .find(|entry| entry.0 == needle)
        .and_then(|entry| mapping(entry, target));
    if exact.is_some() {
        return exact;
    }

    PHRASES
        .iter()
        .filter(|entry| needle.contains(entry.0))
        .find_map(|entry| mapping(entry, target))
}

/// Phrase-table translation, or a bracket-tagged passthrough of `text`.
pub fn translate(text: &str, target: &str) -> String {
    match lookup(text, target) {
        Some(found) => found.to_string(),
        None => {
            let name = languages::language_name(target)
                .map(str::to_string)
                .unwrap_or_else(|| target.to_uppercase());
            format!("[{} translation] {}", name, text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case_and_padding() {
        assert_eq!(lookup("  Hello ", "es"), Some("hola"));
        assert_eq!(lookup("THANK YOU", "ja"), Some("ありがとう"));
    }

    #[test]
    fn substring_match_uses_table_order() {
        // "hello" precedes "how are you" in the table.
        assert_eq!(lookup("hello, how are you", "fr"), Some("bonjour"));
        // Matching is plain containment, not whole words.
        assert_eq!(lookup("I do not know", "de"), Some("nein"));
    }

    #[test]
    fn entries_without_target_mapping_are_skipped() {
        assert_eq!(lookup("excuse me", "sv"), None);
        assert_eq!(lookup("excuse me, help", "sv"), None);
        assert_eq!(lookup("excuse me, help", "vi"), Some("giúp đỡ"));
    }

    #[test]
    fn passthrough_is_bracket_tagged() {
        assert_eq!(
            translate("The quick fox", "de"),
            "[German translation] The quick fox"
        );
        assert_eq!(translate("zzz", "xx"), "[XX translation] zzz");
    }

    #[test]
    fn found_phrase_is_returned_verbatim() {
        assert_eq!(translate("Good Morning", "it"), "buongiorno");
    }
}
