/// Console messages in the user's language.
///
/// Language is detected once at startup from environment variables
/// (LANGUAGE → LC_ALL → LC_MESSAGES → LANG). Japanese when the locale
/// starts with `ja`, English otherwise.
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ja,
    En, // default fallback
}

static LANG: OnceLock<Lang> = OnceLock::new();

/// Return the globally-detected language (detected once and cached).
pub fn lang() -> Lang {
    *LANG.get_or_init(detect_lang)
}

fn detect_lang() -> Lang {
    for var in &["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(val) = std::env::var(var) {
            // LANGUAGE can be a colon-separated list; take the first entry
            let first = val.split(':').next().unwrap_or(&val).to_string();
            if let Some(l) = parse_lang(&first) {
                return l;
            }
        }
    }
    Lang::En
}

fn parse_lang(s: &str) -> Option<Lang> {
    // Strip encoding suffix (e.g. "ja_JP.UTF-8" → "ja_JP")
    let s = s.split('.').next().unwrap_or(s);
    let lower = s.to_lowercase();
    if lower.starts_with("ja") {
        return Some(Lang::Ja);
    }
    if lower.is_empty() || lower == "c" || lower == "posix" {
        return None;
    }
    Some(Lang::En)
}

/// Look up a message for the current system language.
/// The key must be a `&'static str` (a string literal).
pub fn t(key: &'static str) -> &'static str {
    lookup(key, lang())
}

/// Look up a message for a specific language (useful in tests).
pub fn t_lang(key: &'static str, lang: Lang) -> &'static str {
    lookup(key, lang)
}

fn lookup(key: &'static str, lang: Lang) -> &'static str {
    match (key, lang) {
        ("select_instruction", Lang::Ja) => "問題番号を入力してください。終了する場合は `q` を入力してください。",
        ("select_instruction", _) => "Enter a problem number. Enter `q` to quit.",

        ("not_a_number", Lang::Ja) => "無効な入力です。数字を入力してください。",
        ("not_a_number", _) => "Invalid input. Please enter a number.",

        // Followed by the upper bound
        ("out_of_range_prefix", Lang::Ja) => "1から",
        ("out_of_range_prefix", _) => "Please enter a number from 1 to ",
        ("out_of_range_suffix", Lang::Ja) => "の範囲で入力してください。",
        ("out_of_range_suffix", _) => ".",

        ("goodbye", Lang::Ja) => "終了します。",
        ("goodbye", _) => "Bye.",

        ("no_problems", Lang::Ja) => "問題ファイルが見つかりません。",
        ("no_problems", _) => "No problem files found.",

        ("waiting", Lang::Ja) => "回答を待っています...",
        ("waiting", _) => "Waiting for the answer...",

        _ => key,
    }
}

/// "Please enter 1..=max" in the current language.
pub fn out_of_range(max: usize) -> String {
    out_of_range_lang(max, lang())
}

pub fn out_of_range_lang(max: usize, lang: Lang) -> String {
    format!(
        "{}{max}{}",
        t_lang("out_of_range_prefix", lang),
        t_lang("out_of_range_suffix", lang)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "select_instruction",
        "not_a_number",
        "out_of_range_prefix",
        "out_of_range_suffix",
        "goodbye",
        "no_problems",
        "waiting",
    ];

    // ── parse_lang ────────────────────────────────────────────────

    #[test]
    fn parse_lang_japanese_with_encoding() {
        assert_eq!(parse_lang("ja_JP.UTF-8"), Some(Lang::Ja));
        assert_eq!(parse_lang("ja"), Some(Lang::Ja));
    }

    #[test]
    fn parse_lang_other_locales_are_english() {
        assert_eq!(parse_lang("en_US.UTF-8"), Some(Lang::En));
        assert_eq!(parse_lang("fr_FR"), Some(Lang::En));
    }

    #[test]
    fn parse_lang_c_locale_is_undecided() {
        assert_eq!(parse_lang("C"), None);
        assert_eq!(parse_lang("POSIX"), None);
        assert_eq!(parse_lang(""), None);
    }

    // ── lookup ────────────────────────────────────────────────────

    #[test]
    fn every_key_defined_in_every_language() {
        for key in KEYS {
            for lang in [Lang::Ja, Lang::En] {
                let s = t_lang(*key, lang);
                assert!(!s.is_empty(), "key={key} lang={lang:?}");
                assert_ne!(s, *key, "key={key} fell through to raw key fallback");
            }
        }
    }

    #[test]
    fn unknown_key_returns_key() {
        assert_eq!(t_lang("nonexistent_key", Lang::En), "nonexistent_key");
    }

    #[test]
    fn out_of_range_ja() {
        assert_eq!(out_of_range_lang(3, Lang::Ja), "1から3の範囲で入力してください。");
    }

    #[test]
    fn out_of_range_en() {
        assert_eq!(out_of_range_lang(0, Lang::En), "Please enter a number from 1 to 0.");
    }

    #[test]
    fn instruction_mentions_exit_token() {
        for lang in [Lang::Ja, Lang::En] {
            assert!(t_lang("select_instruction", lang).contains("`q`"));
        }
    }
}
