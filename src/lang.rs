use std::collections::HashMap;

use lazy_static::lazy_static;

/// Voice code used when the requested language has no mapping.
pub const DEFAULT_VOICE: &str = "hi";

lazy_static! {
    /// Short target-language code -> locale code expected by the TTS backend.
    static ref LANG_MAP: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("hi", "hi"); // Hindi
        m.insert("fr", "fr"); // French
        m.insert("es", "es"); // Spanish
        m.insert("de", "de"); // German
        m.insert("it", "it"); // Italian
        m.insert("ja", "ja"); // Japanese
        m.insert("ko", "ko"); // Korean
        m.insert("zh", "zh-cn"); // Chinese
        m.insert("ar", "ar"); // Arabic
        m.insert("pt", "pt"); // Portuguese
        m
    };
}

/// Resolve a request's target language to a synthesis voice code.
/// Unknown codes fall back to [`DEFAULT_VOICE`] rather than failing.
pub fn voice_code(target_lang: &str) -> &'static str {
    LANG_MAP.get(target_lang).copied().unwrap_or(DEFAULT_VOICE)
}

/// All (language, voice) pairs in the map, sorted by language code.
pub fn supported() -> Vec<(&'static str, &'static str)> {
    let mut pairs: Vec<_> = LANG_MAP.iter().map(|(k, v)| (*k, *v)).collect();
    pairs.sort_by_key(|(code, _)| *code);
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_codes() {
        assert_eq!(voice_code("fr"), "fr");
        assert_eq!(voice_code("pt"), "pt");
    }

    #[test]
    fn chinese_normalizes_to_region_variant() {
        assert_eq!(voice_code("zh"), "zh-cn");
    }

    #[test]
    fn unknown_code_falls_back_to_default() {
        assert_eq!(voice_code("xx"), DEFAULT_VOICE);
        assert_eq!(voice_code(""), DEFAULT_VOICE);
    }

    #[test]
    fn supported_is_sorted_and_complete() {
        let pairs = supported();
        assert_eq!(pairs.len(), 10);
        let mut sorted = pairs.clone();
        sorted.sort_by_key(|(code, _)| *code);
        assert_eq!(pairs, sorted);
    }
}
