//! 输入归一化
//!
//! 只保留输入中的拉丁字母，转大写，保持原有顺序。

use unicode_normalization::UnicodeNormalization;

/// 归一化器
pub struct Normalizer;

impl Normalizer {
    /// 归一化为 `A`-`Z` 序列
    ///
    /// 先做 NFC 组合，带重音的字母无论是预组合还是“基字母 + 附加符号”形式都整体去掉
    pub fn normalize(text: &str) -> String {
        text.nfc()
            .filter(char::is_ascii_alphabetic)
            .map(|ch| ch.to_ascii_uppercase())
            .collect()
    }

    /// 归一化后的字母序列
    pub fn letters(text: &str) -> Vec<char> {
        Self::normalize(text).chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_non_letters() {
        assert_eq!(Normalizer::normalize(" b"), "B");
        assert_eq!(Normalizer::normalize("c!"), "C");
        assert_eq!(Normalizer::normalize("Sh-a l0m?"), "SHALM");
        assert_eq!(Normalizer::normalize(""), "");
        assert_eq!(Normalizer::normalize("123 !?"), "");
    }

    #[test]
    fn test_normalize_drops_accented_letters() {
        // 预组合与分解形式结果一致
        assert_eq!(Normalizer::normalize("caf\u{e9}"), "CAF");
        assert_eq!(Normalizer::normalize("cafe\u{301}"), "CAF");
        assert_eq!(Normalizer::normalize("שלום"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in ["chutzpah", "  Pants!! ", "ÀbC-dé", "", "x1y2z3"] {
            let once = Normalizer::normalize(text);
            assert_eq!(Normalizer::normalize(&once), once);
        }
    }

    #[test]
    fn test_letters() {
        assert_eq!(Normalizer::letters("ch"), vec!['C', 'H']);
        assert!(Normalizer::letters("!").is_empty());
    }
}
