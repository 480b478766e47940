//! Gematria - 拉丁转写计算希伯来数值
//!
//! ## 处理流程
//! 1. 归一化（保留 `A`-`Z`，转大写）
//! 2. 组合检测（相邻字母表示一个希伯来字母）
//! 3. 组合构建（合并检测到的字母对）
//! 4. 词尾形式（仅最后一个符号）
//! 5. 查表求和

mod combo;
mod engine;
mod finals;
mod normalizer;
mod tables;
mod types;

use anyhow::Result;

pub use combo::{ComboBuilder, ComboDetector, ComboPair};
pub use engine::GematriaEngine;
pub use finals::FinalFormResolver;
pub use normalizer::Normalizer;
pub use tables::{numeral_value, LetterValueTable, LETTER_VALUES};
pub use types::{PhraseGematria, Symbol, WordGematria};

/// 用默认引擎解析单词
pub fn parse(word: &str) -> Vec<Symbol> {
    GematriaEngine::default().parse(word)
}

/// 用默认引擎计算符号数值
pub fn score(symbols: &[Symbol]) -> Result<u64> {
    GematriaEngine::default().score(symbols)
}

/// 用默认引擎解析并计算单词
pub fn compute(word: &str) -> Result<WordGematria> {
    GematriaEngine::default().compute(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_of_parse_is_never_negative() {
        for word in ["", "!!!", "shalom", "Tzitzit", "ÉCOLE", "ph th sh"] {
            let symbols = parse(word);
            assert!(score(&symbols).is_ok());
        }
        assert_eq!(score(&parse("")).unwrap(), 0);
    }

    #[test]
    fn test_compute_shortcut() {
        let result = compute("chutzpah").unwrap();
        assert_eq!(result.value, 190);
        assert_eq!(result.input, "chutzpah");
    }
}
