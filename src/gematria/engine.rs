//! Gematria 主引擎
//!
//! 组合归一化、组合检测、组合构建、词尾形式替换，最后累加字母数值

use anyhow::Result;

use crate::gematria::combo::{ComboBuilder, ComboDetector};
use crate::gematria::finals::FinalFormResolver;
use crate::gematria::normalizer::Normalizer;
use crate::gematria::tables::{LetterValueTable, LETTER_VALUES};
use crate::gematria::types::{PhraseGematria, Symbol, WordGematria};

/// Gematria 引擎（无状态，共享进程级字母表）
pub struct GematriaEngine {
    values: &'static LetterValueTable,
}

impl GematriaEngine {
    pub fn new() -> Self {
        Self {
            values: &LETTER_VALUES,
        }
    }

    /// 解析单词为符号序列
    ///
    /// 不可失败：不含拉丁字母的输入返回空序列
    pub fn parse(&self, word: &str) -> Vec<Symbol> {
        // 1. 归一化
        let letters = Normalizer::letters(word);

        // 2. 检测组合
        let combos = ComboDetector::detect(&letters);
        tracing::debug!("解析 {:?}: letters={:?}, combos={:?}", word, letters, combos);

        // 3. 构建组合（归一化只产出 A-Z，检测器只产出可合并的相邻对）
        let symbols = ComboBuilder::build(&letters, &combos)
            .expect("归一化字母与检测到的组合总能构建");

        // 4. 词尾形式
        FinalFormResolver::resolve(symbols)
    }

    /// 累加符号序列的数值
    ///
    /// 字母表中缺失的符号视为不变量被破坏，直接报错，不按 0 计分
    pub fn score(&self, symbols: &[Symbol]) -> Result<u64> {
        symbols.iter().try_fold(0u64, |total, &symbol| {
            let value = self
                .values
                .value(symbol)
                .ok_or_else(|| anyhow::anyhow!("字母表中缺少符号 {}", symbol))?;
            Ok(total + u64::from(value))
        })
    }

    /// 按文本形式（`"CH"`、`"N_FINAL"` 等）计分
    pub fn score_tokens(&self, tokens: &[&str]) -> Result<u64> {
        let symbols = tokens
            .iter()
            .map(|token| token.parse::<Symbol>())
            .collect::<Result<Vec<_>>>()?;
        self.score(&symbols)
    }

    /// 解析并计算单个单词
    pub fn compute(&self, word: &str) -> Result<WordGematria> {
        let symbols = self.parse(word);
        let value = self.score(&symbols)?;
        tracing::debug!("{:?} -> {:?} = {}", word, symbols, value);
        Ok(WordGematria::new(word, symbols, value))
    }

    /// 按空白切分短语，逐词独立计算并求和
    ///
    /// 组合与词尾形式不跨词。不含拉丁字母的词不计入明细。
    pub fn compute_phrase(&self, text: &str) -> Result<PhraseGematria> {
        let mut words = Vec::new();
        for word in text.split_whitespace() {
            let result = self.compute(word)?;
            if result.symbols.is_empty() {
                tracing::debug!("跳过 {:?}：不含拉丁字母", word);
                continue;
            }
            words.push(result);
        }

        let total = words.iter().map(|w| w.value).sum::<u64>();
        Ok(PhraseGematria {
            input: text.to_string(),
            words,
            total,
        })
    }
}

impl Default for GematriaEngine {
    fn default() -> Self {
        Self::new()
    }
}
