//! 双字母组合
//!
//! 部分希伯来字母没有单个拉丁字母对应，需要用两个字母表示
//! （`CH`、`PH`、`SH`、`TH`、`TS`、`TZ`）。检测器找出这些相邻字母对，
//! 构建器把它们合并为一个符号。

use anyhow::Result;
use std::collections::{HashMap, HashSet};

use crate::gematria::tables::COMBO_BOUNDARIES;
use crate::gematria::types::Symbol;

/// 组合在字母序列中的下标对 `(start, start + 1)`
pub type ComboPair = (usize, usize);

/// 组合检测器
pub struct ComboDetector;

impl ComboDetector {
    /// 查找组合
    ///
    /// 从左到右贪心匹配：命中后两个字母都被消耗，从第二个字母之后继续扫描，
    /// 因此组合之间不会共享下标。
    ///
    /// 只有合并结果是字母表中的符号才算组合，所以 `SS`、`CZ`、`PS`
    /// 虽然满足首尾字母集合，也不会合并。
    pub fn detect(letters: &[char]) -> Vec<ComboPair> {
        let mut combos = Vec::new();
        let mut idx = 0;

        while idx + 1 < letters.len() {
            if COMBO_BOUNDARIES
                .joins(letters[idx], letters[idx + 1])
                .is_some()
            {
                combos.push((idx, idx + 1));
                idx += 2;
            } else {
                idx += 1;
            }
        }

        combos
    }
}

/// 组合构建器
pub struct ComboBuilder;

impl ComboBuilder {
    /// 合并组合为符号
    ///
    /// 每个组合的起始位置替换为拼接后的符号，所有组合的结束位置在同一趟中移除。
    ///
    /// 以下输入返回错误而不是静默丢弃（丢弃等同于按 0 计分）：
    /// - `A`-`Z` 以外的字母
    /// - 不相邻、越界或互相重叠的下标对
    /// - 拼接结果不是字母表中的符号
    pub fn build(letters: &[char], combos: &[ComboPair]) -> Result<Vec<Symbol>> {
        let starts: HashMap<usize, usize> = combos.iter().copied().collect();
        let ends: HashSet<usize> = combos.iter().map(|&(_, end)| end).collect();

        for &(start, end) in combos {
            if end != start + 1 || end >= letters.len() {
                anyhow::bail!(
                    "非法组合下标 ({}, {})，字母序列长度 {}",
                    start,
                    end,
                    letters.len()
                );
            }
            if ends.contains(&start) || starts.contains_key(&end) {
                anyhow::bail!("组合 ({}, {}) 与其他组合重叠", start, end);
            }
        }

        let mut symbols = Vec::with_capacity(letters.len());
        for (idx, &letter) in letters.iter().enumerate() {
            if ends.contains(&idx) {
                continue;
            }

            let symbol = match starts.get(&idx) {
                Some(&end) => {
                    let second = letters[end];
                    Symbol::combo(letter, second).ok_or_else(|| {
                        anyhow::anyhow!("{}{} 不是有效的组合字母", letter, second)
                    })?
                }
                None => Symbol::from_letter(letter).ok_or_else(|| {
                    anyhow::anyhow!("非法字母 {:?}（仅接受大写 A-Z）", letter)
                })?,
            };
            symbols.push(symbol);
        }

        Ok(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn test_detect_short_sequences() {
        assert!(ComboDetector::detect(&[]).is_empty());
        assert!(ComboDetector::detect(&['S']).is_empty());
        assert_eq!(ComboDetector::detect(&['C', 'H']), vec![(0, 1)]);
        assert!(ComboDetector::detect(&['H', 'C']).is_empty());
    }

    #[test]
    fn test_detect_in_word() {
        assert_eq!(ComboDetector::detect(&letters("CHUTZPAH")), vec![(0, 1), (3, 4)]);
        assert_eq!(ComboDetector::detect(&letters("PANTS")), vec![(3, 4)]);
        assert_eq!(ComboDetector::detect(&letters("SHALOM")), vec![(0, 1)]);
    }

    #[test]
    fn test_detect_is_greedy_and_non_overlapping() {
        // T-S-H：TS 先命中，S 不再参与 SH
        assert_eq!(ComboDetector::detect(&letters("TSH")), vec![(0, 1)]);
        // P-S-H：PS 不是字母，因此命中 SH
        assert_eq!(ComboDetector::detect(&letters("PSH")), vec![(1, 2)]);

        let combos = ComboDetector::detect(&letters("TSHTSTHSSHCH"));
        let mut seen = HashSet::new();
        for (start, end) in &combos {
            assert_eq!(*end, start + 1);
            assert!(seen.insert(*start));
            assert!(seen.insert(*end));
        }
    }

    #[test]
    fn test_detect_skips_unknown_pairs() {
        assert!(ComboDetector::detect(&letters("SS")).is_empty());
        assert!(ComboDetector::detect(&letters("CZ")).is_empty());
        assert_eq!(ComboDetector::detect(&letters("SSH")), vec![(1, 2)]);
    }

    #[test]
    fn test_build_merges_pairs() {
        let chars = letters("CHUTZPAH");
        let combos = ComboDetector::detect(&chars);
        assert_eq!(
            ComboBuilder::build(&chars, &combos).unwrap(),
            vec![Symbol::Ch, Symbol::U, Symbol::Tz, Symbol::P, Symbol::A, Symbol::H]
        );
    }

    #[test]
    fn test_build_without_combos_keeps_letters() {
        let chars = letters("ABC");
        assert_eq!(
            ComboBuilder::build(&chars, &[]).unwrap(),
            vec![Symbol::A, Symbol::B, Symbol::C]
        );
        assert!(ComboBuilder::build(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_build_rejects_pair_that_is_not_a_letter() {
        assert!(ComboBuilder::build(&['S', 'S'], &[(0, 1)]).is_err());
        assert!(ComboBuilder::build(&['M', 'S', 'S'], &[(1, 2)]).is_err());
    }

    #[test]
    fn test_build_rejects_letters_outside_a_to_z() {
        assert!(ComboBuilder::build(&['a', 'B'], &[]).is_err());
        assert!(ComboBuilder::build(&['A', '1'], &[]).is_err());
    }

    #[test]
    fn test_build_rejects_malformed_pairs() {
        // 越界
        assert!(ComboBuilder::build(&['C'], &[(0, 1)]).is_err());
        // 不相邻
        assert!(ComboBuilder::build(&['C', 'A', 'H'], &[(0, 2)]).is_err());
        // 重叠
        assert!(ComboBuilder::build(&['T', 'S', 'H'], &[(0, 1), (1, 2)]).is_err());
    }
}
