//! Gematria 查找表
//!
//! 字母数值表、组合首尾字母集合、词尾形式映射。
//! 三者在进程内只构建一次，之后只读。

use std::collections::{HashMap, HashSet};

use crate::gematria::types::Symbol;

lazy_static::lazy_static! {
    pub static ref LETTER_VALUES: LetterValueTable = LetterValueTable::new();
    pub static ref COMBO_BOUNDARIES: ComboBoundarySet = ComboBoundarySet::new();
    pub static ref FINAL_FORMS: FinalFormSet = FinalFormSet::new();
}

/// 按字母序号（从 1 开始）排列的希伯来字母表，五个词尾形式在最后
const HEBREW_ALPHABET: [char; 27] = [
    'א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט', // units
    'י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ', // tens
    'ק', 'ר', 'ש', 'ת', 'ך', 'ם', 'ן', 'ף', 'ץ', // hundreds
];

/// 字母数值表
///
/// 保存每个符号的希伯来字母序号（1..=27），数值由序号换算，见 [`numeral_value`]
pub struct LetterValueTable {
    indices: HashMap<Symbol, u32>,
}

impl LetterValueTable {
    pub fn new() -> Self {
        let indices = HashMap::from([
            (Symbol::A, 1),
            (Symbol::B, 2),
            (Symbol::G, 3),
            (Symbol::D, 4),
            (Symbol::H, 5),
            (Symbol::E, 5),
            (Symbol::U, 6),
            (Symbol::V, 6),
            (Symbol::W, 6),
            (Symbol::Z, 7),
            (Symbol::C, 8),
            (Symbol::Ch, 8),
            (Symbol::T, 9),
            (Symbol::I, 10),
            (Symbol::J, 10),
            (Symbol::Y, 10),
            (Symbol::K, 11),
            (Symbol::L, 12),
            (Symbol::M, 13),
            (Symbol::N, 14),
            (Symbol::S, 15),
            (Symbol::X, 15),
            (Symbol::O, 16),
            (Symbol::F, 17),
            (Symbol::P, 17),
            (Symbol::Ph, 17),
            (Symbol::Ts, 18),
            (Symbol::Tz, 18),
            (Symbol::Q, 19),
            (Symbol::R, 20),
            (Symbol::Sh, 21),
            (Symbol::Th, 22),
            // 词尾形式（mispar gadol）
            (Symbol::KFinal, 23),
            (Symbol::MFinal, 24),
            (Symbol::NFinal, 25),
            (Symbol::PFinal, 26),
            (Symbol::PhFinal, 26),
            (Symbol::TsFinal, 27),
            (Symbol::TzFinal, 27),
        ]);

        Self { indices }
    }

    /// 符号的字母序号
    pub fn index(&self, symbol: Symbol) -> Option<u32> {
        self.indices.get(&symbol).copied()
    }

    /// 符号的数值
    pub fn value(&self, symbol: Symbol) -> Option<u32> {
        self.index(symbol).map(numeral_value)
    }

    /// 符号对应的希伯来字母
    pub fn hebrew(&self, symbol: Symbol) -> Option<char> {
        let index = self.index(symbol)?;
        HEBREW_ALPHABET.get(index as usize - 1).copied()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.indices.contains_key(&symbol)
    }
}

impl Default for LetterValueTable {
    fn default() -> Self {
        Self::new()
    }
}

/// 字母序号（从 1 开始）对应的数值
///
/// 每九个序号为一级（个、十、百），第 `r` 级第 `p` 位（1..=9）的值为 `10^r * p`
pub fn numeral_value(index: u32) -> u32 {
    let slot = index.saturating_sub(1);
    10u32.pow(slot / 9) * (slot % 9 + 1)
}

/// 组合首尾字母集合
pub struct ComboBoundarySet {
    starters: HashSet<char>,
    enders: HashSet<char>,
}

impl ComboBoundarySet {
    pub fn new() -> Self {
        Self {
            starters: HashSet::from(['C', 'P', 'T', 'S']),
            enders: HashSet::from(['H', 'S', 'Z']),
        }
    }

    pub fn is_starter(&self, letter: char) -> bool {
        self.starters.contains(&letter)
    }

    pub fn is_ender(&self, letter: char) -> bool {
        self.enders.contains(&letter)
    }

    /// 相邻两个字母合并成的符号
    ///
    /// 首尾字母都在集合中，且合并结果是字母表中的符号，因此 `SS`、`CZ` 不合并
    pub fn joins(&self, first: char, second: char) -> Option<Symbol> {
        if !self.is_starter(first) || !self.is_ender(second) {
            return None;
        }
        Symbol::combo(first, second).filter(|symbol| LETTER_VALUES.contains(*symbol))
    }
}

impl Default for ComboBoundarySet {
    fn default() -> Self {
        Self::new()
    }
}

/// 词尾形式映射
pub struct FinalFormSet {
    map: HashMap<Symbol, Symbol>,
}

impl FinalFormSet {
    pub fn new() -> Self {
        let map = HashMap::from([
            (Symbol::K, Symbol::KFinal),
            (Symbol::M, Symbol::MFinal),
            (Symbol::N, Symbol::NFinal),
            (Symbol::P, Symbol::PFinal),
            (Symbol::Ph, Symbol::PhFinal),
            (Symbol::Ts, Symbol::TsFinal),
            (Symbol::Tz, Symbol::TzFinal),
        ]);

        Self { map }
    }

    /// 符号的词尾形式
    pub fn try_map(&self, symbol: Symbol) -> Option<Symbol> {
        self.map.get(&symbol).copied()
    }
}

impl Default for FinalFormSet {
    fn default() -> Self {
        Self::new()
    }
}
