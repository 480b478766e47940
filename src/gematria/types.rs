//! Gematria 类型定义

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::gematria::tables::LETTER_VALUES;

/// 希伯来字母符号（按拉丁转写拼写）
///
/// 文本形式（`Display`、`FromStr`、serde）即符号本身：`"A"`、`"CH"`、`"N_FINAL"` 等
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    /// ח
    Ch,
    /// פ
    Ph,
    /// ש
    Sh,
    /// ת
    Th,
    /// צ
    Ts,
    /// צ
    Tz,
    KFinal,
    MFinal,
    NFinal,
    PFinal,
    PhFinal,
    TsFinal,
    TzFinal,
}

impl Symbol {
    /// 全部符号，单字母在前（按字母序）
    pub const ALL: [Symbol; 39] = [
        Symbol::A,
        Symbol::B,
        Symbol::C,
        Symbol::D,
        Symbol::E,
        Symbol::F,
        Symbol::G,
        Symbol::H,
        Symbol::I,
        Symbol::J,
        Symbol::K,
        Symbol::L,
        Symbol::M,
        Symbol::N,
        Symbol::O,
        Symbol::P,
        Symbol::Q,
        Symbol::R,
        Symbol::S,
        Symbol::T,
        Symbol::U,
        Symbol::V,
        Symbol::W,
        Symbol::X,
        Symbol::Y,
        Symbol::Z,
        Symbol::Ch,
        Symbol::Ph,
        Symbol::Sh,
        Symbol::Th,
        Symbol::Ts,
        Symbol::Tz,
        Symbol::KFinal,
        Symbol::MFinal,
        Symbol::NFinal,
        Symbol::PFinal,
        Symbol::PhFinal,
        Symbol::TsFinal,
        Symbol::TzFinal,
    ];

    /// 符号的文本形式
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
            Symbol::E => "E",
            Symbol::F => "F",
            Symbol::G => "G",
            Symbol::H => "H",
            Symbol::I => "I",
            Symbol::J => "J",
            Symbol::K => "K",
            Symbol::L => "L",
            Symbol::M => "M",
            Symbol::N => "N",
            Symbol::O => "O",
            Symbol::P => "P",
            Symbol::Q => "Q",
            Symbol::R => "R",
            Symbol::S => "S",
            Symbol::T => "T",
            Symbol::U => "U",
            Symbol::V => "V",
            Symbol::W => "W",
            Symbol::X => "X",
            Symbol::Y => "Y",
            Symbol::Z => "Z",
            Symbol::Ch => "CH",
            Symbol::Ph => "PH",
            Symbol::Sh => "SH",
            Symbol::Th => "TH",
            Symbol::Ts => "TS",
            Symbol::Tz => "TZ",
            Symbol::KFinal => "K_FINAL",
            Symbol::MFinal => "M_FINAL",
            Symbol::NFinal => "N_FINAL",
            Symbol::PFinal => "P_FINAL",
            Symbol::PhFinal => "PH_FINAL",
            Symbol::TsFinal => "TS_FINAL",
            Symbol::TzFinal => "TZ_FINAL",
        }
    }

    /// 大写 `A`-`Z` 对应的单字母符号
    pub fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self::ALL[(letter as u8 - b'A') as usize])
        } else {
            None
        }
    }

    /// `first` + `second` 拼成的双字母符号
    pub fn combo(first: char, second: char) -> Option<Self> {
        match (first, second) {
            ('C', 'H') => Some(Symbol::Ch),
            ('P', 'H') => Some(Symbol::Ph),
            ('S', 'H') => Some(Symbol::Sh),
            ('T', 'H') => Some(Symbol::Th),
            ('T', 'S') => Some(Symbol::Ts),
            ('T', 'Z') => Some(Symbol::Tz),
            _ => None,
        }
    }

    /// 是否为词尾形式
    pub fn is_final(self) -> bool {
        self.as_str().ends_with("_FINAL")
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Symbol {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("未知符号: {:?}", s))
    }
}

/// 单词计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordGematria {
    /// 原始输入
    pub input: String,
    /// 解析出的符号序列
    pub symbols: Vec<Symbol>,
    /// `symbols` 对应的希伯来字母
    pub hebrew: String,
    /// 符号数值之和
    pub value: u64,
}

impl WordGematria {
    pub fn new(input: &str, symbols: Vec<Symbol>, value: u64) -> Self {
        let hebrew = symbols
            .iter()
            .filter_map(|&symbol| LETTER_VALUES.hebrew(symbol))
            .collect();

        Self {
            input: input.to_string(),
            symbols,
            hebrew,
            value,
        }
    }
}

/// 短语计算结果（按空白切分，逐词独立计算）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseGematria {
    pub input: String,
    pub words: Vec<WordGematria>,
    pub total: u64,
}
