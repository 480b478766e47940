//! 词尾形式

use crate::gematria::tables::FINAL_FORMS;
use crate::gematria::types::Symbol;

/// 词尾形式处理器
pub struct FinalFormResolver;

impl FinalFormResolver {
    /// 把最后一个符号替换为词尾形式（如果有）
    pub fn resolve(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
        if let Some(last) = symbols.last_mut() {
            if let Some(final_form) = FINAL_FORMS.try_map(*last) {
                tracing::debug!("词尾形式: {} -> {}", last, final_form);
                *last = final_form;
            }
        }
        symbols
    }
}
