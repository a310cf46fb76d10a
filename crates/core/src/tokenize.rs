/// 将属性值按空白（含换行）拆分为类名
///
/// 保持原始顺序，不去重，不做大小写转换。
pub fn tokenize(value: &str) -> Vec<&str> {
    value
        .split(is_js_whitespace)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// 与 JS `\s` 一致的空白：Unicode 空白（不含 U+0085）加上 U+FEFF
pub(crate) fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}
