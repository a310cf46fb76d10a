use crate::tokenize::is_js_whitespace;
use crate::types::{AttributeMatch, AttributeName};

/// 允许的引号
const QUOTES: [char; 3] = ['"', '\'', '`'];

/// 从选中文本中提取 `className="..."` / `class="..."` 属性
///
/// 去除首尾空白后，整个字符串必须恰好是一个属性赋值：
/// - 属性名只能是 `className` 或 `class`
/// - `=` 两侧允许空白
/// - 值用 `"`、`'` 或 `` ` `` 包裹，开闭引号一致
/// - 值非空，不含与开引号相同的引号（其他引号允许，如 `content-['x']`），可以跨行
/// - 闭合引号之后不能有其他内容
///
/// 形状不符时返回 `None`。
///
/// 与 HTML 转换器相同，使用逐段扫描而非正则。
pub fn extract_attribute(input: &str) -> Option<AttributeMatch<'_>> {
    let text = input.trim_matches(is_js_whitespace);

    // 1. 属性名（先尝试更长的 className）
    let (name, rest) = if let Some(rest) = text.strip_prefix("className") {
        (AttributeName::ClassName, rest)
    } else if let Some(rest) = text.strip_prefix("class") {
        (AttributeName::Class, rest)
    } else {
        return None;
    };

    // 2. '='，两侧可选空白
    let rest = rest
        .trim_start_matches(is_js_whitespace)
        .strip_prefix('=')?
        .trim_start_matches(is_js_whitespace);

    // 3. 开引号
    let quote = rest.chars().next().filter(|c| QUOTES.contains(c))?;
    let body = &rest[quote.len_utf8()..];

    // 4. 值一直到下一个同类引号
    let end = body.find(quote)?;
    if end == 0 {
        return None;
    }

    // 5. 闭引号之后必须结束
    if !body[end + quote.len_utf8()..].is_empty() {
        return None;
    }

    Some(AttributeMatch {
        name,
        value: &body[..end],
    })
}
