use crate::types::{AttributeName, CategorizedGroups, GroupOptions};

/// 渲染分组后的 `clsx(...)` 表达式
///
/// 输出示例（默认选项）：
///
/// ```text
/// className={clsx(
///   // Layout
///   "flex items-center",
///
///   // Spacing
///   "p-4",
/// )}
/// ```
///
/// 空分类不输出；最后一组之后不留空行。类名中的 `\` 与 `"` 会被转义。
/// 不校验目标语言语法。
pub fn render_clsx(
    attr_name: AttributeName,
    groups: &CategorizedGroups,
    options: &GroupOptions,
) -> String {
    let indent = &options.indent;
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("{}={{{}(", attr_name, options.call_name));

    for (category, tokens) in groups.non_empty() {
        lines.push(format!("{}// {}", indent, category.label()));
        lines.push(format!("{}\"{}\",", indent, escape_string(&tokens.join(" "))));
        lines.push(String::new());
    }

    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    lines.push(")}".to_string());
    lines.join("\n")
}

/// 转义为双引号字符串字面量内容
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if c == '\\' || c == '"' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
