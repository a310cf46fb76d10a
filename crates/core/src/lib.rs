pub mod category;
pub mod command;
pub mod extract;
pub mod group;
pub mod render;
pub mod tokenize;
pub mod types;

// Re-export commonly used types
pub use category::categorize;
pub use command::{run_group_command, CommandError, EditorHost, NoticeLevel, SelectionState};
pub use extract::extract_attribute;
pub use group::{group_class_string, group_classes};
pub use render::render_clsx;
pub use tokenize::tokenize;
pub use types::{AttributeMatch, AttributeName, CategorizedGroups, Category, GroupOptions};

/// 转换选中的属性文本（默认选项）
///
/// # 示例
///
/// ```
/// use class_grouper_core::transform_attribute;
///
/// let output = transform_attribute(r#"className="p-4 flex""#).unwrap();
/// assert!(output.starts_with("className={clsx("));
/// assert!(transform_attribute(r#"data-foo="bar""#).is_none());
/// ```
pub fn transform_attribute(text: &str) -> Option<String> {
    transform_attribute_with(text, &GroupOptions::default())
}

/// 转换选中的属性文本
///
/// 属性无法识别或没有任何类名时返回 `None`。
pub fn transform_attribute_with(text: &str, options: &GroupOptions) -> Option<String> {
    // 1. 提取属性
    let attr = extract_attribute(text)?;

    // 2. 分词
    let tokens = tokenize(attr.value);
    if tokens.is_empty() {
        return None;
    }

    // 3. 分组
    let groups = group_classes(tokens);

    // 4. 渲染
    Some(render_clsx(attr.name, &groups, options))
}
