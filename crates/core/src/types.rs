use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// 分类（按声明顺序决定优先级）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// 尺寸：`w-4`, `max-h-screen`
    Size,
    /// 布局：`flex`, `grid-cols-2`, `absolute`
    Layout,
    /// 间距：`p-4`, `mx-auto`, `gap-2`
    Spacing,
    /// 边框：`border`, `rounded-lg`
    Border,
    /// 背景：`bg-white`, `from-sky-400`
    Background,
    /// 文本：`text-sm`, `font-bold`
    Text,
    /// 效果：`shadow-md`, `transition`
    Effects,
    /// 兜底分类，匹配任意类名
    Others,
}

impl Category {
    /// 所有分类，按声明顺序
    pub const ALL: [Category; 8] = [
        Category::Size,
        Category::Layout,
        Category::Spacing,
        Category::Border,
        Category::Background,
        Category::Text,
        Category::Effects,
        Category::Others,
    ];

    /// 分类键（与 serde 输出一致）
    pub fn key(self) -> &'static str {
        match self {
            Category::Size => "size",
            Category::Layout => "layout",
            Category::Spacing => "spacing",
            Category::Border => "border",
            Category::Background => "background",
            Category::Text => "text",
            Category::Effects => "effects",
            Category::Others => "others",
        }
    }

    /// 渲染注释中使用的标签
    pub fn label(self) -> &'static str {
        match self {
            Category::Size => "Size",
            Category::Layout => "Layout",
            Category::Spacing => "Spacing",
            Category::Border => "Border",
            Category::Background => "Background",
            Category::Text => "Text",
            Category::Effects => "Effects",
            Category::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// 可识别的属性名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeName {
    /// JSX: `className`
    ClassName,
    /// HTML: `class`
    Class,
}

impl AttributeName {
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeName::ClassName => "className",
            AttributeName::Class => "class",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 属性提取结果，借用自选中文本
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMatch<'a> {
    pub name: AttributeName,
    /// 引号内的原始值（可能跨行）
    pub value: &'a str,
}

/// 分组结果
///
/// 预先按声明顺序放入全部 8 个分类，桶内保持类名首次出现的顺序。
/// 空桶允许存在，渲染时跳过。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorizedGroups {
    buckets: IndexMap<Category, Vec<String>>,
}

impl CategorizedGroups {
    pub fn new() -> Self {
        let buckets = Category::ALL
            .iter()
            .map(|&category| (category, Vec::new()))
            .collect();
        Self { buckets }
    }

    pub fn push(&mut self, category: Category, token: impl Into<String>) {
        self.buckets.entry(category).or_default().push(token.into());
    }

    /// 某个分类下的类名
    pub fn get(&self, category: Category) -> &[String] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 按声明顺序遍历非空分类
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[String])> + '_ {
        self.buckets
            .iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(category, tokens)| (*category, tokens.as_slice()))
    }

    /// 所有分类中的类名总数
    pub fn token_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    pub fn into_inner(self) -> IndexMap<Category, Vec<String>> {
        self.buckets
    }
}

impl Default for CategorizedGroups {
    fn default() -> Self {
        Self::new()
    }
}

/// 渲染选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOptions {
    /// 分组函数名（默认 "clsx"）
    pub call_name: String,
    /// 调用内部每行的缩进（默认两个空格）
    pub indent: String,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            call_name: "clsx".to_string(),
            indent: "  ".to_string(),
        }
    }
}
