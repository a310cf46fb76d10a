use crate::types::Category;
use phf::phf_set;
use tracing::trace;

/// 布局类中需要完全匹配的关键字
///
/// 使用 phf 在编译期生成完美哈希集合
static LAYOUT_KEYWORDS: phf::Set<&'static str> = phf_set! {
    "block",
    "inline-block",
    "inline-flex",
    "relative",
    "absolute",
    "fixed",
    "sticky",
};

/// 单条匹配规则
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// 前缀匹配（区分大小写）
    Prefix(&'static str),
    /// 完全匹配集合中的任一关键字
    Keyword(&'static phf::Set<&'static str>),
    /// `p`/`m` 简写：字母 + 可选方向（t r b l x y）+ `-`，不区分大小写
    Shorthand(char),
    /// 匹配任意非空类名
    Any,
}

impl Rule {
    pub fn matches(&self, token: &str) -> bool {
        match *self {
            Rule::Prefix(prefix) => token.starts_with(prefix),
            Rule::Keyword(set) => set.contains(token),
            Rule::Shorthand(letter) => matches_shorthand(token, letter),
            Rule::Any => !token.is_empty(),
        }
    }
}

/// `^<letter>[trblxy]?-`，ASCII 大小写不敏感
fn matches_shorthand(token: &str, letter: char) -> bool {
    let mut chars = token.chars();

    match chars.next() {
        Some(c) if c.eq_ignore_ascii_case(&letter) => {}
        _ => return false,
    }

    match chars.next() {
        Some('-') => true,
        Some(side) if "trblxy".contains(side.to_ascii_lowercase()) => chars.next() == Some('-'),
        _ => false,
    }
}

/// 分类及其规则
pub struct CategoryRules {
    pub category: Category,
    pub rules: &'static [Rule],
}

/// 分类规则表
///
/// 按声明顺序匹配，命中的第一个分类获胜；最后一项为兜底分类。
pub static CATEGORY_RULES: [CategoryRules; 8] = [
    CategoryRules {
        category: Category::Size,
        rules: &[
            Rule::Prefix("w-"),
            Rule::Prefix("h-"),
            Rule::Prefix("min-w"),
            Rule::Prefix("max-w"),
            Rule::Prefix("min-h"),
            Rule::Prefix("max-h"),
        ],
    },
    CategoryRules {
        category: Category::Layout,
        rules: &[
            Rule::Prefix("flex"),
            Rule::Prefix("grid"),
            Rule::Prefix("inline"),
            // 交叉轴对齐与 flex 放在一起
            Rule::Prefix("items-"),
            Rule::Keyword(&LAYOUT_KEYWORDS),
        ],
    },
    CategoryRules {
        category: Category::Spacing,
        rules: &[
            Rule::Shorthand('p'),
            Rule::Shorthand('m'),
            Rule::Prefix("gap-"),
        ],
    },
    CategoryRules {
        category: Category::Border,
        rules: &[Rule::Prefix("border"), Rule::Prefix("rounded")],
    },
    CategoryRules {
        category: Category::Background,
        rules: &[
            Rule::Prefix("bg-"),
            Rule::Prefix("from-"),
            Rule::Prefix("via-"),
            Rule::Prefix("to-"),
        ],
    },
    CategoryRules {
        category: Category::Text,
        rules: &[
            Rule::Prefix("text-"),
            Rule::Prefix("font-"),
            Rule::Prefix("leading-"),
            Rule::Prefix("tracking-"),
            Rule::Prefix("placeholder:"),
        ],
    },
    CategoryRules {
        category: Category::Effects,
        rules: &[
            Rule::Prefix("shadow"),
            Rule::Prefix("transition"),
            Rule::Prefix("duration-"),
            Rule::Prefix("ease-"),
            Rule::Prefix("animate-"),
        ],
    },
    CategoryRules {
        category: Category::Others,
        rules: &[Rule::Any],
    },
];

/// 判断类名所属分类
///
/// 总是返回一个分类，未命中任何规则时归入 `Others`。
pub fn categorize(token: &str) -> Category {
    let category = CATEGORY_RULES
        .iter()
        .find(|entry| entry.rules.iter().any(|rule| rule.matches(token)))
        .map(|entry| entry.category)
        .unwrap_or(Category::Others);

    trace!(token, %category, "categorized class");
    category
}
