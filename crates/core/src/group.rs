use crate::category::categorize;
use crate::tokenize::tokenize;
use crate::types::CategorizedGroups;

/// 将类名按分类分组
///
/// 每个类名恰好进入一个分类，桶内保持原始出现顺序。
pub fn group_classes<'a, I>(tokens: I) -> CategorizedGroups
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups = CategorizedGroups::new();

    for token in tokens {
        if token.trim().is_empty() {
            continue;
        }
        groups.push(categorize(token), token);
    }

    groups
}

/// 分词并分组
pub fn group_class_string(value: &str) -> CategorizedGroups {
    group_classes(tokenize(value))
}
