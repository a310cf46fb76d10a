//! 分组输出的性质测试
//!
//! - 每个类名恰好出现在一个分类行中（不丢失、不重复）
//! - 同一输入的输出完全一致
//! - 各分类行拼接后的类名多重集合与输入一致

use class_grouper_core::{categorize, transform_attribute, Category};
use proptest::prelude::*;

/// 生成类名（不含空白与引号）
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // 常见前缀
        "(w|h|min-w|max-h|p|px|mt|gap|bg|from|text|font|border|rounded|shadow|duration)-[a-z0-9]{1,6}",
        // 布局关键字
        "(flex|grid|inline|block|relative|absolute|items-center|items-start)",
        // 修饰符
        "(hover|md|dark):[a-z]{1,4}-[0-9]{1,3}",
        // 任意类名
        "[a-zA-Z0-9:/#._\\[\\]-]{1,12}",
    ]
}

/// 生成分隔空白
fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("  ".to_string()),
        Just("\n    ".to_string()),
        Just("\t".to_string()),
    ]
}

fn attribute_strategy() -> impl Strategy<Value = (Vec<String>, String)> {
    (
        prop::collection::vec((token_strategy(), separator_strategy()), 1..16),
        prop_oneof![Just("className"), Just("class")],
        prop_oneof![Just('"'), Just('\''), Just('`')],
    )
        .prop_map(|(pairs, name, quote)| {
            let tokens: Vec<String> = pairs.iter().map(|(t, _)| t.clone()).collect();
            let value: String = pairs
                .iter()
                .map(|(t, sep)| format!("{}{}", t, sep))
                .collect();
            let input = format!("{}={}{}{}", name, quote, value, quote);
            (tokens, input)
        })
}

/// 解析渲染结果：(分类标签, 该分类的类名)
fn parse_rendered(output: &str) -> Vec<(String, Vec<String>)> {
    let mut groups = Vec::new();
    let mut label: Option<String> = None;

    for line in output.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("// ") {
            label = Some(rest.to_string());
        } else if let Some(rest) = line.strip_prefix('"') {
            let tokens = rest
                .trim_end_matches(',')
                .trim_end_matches('"')
                .split(' ')
                .map(str::to_string)
                .collect();
            groups.push((label.take().unwrap_or_default(), tokens));
        }
    }

    groups
}

fn label_of(category: Category) -> String {
    category.label().to_string()
}

proptest! {
    #[test]
    fn test_every_token_in_exactly_one_group((tokens, input) in attribute_strategy()) {
        let output = transform_attribute(&input).expect("non-empty attribute should transform");
        let groups = parse_rendered(&output);

        let mut rendered: Vec<String> = groups.iter().flat_map(|(_, t)| t.clone()).collect();
        let mut expected = tokens.clone();
        rendered.sort();
        expected.sort();
        prop_assert_eq!(rendered, expected);

        for (label, group_tokens) in &groups {
            for token in group_tokens {
                prop_assert_eq!(label, &label_of(categorize(token)));
            }
        }
    }

    #[test]
    fn test_output_is_deterministic((_tokens, input) in attribute_strategy()) {
        let first = transform_attribute(&input);
        let second = transform_attribute(&input);
        prop_assert!(first.is_some());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_groups_follow_declaration_order((_tokens, input) in attribute_strategy()) {
        let output = transform_attribute(&input).expect("non-empty attribute should transform");
        let labels: Vec<String> = parse_rendered(&output).into_iter().map(|(l, _)| l).collect();

        let expected: Vec<String> = Category::ALL
            .iter()
            .map(|&c| label_of(c))
            .filter(|l| labels.contains(l))
            .collect();
        prop_assert_eq!(labels, expected);
    }

    #[test]
    fn test_whitespace_only_value_has_no_result(value in "[ \t\n]{1,8}") {
        let input = format!("className=\"{}\"", value);
        prop_assert_eq!(transform_attribute(&input), None);
    }
}
