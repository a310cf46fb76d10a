use crate::types::GroupOptions;
use thiserror::Error;
use tracing::debug;

/// 编辑器当前选区状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    /// 没有活动编辑器
    NoEditor,
    /// 有编辑器但选区为空
    Empty,
    /// 选中的文本（原样，包含首尾空白）
    Text(String),
}

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// 编辑器宿主接口
///
/// 使用 trait 而不是具体的编辑器运行时，以便于测试和解耦
pub trait EditorHost {
    fn selection(&self) -> SelectionState;
    /// 用新文本替换当前选区
    fn replace_selection(&mut self, replacement: &str);
    fn notify(&mut self, level: NoticeLevel, message: &str);
}

/// 命令失败原因，Display 即展示给用户的提示
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("No active editor")]
    NoActiveEditor,

    #[error("Please select the entire className=\"...\" attribute first.")]
    EmptySelection,

    /// 属性无法识别，或属性值中没有任何类名
    #[error("Could not find className or class attribute in the selected text.")]
    AttributeNotFound,
}

impl CommandError {
    pub fn level(&self) -> NoticeLevel {
        match self {
            CommandError::NoActiveEditor => NoticeLevel::Error,
            CommandError::EmptySelection | CommandError::AttributeNotFound => NoticeLevel::Info,
        }
    }
}

/// "group classes in selection" 命令
///
/// 读取选区 → 提取属性 → 分词 → 分组 → 渲染 → 替换选区。
/// 任何失败都只通知一次，且不修改文档。
pub fn run_group_command<H>(host: &mut H, options: &GroupOptions) -> Result<String, CommandError>
where
    H: EditorHost + ?Sized,
{
    match group_selection(host.selection(), options) {
        Ok(rendered) => {
            host.replace_selection(&rendered);
            Ok(rendered)
        }
        Err(err) => {
            host.notify(err.level(), &err.to_string());
            Err(err)
        }
    }
}

fn group_selection(selection: SelectionState, options: &GroupOptions) -> Result<String, CommandError> {
    let text = match selection {
        SelectionState::NoEditor => return Err(CommandError::NoActiveEditor),
        SelectionState::Empty => return Err(CommandError::EmptySelection),
        SelectionState::Text(text) => text,
    };

    match crate::transform_attribute_with(&text, options) {
        Some(rendered) => {
            debug!(lines = rendered.lines().count(), "grouped class attribute");
            Ok(rendered)
        }
        None => {
            debug!(len = text.len(), "selection has no usable class attribute");
            Err(CommandError::AttributeNotFound)
        }
    }
}
