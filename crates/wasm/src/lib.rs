use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use class_grouper_core::{
    categorize as rs_categorize, group_class_string, run_group_command,
    transform_attribute_with, EditorHost, GroupOptions, NoticeLevel, SelectionState,
};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsGroupOptions {
    #[serde(default = "default_call_name")]
    call_name: String,
    #[serde(default = "default_indent")]
    indent: String,
}

impl Default for JsGroupOptions {
    fn default() -> Self {
        JsGroupOptions {
            call_name: default_call_name(),
            indent: default_indent(),
        }
    }
}

fn default_call_name() -> String {
    GroupOptions::default().call_name
}

fn default_indent() -> String {
    GroupOptions::default().indent
}

impl From<JsGroupOptions> for GroupOptions {
    fn from(opts: JsGroupOptions) -> Self {
        GroupOptions {
            call_name: opts.call_name,
            indent: opts.indent,
        }
    }
}

fn parse_options(options: JsValue) -> Result<GroupOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsGroupOptions::default().into())
    } else {
        serde_wasm_bindgen::from_value::<JsGroupOptions>(options)
            .map(Into::into)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn serialize<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── 编辑器桥接 ────────────────────────────────────────────────

#[wasm_bindgen]
extern "C" {
    /// 扩展宿主传入的编辑器桥接对象
    ///
    /// ```js
    /// {
    ///   hasActiveEditor(): boolean,
    ///   getSelectionText(): string | undefined,
    ///   replaceSelection(text: string): void,
    ///   showInformationMessage(message: string): void,
    ///   showErrorMessage(message: string): void,
    /// }
    /// ```
    pub type EditorBridge;

    #[wasm_bindgen(method, js_name = "hasActiveEditor")]
    fn has_active_editor(this: &EditorBridge) -> bool;

    #[wasm_bindgen(method, js_name = "getSelectionText")]
    fn get_selection_text(this: &EditorBridge) -> Option<String>;

    #[wasm_bindgen(method, js_name = "replaceSelection")]
    fn replace_selection(this: &EditorBridge, text: &str);

    #[wasm_bindgen(method, js_name = "showInformationMessage")]
    fn show_information_message(this: &EditorBridge, message: &str);

    #[wasm_bindgen(method, js_name = "showErrorMessage")]
    fn show_error_message(this: &EditorBridge, message: &str);
}

/// 将 JS 桥接对象适配为 `EditorHost`
struct BridgeHost<'a> {
    bridge: &'a EditorBridge,
}

impl EditorHost for BridgeHost<'_> {
    fn selection(&self) -> SelectionState {
        if !self.bridge.has_active_editor() {
            return SelectionState::NoEditor;
        }
        selection_state(self.bridge.get_selection_text())
    }

    fn replace_selection(&mut self, replacement: &str) {
        self.bridge.replace_selection(replacement);
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Info => self.bridge.show_information_message(message),
            NoticeLevel::Error => self.bridge.show_error_message(message),
        }
    }
}

/// 空字符串与 undefined 都视为空选区
fn selection_state(text: Option<String>) -> SelectionState {
    match text {
        Some(text) if !text.is_empty() => SelectionState::Text(text),
        _ => SelectionState::Empty,
    }
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 转换选中的属性文本
///
/// @param text    - 选中的 `className="..."` / `class="..."` 文本
/// @param options - `{ callName?, indent? }`，可选
/// @returns 分组后的 `clsx(...)` 文本；无法识别时返回 `undefined`
#[wasm_bindgen(js_name = "transformAttribute")]
pub fn transform_attribute(text: &str, options: JsValue) -> Result<Option<String>, JsError> {
    let opts = parse_options(options)?;
    Ok(transform_attribute_with(text, &opts))
}

/// 将类名字符串分组
///
/// @returns `{ size: string[], layout: string[], ..., others: string[] }`
#[wasm_bindgen(js_name = "groupClasses")]
pub fn group_classes(class_string: &str) -> Result<JsValue, JsError> {
    serialize(&group_class_string(class_string))
}

/// 返回单个类名的分类键（如 "spacing"）
#[wasm_bindgen]
pub fn categorize(token: &str) -> String {
    rs_categorize(token).key().to_string()
}

/// 执行 "group classes in selection" 命令
///
/// @param bridge  - 编辑器桥接对象
/// @param options - `{ callName?, indent? }`，可选
/// @returns 是否替换了选区（失败时已通过桥接对象通知用户）
#[wasm_bindgen(js_name = "groupSelection")]
pub fn group_selection(bridge: &EditorBridge, options: JsValue) -> Result<bool, JsError> {
    let opts = parse_options(options)?;
    let mut host = BridgeHost { bridge };
    Ok(run_group_command(&mut host, &opts).is_ok())
}
