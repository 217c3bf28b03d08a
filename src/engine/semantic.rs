//! ### English
//! Normalized, backend-independent events handed to the scripting runtime.
//!
//! ### 中文
//! 交给脚本运行时的、与后端无关的规范化事件。

use std::borrow::Cow;

use dpi::PhysicalSize;

use crate::engine::text::EncodedChar;

/// ### English
/// One semantic editor event. Transient: produced by `poll`, forwarded, never stored.
///
/// ### 中文
/// 一个语义编辑器事件。临时性：由 `poll` 产生并转发，不会被保存。
#[derive(Clone, Debug, PartialEq)]
pub enum SemanticEvent {
    Quit,
    /// ### English
    /// Window resized; framebuffer size.
    ///
    /// ### 中文
    /// 窗口尺寸变化；framebuffer 尺寸。
    Resized(PhysicalSize<u32>),
    Focused,
    Unfocused,
    KeyPressed(Cow<'static, str>),
    KeyReleased(Cow<'static, str>),
    /// ### English
    /// One composed code point, UTF-8 encoded (never empty).
    ///
    /// ### 中文
    /// 一个输入码点的 UTF-8 编码（不会为空）。
    TextInput(EncodedChar),
    MousePressed {
        button: &'static str,
        x: f32,
        y: f32,
        clicks: u32,
    },
    MouseReleased {
        button: &'static str,
        x: f32,
        y: f32,
    },
    MouseMoved {
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
    },
    MouseWheel {
        dy: f32,
    },
    /// ### English
    /// Size change detected by polling while the queue was idle.
    ///
    /// ### 中文
    /// 队列空闲时通过轮询检测到的尺寸变化。
    Maximized(PhysicalSize<u32>),
}

impl SemanticEvent {
    /// ### English
    /// Type tag as seen by the scripting runtime (`"keypressed"`, `"mousemoved"`...).
    ///
    /// ### 中文
    /// 脚本运行时看到的类型标签（`"keypressed"`、`"mousemoved"` 等）。
    pub fn type_name(&self) -> &'static str {
        match self {
            SemanticEvent::Quit => "quit",
            SemanticEvent::Resized(_) => "resized",
            SemanticEvent::Focused => "focused",
            SemanticEvent::Unfocused => "unfocused",
            SemanticEvent::KeyPressed(_) => "keypressed",
            SemanticEvent::KeyReleased(_) => "keyreleased",
            SemanticEvent::TextInput(_) => "textinput",
            SemanticEvent::MousePressed { .. } => "mousepressed",
            SemanticEvent::MouseReleased { .. } => "mousereleased",
            SemanticEvent::MouseMoved { .. } => "mousemoved",
            SemanticEvent::MouseWheel { .. } => "mousewheel",
            SemanticEvent::Maximized(_) => "maximized",
        }
    }
}
