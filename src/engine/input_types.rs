//! ### English
//! Raw platform input events.
//!
//! `RawEvent` is what the event queue stores; `AkiRawEvent` is the C ABI form the backend
//! callback hands us. The ABI form is kept as POD (plain-old-data) so hosts can pass arrays
//! of them without any allocation, and its `kind` values follow sokol's event-type numbering
//! so a sokol host can copy the tag through unchanged.
//!
//! ### 中文
//! 原始平台输入事件。
//!
//! `RawEvent` 是事件队列中存放的类型；`AkiRawEvent` 是后端回调传入的 C ABI 形式。
//! ABI 形式保持为 POD（纯数据结构），宿主可以直接传递数组而无需分配；
//! 其 `kind` 取值沿用 sokol 的事件类型编号，sokol 宿主可原样透传。

use dpi::PhysicalSize;

/// ### English
/// One raw notification produced by the windowing backend.
/// Immutable once created; owned by the queue until consumed.
///
/// ### 中文
/// 窗口后端产生的一条原始通知。
/// 创建后不可变；在被消费前由队列持有。
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawEvent {
    /// ### English
    /// The user (or OS) asked the application to quit.
    ///
    /// ### 中文
    /// 用户（或操作系统）请求退出应用。
    Quit,
    /// ### English
    /// The window was resized; carries the new framebuffer size.
    ///
    /// ### 中文
    /// 窗口尺寸变化；携带新的 framebuffer 尺寸。
    Resize { framebuffer: PhysicalSize<u32> },
    Focused,
    Unfocused,
    /// ### English
    /// Physical key pressed (platform key code, GLFW/sokol numbering).
    ///
    /// ### 中文
    /// 物理按键按下（平台键码，GLFW/sokol 编号）。
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// ### English
    /// Composed text input: one Unicode code point (may be out of range if the backend misbehaves).
    ///
    /// ### 中文
    /// 文本输入：一个 Unicode 码点（后端异常时可能越界）。
    CharInput { codepoint: u32 },
    MouseDown { button: u32, x: f32, y: f32 },
    MouseUp { button: u32, x: f32, y: f32 },
    MouseMove { x: f32, y: f32, dx: f32, dy: f32 },
    MouseScroll { dy: f32 },
    /// ### English
    /// Any backend notification this layer does not translate (touch, iconify, paste...).
    ///
    /// ### 中文
    /// 本层不做转换的其它后端通知（触摸、最小化、粘贴等）。
    Other { kind: u32 },
}

/// ### English
/// Raw event in C ABI form (one struct for every kind).
/// Fields not used by `kind` are ignored.
///
/// ### 中文
/// C ABI 形式的原始事件（所有类型共用一个结构体）。
/// 与 `kind` 无关的字段会被忽略。
#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct AkiRawEvent {
    /// ### English
    /// Event kind (one of `AKI_RAW_KIND_*`).
    ///
    /// ### 中文
    /// 事件类型（`AKI_RAW_KIND_*` 之一）。
    pub kind: u32,
    /// ### English
    /// Platform key code for key events.
    ///
    /// ### 中文
    /// 按键事件的平台键码。
    pub key_code: u32,
    /// ### English
    /// Unicode code point for char events.
    ///
    /// ### 中文
    /// 字符事件的 Unicode 码点。
    pub char_code: u32,
    /// ### English
    /// Mouse button code for mouse-button events (`1` = left, `2` = middle, `3` = right).
    ///
    /// ### 中文
    /// 鼠标按键事件的按键编号（`1` = 左键，`2` = 中键，`3` = 右键）。
    pub mouse_button: u32,
    pub mouse_x: f32,
    pub mouse_y: f32,
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub scroll_y: f32,
    /// ### English
    /// Framebuffer size for resize events (physical pixels).
    ///
    /// ### 中文
    /// resize 事件的 framebuffer 尺寸（物理像素）。
    pub framebuffer_width: u32,
    pub framebuffer_height: u32,
}

/// ### English
/// Raw kind: key pressed.
///
/// ### 中文
/// 原始类型：按键按下。
pub const AKI_RAW_KIND_KEY_DOWN: u32 = 1;

/// ### English
/// Raw kind: key released.
///
/// ### 中文
/// 原始类型：按键抬起。
pub const AKI_RAW_KIND_KEY_UP: u32 = 2;

/// ### English
/// Raw kind: text input (one code point).
///
/// ### 中文
/// 原始类型：文本输入（一个码点）。
pub const AKI_RAW_KIND_CHAR: u32 = 3;

pub const AKI_RAW_KIND_MOUSE_DOWN: u32 = 4;
pub const AKI_RAW_KIND_MOUSE_UP: u32 = 5;
pub const AKI_RAW_KIND_MOUSE_SCROLL: u32 = 6;
pub const AKI_RAW_KIND_MOUSE_MOVE: u32 = 7;

/// ### English
/// Raw kind: window resized (framebuffer size in payload).
///
/// ### 中文
/// 原始类型：窗口尺寸变化（载荷为 framebuffer 尺寸）。
pub const AKI_RAW_KIND_RESIZED: u32 = 14;

pub const AKI_RAW_KIND_FOCUSED: u32 = 17;
pub const AKI_RAW_KIND_UNFOCUSED: u32 = 18;

/// ### English
/// Raw kind: quit requested.
///
/// ### 中文
/// 原始类型：请求退出。
pub const AKI_RAW_KIND_QUIT_REQUESTED: u32 = 21;

impl From<AkiRawEvent> for RawEvent {
    fn from(raw: AkiRawEvent) -> Self {
        match raw.kind {
            AKI_RAW_KIND_QUIT_REQUESTED => RawEvent::Quit,
            AKI_RAW_KIND_RESIZED => RawEvent::Resize {
                framebuffer: PhysicalSize::new(raw.framebuffer_width, raw.framebuffer_height),
            },
            AKI_RAW_KIND_FOCUSED => RawEvent::Focused,
            AKI_RAW_KIND_UNFOCUSED => RawEvent::Unfocused,
            AKI_RAW_KIND_KEY_DOWN => RawEvent::KeyDown {
                key_code: raw.key_code,
            },
            AKI_RAW_KIND_KEY_UP => RawEvent::KeyUp {
                key_code: raw.key_code,
            },
            AKI_RAW_KIND_CHAR => RawEvent::CharInput {
                codepoint: raw.char_code,
            },
            AKI_RAW_KIND_MOUSE_DOWN => RawEvent::MouseDown {
                button: raw.mouse_button,
                x: raw.mouse_x,
                y: raw.mouse_y,
            },
            AKI_RAW_KIND_MOUSE_UP => RawEvent::MouseUp {
                button: raw.mouse_button,
                x: raw.mouse_x,
                y: raw.mouse_y,
            },
            AKI_RAW_KIND_MOUSE_MOVE => RawEvent::MouseMove {
                x: raw.mouse_x,
                y: raw.mouse_y,
                dx: raw.mouse_dx,
                dy: raw.mouse_dy,
            },
            AKI_RAW_KIND_MOUSE_SCROLL => RawEvent::MouseScroll { dy: raw.scroll_y },
            kind => RawEvent::Other { kind },
        }
    }
}
