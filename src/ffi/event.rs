//! ### English
//! `#[repr(C)]` view of a semantic event.
//!
//! ### 中文
//! 语义事件的 `#[repr(C)]` 视图。

use crate::engine::semantic::SemanticEvent;

pub const AKI_EVENT_KIND_NONE: u32 = 0;
pub const AKI_EVENT_KIND_QUIT: u32 = 1;
pub const AKI_EVENT_KIND_RESIZED: u32 = 2;
pub const AKI_EVENT_KIND_FOCUSED: u32 = 3;
pub const AKI_EVENT_KIND_UNFOCUSED: u32 = 4;
pub const AKI_EVENT_KIND_KEY_PRESSED: u32 = 5;
pub const AKI_EVENT_KIND_KEY_RELEASED: u32 = 6;
pub const AKI_EVENT_KIND_TEXT_INPUT: u32 = 7;
pub const AKI_EVENT_KIND_MOUSE_PRESSED: u32 = 8;
pub const AKI_EVENT_KIND_MOUSE_RELEASED: u32 = 9;
pub const AKI_EVENT_KIND_MOUSE_MOVED: u32 = 10;
pub const AKI_EVENT_KIND_MOUSE_WHEEL: u32 = 11;
pub const AKI_EVENT_KIND_MAXIMIZED: u32 = 12;

/// ### English
/// Size of the inline `text` buffer. Every key name, button name and encoded code point fits.
///
/// ### 中文
/// 内联 `text` 缓冲区的大小。所有按键名、鼠标按键名与已编码码点都能放下。
pub const AKI_EVENT_TEXT_CAPACITY: usize = 32;

/// ### English
/// Flat semantic event written by `aki_input_poll_event`.
///
/// Field use per kind:
/// - `RESIZED` / `MAXIMIZED`: `width`, `height`.
/// - `KEY_PRESSED` / `KEY_RELEASED`: key name in `text`.
/// - `TEXT_INPUT`: UTF-8 bytes in `text`.
/// - `MOUSE_PRESSED`: button name in `text`, `x`, `y`, `clicks`.
/// - `MOUSE_RELEASED`: button name in `text`, `x`, `y`.
/// - `MOUSE_MOVED`: `x`, `y`, `dx`, `dy`.
/// - `MOUSE_WHEEL`: `dy`.
///
/// `text` is NUL-padded; `text_len` is the byte length without padding.
/// Unused fields are zero.
///
/// ### 中文
/// 由 `aki_input_poll_event` 写出的扁平语义事件。
///
/// 各类型使用的字段：
/// - `RESIZED` / `MAXIMIZED`：`width`、`height`。
/// - `KEY_PRESSED` / `KEY_RELEASED`：按键名位于 `text`。
/// - `TEXT_INPUT`：UTF-8 字节位于 `text`。
/// - `MOUSE_PRESSED`：按键名位于 `text`，以及 `x`、`y`、`clicks`。
/// - `MOUSE_RELEASED`：按键名位于 `text`，以及 `x`、`y`。
/// - `MOUSE_MOVED`：`x`、`y`、`dx`、`dy`。
/// - `MOUSE_WHEEL`：`dy`。
///
/// `text` 以 NUL 填充；`text_len` 为不含填充的字节长度。未使用的字段为 0。
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AkiSemanticEvent {
    pub kind: u32,
    pub width: u32,
    pub height: u32,
    pub clicks: u32,
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub text_len: u32,
    pub text: [u8; AKI_EVENT_TEXT_CAPACITY],
}

impl Default for AkiSemanticEvent {
    fn default() -> Self {
        Self {
            kind: AKI_EVENT_KIND_NONE,
            width: 0,
            height: 0,
            clicks: 0,
            x: 0.0,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            text_len: 0,
            text: [0; AKI_EVENT_TEXT_CAPACITY],
        }
    }
}

impl AkiSemanticEvent {
    /// ### English
    /// Bytes of `text` up to `text_len`.
    ///
    /// ### 中文
    /// `text` 中前 `text_len` 个字节。
    pub fn text_bytes(&self) -> &[u8] {
        let len = (self.text_len as usize).min(AKI_EVENT_TEXT_CAPACITY);
        &self.text[..len]
    }

    fn with_kind(kind: u32) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    fn with_text(kind: u32, text: &[u8]) -> Self {
        let mut event = Self::with_kind(kind);
        let len = text.len().min(AKI_EVENT_TEXT_CAPACITY);
        event.text[..len].copy_from_slice(&text[..len]);
        event.text_len = len as u32;
        event
    }
}

impl From<&SemanticEvent> for AkiSemanticEvent {
    fn from(event: &SemanticEvent) -> Self {
        match event {
            SemanticEvent::Quit => Self::with_kind(AKI_EVENT_KIND_QUIT),
            SemanticEvent::Resized(size) => Self {
                width: size.width,
                height: size.height,
                ..Self::with_kind(AKI_EVENT_KIND_RESIZED)
            },
            SemanticEvent::Focused => Self::with_kind(AKI_EVENT_KIND_FOCUSED),
            SemanticEvent::Unfocused => Self::with_kind(AKI_EVENT_KIND_UNFOCUSED),
            SemanticEvent::KeyPressed(name) => {
                Self::with_text(AKI_EVENT_KIND_KEY_PRESSED, name.as_bytes())
            }
            SemanticEvent::KeyReleased(name) => {
                Self::with_text(AKI_EVENT_KIND_KEY_RELEASED, name.as_bytes())
            }
            SemanticEvent::TextInput(encoded) => {
                Self::with_text(AKI_EVENT_KIND_TEXT_INPUT, encoded.as_bytes())
            }
            SemanticEvent::MousePressed {
                button,
                x,
                y,
                clicks,
            } => Self {
                x: *x,
                y: *y,
                clicks: *clicks,
                ..Self::with_text(AKI_EVENT_KIND_MOUSE_PRESSED, button.as_bytes())
            },
            SemanticEvent::MouseReleased { button, x, y } => Self {
                x: *x,
                y: *y,
                ..Self::with_text(AKI_EVENT_KIND_MOUSE_RELEASED, button.as_bytes())
            },
            SemanticEvent::MouseMoved { x, y, dx, dy } => Self {
                x: *x,
                y: *y,
                dx: *dx,
                dy: *dy,
                ..Self::with_kind(AKI_EVENT_KIND_MOUSE_MOVED)
            },
            SemanticEvent::MouseWheel { dy } => Self {
                dy: *dy,
                ..Self::with_kind(AKI_EVENT_KIND_MOUSE_WHEEL)
            },
            SemanticEvent::Maximized(size) => Self {
                width: size.width,
                height: size.height,
                ..Self::with_kind(AKI_EVENT_KIND_MAXIMIZED)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use dpi::PhysicalSize;

    use super::*;
    use crate::engine::text::encode;

    #[test]
    fn test_key_name_lands_in_text() {
        let event = AkiSemanticEvent::from(&SemanticEvent::KeyPressed(Cow::Borrowed("left shift")));
        assert_eq!(event.kind, AKI_EVENT_KIND_KEY_PRESSED);
        assert_eq!(event.text_bytes(), b"left shift");
        assert_eq!(event.text[10], 0);
    }

    #[test]
    fn test_text_input_bytes() {
        let event = AkiSemanticEvent::from(&SemanticEvent::TextInput(encode(0x1F600)));
        assert_eq!(event.kind, AKI_EVENT_KIND_TEXT_INPUT);
        assert_eq!(event.text_bytes(), "😀".as_bytes());
        assert_eq!(event.text_len, 4);
    }

    #[test]
    fn test_mouse_pressed_fields() {
        let event = AkiSemanticEvent::from(&SemanticEvent::MousePressed {
            button: "left",
            x: 10.0,
            y: 20.0,
            clicks: 2,
        });
        assert_eq!(event.kind, AKI_EVENT_KIND_MOUSE_PRESSED);
        assert_eq!(event.text_bytes(), b"left");
        assert_eq!((event.x, event.y, event.clicks), (10.0, 20.0, 2));
        assert_eq!(event.dx, 0.0);
    }

    #[test]
    fn test_sizes_and_plain_kinds() {
        let maximized = SemanticEvent::Maximized(PhysicalSize::new(1920, 1080));
        let event = AkiSemanticEvent::from(&maximized);
        assert_eq!(event.kind, AKI_EVENT_KIND_MAXIMIZED);
        assert_eq!((event.width, event.height), (1920, 1080));
        assert_eq!(event.text_len, 0);

        assert_eq!(AkiSemanticEvent::from(&SemanticEvent::Quit).kind, AKI_EVENT_KIND_QUIT);
        assert_eq!(
            AkiSemanticEvent::from(&SemanticEvent::Unfocused).kind,
            AKI_EVENT_KIND_UNFOCUSED
        );
    }
}
