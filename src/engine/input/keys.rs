//! ### English
//! Platform key-code and mouse-button naming.
//!
//! Key codes use GLFW numbering (sokol shares it). Names are the stable lowercase vocabulary
//! the editor's keymap is written against (`"left shift"`, `"page down"`, `"F5"`, `"a"`...).
//! The table is built once, on first use.
//!
//! ### 中文
//! 平台键码与鼠标按键的命名。
//!
//! 键码采用 GLFW 编号（sokol 与之相同）。名称是编辑器 keymap 依赖的稳定小写词汇
//! （`"left shift"`、`"page down"`、`"F5"`、`"a"` 等）。映射表在首次使用时构建一次。

use std::borrow::Cow;
use std::sync::LazyLock;

pub const KEY_SPACE: u32 = 32;
pub const KEY_MINUS: u32 = 45;
pub const KEY_0: u32 = 48;
pub const KEY_9: u32 = 57;
pub const KEY_EQUAL: u32 = 61;
pub const KEY_A: u32 = 65;
pub const KEY_Z: u32 = 90;

pub const KEY_ESCAPE: u32 = 256;
pub const KEY_ENTER: u32 = 257;
pub const KEY_TAB: u32 = 258;
pub const KEY_BACKSPACE: u32 = 259;
pub const KEY_INSERT: u32 = 260;
pub const KEY_DELETE: u32 = 261;
pub const KEY_RIGHT: u32 = 262;
pub const KEY_LEFT: u32 = 263;
pub const KEY_DOWN: u32 = 264;
pub const KEY_UP: u32 = 265;
pub const KEY_PAGE_UP: u32 = 266;
pub const KEY_PAGE_DOWN: u32 = 267;
pub const KEY_HOME: u32 = 268;
pub const KEY_END: u32 = 269;
pub const KEY_CAPS_LOCK: u32 = 280;
pub const KEY_SCROLL_LOCK: u32 = 281;
pub const KEY_NUM_LOCK: u32 = 282;
pub const KEY_PRINT_SCREEN: u32 = 283;
pub const KEY_PAUSE: u32 = 284;
pub const KEY_F1: u32 = 290;
pub const KEY_F24: u32 = 313;

pub const KEY_LEFT_SHIFT: u32 = 340;
pub const KEY_LEFT_CONTROL: u32 = 341;
pub const KEY_LEFT_ALT: u32 = 342;
pub const KEY_LEFT_SUPER: u32 = 343;
pub const KEY_RIGHT_SHIFT: u32 = 344;
pub const KEY_RIGHT_CONTROL: u32 = 345;
pub const KEY_RIGHT_ALT: u32 = 346;
pub const KEY_RIGHT_SUPER: u32 = 347;
pub const KEY_MENU: u32 = 348;

/// ### English
/// Modifier keys released synthetically when the window loses focus, in injection order.
///
/// ### 中文
/// 窗口失焦时合成抬起的修饰键（按注入顺序）。
pub const FOCUS_LOSS_MODIFIERS: [u32; 6] = [
    KEY_LEFT_ALT,
    KEY_RIGHT_ALT,
    KEY_LEFT_CONTROL,
    KEY_RIGHT_CONTROL,
    KEY_LEFT_SHIFT,
    KEY_RIGHT_SHIFT,
];

const KEY_TABLE_LEN: usize = KEY_MENU as usize + 1;

const NAMED_KEYS: [(u32, &str); 29] = [
    (KEY_SPACE, "space"),
    (KEY_ENTER, "return"),
    (KEY_TAB, "tab"),
    (KEY_BACKSPACE, "backspace"),
    (KEY_ESCAPE, "escape"),
    (KEY_LEFT_SHIFT, "left shift"),
    (KEY_RIGHT_SHIFT, "right shift"),
    (KEY_LEFT_CONTROL, "left ctrl"),
    (KEY_RIGHT_CONTROL, "right ctrl"),
    (KEY_LEFT_ALT, "left alt"),
    (KEY_RIGHT_ALT, "right alt"),
    (KEY_LEFT_SUPER, "left super"),
    (KEY_RIGHT_SUPER, "right super"),
    (KEY_MENU, "menu"),
    (KEY_CAPS_LOCK, "caps lock"),
    (KEY_NUM_LOCK, "num lock"),
    (KEY_SCROLL_LOCK, "scroll lock"),
    (KEY_LEFT, "left"),
    (KEY_RIGHT, "right"),
    (KEY_UP, "up"),
    (KEY_DOWN, "down"),
    (KEY_HOME, "home"),
    (KEY_END, "end"),
    (KEY_PAGE_DOWN, "page down"),
    (KEY_PAGE_UP, "page up"),
    (KEY_INSERT, "insert"),
    (KEY_DELETE, "delete"),
    (KEY_PRINT_SCREEN, "print screen"),
    (KEY_PAUSE, "pause"),
];

static KEY_NAMES: LazyLock<Box<[Option<Cow<'static, str>>]>> = LazyLock::new(build_key_table);

fn build_key_table() -> Box<[Option<Cow<'static, str>>]> {
    let mut table: Vec<Option<Cow<'static, str>>> = vec![None; KEY_TABLE_LEN];

    for (code, name) in NAMED_KEYS {
        table[code as usize] = Some(Cow::Borrowed(name));
    }
    for code in KEY_F1..=KEY_F24 {
        table[code as usize] = Some(Cow::Owned(format!("F{}", 1 + code - KEY_F1)));
    }
    for code in KEY_0..=KEY_9 {
        let ch = char::from(b'0' + (code - KEY_0) as u8);
        table[code as usize] = Some(Cow::Owned(ch.to_string()));
    }
    for code in KEY_A..=KEY_Z {
        let ch = char::from(b'a' + (code - KEY_A) as u8);
        table[code as usize] = Some(Cow::Owned(ch.to_string()));
    }
    table[KEY_MINUS as usize] = Some(Cow::Borrowed("-"));
    table[KEY_EQUAL as usize] = Some(Cow::Borrowed("="));

    table.into_boxed_slice()
}

/// ### English
/// Maps a platform key code to its stable name; unmapped codes become `"?(<code>)"`.
///
/// ### 中文
/// 将平台键码映射为稳定名称；未映射的键码返回 `"?(<code>)"`。
pub fn key_name(key_code: u32) -> Cow<'static, str> {
    let table: &'static [Option<Cow<'static, str>>] = &KEY_NAMES;
    match table.get(key_code as usize) {
        Some(Some(name)) => Cow::Borrowed(name.as_ref()),
        _ => {
            log::trace!("unmapped key code {key_code}");
            Cow::Owned(format!("?({key_code})"))
        }
    }
}

/// ### English
/// Maps a mouse button code to its name (`1` left, `2` middle, `3` right, otherwise `"?"`).
///
/// ### 中文
/// 将鼠标按键编号映射为名称（`1` 左键、`2` 中键、`3` 右键，其它为 `"?"`）。
pub fn button_name(button: u32) -> &'static str {
    match button {
        1 => "left",
        2 => "middle",
        3 => "right",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert_eq!(key_name(KEY_A), "a");
        assert_eq!(key_name(KEY_Z), "z");
        assert_eq!(key_name(75), "k");
        assert_eq!(key_name(KEY_0), "0");
        assert_eq!(key_name(KEY_9), "9");
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(key_name(KEY_F1), "F1");
        assert_eq!(key_name(KEY_F1 + 11), "F12");
        assert_eq!(key_name(KEY_F24), "F24");
        // F25 is not part of the vocabulary.
        assert_eq!(key_name(KEY_F24 + 1), "?(314)");
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_name(KEY_SPACE), "space");
        assert_eq!(key_name(KEY_ENTER), "return");
        assert_eq!(key_name(KEY_LEFT_SHIFT), "left shift");
        assert_eq!(key_name(KEY_RIGHT_CONTROL), "right ctrl");
        assert_eq!(key_name(KEY_PAGE_DOWN), "page down");
        assert_eq!(key_name(KEY_PRINT_SCREEN), "print screen");
        assert_eq!(key_name(KEY_MINUS), "-");
        assert_eq!(key_name(KEY_EQUAL), "=");
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_name(0), "?(0)");
        assert_eq!(key_name(44), "?(44)");
        assert_eq!(key_name(320), "?(320)");
        assert_eq!(key_name(100_000), "?(100000)");
        assert_eq!(key_name(u32::MAX), "?(4294967295)");
    }

    #[test]
    fn test_table_hits_are_borrowed() {
        assert!(matches!(key_name(KEY_A), Cow::Borrowed(_)));
        assert!(matches!(key_name(KEY_ESCAPE), Cow::Borrowed(_)));
    }

    #[test]
    fn test_button_names() {
        assert_eq!(button_name(1), "left");
        assert_eq!(button_name(2), "middle");
        assert_eq!(button_name(3), "right");
        assert_eq!(button_name(0), "?");
        assert_eq!(button_name(7), "?");
    }
}
