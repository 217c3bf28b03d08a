//! ### English
//! Multi-click (double/triple/...) detection.
//!
//! ### 中文
//! 多击（双击/三击/……）检测。

use super::config::NormalizerConfig;

#[derive(Clone, Copy, Debug, PartialEq)]
struct LastClick {
    time: f64,
    x: f32,
    y: f32,
    button: u32,
}

/// ### English
/// Click history used to count consecutive presses. Mutated only on mouse-down.
///
/// ### 中文
/// 用于统计连续按下次数的点击历史。仅在鼠标按下时修改。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClickState {
    last: Option<LastClick>,
    click_count: u32,
}

impl ClickState {
    /// ### English
    /// Records a press and returns its click count (1 = single, 2 = double, ...).
    ///
    /// The count grows while the same button is pressed within `click_interval` seconds and
    /// `click_slop` pixels of the previous press; otherwise it restarts at 1. The press is
    /// always recorded as the new reference.
    ///
    /// ### 中文
    /// 记录一次按下并返回点击次数（1 = 单击，2 = 双击，……）。
    ///
    /// 同一按键在 `click_interval` 秒与 `click_slop` 像素范围内连续按下时次数递增，否则重置为 1。
    /// 本次按下总会被记录为新的参照点。
    pub fn register(
        &mut self,
        button: u32,
        x: f32,
        y: f32,
        now: f64,
        config: &NormalizerConfig,
    ) -> u32 {
        let repeat = self.last.is_some_and(|last| {
            last.button == button
                && (x - last.x).abs() < config.click_slop
                && (y - last.y).abs() < config.click_slop
                && now - last.time < config.click_interval
        });

        self.click_count = if repeat {
            self.click_count.saturating_add(1)
        } else {
            1
        };
        self.last = Some(LastClick {
            time: now,
            x,
            y,
            button,
        });
        self.click_count
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: &mut ClickState, button: u32, x: f32, y: f32, now: f64) -> u32 {
        state.register(button, x, y, now, &NormalizerConfig::default())
    }

    #[test]
    fn test_triple_click_then_reset() {
        let mut state = ClickState::default();
        assert_eq!(press(&mut state, 1, 100.0, 100.0, 1.0), 1);
        assert_eq!(press(&mut state, 1, 101.0, 102.0, 1.1), 2);
        assert_eq!(press(&mut state, 1, 102.0, 101.0, 1.2), 3);
        assert_eq!(press(&mut state, 1, 102.0, 101.0, 1.7), 1);
    }

    #[test]
    fn test_count_is_unbounded() {
        let mut state = ClickState::default();
        for expected in 1..=6 {
            assert_eq!(press(&mut state, 1, 5.0, 5.0, expected as f64 * 0.1), expected);
        }
    }

    #[test]
    fn test_different_button_resets() {
        let mut state = ClickState::default();
        assert_eq!(press(&mut state, 1, 10.0, 10.0, 0.0), 1);
        assert_eq!(press(&mut state, 3, 10.0, 10.0, 0.1), 1);
        assert_eq!(press(&mut state, 3, 10.0, 10.0, 0.2), 2);
    }

    #[test]
    fn test_distance_is_exclusive() {
        let mut state = ClickState::default();
        assert_eq!(press(&mut state, 1, 10.0, 10.0, 0.0), 1);
        assert_eq!(press(&mut state, 1, 14.0, 10.0, 0.1), 1);
        assert_eq!(press(&mut state, 1, 17.9, 10.0, 0.2), 2);
    }

    #[test]
    fn test_slow_press_still_becomes_reference() {
        let mut state = ClickState::default();
        assert_eq!(press(&mut state, 1, 0.0, 0.0, 0.0), 1);
        assert_eq!(press(&mut state, 1, 0.0, 0.0, 5.0), 1);
        // Compared against the press at 5.0, not the first one.
        assert_eq!(press(&mut state, 1, 0.0, 0.0, 5.2), 2);
        assert_eq!(state.click_count(), 2);
    }
}
