//! Standard size lists.
//!
//! Columns cycle through a list of standard widths and windows through a list of standard
//! heights. A column or window whose size was set by hand is `Free` and re-enters the list at
//! either end, or at the entry closest to its current size.

use ordered_float::OrderedFloat;
use scroller_config::{Layout, StandardSize};

use super::LayoutElement;

#[derive(Debug, Clone, PartialEq)]
pub struct Sizes {
    pub column_widths: Vec<StandardSize>,
    pub window_heights: Vec<StandardSize>,
    pub column_default_width: StandardSize,
    pub window_default_height: StandardSize,
}

impl Default for Sizes {
    fn default() -> Self {
        Self::from_config(&Layout::default())
    }
}

impl Sizes {
    pub fn from_config(layout: &Layout) -> Self {
        Self {
            column_widths: layout.column_widths(),
            window_heights: layout.window_heights(),
            column_default_width: layout.column_default_width(),
            window_default_height: layout.window_default_height(),
        }
    }

    pub fn column_default_width<W: LayoutElement>(&self, window: &W) -> StandardSize {
        window
            .rules()
            .default_column_width
            .unwrap_or(self.column_default_width)
    }

    pub fn window_default_height<W: LayoutElement>(&self, window: &W) -> StandardSize {
        window
            .rules()
            .default_window_height
            .unwrap_or(self.window_default_height)
    }

    pub fn next_column_width(&self, current: StandardSize, step: i32) -> StandardSize {
        cycle(&self.column_widths, current, step)
    }

    pub fn next_window_height(&self, current: StandardSize, step: i32) -> StandardSize {
        cycle(&self.window_heights, current, step)
    }

    pub fn closest_column_width(&self, fraction: f64, step: i32) -> Option<StandardSize> {
        closest(&self.column_widths, fraction, step)
    }

    pub fn closest_window_height(&self, fraction: f64, step: i32) -> Option<StandardSize> {
        closest(&self.window_heights, fraction, step)
    }
}

fn cycle(list: &[StandardSize], current: StandardSize, step: i32) -> StandardSize {
    if list.is_empty() {
        return current;
    }

    let len = list.len() as i64;
    match list.iter().position(|size| *size == current) {
        Some(idx) => {
            let idx = (idx as i64 + i64::from(step)).rem_euclid(len);
            list[idx as usize]
        }
        None if step >= 0 => list[0],
        None => list[list.len() - 1],
    }
}

/// Entry of `list` closest to `fraction`.
///
/// Equally close entries resolve towards the direction of `step`.
fn closest(list: &[StandardSize], fraction: f64, step: i32) -> Option<StandardSize> {
    list.iter()
        .filter_map(|size| size.proportion().map(|proportion| (*size, proportion)))
        .min_by_key(|(_, proportion)| {
            let distance = OrderedFloat((proportion - fraction).abs());
            let tie_break = OrderedFloat(if step > 0 { -proportion } else { *proportion });
            (distance, tie_break)
        })
        .map(|(size, _)| size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Sizes {
        Sizes {
            column_widths: vec![
                StandardSize::OneFourth,
                StandardSize::OneHalf,
                StandardSize::ThreeQuarters,
            ],
            window_heights: vec![
                StandardSize::OneThird,
                StandardSize::OneHalf,
                StandardSize::One,
            ],
            column_default_width: StandardSize::OneHalf,
            window_default_height: StandardSize::One,
        }
    }

    #[test]
    fn cycling_wraps_around() {
        let sizes = sizes();
        assert_eq!(
            sizes.next_column_width(StandardSize::OneHalf, 1),
            StandardSize::ThreeQuarters
        );
        assert_eq!(
            sizes.next_column_width(StandardSize::ThreeQuarters, 1),
            StandardSize::OneFourth
        );
        assert_eq!(
            sizes.next_column_width(StandardSize::OneFourth, -1),
            StandardSize::ThreeQuarters
        );
        assert_eq!(
            sizes.next_window_height(StandardSize::One, 2),
            StandardSize::OneHalf
        );
    }

    #[test]
    fn cycling_from_outside_the_list_starts_at_an_end() {
        let sizes = sizes();
        assert_eq!(
            sizes.next_window_height(StandardSize::Free, 1),
            StandardSize::OneThird
        );
        assert_eq!(
            sizes.next_window_height(StandardSize::TwoThirds, -1),
            StandardSize::One
        );
    }

    #[test]
    fn closest_picks_nearest_proportion() {
        let sizes = sizes();
        assert_eq!(
            sizes.closest_window_height(0.4, 1),
            Some(StandardSize::OneThird)
        );
        assert_eq!(
            sizes.closest_window_height(0.9, -1),
            Some(StandardSize::One)
        );
        assert_eq!(
            sizes.closest_column_width(0.05, 1),
            Some(StandardSize::OneFourth)
        );
    }

    #[test]
    fn closest_ties_follow_step() {
        let sizes = sizes();
        // 0.375 is exactly between 1/4 and 1/2.
        assert_eq!(
            sizes.closest_column_width(0.375, 1),
            Some(StandardSize::OneHalf)
        );
        assert_eq!(
            sizes.closest_column_width(0.375, -1),
            Some(StandardSize::OneFourth)
        );
    }

    #[test]
    fn empty_list_keeps_current() {
        let mut sizes = sizes();
        sizes.window_heights.clear();
        assert_eq!(
            sizes.next_window_height(StandardSize::OneHalf, 1),
            StandardSize::OneHalf
        );
        assert_eq!(sizes.closest_window_height(0.5, 1), None);
    }
}
