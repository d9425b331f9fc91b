// SPDX-License-Identifier: MPL-2.0
//! Page-indicator dot row drawn with Canvas.
//!
//! One circle per mark, centered as a row in the widget bounds; the active
//! mark is filled with the theme's primary color. Clicking a dot publishes
//! [`Message::MarkPressed`], so a tap requests a page change through the
//! normal message path instead of mutating indicator state directly.

use crate::ui::carousel::{IndicatorState, Message};
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Radius of one indicator mark.
pub const MARK_RADIUS: f32 = 5.0;
/// Horizontal gap between neighbouring marks.
pub const MARK_SPACING: f32 = 8.0;

/// Canvas program rendering one indicator row.
#[derive(Debug, Clone, Copy)]
pub struct PageIndicator {
    mark_count: usize,
    active_mark: Option<usize>,
}

/// Builds the indicator element for the given row state.
pub fn view(state: &IndicatorState) -> Element<'static, Message> {
    Canvas::new(PageIndicator {
        mark_count: state.mark_count(),
        active_mark: state.active_mark(),
    })
    .width(Length::Fill)
    .height(Length::Fixed(sizing::INDICATOR_HEIGHT))
    .into()
}

/// Total width of a row of `count` marks.
#[must_use]
pub fn row_width(count: usize, radius: f32, spacing: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let count = count as f32;
    2.0 * radius * count + spacing * (count - 1.0)
}

/// Centers of each mark, distributed around the middle of `bounds`.
#[must_use]
pub fn mark_centers(count: usize, bounds: Size, radius: f32, spacing: f32) -> Vec<Point> {
    let row = row_width(count, radius, spacing);
    let first_cx = bounds.width / 2.0 - row / 2.0 + radius;
    let cy = bounds.height / 2.0;
    let step = 2.0 * radius + spacing;

    (0..count)
        .map(|i| Point::new(first_cx + step * i as f32, cy))
        .collect()
}

/// Mark under `cursor`, if any. The tap target extends half a spacing
/// beyond each dot so small dots stay clickable.
#[must_use]
pub fn hit_test(
    cursor: Point,
    count: usize,
    bounds: Size,
    radius: f32,
    spacing: f32,
) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let row = row_width(count, radius, spacing);
    let first_cx = bounds.width / 2.0 - row / 2.0 + radius;
    let step = 2.0 * radius + spacing;
    let slop = radius + spacing / 2.0;

    let nearest = ((cursor.x - first_cx) / step).round();
    if nearest < 0.0 || nearest >= count as f32 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let index = nearest as usize;

    let center_x = first_cx + step * nearest;
    let center_y = bounds.height / 2.0;
    if (cursor.x - center_x).abs() <= slop && (cursor.y - center_y).abs() <= slop {
        Some(index)
    } else {
        None
    }
}

impl canvas::Program<Message> for PageIndicator {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                if let Some(index) = hit_test(
                    position,
                    self.mark_count,
                    bounds.size(),
                    MARK_RADIUS,
                    MARK_SPACING,
                ) {
                    return Some(Action::publish(Message::MarkPressed(index)).and_capture());
                }
            }
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let palette = theme.extended_palette();
        let active_color = palette.primary.base.color;
        let inactive_color = palette.background.strong.color;

        let mut frame = Frame::new(renderer, bounds.size());

        for (index, center) in mark_centers(self.mark_count, bounds.size(), MARK_RADIUS, MARK_SPACING)
            .into_iter()
            .enumerate()
        {
            let dot = Path::circle(center, MARK_RADIUS);
            if self.active_mark == Some(index) {
                frame.fill(&dot, active_color);
            } else {
                frame.fill(&dot, inactive_color);
                frame.stroke(
                    &dot,
                    Stroke::default().with_width(1.0).with_color(active_color),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_mark = cursor.position_in(bounds).is_some_and(|position| {
            hit_test(
                position,
                self.mark_count,
                bounds.size(),
                MARK_RADIUS,
                MARK_SPACING,
            )
            .is_some()
        });

        if over_mark {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 200.0,
        height: 24.0,
    };

    #[test]
    fn row_width_matches_dot_and_gap_sum() {
        assert_eq!(row_width(0, 5.0, 8.0), 0.0);
        assert_eq!(row_width(1, 5.0, 8.0), 10.0);
        // 3 dots of 10px and 2 gaps of 8px
        assert_eq!(row_width(3, 5.0, 8.0), 46.0);
    }

    #[test]
    fn centers_are_symmetric_around_the_middle() {
        let centers = mark_centers(4, BOUNDS, 5.0, 8.0);
        assert_eq!(centers.len(), 4);

        let mid = BOUNDS.width / 2.0;
        let left = mid - centers[0].x;
        let right = centers[3].x - mid;
        assert!((left - right).abs() < f32::EPSILON * mid);
        assert!(centers.iter().all(|c| c.y == BOUNDS.height / 2.0));
    }

    #[test]
    fn centers_step_by_diameter_plus_spacing() {
        let centers = mark_centers(3, BOUNDS, 5.0, 8.0);
        assert!((centers[1].x - centers[0].x - 18.0).abs() < 1e-4);
        assert!((centers[2].x - centers[1].x - 18.0).abs() < 1e-4);
    }

    #[test]
    fn hit_test_finds_the_dot_under_the_cursor() {
        let centers = mark_centers(5, BOUNDS, MARK_RADIUS, MARK_SPACING);
        for (index, center) in centers.iter().enumerate() {
            let hit = hit_test(*center, 5, BOUNDS, MARK_RADIUS, MARK_SPACING);
            assert_eq!(hit, Some(index));
        }
    }

    #[test]
    fn hit_test_misses_outside_the_row() {
        assert_eq!(
            hit_test(Point::new(2.0, 12.0), 3, BOUNDS, MARK_RADIUS, MARK_SPACING),
            None
        );
        assert_eq!(
            hit_test(Point::new(100.0, 1.0), 3, BOUNDS, MARK_RADIUS, MARK_SPACING),
            None
        );
        assert_eq!(
            hit_test(Point::new(100.0, 12.0), 0, BOUNDS, MARK_RADIUS, MARK_SPACING),
            None
        );
    }
}
