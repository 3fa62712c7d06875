//! Keypad widget and mouse hit-testing

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::adapter::InputAction;
use crate::keypad::{Keypad, KeypadButton};

/// Cell size of one grid column/row inside `inner`
fn cell_size(keypad: &Keypad, inner: Rect) -> (u16, u16) {
    let (rows, cols) = keypad.dimensions();
    (inner.width / cols as u16, inner.height / rows as u16)
}

/// Area inside the 1-cell border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Converts a click position to a button index.
///
/// `area` is the full widget area, border included. Clicks on the border
/// or outside the grid return `None`.
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let (btn_width, btn_height) = cell_size(keypad, inner);
    if btn_width == 0 || btn_height == 0 {
        return None;
    }

    let col = ((x - inner.x) / btn_width) as usize;
    let row = ((y - inner.y) / btn_height) as usize;
    keypad.index_at(row, col)
}

fn button_style(btn: &KeypadButton) -> Style {
    if btn.pressed {
        return Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
    }
    match btn.action {
        InputAction::Append(_) => Style::default().fg(Color::White),
        InputAction::Operator(_) => Style::default().fg(Color::Yellow),
        InputAction::Compute => Style::default().fg(Color::Green),
        InputAction::Clear => Style::default().fg(Color::Red),
        InputAction::Delete => Style::default().fg(Color::Cyan),
    }
}

/// Renders a [`Keypad`] as a bordered grid of bracketed labels
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner_area(area);
        let (rows, cols) = self.keypad.dimensions();
        if inner.width < cols as u16 || inner.height < rows as u16 {
            return;
        }

        let (btn_width, btn_height) = cell_size(self.keypad, inner);
        for btn in self.keypad.buttons() {
            let width = btn_width * btn.span as u16;
            let x = inner.x + btn.col as u16 * btn_width;
            let y = inner.y + btn.row as u16 * btn_height + btn_height / 2;

            let span = Span::styled(format!("[{}]", btn.label), button_style(btn));
            let label_width = span.width() as u16;
            if label_width > width {
                continue;
            }
            let label_x = x + (width - label_width) / 2;
            buf.set_span(label_x, y, &span, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    // ===== hit_test =====

    #[test]
    fn test_hit_test_first_row() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 42, 12);
        // Inner area is 40x10: cells are 10 wide, 2 tall
        let ac = hit_test(&keypad, area, 1, 1).unwrap();
        assert_eq!(keypad.get_button(ac).unwrap().action, InputAction::Clear);
        let also_ac = hit_test(&keypad, area, 15, 2).unwrap();
        assert_eq!(ac, also_ac);
        let div = hit_test(&keypad, area, 35, 1).unwrap();
        assert_eq!(
            keypad.get_button(div).unwrap().action,
            InputAction::Operator(Operator::Divide)
        );
    }

    #[test]
    fn test_hit_test_wide_equals() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 42, 12);
        let left = hit_test(&keypad, area, 21, 9).unwrap();
        let right = hit_test(&keypad, area, 40, 10).unwrap();
        assert_eq!(left, right);
        assert_eq!(keypad.get_button(left).unwrap().label, "=");
    }

    #[test]
    fn test_hit_test_with_offset() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 42, 12);
        let idx = hit_test(&keypad, area, 12, 8).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label, "1");
    }

    #[test]
    fn test_hit_test_border_is_none() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 42, 12);
        assert!(hit_test(&keypad, area, 0, 0).is_none());
        assert!(hit_test(&keypad, area, 41, 5).is_none());
        assert!(hit_test(&keypad, area, 5, 11).is_none());
    }

    #[test]
    fn test_hit_test_outside_is_none() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 42, 12);
        assert!(hit_test(&keypad, area, 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_too_small() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 4);
        assert!(hit_test(&keypad, area, 1, 1).is_none());
    }

    #[test]
    fn test_hit_test_slack_below_grid() {
        let keypad = Keypad::new();
        // Inner height 11 leaves one unused row under a 5x2 grid
        let area = Rect::new(0, 0, 42, 13);
        assert!(hit_test(&keypad, area, 5, 11).is_none());
    }

    // ===== KeypadWidget =====

    #[test]
    fn test_widget_renders_labels() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 42, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let first = row_text(&buf, 2);
        assert!(first.contains("[AC]"), "{first}");
        assert!(first.contains("[DEL]"), "{first}");
        assert!(first.contains("[÷]"), "{first}");

        let last = row_text(&buf, 10);
        assert!(last.contains("[.]"), "{last}");
        assert!(last.contains("[=]"), "{last}");
    }

    #[test]
    fn test_widget_renders_title() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 42, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        assert!(row_text(&buf, 0).contains("Keypad"));
    }

    #[test]
    fn test_widget_highlights_pressed() {
        let mut keypad = Keypad::new();
        keypad.highlight(InputAction::Append('5'));
        let area = Rect::new(0, 0, 42, 12);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);

        let row = row_text(&buf, 6);
        let col = row.chars().position(|c| c == '5').unwrap() as u16;
        assert_eq!(buf[(col, 6)].bg, Color::Yellow);
    }

    #[test]
    fn test_widget_tiny_area_draws_only_border() {
        let keypad = Keypad::new();
        let area = Rect::new(0, 0, 4, 4);
        let mut buf = Buffer::empty(area);
        KeypadWidget::new(&keypad).render(area, &mut buf);
        assert!(!row_text(&buf, 1).contains('['));
    }

    #[test]
    fn test_button_styles() {
        let keypad = Keypad::new();
        let style_of = |label: &str| {
            let idx = keypad.find_by_label(label).unwrap();
            button_style(keypad.get_button(idx).unwrap())
        };
        assert_eq!(style_of("7").fg, Some(Color::White));
        assert_eq!(style_of("+").fg, Some(Color::Yellow));
        assert_eq!(style_of("=").fg, Some(Color::Green));
        assert_eq!(style_of("AC").fg, Some(Color::Red));
        assert_eq!(style_of("DEL").fg, Some(Color::Cyan));
    }
}
