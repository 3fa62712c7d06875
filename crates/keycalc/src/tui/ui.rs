//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::adapter::KEY_BINDINGS;

/// Title on the outer border
pub const TITLE: &str = " keycalc ";

const KEYPAD_WIDTH: u16 = 30;
const HELP_WIDTH: u16 = 38;

/// Screen regions, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regions {
    display: Rect,
    details: Rect,
    keypad: Rect,
    help: Rect,
    status: Rect,
}

impl Regions {
    fn split(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(7), Constraint::Length(1)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(KEYPAD_WIDTH),
                Constraint::Length(HELP_WIDTH),
            ])
            .split(rows[0]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(columns[0]);

        Self {
            display: left[0],
            details: left[1],
            keypad: columns[1],
            help: columns[2],
            status: rows[1],
        }
    }
}

/// Where the keypad is drawn inside a frame of size `area`
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    Regions::split(area).keypad
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Full-screen calculator widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Previous line above, current line in bold below, both right-aligned
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = self.app.display();
        let lines = vec![
            Line::from(Span::styled(
                display.previous,
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                display.current,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let operator = engine
            .pending_operator()
            .map_or_else(|| "-".to_string(), |op| op.symbol().to_string());

        let field = |name: &'static str, value: String| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{name:>9} "), Style::default().fg(Color::DarkGray)),
                Span::styled(value, Style::default().fg(Color::Cyan)),
            ]))
        };

        let items = vec![
            field("state", engine.tag().to_string()),
            field("operator", operator),
            field("locale", engine.format_config().locale.to_string()),
        ];

        List::new(items)
            .block(
                Block::default()
                    .title(" State ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let mut items: Vec<ListItem> = KEY_BINDINGS
            .iter()
            .map(|(keys, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{keys:>10}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();
        items.push(ListItem::new(Line::from(vec![
            Span::styled(format!("{:>10}", "q Ctrl+C"), Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled("Quit", Style::default().fg(Color::Gray)),
        ])));

        List::new(items)
            .block(
                Block::default()
                    .title(" Keys ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
        ))
        .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(TITLE)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let regions = Regions::split(area);
        self.render_display(regions.display, buf);
        self.render_details(regions.details, buf);
        KeypadWidget::new(self.app.keypad()).render(regions.keypad, buf);
        self.render_help(regions.help, buf);
        self.render_status(regions.status, buf);
    }
}
