//! TUI rendering
//!
//! A single responsive layout: landscape terminals place the breakdown
//! beside the keypad, portrait terminals stack them. Both arms render the
//! same banner, amount readout, breakdown lines, and keypad.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::VangtiChaiApp;
use super::keypad::{Keypad, KeypadWidget};

/// Application title shown in the banner
pub const BANNER_TITLE: &str = " Vangtichai ";

/// Screen orientation derived from the drawing area.
///
/// Terminal cells are roughly twice as tall as they are wide, so an area
/// counts as landscape once its width reaches twice its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Taller than wide: breakdown stacked above the keypad
    Portrait,
    /// Wider than tall: breakdown beside the keypad
    Landscape,
}

impl Orientation {
    /// Classifies a drawing area.
    #[must_use]
    pub fn of(area: Rect) -> Self {
        if u32::from(area.width) >= 2 * u32::from(area.height) {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// The regions of the screen, one per panel.
struct Panes {
    banner: Rect,
    amount: Rect,
    breakdown: Rect,
    keypad: Rect,
}

/// Splits the drawing area according to its orientation.
fn split(area: Rect) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Banner
            Constraint::Length(3), // Amount readout
            Constraint::Min(10),   // Breakdown + keypad
        ])
        .split(area);

    match Orientation::of(area) {
        Orientation::Landscape => {
            let main = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(30), // Breakdown
                    Constraint::Percentage(70), // Keypad
                ])
                .split(rows[2]);
            Panes {
                banner: rows[0],
                amount: rows[1],
                breakdown: main[0],
                keypad: main[1],
            }
        }
        Orientation::Portrait => {
            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(10),    // Breakdown
                    Constraint::Length(14), // Keypad
                ])
                .split(rows[2]);
            Panes {
                banner: rows[0],
                amount: rows[1],
                breakdown: main[0],
                keypad: main[1],
            }
        }
    }
}

/// Computes where the keypad lands for a given drawing area.
///
/// The event loop hit-tests mouse clicks against the same layout the
/// renderer used.
#[must_use]
pub fn keypad_area(area: Rect) -> Rect {
    split(area).keypad
}

/// Renders the Vangtichai UI to the frame
pub fn render(app: &VangtiChaiApp, keypad: &Keypad, frame: &mut Frame) {
    let area = frame.area();
    let ui = VangtiChaiUI::new(app, keypad);
    frame.render_widget(ui, area);
}

/// Vangtichai UI widget
pub struct VangtiChaiUI<'a> {
    app: &'a VangtiChaiApp,
    keypad: &'a Keypad,
}

impl<'a> VangtiChaiUI<'a> {
    /// Creates a new UI widget over the app and keypad state
    #[must_use]
    pub fn new(app: &'a VangtiChaiApp, keypad: &'a Keypad) -> Self {
        Self { app, keypad }
    }

    /// Renders the title banner
    fn render_banner(&self, area: Rect, buf: &mut Buffer) {
        let banner = Paragraph::new(Span::styled(
            BANNER_TITLE,
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(Color::Blue));
        banner.render(area, buf);
    }

    /// Renders the amount readout
    fn render_amount(&self, area: Rect, buf: &mut Buffer) {
        let readout = Paragraph::new(Span::styled(
            self.app.amount_display(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        readout.render(area, buf);
    }

    /// Renders the per-denomination change panel
    fn render_breakdown(&self, area: Rect, buf: &mut Buffer) {
        let breakdown = self.app.breakdown();

        let items: Vec<ListItem> = breakdown
            .iter()
            .map(|(denomination, count)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{denomination} Taka"),
                        Style::default().fg(Color::Gray),
                    ),
                    Span::raw(": "),
                    Span::styled(count.to_string(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Change ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        );
        list.render(area, buf);
    }

    /// Renders the keypad
    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.keypad).render(area, buf);
    }
}

impl Widget for VangtiChaiUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panes = split(area);

        self.render_banner(panes.banner, buf);
        self.render_amount(panes.amount, buf);
        self.render_breakdown(panes.breakdown, buf);
        self.render_keypad(panes.keypad, buf);
    }
}
