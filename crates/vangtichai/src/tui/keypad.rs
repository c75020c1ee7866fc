//! Numeric keypad for the TUI
//!
//! Phone-style entry pad: three digit rows, then a bottom row where Clear
//! takes double width. Buttons can be clicked with the mouse and are
//! highlighted while the corresponding key is pressed.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Reset the amount to zero
    Clear,
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Label shown on the button
    pub label: &'static str,
    /// Whether the button is currently pressed/highlighted
    pub pressed: bool,
    /// The action this button performs
    pub action: ButtonAction,
}

impl KeypadButton {
    /// Creates a digit button
    #[must_use]
    pub fn digit(d: u8) -> Self {
        Self {
            label: digit_label(d),
            pressed: false,
            action: ButtonAction::Digit(d),
        }
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear() -> Self {
        Self {
            label: "Clear",
            pressed: false,
            action: ButtonAction::Clear,
        }
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

const fn digit_label(d: u8) -> &'static str {
    match d {
        0 => "0",
        1 => "1",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        _ => "?",
    }
}

/// The keypad layout - a 4x3 grid with a double-width Clear
/// ```text
/// [ 1 ] [ 2 ] [ 3 ]
/// [ 4 ] [ 5 ] [ 6 ]
/// [ 7 ] [ 8 ] [ 9 ]
/// [ 0 ] [  Clear  ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in layout order (digits 1-9, then 0, then Clear)
    buttons: Vec<KeypadButton>,
    /// Grid cells in row-major order, as indices into `buttons`; Clear
    /// occupies the last two cells of the bottom row
    cells: Vec<usize>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard Vangtichai keypad
    #[must_use]
    pub fn new() -> Self {
        let mut buttons: Vec<KeypadButton> = (1..=9).map(KeypadButton::digit).collect();
        buttons.push(KeypadButton::digit(0));
        buttons.push(KeypadButton::clear());

        let cells = vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10];

        Self {
            buttons,
            cells,
            cols: 3,
            rows: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button occupying a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.cells
                .get(row * self.cols + col)
                .and_then(|&index| self.buttons.get(index))
        } else {
            None
        }
    }

    /// Finds the index of the button performing an action
    #[must_use]
    pub fn find_button(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Sets a button as pressed by index
    pub fn press_button(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights the button for an action, releasing every other button
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(index) = self.find_button(action) {
            self.press_button(index);
        }
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Converts a click position to the action of the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<ButtonAction> {
        if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
            return None;
        }

        let rel_x = x - area.x;
        let rel_y = y - area.y;

        // Account for border (1 char on each side)
        if rel_x == 0 || rel_y == 0 || rel_x >= area.width - 1 || rel_y >= area.height - 1 {
            return None;
        }

        let inner_x = rel_x - 1;
        let inner_y = rel_y - 1;

        let btn_width = (area.width - 2) / self.cols as u16;
        let btn_height = (area.height - 2) / self.rows as u16;

        if btn_width == 0 || btn_height == 0 {
            return None;
        }

        let col = (inner_x / btn_width) as usize;
        let row = (inner_y / btn_height) as usize;

        if row < self.rows && col < self.cols {
            self.cells
                .get(row * self.cols + col)
                .and_then(|&index| self.buttons.get(index))
                .map(|btn| btn.action)
        } else {
            None
        }
    }

    /// Iterates the grid as `(row, start_col, span, button)`, merging the
    /// cells a button occupies within a row
    fn spans(&self) -> Vec<(usize, usize, usize, &KeypadButton)> {
        let mut out = Vec::new();
        for row in 0..self.rows {
            let mut col = 0;
            while col < self.cols {
                let index = self.cells[row * self.cols + col];
                let mut span = 1;
                while col + span < self.cols && self.cells[row * self.cols + col + span] == index
                {
                    span += 1;
                }
                out.push((row, col, span, &self.buttons[index]));
                col += span;
            }
        }
        out
    }
}

/// Keypad widget for rendering
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
        // Draw border
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: area.height.saturating_sub(2),
        };

        if inner.width < 3 || inner.height < 4 {
            return; // Too small to render
        }

        let btn_width = inner.width / self.keypad.cols as u16;
        let btn_height = inner.height / self.keypad.rows as u16;

        for (row, col, span, btn) in self.keypad.spans() {
            let x = inner.x + (col as u16 * btn_width);
            let y = inner.y + (row as u16 * btn_height);
            let width = span as u16 * btn_width;

            // Button style based on pressed state
            let style = if btn.pressed {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                match btn.action {
                    ButtonAction::Digit(_) => Style::default().fg(Color::White),
                    ButtonAction::Clear => Style::default().fg(Color::Red),
                }
            };

            // Render button label centered within its span
            if width >= 3 {
                let label = format!("[{}]", btn.label);
                let label_x = x + (width.saturating_sub(label.len() as u16)) / 2;
                let label_y = y + btn_height / 2;

                if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                    buf.set_span(label_x, label_y, &Span::styled(label, style), width);
                }
            }
        }
    }
}
