use crate::components::Component;
use crate::constants::{NO_RESULTS_LABEL, PAGE_SIZE};
use crate::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// One visible row of the dropdown: the label to draw and the index of
/// the option it came from in the caller's data.
#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionRow {
    pub source: usize,
    pub label: String,
}

/// The dropdown half of the typeahead: the filtered rows, the highlighted
/// row, and the scroll window keeping it visible.
///
/// An empty row set renders the no-results indicator instead of a list.
#[derive(Default)]
pub struct SuggestionList {
    rows: Vec<SuggestionRow>,
    highlighted: usize,
    scroll_offset: usize,
    area: Option<Rect>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the rows; the highlight and scroll window reset to the top.
    pub fn set_rows(&mut self, rows: Vec<SuggestionRow>) {
        self.rows = rows;
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    pub fn rows(&self) -> &[SuggestionRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Position of the highlighted row within the filtered rows.
    pub fn highlighted_position(&self) -> usize {
        self.highlighted
    }

    /// Source index of the highlighted row, if any rows are shown.
    pub fn highlighted_source(&self) -> Option<usize> {
        self.rows.get(self.highlighted).map(|row| row.source)
    }

    pub fn move_up(&mut self) -> bool {
        if self.highlighted > 0 {
            self.highlighted -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.highlighted + 1 < self.rows.len() {
            self.highlighted += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        if self.highlighted == 0 {
            return false;
        }
        self.highlighted = self.highlighted.saturating_sub(PAGE_SIZE);
        true
    }

    pub fn page_down(&mut self) -> bool {
        if self.rows.is_empty() || self.highlighted + 1 == self.rows.len() {
            return false;
        }
        self.highlighted = (self.highlighted + PAGE_SIZE).min(self.rows.len() - 1);
        true
    }

    /// Map an absolute screen position to a row position, accounting for
    /// the border and the scroll window of the last render.
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area?;
        if self.rows.is_empty() || area.width < 3 || area.height < 3 {
            return None;
        }

        let inside_x = column > area.x && column < area.x + area.width - 1;
        let inside_y = row > area.y && row < area.y + area.height - 1;
        if !inside_x || !inside_y {
            return None;
        }

        let position = self.scroll_offset + (row - area.y - 1) as usize;
        (position < self.rows.len()).then_some(position)
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.area = Some(area);

        if self.rows.is_empty() {
            let empty = Paragraph::new(NO_RESULTS_LABEL)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        }

        let visible_height = area.height.saturating_sub(2) as usize; // -2 for borders

        // Adjust scroll offset to keep the highlighted row visible
        if visible_height > 0 {
            if self.highlighted < self.scroll_offset {
                self.scroll_offset = self.highlighted;
            } else if self.highlighted >= self.scroll_offset + visible_height {
                self.scroll_offset = self.highlighted - visible_height + 1;
            }
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible_height.max(1))
            .map(|(i, row)| {
                let style = if i == self.highlighted {
                    Style::default()
                        .bg(Color::Rgb(60, 60, 60))
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(row.label.clone()).style(style)
            })
            .collect();

        let list = List::new(items).block(Block::default().borders(Borders::ALL));
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let moved = match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_up(),
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => self.move_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            _ => false,
        };

        moved.then(|| Message::HighlightMoved(self.highlighted))
    }
}
