use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tracing::debug;

use crate::components::{
    Component,
    suggestion_list::{SuggestionList, SuggestionRow},
    text_input::TextInput,
};
use crate::constants::INPUT_HEIGHT;
use crate::data::{TypeaheadOption, filter_options};
use crate::events::Message;

/// Configuration for a [`Typeahead`] field.
#[derive(Clone, Debug, Default)]
pub struct TypeaheadConfig {
    pub id: String,
    pub name: String,
    pub data: Vec<TypeaheadOption>,
    pub placeholder: String,
    pub label: String,
}

type ChangeHandler = Box<dyn FnMut(&str)>;
type FocusHandler = Box<dyn FnMut()>;
type SelectHandler = Box<dyn FnMut(&TypeaheadOption)>;

/// A text field with a live-filtered suggestion dropdown.
///
/// The field is either closed or open: focus opens it, blur closes it
/// without clearing the text, edits re-filter the option list, and
/// activating a suggestion hands the matching option back and closes the
/// list. Each transition invokes the matching registered callback and is
/// also returned as a [`Message`] for hosts that route events instead.
#[derive(Default)]
pub struct Typeahead {
    id: String,
    name: String,
    placeholder: String,
    label: String,
    data: Vec<TypeaheadOption>,
    input: TextInput,
    list: SuggestionList,
    open: bool,
    input_area: Option<Rect>,
    change_handler: Option<ChangeHandler>,
    focus_handler: Option<FocusHandler>,
    blur_handler: Option<FocusHandler>,
    select_handler: Option<SelectHandler>,
}

impl Typeahead {
    pub fn new(config: TypeaheadConfig) -> Self {
        let mut field = Self {
            id: config.id,
            name: config.name,
            placeholder: config.placeholder,
            label: config.label,
            data: config.data,
            ..Self::default()
        };
        field.refresh_matches();
        field
    }

    /// Register a handler invoked with the new text on every edit.
    pub fn on_change(&mut self, handler: impl FnMut(&str) + 'static) {
        self.change_handler = Some(Box::new(handler));
    }

    /// Register a handler invoked when the field gains focus.
    pub fn on_focus(&mut self, handler: impl FnMut() + 'static) {
        self.focus_handler = Some(Box::new(handler));
    }

    /// Register a handler invoked when the field loses focus.
    pub fn on_blur(&mut self, handler: impl FnMut() + 'static) {
        self.blur_handler = Some(Box::new(handler));
    }

    /// Register a handler invoked with the selected option on activation.
    pub fn on_select(&mut self, handler: impl FnMut(&TypeaheadOption) + 'static) {
        self.select_handler = Some(Box::new(handler));
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn data(&self) -> &[TypeaheadOption] {
        &self.data
    }

    /// Options currently shown in the suggestion list, in data order.
    pub fn matched_options(&self) -> Vec<&TypeaheadOption> {
        self.list
            .rows()
            .iter()
            .filter_map(|row| self.data.get(row.source))
            .collect()
    }

    /// Open the suggestion list. No-op when already focused.
    pub fn focus(&mut self) -> Option<Message> {
        if self.open {
            return None;
        }

        self.open = true;
        self.refresh_matches();
        debug!(id = %self.id, text = %self.input.text(), "typeahead focused");
        if let Some(handler) = self.focus_handler.as_mut() {
            handler();
        }
        Some(Message::FocusGained)
    }

    /// Close the suggestion list, keeping the typed text. No-op when
    /// already blurred.
    pub fn blur(&mut self) -> Option<Message> {
        if !self.open {
            return None;
        }

        self.open = false;
        debug!(id = %self.id, "typeahead blurred");
        if let Some(handler) = self.blur_handler.as_mut() {
            handler();
        }
        Some(Message::FocusLost)
    }

    /// Replace the option list and re-filter against the current text.
    pub fn set_data(&mut self, data: Vec<TypeaheadOption>) {
        self.data = data;
        self.refresh_matches();
    }

    /// Set the input text programmatically. Re-filters, but does not fire
    /// `on_change` (that is reserved for user edits).
    pub fn set_text(&mut self, text: String) {
        self.input.set_text(text);
        self.refresh_matches();
    }

    /// Route a mouse event: a click in the input focuses the field, a
    /// click on a suggestion row activates it, any other click blurs.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Message> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        if self.hits_input(mouse.column, mouse.row) {
            return self.focus();
        }

        if self.open {
            if let Some(position) = self.list.row_at(mouse.column, mouse.row) {
                return self.activate(position);
            }
            return self.blur();
        }

        None
    }

    fn hits_input(&self, column: u16, row: u16) -> bool {
        self.input_area.is_some_and(|area| {
            column >= area.x
                && column < area.x + area.width
                && row >= area.y
                && row < area.y + area.height
        })
    }

    /// Recompute the filtered rows from `(data, text)`. Every mutation of
    /// either funnels through here, so the shown rows cannot diverge from
    /// the filter.
    fn refresh_matches(&mut self) {
        let matches = filter_options(&self.data, self.input.text());
        debug!(
            id = %self.id,
            query = %self.input.text(),
            matches = matches.len(),
            "typeahead filtered"
        );

        let rows = matches
            .into_iter()
            .filter_map(|idx| {
                self.data.get(idx).map(|option| SuggestionRow {
                    source: idx,
                    label: option.label.clone(),
                })
            })
            .collect();
        self.list.set_rows(rows);
    }

    /// Hand back the option behind the given filtered row and close the
    /// list.
    fn activate(&mut self, position: usize) -> Option<Message> {
        let source = self.list.rows().get(position)?.source;
        let option = self.data.get(source)?.clone();

        self.open = false;
        debug!(id = %self.id, value = %option.value, "typeahead option selected");
        if let Some(handler) = self.select_handler.as_mut() {
            handler(&option);
        }
        Some(Message::OptionSelected(option))
    }
}

impl Component for Typeahead {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT), // input box
                Constraint::Min(0),               // dropdown
            ])
            .split(area);

        self.input_area = Some(chunks[0]);

        let content = if self.open {
            Line::from(self.input.cursor_spans(&self.placeholder))
        } else if self.input.text().is_empty() {
            Line::from(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(self.input.text().to_string())
        };

        let border_style = if self.open {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(content).block(
            Block::default()
                .title(self.label.clone())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(input, chunks[0]);

        if self.open {
            self.list.render(f, chunks[1]);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if !self.open {
            return None;
        }

        match key.code {
            KeyCode::Esc => self.blur(),
            KeyCode::Enter => self.activate(self.list.highlighted_position()),
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown => {
                self.list.handle_key(key)
            }
            KeyCode::Char('p' | 'n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.list.handle_key(key)
            }
            _ => {
                if self.input.handle_key(key) {
                    self.refresh_matches();
                    let text = self.input.text().to_string();
                    if let Some(handler) = self.change_handler.as_mut() {
                        handler(&text);
                    }
                    Some(Message::TextChanged(text))
                } else {
                    None
                }
            }
        }
    }
}
