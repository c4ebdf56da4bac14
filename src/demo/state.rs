use crate::data::TypeaheadOption;
use crate::events::Message;

/// Side effect requested by a state update.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ShowStatus(String),
    ClearStatus,
}

/// Demo-level state fed by the typeahead's messages.
#[derive(Default)]
pub struct DemoState {
    pub status: Option<String>,
    pub last_selected: Option<TypeaheadOption>,
}

impl DemoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::TextChanged(text) => {
                if text.is_empty() {
                    Command::ClearStatus
                } else {
                    Command::ShowStatus(format!("Filtering on \"{text}\""))
                }
            }
            Message::FocusGained => Command::ShowStatus("Focused".to_string()),
            Message::FocusLost => Command::ShowStatus("Blurred".to_string()),
            Message::HighlightMoved(_) => Command::None,
            Message::OptionSelected(option) => {
                let status = format!("Selected {} ({})", option.label, option.value);
                self.last_selected = Some(option);
                Command::ShowStatus(status)
            }
        }
    }
}
