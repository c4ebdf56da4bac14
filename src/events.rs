use crate::data::TypeaheadOption;

/// Events surfaced by components to the embedding application.
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    /// The input text changed through user editing.
    TextChanged(String),
    /// The field gained focus and the suggestion list opened.
    FocusGained,
    /// The field lost focus and the suggestion list closed.
    FocusLost,
    /// The highlighted suggestion moved to the given filtered position.
    HighlightMoved(usize),
    /// A suggestion was activated.
    OptionSelected(TypeaheadOption),
}
