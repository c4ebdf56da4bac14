pub mod components;
pub mod constants;
pub mod data;
pub mod demo;
pub mod events;
pub mod logging;
pub mod matching;

pub use components::Component;
pub use components::suggestion_list::{SuggestionList, SuggestionRow};
pub use components::text_input::TextInput;
pub use components::typeahead::{Typeahead, TypeaheadConfig};
pub use data::{TypeaheadOption, filter_options, load_options, sample_options};
pub use demo::DemoApp;
pub use events::Message;
pub use logging::init_tracing;
