//! UI Components
//!
//! Reusable UI components for the desktop application.

mod button;
mod counter;
mod header;
mod note_card;
mod note_form;
mod note_list;
mod toolbar;
mod warning_banner;

pub use counter::CounterPanel;
pub use header::Header;
pub use note_form::NoteEntry;
pub use note_list::NoteList;
pub use toolbar::Toolbar;
pub use warning_banner::WarningBanner;

use note_card::NoteCard;
