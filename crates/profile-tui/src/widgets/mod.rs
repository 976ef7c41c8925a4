//! Custom widget components

mod header;
mod section_card;
mod status_bar;

pub use header::PageHeader;
pub use section_card::SectionCard;
pub use status_bar::StatusBar;
