mod contact;
mod experience;
mod header;
mod help;
mod hero;
mod page;
mod skills;
mod slideshow;
mod stats;
mod status_bar;

pub use header::HeaderWidget;
pub use help::HelpWidget;
pub use page::{compose_page, render, ComposedPage, PageComposer};
pub use status_bar::StatusBarWidget;
