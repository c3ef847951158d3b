//! UI Components
//!
//! Reusable UI components for the desktop application.

pub mod dialogs;
mod edit_dialog;
mod idea_table;
mod pagination;
mod search_bar;
mod sidebar;
mod status_banner;

pub use edit_dialog::EditDialog;
pub use idea_table::IdeaTable;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
pub use sidebar::Sidebar;
pub use status_banner::StatusBanner;
