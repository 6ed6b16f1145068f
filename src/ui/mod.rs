// Terminal dashboard built on ratatui.

mod app;
mod events;
mod tabs;
mod theme;
mod widgets;

pub use events::run_dashboard;
