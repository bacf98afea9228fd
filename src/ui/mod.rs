//! Widgets for the desktop front-end

pub mod answer_display;
pub mod ask_form;
pub mod login_form;
pub mod sources_list;
pub mod theme;
