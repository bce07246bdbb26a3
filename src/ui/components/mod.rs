pub mod confirm_dialog;
pub mod entrance;
pub mod fade_overlay;
pub mod hint_panel;
pub mod soon;
