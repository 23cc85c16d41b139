//! UI Components
//!
//! Presentation layer: renders the board and wires gestures to the
//! reconciler and lifecycle actions. Components never mutate the store's
//! collections directly; all mutation flows through the backend followed by
//! a full reload.

mod board_view;
mod delete_confirm_button;
mod error_banner;
mod new_task_form;
mod task_card;
mod task_column;

pub use board_view::BoardView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use new_task_form::NewTaskForm;
pub use task_card::TaskCard;
pub use task_column::TaskColumn;
