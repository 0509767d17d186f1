pub mod dashboard;
pub mod modal;

pub use dashboard::{DashboardScreen, SubView, TAB_LABELS, title_for_index};
pub use modal::{ModalKind, ModalState};
