pub mod view;
pub mod view_model;

pub use view::EditRecordModal;
pub use view_model::{EditRecordForm, EditRecordViewModel};
