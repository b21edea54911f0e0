pub mod aggregate;
pub mod panel;

pub use aggregate::{delete_href, DiscSize, RecordRow, TableKind};
pub use panel::Panel;
