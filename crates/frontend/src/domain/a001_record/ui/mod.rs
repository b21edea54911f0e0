pub mod add;
pub mod details;
pub mod fields;
pub mod list;
pub mod search;
pub mod upload;
