pub mod api_utils;
pub mod date_utils;
pub mod dom;
pub mod icons;
pub mod list_utils;
pub mod modal;
