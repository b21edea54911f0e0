pub mod view_selector;
