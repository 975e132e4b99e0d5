pub mod dom_layout;
pub mod logging;
