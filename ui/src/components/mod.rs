pub mod footer;
pub mod icon;
pub mod image;
pub mod navbar;
pub mod reveal;
pub mod section;
pub mod utils;
