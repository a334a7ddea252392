pub mod css;
pub mod document;
pub mod index;
pub mod preview;
