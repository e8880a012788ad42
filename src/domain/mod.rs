pub mod content;
pub mod elements;
pub mod palette;
