pub mod chapter;

pub use chapter::Chapter;
