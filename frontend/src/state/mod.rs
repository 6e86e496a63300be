pub mod faq;
pub mod navigation;
pub mod theme;
pub mod video;
