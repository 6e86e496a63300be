pub mod faq_accordion;
pub mod nav_menu;
pub mod video_player;
