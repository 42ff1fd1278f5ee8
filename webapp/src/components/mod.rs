pub mod icon;
pub mod navigation;
pub mod theme_toggle;
