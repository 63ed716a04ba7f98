pub mod navigation;
pub mod time;
