pub mod clipboard;
pub mod download;
pub mod geolocation;
pub mod maps;
pub mod navigation;
pub mod time;
