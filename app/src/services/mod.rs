pub mod actions;
pub mod capture;
pub mod clipboard;
pub mod font;
pub mod gate;
pub mod generator;
pub mod status;
