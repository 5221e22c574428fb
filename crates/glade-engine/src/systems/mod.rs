pub mod generate;
pub mod sky;
pub mod forest;
pub mod fireflies;
pub mod frame;
