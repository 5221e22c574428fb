pub mod firefly;
pub mod tree;
