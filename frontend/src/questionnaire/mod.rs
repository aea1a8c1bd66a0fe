pub mod analysis;
pub mod questions;
pub mod session;
