pub mod motion;
pub mod picking;
pub mod render;
