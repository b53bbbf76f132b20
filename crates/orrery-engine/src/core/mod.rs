pub mod scene;
pub mod state;
pub mod time;
