pub mod detail;
pub mod overview;
pub mod pointer;
