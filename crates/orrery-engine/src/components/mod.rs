pub mod orbiter;
