pub mod ico;
pub mod png;
