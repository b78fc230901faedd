pub mod output;
pub mod walker;
