pub mod files;
pub mod terminal;
