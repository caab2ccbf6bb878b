pub mod list;
pub mod receipt;
