pub mod compare;
pub mod help;
