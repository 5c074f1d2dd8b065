pub mod key;
pub mod table;
