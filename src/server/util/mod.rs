pub mod form;
pub mod parse;
pub mod password;
