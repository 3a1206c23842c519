pub mod latin1;
pub mod utf8;
