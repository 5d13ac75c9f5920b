pub mod token;

pub use token::{Token, sort_tokens};
