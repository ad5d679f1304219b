//! rill tokenizer: converts one source line into a shared token cursor.

pub mod cursor;
pub mod token;

pub use cursor::Cursor;
pub use token::Token;
