pub mod tokens;

pub use tokens::TokenReader;
