pub mod dictionary;
pub mod engine;
pub mod words;
