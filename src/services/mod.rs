// Service exports
pub mod corpus;
pub mod questions;

pub use corpus::{CorpusError, CorpusStore};
pub use questions::QuestionCatalog;
