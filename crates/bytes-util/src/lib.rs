mod le_word;
mod word_iter;

pub use le_word::LeWord;
pub use word_iter::{Words, words};
