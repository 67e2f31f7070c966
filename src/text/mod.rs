// Text processing — tokenization, TF-IDF term vectors, and keyword ranking.

pub mod keywords;
pub mod tokenize;
