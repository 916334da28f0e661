mod anagrams;
mod health;
mod words;

pub use anagrams::anagram_routes;
pub use health::health_routes;
pub use words::word_routes;
