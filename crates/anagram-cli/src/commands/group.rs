use anagram_config::AppConfig;
use anagram_core::{LookupOptions, QueryService};
use anyhow::Result;
use colored::Colorize;

use super::{require_dictionary, seeded_store};

pub fn execute(
    config: &AppConfig,
    word: &str,
    limit: Option<usize>,
    exclude_self: bool,
) -> Result<()> {
    let (store, outcome) = seeded_store(config);
    require_dictionary(&outcome)?;

    let options = LookupOptions {
        limit,
        exclude_self,
    };
    match QueryService::new(store).lookup_by_word(word, options) {
        Some(anagrams) => {
            for anagram in anagrams {
                println!("{anagram}");
            }
        }
        None => println!("{} no anagrams of '{}'", "Note:".yellow().bold(), word),
    }
    Ok(())
}
