// file: src/parser/patterns.rs
// description: compiled regex patterns for index loading and query tokenizing
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // `Search.setIndex({...})` as written by the html builder
    pub static ref SET_INDEX_WRAPPER: Regex = Regex::new(
        r"(?s)^\s*Search\.setIndex\s*\((.*)\)\s*;?\s*$"
    ).expect("SET_INDEX_WRAPPER regex is valid");

    pub static ref QUERY_WORD: Regex = Regex::new(
        r"\w+"
    ).expect("QUERY_WORD regex is valid");
}
