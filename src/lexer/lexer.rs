use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::{Category, Token, TokenStream, KEYWORDS};

pub struct CategoryRule {
    pub category: Category,
    pub pattern: Regex,
}

lazy_static! {
    // Category -> pattern table, in evaluation order. The order is part of
    // the output contract: every rule runs as its own pass over each line,
    // so a substring matching several rules is reported once per rule.
    pub static ref RULE_TABLE: Vec<CategoryRule> = vec![
        CategoryRule { category: Category::Int, pattern: Regex::new(r"\b\d+\b").unwrap() },
        CategoryRule { category: Category::Float, pattern: Regex::new(r"\b\d+\.\d+\b").unwrap() },
        CategoryRule { category: Category::Identifier, pattern: Regex::new(r"\b[a-zA-Z_][a-zA-Z0-9_]*\b").unwrap() },
        CategoryRule { category: Category::Keyword, pattern: Regex::new(&format!(r"\b({})\b", KEYWORDS.join("|"))).unwrap() },
        CategoryRule { category: Category::String, pattern: Regex::new("\"[^\"]*\"").unwrap() },
        CategoryRule { category: Category::Symbol, pattern: Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};:"\\|,.<>/?]"#).unwrap() },
    ];
}

/// Classifies `input` into a flat stream of categorized tokens.
///
/// Each line is scanned independently, a match never spans two lines.
/// Unmatched text (whitespace included) is silently dropped, so any input
/// produces a stream and the empty string produces an empty one.
pub fn scan(input: &str) -> TokenStream {
    let mut tokens = vec![];

    for line in input.split('\n') {
        for rule in RULE_TABLE.iter() {
            for matched in rule.pattern.find_iter(line) {
                tokens.push(MK_TOKEN!(rule.category, matched.as_str().to_string()));
            }
        }
    }

    tokens
}
