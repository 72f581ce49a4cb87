//! Utility macros for the lexical analyzer.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the scan loop.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$category` - The token's Category
/// * `$text` - The matched substring
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(Category::Int, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($category:expr, $text:expr) => {
        Token {
            text: $text,
            category: $category,
        }
    };
}
