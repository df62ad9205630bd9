/// Case-insensitive exact matching of names supplied in the URL
use mongodb::bson::{doc, Document};

const REGEX_META: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$', '#', '&', '-', '~',
];

/// Escape PCRE metacharacters so the input matches literally.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if REGEX_META.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `{"$regex": "^<name>$", "$options": "i"}` for use as a field condition.
pub fn exact_name(name: &str) -> Document {
    doc! {
        "$regex": format!("^{}$", escape_regex(name.trim())),
        "$options": "i"
    }
}
