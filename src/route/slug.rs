//! URL slug generation.

use deunicode::deunicode;

/// Turn a title into a URL slug.
///
/// Transliterates Unicode to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into a single dash. Leading/trailing dashes
/// are trimmed.
///
/// # Example
/// ```ignore
/// slugify("Hello & welcome!") // "hello-welcome"
/// slugify("Paweł Fertyk")     // "pawel-fertyk"
/// ```
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
