//! Element name helpers.

/// Upper-case the first character of `s`, leaving the rest untouched.
///
/// `dateTime` becomes `DateTime`, `Quantity` stays `Quantity`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Join a slot base name and a type or suffix name into an element name.
pub(crate) fn element_name(base: &str, name: &str) -> String {
    let mut out = String::with_capacity(base.len() + name.len());
    out.push_str(base);
    out.push_str(&capitalize(name));
    out
}
