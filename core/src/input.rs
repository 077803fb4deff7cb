/// Trims `raw` and returns it unless nothing is left.
pub fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  Ali Khan \n"), Some("Ali Khan"));
        assert_eq!(non_empty("Class A"), Some("Class A"));
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty(" \t\n"), None);
    }
}
