/// Upper-case the first character, as list cards and headings show names.
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Like [`display_name`], with the first hyphen after the initial turned into a space.
///
/// Only one hyphen is replaced: `"double-edge"` becomes `"Double edge"` but
/// `"u-turn-x"` becomes `"U turn-x"`.
pub fn display_move_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().replacen('-', " ", 1);
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("pikachu"), "Pikachu");
        assert_eq!(display_name("mr-mime"), "Mr-mime");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_display_move_name() {
        assert_eq!(display_move_name("double-edge"), "Double edge");
        assert_eq!(display_move_name("u-turn-x"), "U turn-x");
        assert_eq!(display_move_name("tackle"), "Tackle");
        assert_eq!(display_move_name(""), "");
    }
}
