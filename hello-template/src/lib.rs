//! Template project: a greeting and nothing else.

/// Greet `name`, or everyone when no name (or an empty one) is given.
pub fn greet(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => format!("Hello, {name}!"),
        _ => "Hello, World!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_name() {
        assert_eq!(greet(Some("Alice")), "Hello, Alice!");
    }

    #[test]
    fn none_greets_everyone() {
        assert_eq!(greet(None), "Hello, World!");
    }

    #[test]
    fn empty_name_greets_everyone() {
        assert_eq!(greet(Some("")), "Hello, World!");
    }
}
