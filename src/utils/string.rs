//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix("ex") {
        format!("{stem}ices")
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("edge", 0), "edges");
        assert_eq!(pluralize("edge", 1), "edge");
        assert_eq!(pluralize("component", 5), "components");
    }

    #[test]
    fn test_pluralize_vertex() {
        assert_eq!(pluralize("vertex", 1), "vertex");
        assert_eq!(pluralize("vertex", 2), "vertices");
    }
}
