//! Rule-based plural → singular reduction.
//!
//! Only nouns are handled, and only with suffix rules. Words of three
//! characters or fewer and a few invariant nouns are returned unchanged.

const INVARIANT: &[&str] = &[
    "analytics",
    "economics",
    "kubernetes",
    "mathematics",
    "news",
    "physics",
    "series",
    "species",
    "statistics",
];

/// Reduce a lowercase token to its singular form.
#[must_use]
pub fn lemmatize(token: &str) -> String {
    if token.chars().count() <= 3 || INVARIANT.contains(&token) {
        return token.to_string();
    }

    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    for suffix in ["xes", "ches", "shes"] {
        if token.ends_with(suffix) {
            return token[..token.len() - 2].to_string();
        }
    }
    if token.ends_with('s') && !["ss", "us", "is"].iter().any(|end| token.ends_with(end)) {
        return token[..token.len() - 1].to_string();
    }

    token.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::lemmatize;

    #[rstest]
    #[case("libraries", "library")]
    #[case("classes", "class")]
    #[case("boxes", "box")]
    #[case("patches", "patch")]
    #[case("dashes", "dash")]
    #[case("models", "model")]
    #[case("sensors", "sensor")]
    #[case("analysis", "analysis")]
    #[case("status", "status")]
    #[case("class", "class")]
    #[case("gas", "gas")]
    #[case("series", "series")]
    #[case("analytics", "analytics")]
    #[case("python", "python")]
    fn reduces_plurals(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(lemmatize(input), expected);
    }
}
