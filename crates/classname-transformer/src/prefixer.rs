//! Class-list prefixing.

use crate::config::PrefixRule;

/// Prefixes every whitespace-separated class token in `value`.
///
/// Tokens are split on runs of whitespace, empty tokens are dropped and the
/// survivors are rejoined with a single space, so `"  btn   primary "` becomes
/// `"app-btn app-primary"`. An empty or all-whitespace input yields `""`.
pub fn prefix_classes(value: &str, rule: &PrefixRule) -> String {
    let mut out = String::with_capacity(value.len() + rule.prefix.len() * 2);

    for token in value.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&rule.prefix);
        out.push('-');
        out.push_str(token);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> PrefixRule {
        PrefixRule::new("app")
    }

    #[test]
    fn test_single_token() {
        assert_eq!(prefix_classes("btn", &app()), "app-btn");
    }

    #[test]
    fn test_multiple_tokens() {
        assert_eq!(prefix_classes("btn primary", &app()), "app-btn app-primary");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(
            prefix_classes("  btn \t\n primary   large ", &app()),
            "app-btn app-primary app-large"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(prefix_classes("", &app()), "");
        assert_eq!(prefix_classes("   \t ", &app()), "");
    }

    #[test]
    fn test_custom_prefix() {
        let rule = PrefixRule::new("ui");
        assert_eq!(prefix_classes("card -dense", &rule), "ui-card ui--dense");
    }

    #[test]
    fn test_not_idempotent() {
        let once = prefix_classes("foo", &app());
        let twice = prefix_classes(&once, &app());
        assert_eq!(twice, "app-app-foo");
    }

    #[test]
    fn test_token_count_property() {
        let inputs = [
            "",
            "a",
            " a ",
            "a b c",
            "\ta\n\nb  ",
            "x-1 y_2   z:3",
            "   ",
        ];
        for input in inputs {
            let out = prefix_classes(input, &app());
            let expected = input.split_whitespace().count();
            let tokens: Vec<&str> = if out.is_empty() {
                Vec::new()
            } else {
                out.split(' ').collect()
            };
            assert_eq!(tokens.len(), expected, "input {:?}", input);
            assert!(tokens.iter().all(|t| t.starts_with("app-")));
            assert_eq!(out.trim(), out);
        }
    }
}
