//! Property based tests of the predicate algebra.

use proptest::prelude::*;
use termfold::prelude::*;

#[derive(Debug, Clone)]
struct Pair {
    a: Option<String>,
    b: Option<String>,
}

fn a() -> Accessor<Pair> {
    Accessor::new("a", |p: &Pair| p.a.as_deref())
}

fn b() -> Accessor<Pair> {
    Accessor::new("b", |p: &Pair| p.b.as_deref())
}

/// Latin and Greek letters, including the final sigma, a precomposed and a combining accent.
const LETTERS: &str = "[a-cA-Cοδσς\u{39f}\u{394}\u{3a3}\u{e9}\u{301}]";

fn letters(len: &str) -> proptest::string::RegexGeneratorStrategy<String> {
    proptest::string::string_regex(&format!("{LETTERS}{{{len}}}")).unwrap()
}

fn any_value() -> impl Strategy<Value = Option<String>> {
    prop::option::of(letters("0,4"))
}

fn any_pair() -> impl Strategy<Value = Pair> {
    (any_value(), any_value()).prop_map(|(a, b)| Pair { a, b })
}

fn any_mode() -> impl Strategy<Value = ComparisonMode> {
    prop_oneof![
        Just(ComparisonMode::Ordinal),
        Just(ComparisonMode::OrdinalIgnoreCase),
        Just(ComparisonMode::Culture),
        Just(ComparisonMode::CultureIgnoreCase),
    ]
}

fn any_terms() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(letters("0,3"), 1..4)
}

proptest! {
    /// The empty term is a substring of every present value.
    #[test]
    fn empty_term_matches_present(value in "[a-z]{0,10}", mode in any_mode()) {
        let pair = Pair { a: Some(value), b: None };
        prop_assert!(contains::term(&a(), "", mode).evaluate(&pair));
    }

    /// An absent field never matches, whatever the terms are.
    #[test]
    fn absent_never_matches(terms in any_terms(), mode in any_mode()) {
        let pair = Pair { a: None, b: None };

        let expr = contains::any_term(&[a()], &terms, mode).unwrap();
        prop_assert!(!expr.evaluate(&pair));

        let expr = equals::enumerable::term_set(&a(), &terms, mode).unwrap();
        prop_assert!(!expr.evaluate(&pair));
    }

    /// Folding a single expression returns it unchanged.
    #[test]
    fn fold_single_is_identity(term in "[a-z]{1,5}", mode in any_mode()) {
        let expr = contains::term(&a(), term.clone(), mode);

        prop_assert_eq!(
            contains::any_term(&[a()], &[term.clone()], mode).unwrap(),
            expr
        );
        prop_assert_eq!(
            equals::enumerable::term_set(&a(), &[term.clone()], mode).unwrap(),
            Expr::Equals {
                left: Operand::Field(a()),
                right: Operand::Literal(term),
                mode,
            }
        );
    }

    /// Contains on two fields only matches if both are present.
    #[test]
    fn contains_field_requires_both(pair in any_pair()) {
        let matched = contains::field(&a(), &b()).evaluate(&pair);

        match (&pair.a, &pair.b) {
            (Some(a), Some(b)) => prop_assert_eq!(matched, a.contains(b.as_str())),
            _ => prop_assert!(!matched),
        }
    }

    /// Many fields and many terms match if any pair matches.
    #[test]
    fn equals_cross_product(pair in any_pair(), terms in any_terms(), mode in any_mode()) {
        let expr = equals::enumerable::terms(&[a(), b()], &terms, mode).unwrap();

        let expected = [&pair.a, &pair.b].into_iter().any(|value| match value {
            Some(value) => terms.iter().any(|term| mode.equals(value, term)),
            None => false,
        });

        prop_assert_eq!(expr.evaluate(&pair), expected);
        prop_assert_eq!(expr.leaves(), 2 * terms.len());
    }

    /// Strict equality matches exactly if some value equals some term.
    #[test]
    fn strict_cross_product(pair in any_pair(), terms in any_terms()) {
        let expr = equals::queryable::terms(&[a(), b()], &terms).unwrap();

        let expected = [&pair.a, &pair.b]
            .into_iter()
            .any(|value| terms.iter().any(|term| value.as_deref() == Some(term.as_str())));

        prop_assert_eq!(expr.evaluate(&pair), expected);
    }

    /// Contains is the disjunction over all field and term pairs.
    #[test]
    fn contains_cross_product(pair in any_pair(), terms in any_terms(), mode in any_mode()) {
        let expr = contains::any_term(&[a(), b()], &terms, mode).unwrap();

        let expected = [&pair.a, &pair.b].into_iter().any(|value| match value {
            Some(value) => terms.iter().any(|term| mode.contains(value, term)),
            None => false,
        });

        prop_assert_eq!(expr.evaluate(&pair), expected);
    }

    /// A substring stays a substring when ignoring case, wherever it is cut from.
    #[test]
    fn ignore_case_keeps_substrings(
        prefix in letters("0,3"),
        needle in letters("0,3"),
        suffix in letters("0,3")
    ) {
        let haystack = format!("{prefix}{needle}{suffix}");

        prop_assert!(ComparisonMode::Ordinal.contains(&haystack, &needle));
        prop_assert!(ComparisonMode::OrdinalIgnoreCase.contains(&haystack, &needle));
        let pair = Pair { a: Some(haystack), b: None };
        prop_assert!(contains::term(&a(), needle.clone(), ComparisonMode::OrdinalIgnoreCase)
            .evaluate(&pair));
    }

    /// Lowercase values equal their uppercase form when ignoring case.
    #[test]
    fn ignore_case_equals_uppercase(value in "[a-cοδσ]{1,6}") {
        let upper = value.to_uppercase();

        for mode in [ComparisonMode::OrdinalIgnoreCase, ComparisonMode::CultureIgnoreCase] {
            prop_assert!(mode.equals(&value, &upper), "{} {} {}", mode, value, upper);

            let expr = equals::enumerable::term_set(&a(), &[upper.as_str()], mode).unwrap();
            let pair = Pair { a: Some(value.clone()), b: None };
            prop_assert!(expr.evaluate(&pair));
        }
    }

    /// Large folds over the same alphabet behave like small ones.
    #[test]
    fn large_fold(
        value in any_value(),
        terms in prop::collection::vec(letters("0,3"), 1_000..2_000),
        mode in any_mode()
    ) {
        let pair = Pair { a: value, b: None };
        let expr = contains::any_term(&[a()], &terms, mode).unwrap();

        let expected = match &pair.a {
            Some(value) => terms.iter().any(|term| mode.contains(value, term)),
            None => false,
        };

        prop_assert_eq!(expr.evaluate(&pair), expected);
        prop_assert_eq!(expr.leaves(), terms.len());
    }
}
