//! Substring predicates.

use crate::accessor::Accessor;
use crate::error::{require, Error};
use crate::expr::{Expr, Operand};
use crate::mode::ComparisonMode;
use crate::null_safety::{fold_or, is_present, join_and};

/// Match if the field contains `term`.
///
/// The field is coalesced to an empty string, so an absent field never matches a non-empty term.
/// An empty term is contained in every present value, and turns into a presence check.
pub fn term<T>(field: &Accessor<T>, term: impl Into<String>, mode: ComparisonMode) -> Expr<T> {
    term_with(field, term, mode, true)
}

/// Same as [`term`], allowing to skip coalescing the field.
///
/// Only pass `null_check = false` if the field is known to be present. Evaluating such a predicate
/// against an absent field still doesn't fault, but translators may emit a plain field reference.
pub fn term_with<T>(
    field: &Accessor<T>,
    term: impl Into<String>,
    mode: ComparisonMode,
    null_check: bool,
) -> Expr<T> {
    let term = term.into();

    let haystack = match (null_check, term.is_empty()) {
        (true, true) => return is_present(field),
        (true, false) => Operand::Coalesce(field.clone(), String::new()),
        (false, _) => Operand::Field(field.clone()),
    };

    Expr::Contains {
        haystack,
        needle: Operand::Literal(term),
        mode,
    }
}

/// Match if the value of `search_in` contains the value of `search_for`.
///
/// Both fields must be present, otherwise the predicate doesn't match.
pub fn field<T>(search_in: &Accessor<T>, search_for: &Accessor<T>) -> Expr<T> {
    let guard = join_and(Some(is_present(search_in)), is_present(search_for));

    guard.and(Expr::Contains {
        haystack: Operand::Field(search_in.clone()),
        needle: Operand::Field(search_for.clone()),
        mode: ComparisonMode::Ordinal,
    })
}

/// Match if any of the fields contains any of the terms.
pub fn any_term<T, S>(
    fields: &[Accessor<T>],
    terms: &[S],
    mode: ComparisonMode,
) -> Result<Expr<T>, Error>
where
    S: AsRef<str>,
{
    require(fields, Error::NoFields)?;
    require(terms, Error::NoTerms)?;

    log::trace!(
        "Building contains predicate: {} field(s) x {} term(s), mode: {mode}",
        fields.len(),
        terms.len()
    );

    let expressions = fields
        .iter()
        .flat_map(|field| terms.iter().map(move |t| term(field, t.as_ref(), mode)));

    fold_or(expressions).ok_or(Error::NoTerms)
}

/// Match if the value of any of the fields contains the value of any of the other fields.
pub fn any_field<T>(fields: &[Accessor<T>], others: &[Accessor<T>]) -> Result<Expr<T>, Error> {
    require(fields, Error::NoFields)?;
    require(others, Error::NoOtherFields)?;

    log::trace!(
        "Building contains predicate: {} field(s) x {} other field(s)",
        fields.len(),
        others.len()
    );

    let expressions = fields.iter().flat_map(|search_in| {
        others
            .iter()
            .map(move |search_for| field(search_in, search_for))
    });

    fold_or(expressions).ok_or(Error::NoOtherFields)
}
