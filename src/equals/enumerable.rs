//! Equality using a [`ComparisonMode`], tolerating absent values.

use super::{fold_fields, fold_other_fields, fold_terms};
use crate::accessor::Accessor;
use crate::error::Error;
use crate::expr::{Expr, Operand};
use crate::mode::ComparisonMode;

fn equals<T>(mode: ComparisonMode) -> impl Fn(Operand<T>, Operand<T>) -> Expr<T> {
    move |left, right| Expr::Equals { left, right, mode }
}

/// Match if the field equals any of the terms.
pub fn term_set<T, S>(
    field: &Accessor<T>,
    terms: &[S],
    mode: ComparisonMode,
) -> Result<Expr<T>, Error>
where
    S: AsRef<str>,
{
    fold_terms(field, terms, equals(mode))
}

/// Match if any of the fields equals any of the terms.
pub fn terms<T, S>(
    fields: &[Accessor<T>],
    terms: &[S],
    mode: ComparisonMode,
) -> Result<Expr<T>, Error>
where
    S: AsRef<str>,
{
    log::trace!(
        "Building equals predicate: {} field(s) x {} term(s), mode: {mode}",
        fields.len(),
        terms.len()
    );

    fold_fields(fields, |field| term_set(field, terms, mode))
}

/// Match if the field equals any of the other fields.
pub fn field_set<T>(
    field: &Accessor<T>,
    others: &[Accessor<T>],
    mode: ComparisonMode,
) -> Result<Expr<T>, Error> {
    fold_other_fields(field, others, equals(mode))
}

/// Match if any of the fields equals any of the other fields.
pub fn fields<T>(
    fields: &[Accessor<T>],
    others: &[Accessor<T>],
    mode: ComparisonMode,
) -> Result<Expr<T>, Error> {
    log::trace!(
        "Building equals predicate: {} field(s) x {} other field(s), mode: {mode}",
        fields.len(),
        others.len()
    );

    fold_fields(fields, |field| field_set(field, others, mode))
}
