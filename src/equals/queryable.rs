//! Plain equality, for targets which only support structural equality.

use super::{fold_fields, fold_other_fields, fold_terms};
use crate::accessor::Accessor;
use crate::error::Error;
use crate::expr::{Expr, Operand};

fn strict_equals<T>(left: Operand<T>, right: Operand<T>) -> Expr<T> {
    Expr::StrictEquals { left, right }
}

/// Match if the field equals any of the terms.
pub fn term_set<T, S>(field: &Accessor<T>, terms: &[S]) -> Result<Expr<T>, Error>
where
    S: AsRef<str>,
{
    fold_terms(field, terms, strict_equals)
}

/// Match if any of the fields equals any of the terms.
pub fn terms<T, S>(fields: &[Accessor<T>], terms: &[S]) -> Result<Expr<T>, Error>
where
    S: AsRef<str>,
{
    log::trace!(
        "Building strict equals predicate: {} field(s) x {} term(s)",
        fields.len(),
        terms.len()
    );

    fold_fields(fields, |field| term_set(field, terms))
}

/// Match if the field equals any of the other fields.
pub fn field_set<T>(field: &Accessor<T>, others: &[Accessor<T>]) -> Result<Expr<T>, Error> {
    fold_other_fields(field, others, strict_equals)
}

/// Match if any of the fields equals any of the other fields.
pub fn fields<T>(fields: &[Accessor<T>], others: &[Accessor<T>]) -> Result<Expr<T>, Error> {
    log::trace!(
        "Building strict equals predicate: {} field(s) x {} other field(s)",
        fields.len(),
        others.len()
    );

    fold_fields(fields, |field| field_set(field, others))
}
