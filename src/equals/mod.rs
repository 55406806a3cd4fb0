//! Exact match predicates.
//!
//! There are two families of builders, which share the same shapes:
//!
//! * [`enumerable`]: compares using a [`crate::mode::ComparisonMode`], an absent value never
//!   matches.
//! * [`queryable`]: plain equality, for targets which can't apply a comparison mode. An absent
//!   value equals another absent value.
//!
//! Each family can compare one or many fields, with either literal terms or other fields of the
//! same instance. The resulting predicate matches if any pair matches.

pub mod enumerable;
pub mod queryable;

use crate::accessor::Accessor;
use crate::error::{require, Error};
use crate::expr::{Expr, Operand};
use crate::null_safety::fold_or;

/// Compare one field with each term, and fold the comparisons into a disjunction.
fn fold_terms<T, S, C>(field: &Accessor<T>, terms: &[S], compare: C) -> Result<Expr<T>, Error>
where
    S: AsRef<str>,
    C: Fn(Operand<T>, Operand<T>) -> Expr<T>,
{
    require(terms, Error::NoTerms)?;

    let expressions = terms.iter().map(|term| {
        compare(
            Operand::Field(field.clone()),
            Operand::Literal(term.as_ref().to_string()),
        )
    });

    fold_or(expressions).ok_or(Error::NoTerms)
}

/// Compare one field with each of the other fields, and fold the comparisons into a disjunction.
fn fold_other_fields<T, C>(
    field: &Accessor<T>,
    others: &[Accessor<T>],
    compare: C,
) -> Result<Expr<T>, Error>
where
    C: Fn(Operand<T>, Operand<T>) -> Expr<T>,
{
    require(others, Error::NoOtherFields)?;

    let expressions = others
        .iter()
        .map(|other| compare(Operand::Field(field.clone()), Operand::Field(other.clone())));

    fold_or(expressions).ok_or(Error::NoOtherFields)
}

/// Build the predicate of each field, and fold them into a disjunction.
fn fold_fields<T, F>(fields: &[Accessor<T>], build: F) -> Result<Expr<T>, Error>
where
    F: Fn(&Accessor<T>) -> Result<Expr<T>, Error>,
{
    require(fields, Error::NoFields)?;

    let expressions = fields.iter().map(build).collect::<Result<Vec<_>, _>>()?;

    fold_or(expressions).ok_or(Error::NoFields)
}
