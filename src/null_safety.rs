//! Presence checks and logical joins shared by all builders.

use crate::accessor::Accessor;
use crate::expr::Expr;

/// Check that the value of the field is not absent.
pub fn is_present<T>(field: &Accessor<T>) -> Expr<T> {
    Expr::IsPresent(field.clone())
}

/// Join an expression to an accumulated disjunction.
///
/// The first expression becomes the accumulator as is, so a single expression is never wrapped.
pub fn join_or<T>(accumulator: Option<Expr<T>>, next: Expr<T>) -> Expr<T> {
    match accumulator {
        None => next,
        Some(accumulator) => accumulator.or(next),
    }
}

/// Same as [`join_or`], for a conjunction.
pub fn join_and<T>(accumulator: Option<Expr<T>>, next: Expr<T>) -> Expr<T> {
    match accumulator {
        None => next,
        Some(accumulator) => accumulator.and(next),
    }
}

/// Fold expressions into a left-nested disjunction, keeping their order.
///
/// Returns `None` if there are no expressions. Callers turn that into the [`Error`](crate::Error)
/// matching the missing input.
pub fn fold_or<T, I>(expressions: I) -> Option<Expr<T>>
where
    I: IntoIterator<Item = Expr<T>>,
{
    expressions
        .into_iter()
        .fold(None, |accumulator, next| Some(join_or(accumulator, next)))
}
