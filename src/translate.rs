use crate::accessor::Accessor;
use crate::expr::{Expr, Node, Operand};
use crate::mode::ComparisonMode;

/// Maps the leaves and joins of a predicate into some target representation.
///
/// Implemented by whoever executes predicates somewhere else than in memory. The walk over the
/// tree is done by [`translate`].
pub trait Translator<T> {
    type Output;

    fn is_present(&mut self, field: &Accessor<T>) -> Self::Output;

    fn contains(
        &mut self,
        haystack: &Operand<T>,
        needle: &Operand<T>,
        mode: ComparisonMode,
    ) -> Self::Output;

    fn equals(&mut self, left: &Operand<T>, right: &Operand<T>, mode: ComparisonMode)
        -> Self::Output;

    fn strict_equals(&mut self, left: &Operand<T>, right: &Operand<T>) -> Self::Output;

    fn and(&mut self, left: Self::Output, right: Self::Output) -> Self::Output;

    fn or(&mut self, left: Self::Output, right: Self::Output) -> Self::Output;
}

/// Translate a predicate, depth first and left to right.
///
/// This takes care of walking the tree, and leaves the actual mapping to the provided translator.
/// The walk doesn't recurse, so arbitrarily deep predicates can be translated.
pub fn translate<T, X>(expr: &Expr<T>, translator: &mut X) -> X::Output
where
    X: Translator<T>,
{
    expr.fold(|node| match node {
        Node::IsPresent(field) => translator.is_present(field),
        Node::Contains {
            haystack,
            needle,
            mode,
        } => translator.contains(haystack, needle, mode),
        Node::Equals { left, right, mode } => translator.equals(left, right, mode),
        Node::StrictEquals { left, right } => translator.strict_equals(left, right),
        Node::And(left, right) => translator.and(left, right),
        Node::Or(left, right) => translator.or(left, right),
    })
}
