use crate::accessor::Accessor;
use crate::mode::ComparisonMode;
use std::fmt::{Debug, Display, Formatter};

/// A value a predicate compares.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", bound = ""))]
pub enum Operand<T> {
    /// The value of a field, may be absent.
    Field(Accessor<T>),
    /// The value of a field, or the default value if the field is absent.
    Coalesce(Accessor<T>, String),
    /// A constant value.
    Literal(String),
}

impl<T> Operand<T> {
    pub fn resolve<'a>(&'a self, item: &'a T) -> Option<&'a str> {
        match self {
            Self::Field(field) => field.read(item),
            Self::Coalesce(field, default) => Some(field.read(item).unwrap_or(default.as_str())),
            Self::Literal(value) => Some(value.as_str()),
        }
    }
}

impl<T> Clone for Operand<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(field) => Self::Field(field.clone()),
            Self::Coalesce(field, default) => Self::Coalesce(field.clone(), default.clone()),
            Self::Literal(value) => Self::Literal(value.clone()),
        }
    }
}

impl<T> Debug for Operand<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(field) => f.debug_tuple("Field").field(field).finish(),
            Self::Coalesce(field, default) => f
                .debug_tuple("Coalesce")
                .field(field)
                .field(default)
                .finish(),
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
        }
    }
}

impl<T> PartialEq for Operand<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Field(a), Self::Field(b)) => a == b,
            (Self::Coalesce(a, da), Self::Coalesce(b, db)) => a == b && da == db,
            (Self::Literal(a), Self::Literal(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Display for Operand<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{field}"),
            Self::Coalesce(field, default) => write!(f, "coalesce({field}, {default:?})"),
            Self::Literal(value) => write!(f, "{value:?}"),
        }
    }
}

/// A boolean predicate over instances of `T`.
///
/// Built by the functions of [`crate::contains`], [`crate::equals`] and [`crate::null_safety`].
/// It can be evaluated directly, or handed to a [`crate::translate::Translator`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", bound = ""))]
pub enum Expr<T> {
    /// The field is not absent.
    IsPresent(Accessor<T>),
    /// `needle` is a substring of `haystack`.
    Contains {
        haystack: Operand<T>,
        needle: Operand<T>,
        mode: ComparisonMode,
    },
    /// Both sides are present and equal under `mode`.
    Equals {
        left: Operand<T>,
        right: Operand<T>,
        mode: ComparisonMode,
    },
    /// Plain equality, an absent value equals an absent value.
    StrictEquals { left: Operand<T>, right: Operand<T> },
    And(Box<Expr<T>>, Box<Expr<T>>),
    Or(Box<Expr<T>>, Box<Expr<T>>),
}

impl<T> Expr<T> {
    pub fn and(self, other: Self) -> Self {
        Self::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Self) -> Self {
        Self::Or(Box::new(self), Box::new(other))
    }

    /// Evaluate the predicate for one instance.
    ///
    /// Absent values never fault. A comparison which would need an absent value evaluates to
    /// `false`, except for [`Expr::StrictEquals`].
    ///
    /// Joins short-circuit: the right side of an `And` is only evaluated if the left side matched,
    /// the right side of an `Or` only if it didn't.
    pub fn evaluate(&self, item: &T) -> bool {
        enum Pending<'e, T> {
            Evaluate(&'e Expr<T>),
            IfTrue(&'e Expr<T>),
            IfFalse(&'e Expr<T>),
        }

        let mut result = false;
        let mut pending = vec![Pending::Evaluate(self)];

        while let Some(next) = pending.pop() {
            match next {
                Pending::Evaluate(Self::And(left, right)) => {
                    pending.push(Pending::IfTrue(&**right));
                    pending.push(Pending::Evaluate(&**left));
                }
                Pending::Evaluate(Self::Or(left, right)) => {
                    pending.push(Pending::IfFalse(&**right));
                    pending.push(Pending::Evaluate(&**left));
                }
                Pending::Evaluate(Self::IsPresent(field)) => result = field.read(item).is_some(),
                Pending::Evaluate(Self::Contains {
                    haystack,
                    needle,
                    mode,
                }) => {
                    result = match (haystack.resolve(item), needle.resolve(item)) {
                        (Some(haystack), Some(needle)) => mode.contains(haystack, needle),
                        _ => false,
                    }
                }
                Pending::Evaluate(Self::Equals { left, right, mode }) => {
                    result = match (left.resolve(item), right.resolve(item)) {
                        (Some(left), Some(right)) => mode.equals(left, right),
                        _ => false,
                    }
                }
                Pending::Evaluate(Self::StrictEquals { left, right }) => {
                    result = left.resolve(item) == right.resolve(item)
                }
                Pending::IfTrue(right) => {
                    if result {
                        pending.push(Pending::Evaluate(right));
                    }
                }
                Pending::IfFalse(right) => {
                    if !result {
                        pending.push(Pending::Evaluate(right));
                    }
                }
            }
        }

        result
    }

    /// Select all items the predicate matches, keeping their order.
    pub fn filter<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.evaluate(item)).collect()
    }

    /// Reduce the tree bottom up, visiting leaves left to right.
    ///
    /// Folded predicates are as deep as they have field and term pairs, so this walks the tree
    /// using a heap allocated stack instead of recursion.
    pub fn fold<'e, O, F>(&'e self, mut visit: F) -> O
    where
        F: FnMut(Node<'e, T, O>) -> O,
    {
        enum Step<'e, T> {
            Visit(&'e Expr<T>),
            And,
            Or,
        }

        fn operands<O>(results: &mut Vec<O>) -> (O, O) {
            match (results.pop(), results.pop()) {
                (Some(right), Some(left)) => (left, right),
                _ => unreachable!("join without both operands"),
            }
        }

        let mut steps = vec![Step::Visit(self)];
        let mut results = Vec::new();

        while let Some(step) = steps.pop() {
            let node = match step {
                Step::Visit(Self::And(left, right)) => {
                    steps.push(Step::And);
                    steps.push(Step::Visit(&**right));
                    steps.push(Step::Visit(&**left));
                    continue;
                }
                Step::Visit(Self::Or(left, right)) => {
                    steps.push(Step::Or);
                    steps.push(Step::Visit(&**right));
                    steps.push(Step::Visit(&**left));
                    continue;
                }
                Step::Visit(Self::IsPresent(field)) => Node::IsPresent(field),
                Step::Visit(Self::Contains {
                    haystack,
                    needle,
                    mode,
                }) => Node::Contains {
                    haystack,
                    needle,
                    mode: *mode,
                },
                Step::Visit(Self::Equals { left, right, mode }) => Node::Equals {
                    left,
                    right,
                    mode: *mode,
                },
                Step::Visit(Self::StrictEquals { left, right }) => {
                    Node::StrictEquals { left, right }
                }
                Step::And => {
                    let (left, right) = operands(&mut results);
                    Node::And(left, right)
                }
                Step::Or => {
                    let (left, right) = operands(&mut results);
                    Node::Or(left, right)
                }
            };

            results.push(visit(node));
        }

        match results.pop() {
            Some(result) => result,
            None => unreachable!("fold without a result"),
        }
    }

    /// Number of leaves (presence checks and comparisons).
    pub fn leaves(&self) -> usize {
        self.fold(|node| match node {
            Node::And(left, right) | Node::Or(left, right) => left + right,
            _ => 1,
        })
    }

    /// Height of the tree, a single leaf has a depth of `1`.
    pub fn depth(&self) -> usize {
        self.fold(|node: Node<'_, T, usize>| match node {
            Node::And(left, right) | Node::Or(left, right) => 1 + left.max(right),
            _ => 1,
        })
    }

    /// Take the children of a join, leaving cheap leaves in their place.
    fn detach(&mut self) -> Option<(Self, Self)> {
        fn hollow<T>() -> Expr<T> {
            Expr::StrictEquals {
                left: Operand::Literal(String::new()),
                right: Operand::Literal(String::new()),
            }
        }

        match self {
            Self::And(left, right) | Self::Or(left, right) => Some((
                std::mem::replace(&mut **left, hollow()),
                std::mem::replace(&mut **right, hollow()),
            )),
            _ => None,
        }
    }
}

/// A node handed to the visitor of [`Expr::fold`].
///
/// Joins carry the results of their already folded children.
pub enum Node<'e, T, O> {
    IsPresent(&'e Accessor<T>),
    Contains {
        haystack: &'e Operand<T>,
        needle: &'e Operand<T>,
        mode: ComparisonMode,
    },
    Equals {
        left: &'e Operand<T>,
        right: &'e Operand<T>,
        mode: ComparisonMode,
    },
    StrictEquals {
        left: &'e Operand<T>,
        right: &'e Operand<T>,
    },
    And(O, O),
    Or(O, O),
}

impl<T> Drop for Expr<T> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Some((left, right)) = self.detach() {
            pending.push(left);
            pending.push(right);
        }

        while let Some(mut next) = pending.pop() {
            if let Some((left, right)) = next.detach() {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

impl<T> Clone for Expr<T> {
    fn clone(&self) -> Self {
        self.fold(|node: Node<'_, T, Self>| match node {
            Node::IsPresent(field) => Self::IsPresent(field.clone()),
            Node::Contains {
                haystack,
                needle,
                mode,
            } => Self::Contains {
                haystack: haystack.clone(),
                needle: needle.clone(),
                mode,
            },
            Node::Equals { left, right, mode } => Self::Equals {
                left: left.clone(),
                right: right.clone(),
                mode,
            },
            Node::StrictEquals { left, right } => Self::StrictEquals {
                left: left.clone(),
                right: right.clone(),
            },
            Node::And(left, right) => left.and(right),
            Node::Or(left, right) => left.or(right),
        })
    }
}

impl<T> Debug for Expr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IsPresent(field) => f.debug_tuple("IsPresent").field(field).finish(),
            Self::Contains {
                haystack,
                needle,
                mode,
            } => f
                .debug_struct("Contains")
                .field("haystack", haystack)
                .field("needle", needle)
                .field("mode", mode)
                .finish(),
            Self::Equals { left, right, mode } => f
                .debug_struct("Equals")
                .field("left", left)
                .field("right", right)
                .field("mode", mode)
                .finish(),
            Self::StrictEquals { left, right } => f
                .debug_struct("StrictEquals")
                .field("left", left)
                .field("right", right)
                .finish(),
            Self::And(left, right) => f.debug_tuple("And").field(left).field(right).finish(),
            Self::Or(left, right) => f.debug_tuple("Or").field(left).field(right).finish(),
        }
    }
}

impl<T> PartialEq for Expr<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            let equal = match pair {
                (Self::And(la, ra), Self::And(lb, rb)) | (Self::Or(la, ra), Self::Or(lb, rb)) => {
                    pending.push((&**ra, &**rb));
                    pending.push((&**la, &**lb));
                    continue;
                }
                (Self::IsPresent(a), Self::IsPresent(b)) => a == b,
                (
                    Self::Contains {
                        haystack: ha,
                        needle: na,
                        mode: ma,
                    },
                    Self::Contains {
                        haystack: hb,
                        needle: nb,
                        mode: mb,
                    },
                ) => ha == hb && na == nb && ma == mb,
                (
                    Self::Equals {
                        left: la,
                        right: ra,
                        mode: ma,
                    },
                    Self::Equals {
                        left: lb,
                        right: rb,
                        mode: mb,
                    },
                ) => la == lb && ra == rb && ma == mb,
                (
                    Self::StrictEquals {
                        left: la,
                        right: ra,
                    },
                    Self::StrictEquals {
                        left: lb,
                        right: rb,
                    },
                ) => la == lb && ra == rb,
                _ => false,
            };

            if !equal {
                return false;
            }
        }

        true
    }
}

impl<T> Display for Expr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        enum Text<'e, T> {
            Expr(&'e Expr<T>),
            Str(&'static str),
        }

        let mut pending = vec![Text::Expr(self)];

        while let Some(next) = pending.pop() {
            match next {
                Text::Str(s) => f.write_str(s)?,
                Text::Expr(Self::And(left, right)) => pending.extend([
                    Text::Str(")"),
                    Text::Expr(&**right),
                    Text::Str(" && "),
                    Text::Expr(&**left),
                    Text::Str("("),
                ]),
                Text::Expr(Self::Or(left, right)) => pending.extend([
                    Text::Str(")"),
                    Text::Expr(&**right),
                    Text::Str(" || "),
                    Text::Expr(&**left),
                    Text::Str("("),
                ]),
                Text::Expr(Self::IsPresent(field)) => write!(f, "present({field})")?,
                Text::Expr(Self::Contains {
                    haystack,
                    needle,
                    mode,
                }) => write!(f, "{haystack} contains[{mode}] {needle}")?,
                Text::Expr(Self::Equals { left, right, mode }) => {
                    write!(f, "{left} equals[{mode}] {right}")?
                }
                Text::Expr(Self::StrictEquals { left, right }) => write!(f, "{left} == {right}")?,
            }
        }

        Ok(())
    }
}
