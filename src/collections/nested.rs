/// A sequence element which is either a plain value or a further nested sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Consumes the nested value, returning all leaves in order.
    pub fn into_flat(self) -> Vec<T> {
        match self {
            Nested::Leaf(value) => vec![value],
            Nested::List(items) => items.into_iter().flat_map(Nested::into_flat).collect(),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

impl<T> FromIterator<Nested<T>> for Nested<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Nested::List(iter.into_iter().collect())
    }
}

/// Flattens arbitrarily nested sequences into a single sequence, preserving the order of leaves.
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    nested.iter().cloned().flat_map(Nested::into_flat).collect()
}

/// Builds a [`Vec<Nested<T>>`](Nested) from a bracketed literal.
///
/// ```
/// use utility_belt::collections::flatten;
/// use utility_belt::nested;
///
/// let items = nested![1, [2, [3, [4]], 5]];
/// assert_eq!(flatten(&items), [1, 2, 3, 4, 5]);
/// ```
///
/// Each element must be a single token tree, so wrap compound leaves (such as `-1`) in parentheses.
#[macro_export]
macro_rules! nested {
    (@item [$($inner:tt),* $(,)?]) => {
        $crate::collections::Nested::List(vec![$($crate::nested!(@item $inner)),*])
    };
    (@item $leaf:expr) => {
        $crate::collections::Nested::Leaf($leaf)
    };
    ($($item:tt),* $(,)?) => {
        vec![$($crate::nested!(@item $item)),*]
    };
}

#[doc(inline)]
pub use crate::nested;
