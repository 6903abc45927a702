//! Standard lenses that are commonly used.
//!
//! This module provides pre-defined lenses for common use cases.

use super::{FunctionLens, Lens};

/// Creates an identity lens that focuses on the whole value.
///
/// The identity lens satisfies:
/// - `lens.get(&x) == &x`
/// - `lens.set(x, y) == y`
///
/// It is a unit of composition on both sides:
/// `identity_lens().and(l)` and `l.and(identity_lens())` behave like `l`.
///
/// # Example
///
/// ```
/// use lenses::optics::{Lens, identity_lens};
///
/// let identity = identity_lens::<i32>();
///
/// assert_eq!(*identity.get(&42), 42);
/// assert_eq!(identity.set(42, 7), 7);
/// ```
#[must_use]
pub fn identity_lens<T>() -> impl Lens<T, T> + Copy {
    FunctionLens::new(|source: &T| source, |_: T, value: T| value)
}

/// Creates a lens on the first element of a pair.
///
/// # Example
///
/// ```
/// use lenses::optics::{Lens, first_lens};
///
/// let first = first_lens::<i32, String>();
/// let pair = (1, "one".to_string());
///
/// assert_eq!(*first.get(&pair), 1);
/// assert_eq!(first.set(pair, 2), (2, "one".to_string()));
/// ```
#[must_use]
pub fn first_lens<A, B>() -> impl Lens<(A, B), A> + Copy {
    FunctionLens::new(|pair: &(A, B)| &pair.0, |(_, second): (A, B), first: A| {
        (first, second)
    })
}

/// Creates a lens on the second element of a pair.
///
/// # Example
///
/// ```
/// use lenses::optics::{Lens, second_lens};
///
/// let second = second_lens::<i32, String>();
/// let pair = (1, "one".to_string());
///
/// assert_eq!(second.get(&pair), "one");
/// assert_eq!(second.set(pair, "uno".to_string()), (1, "uno".to_string()));
/// ```
#[must_use]
pub fn second_lens<A, B>() -> impl Lens<(A, B), B> + Copy {
    FunctionLens::new(|pair: &(A, B)| &pair.1, |(first, _): (A, B), second: B| {
        (first, second)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_lens() {
        let identity = identity_lens::<String>();

        let value = "hello".to_string();
        assert_eq!(identity.get(&value), "hello");
        assert_eq!(identity.set(value, "world".to_string()), "world");
    }

    #[test]
    fn test_identity_lens_is_left_and_right_unit() {
        let pair = (1, 'a');

        let left = identity_lens::<(i32, char)>().and(first_lens::<i32, char>());
        let right = first_lens::<i32, char>().and(identity_lens::<i32>());

        assert_eq!(left.get(&pair), first_lens::<i32, char>().get(&pair));
        assert_eq!(right.get(&pair), first_lens::<i32, char>().get(&pair));
        assert_eq!(left.set(pair, 9), (9, 'a'));
        assert_eq!(right.set(pair, 9), (9, 'a'));
    }

    #[test]
    fn test_pair_lenses() {
        let pair = (1, 'a');

        assert_eq!(first_lens::<i32, char>().set(pair, 2), (2, 'a'));
        assert_eq!(second_lens::<i32, char>().set(pair, 'b'), (1, 'b'));
    }

    #[test]
    fn test_nested_pair_lens() {
        let nested = ((1, 2), 3);
        let inner_second = first_lens::<(i32, i32), i32>().and(second_lens::<i32, i32>());

        assert_eq!(*inner_second.get(&nested), 2);
        assert_eq!(inner_second.set(nested, 20), ((1, 20), 3));
    }
}
