//! Checks for the lens laws.
//!
//! Every hand-written lens is a chance to break the laws, for example a
//! setter that also resets an unrelated field. These functions let lens
//! authors state the laws in their own tests, with a readable report of
//! which law failed and on which values.
//!
//! All checks clone their inputs; nothing the caller passes in is consumed.
//!
//! # Example
//!
//! ```
//! use lenses::laws::check_lens_laws;
//! use lenses::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//! let point = Point { x: 1, y: 2 };
//!
//! assert_eq!(check_lens_laws(&x_lens, &point, &10, &20), Ok(()));
//! ```

use std::fmt;
use std::fmt::Debug;

use crate::optics::{Lens, compose};

/// A lens law that did not hold, with the values that disagreed.
///
/// Values are kept as their `Debug` renderings so the error does not
/// depend on the lens's source or focus types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LensLawViolation {
    /// `set(s, get(s))` differed from `s`.
    GetSet {
        /// The source the lens was applied to.
        original: String,
        /// What setting the unchanged focus produced.
        result: String,
    },
    /// `get(set(s, a))` differed from `a`.
    SetGet {
        /// The value that was set.
        expected: String,
        /// What the lens read back.
        actual: String,
    },
    /// `set(set(s, a1), a2)` differed from `set(s, a2)`.
    SetSet {
        /// Result of setting twice.
        twice: String,
        /// Result of setting only the second value.
        once: String,
    },
}

impl LensLawViolation {
    /// The name of the law that failed.
    pub const fn law(&self) -> &'static str {
        match self {
            Self::GetSet { .. } => "get-set",
            Self::SetGet { .. } => "set-get",
            Self::SetSet { .. } => "set-set",
        }
    }
}

impl fmt::Display for LensLawViolation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GetSet { original, result } => write!(
                formatter,
                "get-set law violated: setting the current focus of {original} produced {result}"
            ),
            Self::SetGet { expected, actual } => write!(
                formatter,
                "set-get law violated: set {expected} but read back {actual}"
            ),
            Self::SetSet { twice, once } => write!(
                formatter,
                "set-set law violated: setting twice produced {twice}, setting once produced {once}"
            ),
        }
    }
}

impl std::error::Error for LensLawViolation {}

static_assertions::assert_impl_all!(LensLawViolation: Send, Sync, std::error::Error);

fn render<T: Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// Checks `set(s, get(s)) == s`.
///
/// # Errors
///
/// Returns [`LensLawViolation::GetSet`] when the law does not hold for `source`.
pub fn check_get_set<S, A, L>(lens: &L, source: &S) -> Result<(), LensLawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq + Debug,
    A: Clone,
{
    let result = lens.set(source.clone(), lens.get(source).clone());
    if result == *source {
        Ok(())
    } else {
        Err(LensLawViolation::GetSet {
            original: render(source),
            result: render(&result),
        })
    }
}

/// Checks `get(set(s, a)) == a`.
///
/// # Errors
///
/// Returns [`LensLawViolation::SetGet`] when the law does not hold.
pub fn check_set_get<S, A, L>(lens: &L, source: &S, value: &A) -> Result<(), LensLawViolation>
where
    L: Lens<S, A>,
    S: Clone,
    A: Clone + PartialEq + Debug,
{
    let updated = lens.set(source.clone(), value.clone());
    let actual = lens.get(&updated);
    if actual == value {
        Ok(())
    } else {
        Err(LensLawViolation::SetGet {
            expected: render(value),
            actual: render(actual),
        })
    }
}

/// Checks `set(set(s, a1), a2) == set(s, a2)`.
///
/// # Errors
///
/// Returns [`LensLawViolation::SetSet`] when the law does not hold.
pub fn check_set_set<S, A, L>(
    lens: &L,
    source: &S,
    first: &A,
    second: &A,
) -> Result<(), LensLawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq + Debug,
    A: Clone,
{
    let twice = lens.set(lens.set(source.clone(), first.clone()), second.clone());
    let once = lens.set(source.clone(), second.clone());
    if twice == once {
        Ok(())
    } else {
        Err(LensLawViolation::SetSet {
            twice: render(&twice),
            once: render(&once),
        })
    }
}

/// Checks all three lens laws, stopping at the first violation.
///
/// # Errors
///
/// Returns the first [`LensLawViolation`] found, in the order
/// get-set, set-get, set-set.
pub fn check_lens_laws<S, A, L>(
    lens: &L,
    source: &S,
    first: &A,
    second: &A,
) -> Result<(), LensLawViolation>
where
    L: Lens<S, A>,
    S: Clone + PartialEq + Debug,
    A: Clone + PartialEq + Debug,
{
    check_get_set::<S, A, L>(lens, source)?;
    check_set_get(lens, source, first)?;
    check_set_set(lens, source, first, second)
}

/// Checks all three lens laws on `outer.and(inner)`.
///
/// A lawless outer lens can make the composition lawless even when `inner`
/// is fine, and the other way round; this reports the law the chained lens
/// breaks, with values rendered at the level of `source`.
///
/// # Errors
///
/// Returns the first [`LensLawViolation`] the composed lens produces, in the
/// order get-set, set-get, set-set.
pub fn check_composed_laws<S, A, B, L1, L2>(
    outer: &L1,
    inner: &L2,
    source: &S,
    first: &B,
    second: &B,
) -> Result<(), LensLawViolation>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    S: Clone + PartialEq + Debug,
    A: Clone + 'static,
    B: Clone + PartialEq + Debug,
{
    let composed = compose::<S, A, B, _, _>(outer, inner);
    check_lens_laws::<S, B, _>(&composed, source, first, second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::FunctionLens;

    #[derive(Clone, PartialEq, Debug)]
    struct Counter {
        count: i32,
        touched: bool,
    }

    #[test]
    fn test_lawful_lens_passes() {
        let count_lens = crate::lens!(Counter, count);
        let counter = Counter {
            count: 0,
            touched: false,
        };
        assert_eq!(check_lens_laws(&count_lens, &counter, &1, &2), Ok(()));
    }

    #[test]
    fn test_setter_touching_other_field_breaks_get_set() {
        let count_lens = FunctionLens::new(
            |counter: &Counter| &counter.count,
            |_: Counter, count: i32| Counter {
                count,
                touched: true,
            },
        );
        let counter = Counter {
            count: 0,
            touched: false,
        };

        let violation = check_get_set(&count_lens, &counter).unwrap_err();
        assert_eq!(violation.law(), "get-set");
        assert!(violation.to_string().starts_with("get-set law violated"));
    }

    #[test]
    fn test_display_names_values() {
        let violation = LensLawViolation::SetGet {
            expected: "1".to_string(),
            actual: "2".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "set-get law violated: set 1 but read back 2"
        );
    }
}
