//! The [`Lens`] trait and its two building blocks.
//!
//! A lens pairs a read of one part of a value with a persistent write of that
//! part. Hand-written lenses for a record's fields are chained with
//! [`Lens::and`] to reach fields nested any number of levels deep.
//!
//! ```
//! use lenses::optics::Lens;
//! use lenses::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { number: u32, street: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, age: u32, address: Address }
//!
//! let person_number = lens!(Person, address).and(lens!(Address, number));
//!
//! let toto = Person {
//!     name: "Toto".to_string(),
//!     age: 12,
//!     address: Address { number: 10, street: "street".to_string() },
//! };
//!
//! assert_eq!(*person_number.get(&toto), 10);
//!
//! let moved = person_number.update(15, toto.clone());
//! assert_eq!(moved.address.number, 15);
//! assert_eq!(moved.address.street, "street");
//! assert_eq!(toto.address.number, 10);
//! ```

use std::fmt;
use std::marker::PhantomData;

/// Read and persistent-write access to an `A` held inside an `S`.
///
/// Implementations must uphold, for every `s`, `a`, `a1`, `a2`:
///
/// - get-set: `set(s.clone(), get(&s).clone()) == s`
/// - set-get: `get(&set(s, a.clone())) == &a`
/// - set-set: `set(set(s.clone(), a1), a2.clone()) == set(s, a2)`
///
/// [`crate::laws`] checks these for a given lens.
pub trait Lens<S, A> {
    /// Borrows the focus out of `source`.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Rebuilds `source` with its focus replaced by `value`.
    fn set(&self, source: S, value: A) -> S;

    /// [`Lens::set`] with the new value first, for call sites such as
    /// `person_name.update("Mathieu".to_string(), person)`.
    fn update(&self, value: A, source: S) -> S {
        self.set(source, value)
    }

    /// Replaces the focus with `function` applied to a clone of it.
    ///
    /// ```
    /// use lenses::optics::Lens;
    /// use lenses::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, age: u32 }
    ///
    /// let age = lens!(Person, age);
    /// let toto = Person { name: "Toto".to_string(), age: 12 };
    /// assert_eq!(age.modify(toto, |years| years + 1).age, 13);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`Lens::modify`], but `function` borrows the focus instead of
    /// taking a clone.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let replacement = function(self.get(&source));
        self.set(source, replacement)
    }

    /// Chains `next` after this lens, giving a lens from `S` to `B`.
    ///
    /// The result reads `next.get(self.get(s))` and writes
    /// `self.set(s, next.set(self.get(s).clone(), b))`.
    fn and<B, L>(self, next: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, next)
    }
}

impl<S, A, L> Lens<S, A> for &L
where
    L: Lens<S, A> + ?Sized,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (**self).get(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (**self).set(source, value)
    }
}

/// Free-function spelling of `outer.and(inner)`.
#[must_use]
pub fn compose<S, A, B, L1, L2>(outer: L1, inner: L2) -> ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    outer.and(inner)
}

/// A lens made of a getter and a setter.
///
/// Both may be closures or plain `fn` items. Lenses over `fn` pointers can be
/// declared as constants:
///
/// ```
/// use lenses::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Address { number: u32, street: String }
///
/// fn number(address: &Address) -> &u32 {
///     &address.number
/// }
///
/// fn with_number(address: Address, number: u32) -> Address {
///     Address { number, ..address }
/// }
///
/// const ADDRESS_NUMBER: FunctionLens<
///     Address,
///     u32,
///     fn(&Address) -> &u32,
///     fn(Address, u32) -> Address,
/// > = FunctionLens::new(
///     number as fn(&Address) -> &u32,
///     with_number as fn(Address, u32) -> Address,
/// );
///
/// let home = Address { number: 10, street: "street".to_string() };
/// assert_eq!(ADDRESS_NUMBER.set(home, 15).number, 15);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _focus: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Pairs `getter` with `setter`. The caller is responsible for the pair
    /// obeying the lens laws.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _focus: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.getter.clone(), self.setter.clone())
    }
}

impl<S, A, G, St> Copy for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Copy,
    St: Fn(S, A) -> S + Copy,
{
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FunctionLens { .. }")
    }
}

/// Two lenses chained end to end; built by [`Lens::and`] or [`compose`].
///
/// `A` is the intermediate focus: the target of the outer lens and the
/// source of the inner one.
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _intermediate: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains `outer` then `inner`.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _intermediate: PhantomData,
        }
    }

    /// The lens applied first, from the whole value to the intermediate focus.
    pub const fn first(&self) -> &L1 {
        &self.outer
    }

    /// The lens applied second, from the intermediate focus to the final one.
    pub const fn second(&self) -> &L2 {
        &self.inner
    }
}

// The intermediate is borrowed for any caller-chosen `'a`, so it must outlive all of them.
impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let rebuilt = self.inner.set(self.outer.get(&source).clone(), value);
        self.outer.set(source, rebuilt)
    }
}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<L1: Copy, L2: Copy, A> Copy for ComposedLens<L1, L2, A> {}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", self.first())
            .field("second", self.second())
            .finish()
    }
}

/// Builds a [`FunctionLens`] on one named field of a struct type.
///
/// The type may be a plain name, a path or a generic instantiation:
/// `lens!(Person, name)`, `lens!(crate::model::Address, number)`,
/// `lens!(Tagged<u32>, value)`. The setter moves the source and overwrites
/// only that field, so the resulting lens is lawful.
#[macro_export]
macro_rules! lens {
    ($source:ty, $field:ident $(,)?) => {
        $crate::optics::FunctionLens::new(
            |source: &$source| &source.$field,
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Address {
        number: u32,
        street: String,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Person {
        name: String,
        address: Address,
    }

    fn toto() -> Person {
        Person {
            name: "Toto".to_string(),
            address: Address {
                number: 10,
                street: "street".to_string(),
            },
        }
    }

    #[test]
    fn test_composed_set_rebuilds_only_the_path() {
        let person_number = lens!(Person, address).and(lens!(Address, number));

        let moved = person_number.set(toto(), 15);

        assert_eq!(moved.name, "Toto");
        assert_eq!(moved.address.street, "street");
        assert_eq!(moved.address.number, 15);
    }

    #[test]
    fn test_borrowed_lens_is_a_lens() {
        let person_name = lens!(Person, name);
        let borrowed = &person_name;

        assert_eq!(borrowed.get(&toto()), "Toto");
        assert_eq!(borrowed.update("Mathieu".to_string(), toto()).name, "Mathieu");
    }

    #[test]
    fn test_composed_debug_shows_both_parts() {
        let person_number = lens!(Person, address).and(lens!(Address, number));

        assert_eq!(
            format!("{person_number:?}"),
            "ComposedLens { first: FunctionLens { .. }, second: FunctionLens { .. } }"
        );
    }
}
