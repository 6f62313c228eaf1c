/*!
Sums: values holding exactly one of a fixed list of alternatives.

A [`Sum<S>`](Sum) over the alternative list `S` always holds exactly one live alternative, chosen
when it is constructed: there is no empty state, and the live alternative only changes by replacing
the whole sum. Every operation other than asking for a specific alternative is checked at compile
time: a visitor which does not handle every alternative, or a conversion from a sum which is not a
subset of the target, is a type error.
```rust
use coprod::{Sum, T};

let s: Sum<T![bool, i32]> = Sum::new(42);
assert!(s.has_value::<i32, _>());
assert!(!s.has_value::<bool, _>());
assert_eq!(s.get::<i32, _>(), Some(&42));

// Sums over overlapping lists compare by the live alternative
let wide: Sum<T![char, i32, bool]> = s.clone().broaden();
assert_eq!(wide, s);
```
*/
use crate::error::Error;
use crate::normal::{normalize, Keys, Layout, LayoutKeys, TypeKey};
use crate::storage::{
    Alternatives, CollapseLayout, Dispatch, DispatchAs, DispatchCollapse, DispatchTagged, Embed,
    Match, Member, Narrow, Slot,
};
use crate::typelist::Here;
use elysees::Arc;
use std::any::{type_name, TypeId};
use std::ops::{Deref, DerefMut};

mod cmp;
mod collapse;
#[cfg(feature = "either")]
mod either;

pub use collapse::*;

/// Write a sum type: `Sum![A, B]` is `Sum<T![A, B]>`
#[macro_export]
macro_rules! Sum {
    [$($t:ty),* $(,)?] => [$crate::sum::Sum<$crate::T![$($t),*]>];
}

/// The remainder of the alternative list `S` once the alternative `X` at position `I` is removed
pub type Remainder<S, X, I> = <S as Member<X, I>>::Remainder;

/// The alternative list `S` with the alternative `X` at position `I` replaced by `Y`
pub type Substituted<S, X, I, Y> = <S as Member<X, I>>::Substitute<Y>;

/// A value holding exactly one alternative of the list `S`
pub struct Sum<S: Alternatives> {
    repr: S::Repr,
}

impl<S: Alternatives> Sum<S> {
    /// Wrap a representation
    #[inline]
    pub(crate) fn from_repr(repr: S::Repr) -> Sum<S> {
        Sum { repr }
    }
    /// Unwrap the representation
    #[inline]
    pub(crate) fn into_repr(self) -> S::Repr {
        self.repr
    }
    /// Borrow the representation
    #[inline]
    pub(crate) fn repr(&self) -> &S::Repr {
        &self.repr
    }
    /**
    Construct a sum holding a value of one of its alternatives.

    The position of the alternative is inferred from the value's type; if the list contains the
    same type more than once, use [`Sum::at`] instead.
    */
    #[inline]
    pub fn new<X, I>(value: X) -> Sum<S>
    where
        S: Member<X, I>,
    {
        Sum::from_repr(S::inject(value))
    }
    /// Construct a sum holding a value at the position `I`
    ///
    /// # Example
    /// ```rust
    /// use coprod::{Here, There, Sum, T};
    /// let first: Sum<T![u8, u8]> = Sum::at::<Here, _>(1);
    /// let second: Sum<T![u8, u8]> = Sum::at::<There<Here>, _>(1);
    /// assert_eq!(first.index(), 0);
    /// assert_eq!(second.index(), 1);
    /// ```
    #[inline]
    pub fn at<I, X>(value: X) -> Sum<S>
    where
        S: Member<X, I>,
    {
        Sum::from_repr(S::inject(value))
    }
    /// Construct a sum from a sum over a subset of its alternatives
    #[inline]
    pub fn from_narrower<N, Is>(narrower: Sum<N>) -> Sum<S>
    where
        N: Embed<S, Is>,
    {
        Sum::from_repr(N::embed(narrower.repr))
    }
    /// Convert this sum into a sum over a superset of its alternatives
    #[inline]
    pub fn broaden<R, Is>(self) -> Sum<R>
    where
        R: Alternatives,
        S: Embed<R, Is>,
    {
        Sum::from_narrower(self)
    }
    /**
    Convert this sum into a sum over a permutation of its alternatives.

    Both lists must contain exactly the same alternatives, which is checked at compile time.
    */
    #[inline]
    pub fn reorder<R, Is, Js>(self) -> Sum<R>
    where
        R: Embed<S, Js>,
        S: Embed<R, Is>,
    {
        Sum::from_narrower(self)
    }
    /**
    Convert this sum into a sum over a subset `N` of its alternatives.

    If the live alternative is not in `N`, return it as a sum over the remaining alternatives.
    */
    #[inline]
    pub fn narrow<N, Is>(self) -> Result<Sum<N>, Sum<<S as Narrow<N, Is>>::Remainder>>
    where
        N: Alternatives,
        S: Narrow<N, Is>,
    {
        S::narrow(self.repr)
            .map(Sum::from_repr)
            .map_err(Sum::from_repr)
    }
    /// Move out the alternative `X` if it is live, and otherwise return the rest of the sum
    #[inline]
    pub fn take<X, I>(self) -> Result<X, Sum<Remainder<S, X, I>>>
    where
        S: Member<X, I>,
    {
        S::extract(self.repr).map_err(Sum::from_repr)
    }
    /// Check whether the alternative `X` is live
    #[inline]
    pub fn has_value<X, I>(&self) -> bool
    where
        S: Member<X, I>,
    {
        S::project(&self.repr).is_some()
    }
    /// Borrow the alternative `X`, if it is live
    #[inline]
    pub fn get<X, I>(&self) -> Option<&X>
    where
        S: Member<X, I>,
    {
        S::project(&self.repr)
    }
    /// Mutably borrow the alternative `X`, if it is live
    #[inline]
    pub fn get_mut<X, I>(&mut self) -> Option<&mut X>
    where
        S: Member<X, I>,
    {
        S::project_mut(&mut self.repr)
    }
    /// Borrow the alternative `X`, or report which alternative is live instead
    pub fn get_or_err<X, I>(&self) -> Result<&X, Error>
    where
        S: Member<X, I>,
    {
        S::project(&self.repr).ok_or_else(|| Error::Mismatch {
            requested: type_name::<X>(),
            held: S::name_of(&self.repr),
        })
    }
    /// Get a pointer to the alternative `X`, which is null unless `X` is live
    #[inline]
    pub fn pointer_to<X, I>(&self) -> *const X
    where
        S: Member<X, I>,
    {
        crate::storage::pointer_to::<S, X, I>(&self.repr)
    }
    /// Get a mutable pointer to the alternative `X`, which is null unless `X` is live
    #[inline]
    pub fn pointer_to_mut<X, I>(&mut self) -> *mut X
    where
        S: Member<X, I>,
    {
        crate::storage::pointer_to_mut::<S, X, I>(&mut self.repr)
    }
    /// Get the position of the live alternative in `S`
    #[inline]
    pub fn index(&self) -> usize {
        S::index_of(&self.repr)
    }
    /// Get the number of alternatives of this sum's type
    #[inline]
    pub fn alternatives(&self) -> usize {
        S::LEN
    }
    /// Get the name of the live alternative's type
    #[inline]
    pub fn type_name(&self) -> &'static str {
        S::name_of(&self.repr)
    }
    /// Borrow the live alternative, as a sum of references
    #[inline]
    pub fn as_ref(&self) -> Sum<S::Refs<'_>> {
        Sum::from_repr(S::repr_ref(&self.repr))
    }
    /// Mutably borrow the live alternative, as a sum of mutable references
    #[inline]
    pub fn as_mut(&mut self) -> Sum<S::Muts<'_>> {
        Sum::from_repr(S::repr_mut(&mut self.repr))
    }
    /**
    Apply a visitor to the live alternative.

    The visitor must handle every alternative, with the same output type for each.
    */
    #[inline]
    pub fn invoke<V, R>(self, mut visitor: V) -> R
    where
        S: Dispatch<V, R>,
    {
        S::dispatch(self.repr, &mut visitor)
    }
    /// Apply a visitor to the live alternative, converting the output of each branch into `R`
    #[inline]
    pub fn invoke_as<R, V>(self, mut visitor: V) -> R
    where
        S: DispatchAs<V, R>,
    {
        S::dispatch_as(self.repr, &mut visitor)
    }
    /// Apply a visitor to the live alternative, tagged with its position in `S`
    #[inline]
    pub fn invoke_tagged<V, R>(self, mut visitor: V) -> R
    where
        S: DispatchTagged<V, R, Here>,
    {
        S::dispatch_tagged(self.repr, &mut visitor)
    }
    /**
    Apply a visitor to the live alternative, collapsing the outputs of every branch into one sum.

    Each branch may return any alternative of `R`, or a sum over a subset of `R`, in which case
    its live alternative is spliced into the result rather than nested inside it. A collapse into a
    single plain type is a collapse into a one-alternative sum, which derefs to (and can be
    unwrapped into) that type.
    ```rust
    use coprod::{Sum, Visitor, T};

    struct Halve;

    impl Visitor<i32> for Halve {
        type Output = Sum<T![i32, f64]>;
        fn visit(&mut self, i: i32) -> Self::Output {
            if i % 2 == 0 { Sum::new(i / 2) } else { Sum::new(i as f64 / 2.0) }
        }
    }

    impl Visitor<f64> for Halve {
        type Output = f64;
        fn visit(&mut self, x: f64) -> f64 {
            x / 2.0
        }
    }

    let s: Sum<T![i32, f64]> = Sum::new(3);
    let halved: Sum<T![f64, i32]> = s.transform(Halve);
    assert_eq!(halved.get::<f64, _>(), Some(&1.5));
    ```
    The target `R` is only required to have room for every branch result. To also check that it
    is no wider than the union of the branch results, use [`transform_exact`](Sum::transform_exact).
    */
    #[inline]
    pub fn transform<R, V, Hows>(self, mut visitor: V) -> Sum<R>
    where
        R: Alternatives,
        S: DispatchCollapse<V, R, Hows>,
    {
        Sum::from_repr(S::dispatch_collapse(self.repr, &mut visitor))
    }
    /// Apply the handler at the live alternative's position in a positional list of handlers
    #[inline]
    pub fn match_with<C, R>(self, cases: C) -> R
    where
        C: Match<S, R>,
    {
        cases.match_repr(self.repr)
    }
    /// Replace the alternative `X` with the result of `f` if it is live, changing its type to `Y`
    #[inline]
    pub fn map<X, I, Y, F>(self, f: F) -> Sum<Substituted<S, X, I, Y>>
    where
        S: Member<X, I>,
        F: FnOnce(X) -> Y,
    {
        Sum::from_repr(S::substitute(self.repr, f))
    }
    /// Call `f` on the alternative `X` if it is live
    #[inline]
    pub fn inspect<X, I, F>(self, f: F) -> Sum<S>
    where
        S: Member<X, I>,
        F: FnOnce(&X),
    {
        if let Some(value) = self.get::<X, I>() {
            f(value)
        }
        self
    }
}

impl<S: Keys> Sum<S> {
    /// Get the key of the live alternative's type
    #[inline]
    pub fn key(&self) -> TypeKey {
        S::key_of(&self.repr)
    }
    /// Get the `TypeId` of the live alternative
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.key().id()
    }
    /// Get the canonical layout of this sum's alternatives
    #[inline]
    pub fn layout(&self) -> Arc<Layout> {
        S::layout()
    }
    /// Get the normalized union of the results of the branches of `visitor` over `S`, collapsed into
    /// `R`
    pub fn branch_layout<R, V, Hows>(&self, _visitor: &V) -> Layout
    where
        R: Alternatives,
        S: CollapseLayout<V, R, Hows>,
    {
        let mut keys = LayoutKeys::new();
        S::push_branch_keys(&mut keys);
        normalize(keys)
    }
    /**
    Transform this sum, checking that the alternatives of `R` are exactly the normalized union of
    the branch results.

    ```rust
    use coprod::{Error, Sum, Visitor, T};

    struct Widen;

    impl Visitor<u8> for Widen {
        type Output = u32;
        fn visit(&mut self, n: u8) -> u32 {
            n as u32
        }
    }

    impl Visitor<u16> for Widen {
        type Output = u32;
        fn visit(&mut self, n: u16) -> u32 {
            n as u32
        }
    }

    let s: Sum<T![u8, u16]> = Sum::new(7u16);
    let exact: Result<Sum<T![u32]>, Error> = s.transform_exact(Widen);
    assert_eq!(exact.map(Sum::into_inner), Ok(7));
    let wide: Result<Sum<T![u32, u64]>, Error> = s.transform_exact(Widen);
    assert!(wide.is_err());
    ```
    */
    pub fn transform_exact<R, V, Hows>(self, visitor: V) -> Result<Sum<R>, Error>
    where
        R: Keys,
        S: CollapseLayout<V, R, Hows>,
    {
        let branches = self.branch_layout::<R, V, Hows>(&visitor);
        let wanted = R::layout();
        if *wanted != branches {
            tracing::debug!(
                wanted = %*wanted,
                %branches,
                "transform target differs from its branch results"
            );
            return Err(Error::LayoutMismatch {
                target: (*wanted).clone(),
                branches,
            });
        }
        Ok(self.transform(visitor))
    }
    /// Get the position of the live alternative in the canonical layout of `S`, which is the same
    /// for every permutation of `S`
    pub fn canonical_index(&self) -> usize {
        let key = self.key();
        match S::layout().position(&key) {
            Some(ix) => ix,
            None => unreachable!("Live alternative {} is missing from its own layout", key),
        }
    }
}

impl<X> Sum<(X, ())> {
    /// Unwrap a sum with a single alternative
    #[inline]
    pub fn into_inner(self) -> X {
        match self.repr {
            Slot::Here(value) => value,
            Slot::There(never) => match never {},
        }
    }
}

impl<X> From<X> for Sum<(X, ())> {
    #[inline]
    fn from(value: X) -> Sum<(X, ())> {
        Sum::new(value)
    }
}

impl<X> Deref for Sum<(X, ())> {
    type Target = X;
    #[inline]
    fn deref(&self) -> &X {
        match &self.repr {
            Slot::Here(value) => value,
            Slot::There(never) => match *never {},
        }
    }
}

impl<X> DerefMut for Sum<(X, ())> {
    #[inline]
    fn deref_mut(&mut self) -> &mut X {
        match &mut self.repr {
            Slot::Here(value) => value,
            Slot::There(never) => match *never {},
        }
    }
}
