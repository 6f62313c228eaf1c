/*!
Variant storage: the representation of "exactly one of a list of alternatives".

An alternative list `(H, T)` is stored as a [`Slot<H, T::Repr>`](Slot), which is either the head
alternative or the storage of the rest of the list, and the empty list `()` is stored as the
uninhabited [`Void`]. The chain of enum tags *is* the discriminant: a value of the representation
always holds exactly one live alternative, it is constructed by injecting one alternative and
dropped by dropping only that alternative, and no alternative is ever constructed implicitly.

Every trait in this module recurses over the list one [`Slot`] at a time, so the cost of a
dispatch is a chain of tag comparisons ending at the live alternative.
*/
use crate::typelist::{Count, Here, There};
use std::any::{type_name, Any, TypeId};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

mod dispatch;
mod embed;

pub use dispatch::*;
pub use embed::*;

/// The storage of the empty alternative list, which can never hold a value
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Void {}

/// The storage of the alternative list `(H, T)`, given the storage `T` of its tail
#[derive(Copy, Clone, Eq, PartialEq)]
pub enum Slot<H, T> {
    /// The head alternative is live
    Here(H),
    /// One of the tail's alternatives is live
    There(T),
}

impl Debug for Void {
    fn fmt(&self, _fmt: &mut Formatter) -> Result<(), fmt::Error> {
        match *self {}
    }
}

impl Display for Void {
    fn fmt(&self, _fmt: &mut Formatter) -> Result<(), fmt::Error> {
        match *self {}
    }
}

impl Hash for Void {
    fn hash<S: Hasher>(&self, _hasher: &mut S) {
        match *self {}
    }
}

impl<H: Debug, T: Debug> Debug for Slot<H, T> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Slot::Here(head) => Debug::fmt(head, fmt),
            Slot::There(rest) => Debug::fmt(rest, fmt),
        }
    }
}

impl<H: Display, T: Display> Display for Slot<H, T> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Slot::Here(head) => Display::fmt(head, fmt),
            Slot::There(rest) => Display::fmt(rest, fmt),
        }
    }
}

/// Hashes the live alternative's type before its value, so that equal values held by sums over
/// different lists hash identically
impl<H: Hash + 'static, T: Hash> Hash for Slot<H, T> {
    fn hash<S: Hasher>(&self, hasher: &mut S) {
        match self {
            Slot::Here(head) => {
                TypeId::of::<H>().hash(hasher);
                head.hash(hasher)
            }
            Slot::There(rest) => rest.hash(hasher),
        }
    }
}

/// A list of alternatives, together with the storage for exactly one of them
pub trait Alternatives: Count + Sized {
    /// The storage for one alternative of this list
    type Repr;
    /// This list with every alternative borrowed immutably
    type Refs<'a>: Alternatives
    where
        Self: 'a;
    /// This list with every alternative borrowed mutably
    type Muts<'a>: Alternatives
    where
        Self: 'a;
    /// Get the position of the live alternative
    fn index_of(repr: &Self::Repr) -> usize;
    /// Get the name of the live alternative's type
    fn name_of(repr: &Self::Repr) -> &'static str;
    /// Borrow the live alternative
    fn repr_ref<'a>(repr: &'a Self::Repr) -> <Self::Refs<'a> as Alternatives>::Repr
    where
        Self: 'a;
    /// Mutably borrow the live alternative
    fn repr_mut<'a>(repr: &'a mut Self::Repr) -> <Self::Muts<'a> as Alternatives>::Repr
    where
        Self: 'a;
}

impl Alternatives for () {
    type Repr = Void;
    type Refs<'a> = ();
    type Muts<'a> = ();
    #[inline]
    fn index_of(repr: &Void) -> usize {
        match *repr {}
    }
    #[inline]
    fn name_of(repr: &Void) -> &'static str {
        match *repr {}
    }
    #[inline]
    fn repr_ref<'a>(repr: &'a Void) -> Void
    where
        Self: 'a,
    {
        match *repr {}
    }
    #[inline]
    fn repr_mut<'a>(repr: &'a mut Void) -> Void
    where
        Self: 'a,
    {
        match *repr {}
    }
}

impl<H, T: Alternatives> Alternatives for (H, T) {
    type Repr = Slot<H, T::Repr>;
    type Refs<'a> = (&'a H, T::Refs<'a>) where Self: 'a;
    type Muts<'a> = (&'a mut H, T::Muts<'a>) where Self: 'a;
    #[inline]
    fn index_of(repr: &Self::Repr) -> usize {
        match repr {
            Slot::Here(_) => 0,
            Slot::There(rest) => T::index_of(rest) + 1,
        }
    }
    #[inline]
    fn name_of(repr: &Self::Repr) -> &'static str {
        match repr {
            Slot::Here(_) => type_name::<H>(),
            Slot::There(rest) => T::name_of(rest),
        }
    }
    #[inline]
    fn repr_ref<'a>(repr: &'a Self::Repr) -> <Self::Refs<'a> as Alternatives>::Repr
    where
        Self: 'a,
    {
        match repr {
            Slot::Here(head) => Slot::Here(head),
            Slot::There(rest) => Slot::There(T::repr_ref(rest)),
        }
    }
    #[inline]
    fn repr_mut<'a>(repr: &'a mut Self::Repr) -> <Self::Muts<'a> as Alternatives>::Repr
    where
        Self: 'a,
    {
        match repr {
            Slot::Here(head) => Slot::Here(head),
            Slot::There(rest) => Slot::There(T::repr_mut(rest)),
        }
    }
}

/// An alternative list containing `X` at position `I`
pub trait Member<X, I>: Alternatives {
    /// The list with the alternative at `I` removed
    type Remainder: Alternatives;
    /// The list with the alternative at `I` replaced by `Y`
    type Substitute<Y>: Member<Y, I>;
    /// Construct the alternative at `I`
    fn inject(value: X) -> Self::Repr;
    /// Borrow the alternative at `I`, if it is live
    fn project(repr: &Self::Repr) -> Option<&X>;
    /// Mutably borrow the alternative at `I`, if it is live
    fn project_mut(repr: &mut Self::Repr) -> Option<&mut X>;
    /// Move out the alternative at `I` if it is live, and otherwise re-home the live alternative
    /// into the remainder
    fn extract(repr: Self::Repr) -> Result<X, <Self::Remainder as Alternatives>::Repr>;
    /// Re-home a live alternative of the remainder
    fn restore(rest: <Self::Remainder as Alternatives>::Repr) -> Self::Repr;
    /// Replace the alternative at `I` with the result of `f` if it is live
    fn substitute<Y, F: FnOnce(X) -> Y>(
        repr: Self::Repr,
        f: F,
    ) -> <Self::Substitute<Y> as Alternatives>::Repr;
}

impl<H, T: Alternatives> Member<H, Here> for (H, T) {
    type Remainder = T;
    type Substitute<Y> = (Y, T);
    #[inline]
    fn inject(value: H) -> Self::Repr {
        Slot::Here(value)
    }
    #[inline]
    fn project(repr: &Self::Repr) -> Option<&H> {
        match repr {
            Slot::Here(head) => Some(head),
            Slot::There(_) => None,
        }
    }
    #[inline]
    fn project_mut(repr: &mut Self::Repr) -> Option<&mut H> {
        match repr {
            Slot::Here(head) => Some(head),
            Slot::There(_) => None,
        }
    }
    #[inline]
    fn extract(repr: Self::Repr) -> Result<H, T::Repr> {
        match repr {
            Slot::Here(head) => Ok(head),
            Slot::There(rest) => Err(rest),
        }
    }
    #[inline]
    fn restore(rest: T::Repr) -> Self::Repr {
        Slot::There(rest)
    }
    #[inline]
    fn substitute<Y, F: FnOnce(H) -> Y>(repr: Self::Repr, f: F) -> Slot<Y, T::Repr> {
        match repr {
            Slot::Here(head) => Slot::Here(f(head)),
            Slot::There(rest) => Slot::There(rest),
        }
    }
}

impl<H, T, X, I> Member<X, There<I>> for (H, T)
where
    T: Member<X, I>,
{
    type Remainder = (H, T::Remainder);
    type Substitute<Y> = (H, T::Substitute<Y>);
    #[inline]
    fn inject(value: X) -> Self::Repr {
        Slot::There(T::inject(value))
    }
    #[inline]
    fn project(repr: &Self::Repr) -> Option<&X> {
        match repr {
            Slot::Here(_) => None,
            Slot::There(rest) => T::project(rest),
        }
    }
    #[inline]
    fn project_mut(repr: &mut Self::Repr) -> Option<&mut X> {
        match repr {
            Slot::Here(_) => None,
            Slot::There(rest) => T::project_mut(rest),
        }
    }
    #[inline]
    fn extract(repr: Self::Repr) -> Result<X, <Self::Remainder as Alternatives>::Repr> {
        match repr {
            Slot::Here(head) => Err(Slot::Here(head)),
            Slot::There(rest) => T::extract(rest).map_err(Slot::There),
        }
    }
    #[inline]
    fn restore(rest: <Self::Remainder as Alternatives>::Repr) -> Self::Repr {
        match rest {
            Slot::Here(head) => Slot::Here(head),
            Slot::There(rest) => Slot::There(T::restore(rest)),
        }
    }
    #[inline]
    fn substitute<Y, F: FnOnce(X) -> Y>(
        repr: Self::Repr,
        f: F,
    ) -> <Self::Substitute<Y> as Alternatives>::Repr {
        match repr {
            Slot::Here(head) => Slot::Here(head),
            Slot::There(rest) => Slot::There(T::substitute(rest, f)),
        }
    }
}

/// Construct the alternative `X` at position `I` of the list `S`
#[inline]
pub fn construct<S: Member<X, I>, X, I>(value: X) -> S::Repr {
    S::inject(value)
}

/**
Get a pointer to the alternative `X` at position `I` of the list `S`.

The pointer is null if `X` is not the live alternative.
*/
#[inline]
pub fn pointer_to<S: Member<X, I>, X, I>(repr: &S::Repr) -> *const X {
    S::project(repr).map_or(std::ptr::null(), |value| value as *const X)
}

/// Get a mutable pointer to the alternative `X` at position `I` of the list `S`, or null if `X`
/// is not the live alternative
#[inline]
pub fn pointer_to_mut<S: Member<X, I>, X, I>(repr: &mut S::Repr) -> *mut X {
    S::project_mut(repr).map_or(std::ptr::null_mut(), |value| value as *mut X)
}

/// A list whose live alternative can be viewed as `dyn Any`
pub trait Probe {
    /// View the live alternative
    fn probe(&self) -> &dyn Any;
}

impl Probe for Void {
    #[inline]
    fn probe(&self) -> &dyn Any {
        match *self {}
    }
}

impl<H: 'static, T: Probe> Probe for Slot<H, T> {
    #[inline]
    fn probe(&self) -> &dyn Any {
        match self {
            Slot::Here(head) => head,
            Slot::There(rest) => rest.probe(),
        }
    }
}

/// A list whose live alternative can be compared against an alternative of any other list
pub trait ReprEq {
    /// Check whether the live alternative has the same type as, and is equal to, `other`
    fn eq_any(&self, other: &dyn Any) -> bool;
}

impl ReprEq for Void {
    #[inline]
    fn eq_any(&self, _other: &dyn Any) -> bool {
        match *self {}
    }
}

impl<H: PartialEq + 'static, T: ReprEq> ReprEq for Slot<H, T> {
    #[inline]
    fn eq_any(&self, other: &dyn Any) -> bool {
        match self {
            Slot::Here(head) => other.downcast_ref::<H>().map_or(false, |other| head == other),
            Slot::There(rest) => rest.eq_any(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::T;

    type Bis = T![bool, i32, String];

    #[test]
    fn construction_selects_one_alternative() {
        let repr = construct::<Bis, i32, _>(42);
        assert_eq!(Bis::index_of(&repr), 1);
        assert_eq!(Bis::name_of(&repr), "i32");
        assert_eq!(<Bis as Member<i32, _>>::project(&repr), Some(&42));
        assert_eq!(<Bis as Member<bool, _>>::project(&repr), None);
    }

    #[test]
    fn pointers_are_null_unless_live() {
        let mut repr = construct::<Bis, String, _>("held".to_string());
        assert!(pointer_to::<Bis, bool, _>(&repr).is_null());
        assert!(!pointer_to::<Bis, String, _>(&repr).is_null());
        assert!(pointer_to_mut::<Bis, i32, _>(&mut repr).is_null());
        assert!(!pointer_to_mut::<Bis, String, _>(&mut repr).is_null());
    }

    #[test]
    fn extraction_rehomes_the_remainder() {
        let repr = construct::<Bis, String, _>("rest".to_string());
        let rest = <Bis as Member<i32, _>>::extract(repr).unwrap_err();
        assert_eq!(<T![bool, String]>::index_of(&rest), 1);
        let repr = <Bis as Member<i32, _>>::restore(rest);
        assert_eq!(Bis::index_of(&repr), 2);
    }

    #[test]
    fn substitution_changes_one_alternative() {
        let repr = construct::<Bis, i32, _>(7);
        let swapped = <Bis as Member<i32, _>>::substitute(repr, |i| i as f64 * 0.5);
        assert_eq!(<T![bool, f64, String]>::name_of(&swapped), "f64");
        assert_eq!(<T![bool, f64, String] as Member<f64, _>>::project(&swapped), Some(&3.5));
    }

    #[test]
    fn borrowing_preserves_the_live_alternative() {
        let mut repr = construct::<Bis, i32, _>(1);
        if let Some(i) = <Bis as Member<i32, _>>::project_mut(&mut repr) {
            *i += 1;
        }
        let borrowed = Bis::repr_ref(&repr);
        assert_eq!(<T![&bool, &i32, &String]>::index_of(&borrowed), 1);
        assert_eq!(format!("{:?}", borrowed), "2");
    }

    #[test]
    fn probing_compares_across_lists() {
        let left = construct::<T![u8, char], char, _>('x');
        let right = construct::<T![char, bool, u8], char, _>('x');
        assert!(left.eq_any(right.probe()));
        let other = construct::<T![char, bool, u8], u8, _>(120);
        assert!(!left.eq_any(other.probe()));
    }
}
