/*!
Re-homing the live alternative between related lists: subsets, supersets and concatenations
*/
use super::{Alternatives, Member, Slot, Void};

/**
A list every alternative of which is also an alternative of `R`.

`Is` lists the position in `R` of each alternative of `Self`; it is always inferred.
*/
pub trait Embed<R: Alternatives, Is>: Alternatives {
    /// Re-home the live alternative into `R`
    fn embed(repr: Self::Repr) -> R::Repr;
}

impl<R: Alternatives> Embed<R, ()> for () {
    #[inline]
    fn embed(repr: Void) -> R::Repr {
        match repr {}
    }
}

impl<H, T, R, I, Is> Embed<R, (I, Is)> for (H, T)
where
    R: Member<H, I>,
    T: Embed<R, Is>,
{
    #[inline]
    fn embed(repr: Slot<H, T::Repr>) -> R::Repr {
        match repr {
            Slot::Here(head) => R::inject(head),
            Slot::There(rest) => T::embed(rest),
        }
    }
}

/**
A list containing every alternative of `N`, which can therefore be narrowed down to `N`.

`Is` lists the position of each alternative of `N` within the successive remainders of `Self`; it is
always inferred.
*/
pub trait Narrow<N: Alternatives, Is>: Alternatives {
    /// The alternatives of `Self` which are not alternatives of `N`
    type Remainder: Alternatives;
    /// Re-home the live alternative into `N` if it is an alternative of `N`, and otherwise into
    /// the remainder
    fn narrow(repr: Self::Repr) -> Result<N::Repr, <Self::Remainder as Alternatives>::Repr>;
}

impl<S: Alternatives> Narrow<(), ()> for S {
    type Remainder = S;
    #[inline]
    fn narrow(repr: S::Repr) -> Result<Void, S::Repr> {
        Err(repr)
    }
}

impl<S, H, T, I, Is> Narrow<(H, T), (I, Is)> for S
where
    T: Alternatives,
    S: Member<H, I>,
    S::Remainder: Narrow<T, Is>,
{
    type Remainder = <S::Remainder as Narrow<T, Is>>::Remainder;
    #[inline]
    fn narrow(
        repr: S::Repr,
    ) -> Result<Slot<H, T::Repr>, <Self::Remainder as Alternatives>::Repr> {
        match S::extract(repr) {
            Ok(head) => Ok(Slot::Here(head)),
            Err(rest) => <S::Remainder as Narrow<T, Is>>::narrow(rest).map(Slot::There),
        }
    }
}

/// A list which can be concatenated with the list `B`
pub trait Append<B: Alternatives>: Alternatives {
    /// The concatenation of `Self` and `B`
    type Output: Alternatives;
    /// Re-home a live alternative of `Self` into the concatenation
    fn left(repr: Self::Repr) -> <Self::Output as Alternatives>::Repr;
    /// Re-home a live alternative of `B` into the concatenation
    fn right(repr: B::Repr) -> <Self::Output as Alternatives>::Repr;
}

/// The concatenation of the alternative lists `A` and `B`
pub type Appended<A, B> = <A as Append<B>>::Output;

impl<B: Alternatives> Append<B> for () {
    type Output = B;
    #[inline]
    fn left(repr: Void) -> B::Repr {
        match repr {}
    }
    #[inline]
    fn right(repr: B::Repr) -> B::Repr {
        repr
    }
}

impl<H, T: Append<B>, B: Alternatives> Append<B> for (H, T) {
    type Output = (H, T::Output);
    #[inline]
    fn left(repr: Slot<H, T::Repr>) -> Slot<H, <T::Output as Alternatives>::Repr> {
        match repr {
            Slot::Here(head) => Slot::Here(head),
            Slot::There(rest) => Slot::There(T::left(rest)),
        }
    }
    #[inline]
    fn right(repr: B::Repr) -> Slot<H, <T::Output as Alternatives>::Repr> {
        Slot::There(T::right(repr))
    }
}
