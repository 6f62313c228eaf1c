/*!
Return-type collapsing: flattening the results of a dispatch into a single output list
*/
use super::Sum;
use crate::normal::{Keys, LayoutKeys, TypeKey};
use crate::storage::{Alternatives, Embed, Member};
use std::marker::PhantomData;

/**
A branch result which collapses into the alternative list `R`.

A plain value is injected as the alternative of `R` of its own type, while a [`Sum`] has its live
alternative spliced into `R` instead of being nested inside it. `How` distinguishes the two and is
always inferred.
*/
pub trait Collapse<R: Alternatives, How> {
    /// Collapse this result into the storage of `R`
    fn collapse(self) -> R::Repr;
}

/// Collapse a plain value by injecting it at position `I`
#[derive(Debug)]
pub struct Inject<I>(PhantomData<I>);

/// Collapse a sum by splicing its alternatives into the positions `Is`
#[derive(Debug)]
pub struct Splice<Is>(PhantomData<Is>);

impl<X, R, I> Collapse<R, Inject<I>> for X
where
    R: Member<X, I>,
{
    #[inline]
    fn collapse(self) -> R::Repr {
        R::inject(self)
    }
}

impl<S, R, Is> Collapse<R, Splice<Is>> for Sum<S>
where
    R: Alternatives,
    S: Embed<R, Is>,
{
    #[inline]
    fn collapse(self) -> R::Repr {
        S::embed(self.into_repr())
    }
}

/// A branch result which can report the alternatives it contributes to a collapse
pub trait CollapseKeys<How> {
    /// Push the key of every alternative this result may collapse into
    fn push_collapse_keys(keys: &mut LayoutKeys);
}

impl<X: 'static, I> CollapseKeys<Inject<I>> for X {
    #[inline]
    fn push_collapse_keys(keys: &mut LayoutKeys) {
        keys.push(TypeKey::of::<X>())
    }
}

impl<S: Keys, Is> CollapseKeys<Splice<Is>> for Sum<S> {
    #[inline]
    fn push_collapse_keys(keys: &mut LayoutKeys) {
        S::push_keys(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::T;

    fn collapse_into<R: Alternatives, How, X: Collapse<R, How>>(x: X) -> Sum<R> {
        Sum::from_repr(x.collapse())
    }

    #[test]
    fn plain_values_are_injected() {
        let s: Sum<T![u8, char]> = collapse_into('c');
        assert_eq!(s.get::<char, _>(), Some(&'c'));
    }

    #[test]
    fn sums_are_spliced_not_nested() {
        let inner: Sum<T![char, bool]> = Sum::new(true);
        let s: Sum<T![u8, bool, char]> = collapse_into(inner);
        assert_eq!(s.index(), 1);
        assert_eq!(s.get::<bool, _>(), Some(&true));
    }

    #[test]
    fn spliced_sums_contribute_every_alternative() {
        let mut keys = LayoutKeys::new();
        <u8 as CollapseKeys<Inject<()>>>::push_collapse_keys(&mut keys);
        <Sum<T![char, bool]> as CollapseKeys<Splice<()>>>::push_collapse_keys(&mut keys);
        assert_eq!(
            &keys[..],
            &[
                TypeKey::of::<u8>(),
                TypeKey::of::<char>(),
                TypeKey::of::<bool>()
            ][..]
        );
    }
}
