/*!
Dispatching visitors to the live alternative of a representation
*/
use super::{Alternatives, Slot, Void};
use crate::normal::LayoutKeys;
use crate::sum::{Collapse, CollapseKeys};
use crate::typelist::There;
use crate::visit::{Tagged, Visitor};

/// A list each alternative of which `V` visits with the same output `R`
pub trait Dispatch<V, R>: Alternatives {
    /// Visit the live alternative
    fn dispatch(repr: Self::Repr, visitor: &mut V) -> R;
}

impl<V, R> Dispatch<V, R> for () {
    #[inline]
    fn dispatch(repr: Void, _visitor: &mut V) -> R {
        match repr {}
    }
}

impl<H, T, V, R> Dispatch<V, R> for (H, T)
where
    V: Visitor<H, Output = R>,
    T: Dispatch<V, R>,
{
    #[inline]
    fn dispatch(repr: Slot<H, T::Repr>, visitor: &mut V) -> R {
        match repr {
            Slot::Here(head) => visitor.visit(head),
            Slot::There(rest) => T::dispatch(rest, visitor),
        }
    }
}

/// A list each alternative of which `V` visits with an output convertible into `R`
pub trait DispatchAs<V, R>: Alternatives {
    /// Visit the live alternative, converting the result
    fn dispatch_as(repr: Self::Repr, visitor: &mut V) -> R;
}

impl<V, R> DispatchAs<V, R> for () {
    #[inline]
    fn dispatch_as(repr: Void, _visitor: &mut V) -> R {
        match repr {}
    }
}

impl<H, T, V, R> DispatchAs<V, R> for (H, T)
where
    V: Visitor<H>,
    V::Output: Into<R>,
    T: DispatchAs<V, R>,
{
    #[inline]
    fn dispatch_as(repr: Slot<H, T::Repr>, visitor: &mut V) -> R {
        match repr {
            Slot::Here(head) => visitor.visit(head).into(),
            Slot::There(rest) => T::dispatch_as(rest, visitor),
        }
    }
}

/**
A list each alternative of which `V` visits, tagged with its position, with the same output `R`.

`I` is the position of this list's head within the list being dispatched over.
*/
pub trait DispatchTagged<V, R, I>: Alternatives {
    /// Visit the live alternative together with its position
    fn dispatch_tagged(repr: Self::Repr, visitor: &mut V) -> R;
}

impl<V, R, I> DispatchTagged<V, R, I> for () {
    #[inline]
    fn dispatch_tagged(repr: Void, _visitor: &mut V) -> R {
        match repr {}
    }
}

impl<H, T, V, R, I> DispatchTagged<V, R, I> for (H, T)
where
    V: Visitor<Tagged<H, I>, Output = R>,
    T: DispatchTagged<V, R, There<I>>,
{
    #[inline]
    fn dispatch_tagged(repr: Slot<H, T::Repr>, visitor: &mut V) -> R {
        match repr {
            Slot::Here(head) => visitor.visit(Tagged::new(head)),
            Slot::There(rest) => T::dispatch_tagged(rest, visitor),
        }
    }
}

/**
A list each alternative of which `V` visits with an output that collapses into the list `R`.

`Hows` records, per alternative, how its output is collapsed; it is always inferred.
*/
pub trait DispatchCollapse<V, R: Alternatives, Hows>: Alternatives {
    /// Visit the live alternative, collapsing the result into `R`
    fn dispatch_collapse(repr: Self::Repr, visitor: &mut V) -> R::Repr;
}

impl<V, R: Alternatives> DispatchCollapse<V, R, ()> for () {
    #[inline]
    fn dispatch_collapse(repr: Void, _visitor: &mut V) -> R::Repr {
        match repr {}
    }
}

impl<H, T, V, R, How, Hows> DispatchCollapse<V, R, (How, Hows)> for (H, T)
where
    R: Alternatives,
    V: Visitor<H>,
    V::Output: Collapse<R, How>,
    T: DispatchCollapse<V, R, Hows>,
{
    #[inline]
    fn dispatch_collapse(repr: Slot<H, T::Repr>, visitor: &mut V) -> R::Repr {
        match repr {
            Slot::Here(head) => visitor.visit(head).collapse(),
            Slot::There(rest) => T::dispatch_collapse(rest, visitor),
        }
    }
}

/// A collapsing dispatch which can report the alternatives its branches produce
pub trait CollapseLayout<V, R: Alternatives, Hows>: DispatchCollapse<V, R, Hows> {
    /// Push the keys of every branch output, in list order
    fn push_branch_keys(keys: &mut LayoutKeys);
}

impl<V, R: Alternatives> CollapseLayout<V, R, ()> for () {
    #[inline]
    fn push_branch_keys(_keys: &mut LayoutKeys) {}
}

impl<H, T, V, R, How, Hows> CollapseLayout<V, R, (How, Hows)> for (H, T)
where
    R: Alternatives,
    V: Visitor<H>,
    V::Output: Collapse<R, How> + CollapseKeys<How>,
    T: CollapseLayout<V, R, Hows>,
{
    #[inline]
    fn push_branch_keys(keys: &mut LayoutKeys) {
        <V::Output as CollapseKeys<How>>::push_collapse_keys(keys);
        T::push_branch_keys(keys)
    }
}

/// A positional list of handlers, one for each alternative of `S`, each returning `R`
pub trait Match<S: Alternatives, R> {
    /// Apply the handler of the live alternative
    fn match_repr(self, repr: S::Repr) -> R;
}

impl<R> Match<(), R> for () {
    #[inline]
    fn match_repr(self, repr: Void) -> R {
        match repr {}
    }
}

impl<F, Fs, H, T, R> Match<(H, T), R> for (F, Fs)
where
    T: Alternatives,
    F: FnOnce(H) -> R,
    Fs: Match<T, R>,
{
    #[inline]
    fn match_repr(self, repr: Slot<H, T::Repr>) -> R {
        match repr {
            Slot::Here(head) => (self.0)(head),
            Slot::There(rest) => self.1.match_repr(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::construct;
    use crate::typelist::{Here, Position};
    use crate::T;

    struct Width;

    impl Visitor<u8> for Width {
        type Output = usize;
        fn visit(&mut self, _: u8) -> usize {
            1
        }
    }

    impl Visitor<u64> for Width {
        type Output = usize;
        fn visit(&mut self, _: u64) -> usize {
            8
        }
    }

    struct Same;

    impl<X> Visitor<X> for Same {
        type Output = X;
        fn visit(&mut self, value: X) -> X {
            value
        }
    }

    struct Where;

    impl<X, I: Position> Visitor<Tagged<X, I>> for Where {
        type Output = (usize, &'static str);
        fn visit(&mut self, tagged: Tagged<X, I>) -> (usize, &'static str) {
            (tagged.index(), tagged.type_name())
        }
    }

    #[test]
    fn dispatch_selects_the_live_overload() {
        let small = construct::<T![u8, u64], u8, _>(3);
        let large = construct::<T![u8, u64], u64, _>(3);
        assert_eq!(<T![u8, u64]>::dispatch(small, &mut Width), 1);
        assert_eq!(<T![u8, u64]>::dispatch(large, &mut Width), 8);
    }

    #[test]
    fn dispatch_as_converts_each_branch() {
        let repr = construct::<T![u8, u16], u16, _>(300);
        let widened: u32 = <T![u8, u16]>::dispatch_as(repr, &mut Same);
        assert_eq!(widened, 300);
    }

    #[test]
    fn tagged_dispatch_reports_positions() {
        let repr = construct::<T![(), char, bool], bool, _>(true);
        let found = <T![(), char, bool] as DispatchTagged<_, _, Here>>::dispatch_tagged(
            repr, &mut Where,
        );
        assert_eq!(found, (2, "bool"));
    }

    #[test]
    fn handlers_match_positionally() {
        let repr = construct::<T![i32, String], String, _>("abc".to_string());
        let handlers = crate::cases![|i: i32| i as usize, |s: String| s.len()];
        assert_eq!(handlers.match_repr(repr), 3);
    }
}
