/*!
The fold protocol: invoking functions over any mix of plain values, packs and sums.

Every operand is first viewed as a sum of packs, its *outcomes*: a plain value is a single
one-element pack, a pack is itself, and a sum has one outcome per alternative. Folding two operands
then takes the Cartesian product of their outcomes, concatenating the packs of each pair, so that the
result is again a sum of packs. Finally, [`apply`] and [`call`] visit the one live outcome with its
elements spread out as a native tuple.
```rust
use coprod::fold::fold;
use coprod::{pack, Pack, Sum, T};

let small: Sum<T![i32, u8]> = Sum::new(1i32);
let flag: Sum<T![bool, char]> = Sum::new(true);
let both = fold(small, flag);
assert_eq!(both.alternatives(), 4);
assert_eq!(both.get::<Pack<T![i32, bool]>, _>(), Some(&pack![1, true]));
```
Plain operands either implement [`Splat`] themselves (as every primitive scalar, `String`, `&str`,
`()`, `Vec<T>`, `Option<T>`, `Box<T>` and `Result<T, E>` do) or are wrapped in a [`Value`].
*/
use crate::impl_for_each;
use crate::pack::{IntoTuple, Pack};
use crate::storage::{Alternatives, Append, Appended, Dispatch, DispatchCollapse, Slot, Void};
use crate::sum::Sum;
use crate::typelist::{Concat, Concatenated, Here, There};
use crate::visit::Visitor;
use crate::T;
use std::ops::{Deref, DerefMut};

/// A value which becomes a single outcome, the pack `List`, when folded
pub trait Splat {
    /// The elements this value contributes to a fold
    type List;
    /// Convert this value into the elements it contributes
    fn splat(self) -> Self::List;
}

impl<L> Splat for Pack<L> {
    type List = L;
    #[inline]
    fn splat(self) -> L {
        self.into_inner()
    }
}

/// A plain operand, contributing itself as a single element whatever its type
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Value<T>(pub T);

/// Wrap a plain operand
#[inline]
pub fn value<T>(value: T) -> Value<T> {
    Value(value)
}

impl<T> Value<T> {
    /// Get the wrapped value
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Value<T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Value<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> Splat for Value<T> {
    type List = (T, ());
    #[inline]
    fn splat(self) -> (T, ()) {
        (self.0, ())
    }
}

impl_for_each!(impl Splat for {
    (), bool, char,
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, String
} {
    type List = (Self, ());
    #[inline]
    fn splat(self) -> (Self, ()) {
        (self, ())
    }
});

impl<'a> Splat for &'a str {
    type List = (&'a str, ());
    #[inline]
    fn splat(self) -> Self::List {
        (self, ())
    }
}

impl<T> Splat for Vec<T> {
    type List = (Vec<T>, ());
    #[inline]
    fn splat(self) -> Self::List {
        (self, ())
    }
}

impl<T> Splat for Option<T> {
    type List = (Option<T>, ());
    #[inline]
    fn splat(self) -> Self::List {
        (self, ())
    }
}

impl<T> Splat for Box<T> {
    type List = (Box<T>, ());
    #[inline]
    fn splat(self) -> Self::List {
        (self, ())
    }
}

impl<T, E> Splat for Result<T, E> {
    type List = (Result<T, E>, ());
    #[inline]
    fn splat(self) -> Self::List {
        (self, ())
    }
}

/// A list of alternatives each of which can be splatted, giving a list of packs
pub trait Lift: Alternatives {
    /// One pack per alternative
    type Lifted: Alternatives;
    /// Splat the live alternative
    fn lift(repr: Self::Repr) -> <Self::Lifted as Alternatives>::Repr;
}

impl Lift for () {
    type Lifted = ();
    #[inline]
    fn lift(repr: Void) -> Void {
        repr
    }
}

impl<H: Splat, T: Lift> Lift for (H, T) {
    type Lifted = (Pack<H::List>, T::Lifted);
    #[inline]
    fn lift(repr: Slot<H, T::Repr>) -> Slot<Pack<H::List>, <T::Lifted as Alternatives>::Repr> {
        match repr {
            Slot::Here(head) => Slot::Here(Pack::new(head.splat())),
            Slot::There(rest) => Slot::There(T::lift(rest)),
        }
    }
}

/// Anything which can take part in a fold
pub trait Operand {
    /// The packs this operand may turn out to be
    type Outcomes: Alternatives;
    /// View this operand as a sum of packs
    fn into_outcomes(self) -> Sum<Self::Outcomes>;
}

/// The outcomes of an operand
pub type Outcomes<O> = <O as Operand>::Outcomes;

impl<X: Splat> Operand for X {
    type Outcomes = T![Pack<X::List>];
    #[inline]
    fn into_outcomes(self) -> Sum<Self::Outcomes> {
        Sum::from_repr(Slot::Here(Pack::new(self.splat())))
    }
}

impl<S: Lift> Operand for Sum<S> {
    type Outcomes = S::Lifted;
    #[inline]
    fn into_outcomes(self) -> Sum<S::Lifted> {
        Sum::from_repr(S::lift(self.into_repr()))
    }
}

/// A list of packs, each of which can be prefixed with the elements `A`
pub trait Prefix<A>: Alternatives {
    /// The packs, each prefixed with `A`
    type Prefixed: Alternatives;
    /// Prefix the live pack
    fn prefix(left: A, repr: Self::Repr) -> <Self::Prefixed as Alternatives>::Repr;
}

impl<A> Prefix<A> for () {
    type Prefixed = ();
    #[inline]
    fn prefix(_left: A, repr: Void) -> Void {
        repr
    }
}

impl<A, B, T> Prefix<A> for (Pack<B>, T)
where
    A: Concat<B>,
    T: Prefix<A>,
{
    type Prefixed = (Pack<Concatenated<A, B>>, T::Prefixed);
    #[inline]
    fn prefix(
        left: A,
        repr: Slot<Pack<B>, T::Repr>,
    ) -> Slot<Pack<Concatenated<A, B>>, <T::Prefixed as Alternatives>::Repr> {
        match repr {
            Slot::Here(right) => Slot::Here(Pack::new(left).concat(right)),
            Slot::There(rest) => Slot::There(T::prefix(left, rest)),
        }
    }
}

/**
A list of packs which can be crossed with the list of packs `R`.

The product holds one pack per pair of a pack of `Self` and a pack of `R`, in left-major order: all
the pairs involving the first pack of `Self` come first.
*/
pub trait Cross<R: Alternatives>: Alternatives {
    /// Every concatenation of a pack of `Self` with a pack of `R`
    type Product: Alternatives;
    /// Concatenate the live packs of both sides
    fn cross(left: Self::Repr, right: R::Repr) -> <Self::Product as Alternatives>::Repr;
}

impl<R: Alternatives> Cross<R> for () {
    type Product = ();
    #[inline]
    fn cross(left: Void, _right: R::Repr) -> Void {
        left
    }
}

impl<A, T, R> Cross<R> for (Pack<A>, T)
where
    R: Prefix<A>,
    T: Cross<R>,
    R::Prefixed: Append<T::Product>,
{
    type Product = Appended<R::Prefixed, T::Product>;
    #[inline]
    fn cross(
        left: Slot<Pack<A>, T::Repr>,
        right: R::Repr,
    ) -> <Self::Product as Alternatives>::Repr {
        match left {
            Slot::Here(pack) => {
                <R::Prefixed as Append<T::Product>>::left(R::prefix(pack.into_inner(), right))
            }
            Slot::There(rest) => <R::Prefixed as Append<T::Product>>::right(T::cross(rest, right)),
        }
    }
}

/// The outcomes of folding `L` with `R`
pub type Folded<L, R> = <Outcomes<L> as Cross<Outcomes<R>>>::Product;

/// Fold two operands into the sum of every combination of their outcomes
#[inline]
pub fn fold<L, R>(left: L, right: R) -> Sum<Folded<L, R>>
where
    L: Operand,
    R: Operand,
    L::Outcomes: Cross<R::Outcomes>,
{
    let left = left.into_outcomes().into_repr();
    let right = right.into_outcomes().into_repr();
    Sum::from_repr(<L::Outcomes as Cross<R::Outcomes>>::cross(left, right))
}

/// Fold three operands, left to right
#[inline]
pub fn fold3<A, B, C>(a: A, b: B, c: C) -> Sum<Folded<Sum<Folded<A, B>>, C>>
where
    A: Operand,
    B: Operand,
    C: Operand,
    A::Outcomes: Cross<B::Outcomes>,
    Folded<A, B>: Lift,
    Outcomes<Sum<Folded<A, B>>>: Cross<C::Outcomes>,
{
    fold(fold(a, b), c)
}

/// Fold any number of operands, left to right, into a sum of packs
#[macro_export]
macro_rules! fold {
    ($first:expr $(,)?) => {
        $crate::fold::Operand::into_outcomes($first)
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::fold!($crate::fold::fold($first, $second) $(, $rest)*)
    };
}

/// Fold any number of operands and [`apply`] a visitor of tuples to the outcome
#[macro_export]
macro_rules! apply {
    ($visitor:expr; $($operand:expr),+ $(,)?) => {
        $crate::fold::apply($visitor, $crate::fold!($($operand),+))
    };
}

/// Adapts a visitor of native tuples into a visitor of packs
#[derive(Debug, Copy, Clone, Default)]
pub struct Spread<V>(pub V);

impl<V, L> Visitor<Pack<L>> for Spread<V>
where
    L: IntoTuple,
    V: Visitor<L::Tuple>,
{
    type Output = V::Output;
    #[inline]
    fn visit(&mut self, pack: Pack<L>) -> V::Output {
        self.0.visit(pack.into_tuple())
    }
}

/**
Visit the live outcome of an operand with its elements spread into a tuple, collapsing the results.

As with [`Sum::transform`], a branch returning a plain value contributes that value's type to `R`,
while a branch returning a sum has its alternatives spliced into `R`.
*/
#[inline]
pub fn apply<V, O, R, Hows>(visitor: V, operand: O) -> Sum<R>
where
    O: Operand,
    R: Alternatives,
    O::Outcomes: DispatchCollapse<Spread<V>, R, Hows>,
{
    operand.into_outcomes().transform(Spread(visitor))
}

/// Visit the live outcome of an operand with its elements spread into a tuple, every branch
/// returning `R`
#[inline]
pub fn call<V, O, R>(visitor: V, operand: O) -> R
where
    O: Operand,
    O::Outcomes: Dispatch<Spread<V>, R>,
{
    operand.into_outcomes().invoke(Spread(visitor))
}

/**
Merge two independently fallible results.

Both successes are packed together; otherwise the first failure is kept, tagged with which side it
came from, even if both errors have the same type.
*/
pub fn combine<A, B, E, F>(
    left: Result<A, E>,
    right: Result<B, F>,
) -> Result<Pack<T![A, B]>, Sum<T![E, F]>> {
    match (left, right) {
        (Ok(left), Ok(right)) => Ok(Pack::new((left, (right, ())))),
        (Err(err), _) => Err(Sum::at::<Here, _>(err)),
        (_, Err(err)) => Err(Sum::at::<There<Here>, _>(err)),
    }
}

impl<S: Lift> Sum<S> {
    /// Visit the live alternative, preceded by the elements of `extra`, as a single tuple
    #[inline]
    pub fn invoke_with<E, V, R>(self, extra: Pack<E>, visitor: V) -> R
    where
        T![Pack<E>]: Cross<S::Lifted>,
        Folded<Pack<E>, Sum<S>>: Dispatch<Spread<V>, R>,
    {
        fold(extra, self).invoke(Spread(visitor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pack::Positional;
    use crate::{list, pack};
    use pretty_assertions::assert_eq;

    type Small = T![i32, u8];
    type Flag = T![bool, char];

    struct Describe;

    impl Visitor<(i32, bool)> for Describe {
        type Output = String;
        fn visit(&mut self, (n, b): (i32, bool)) -> String {
            format!("i32 {} bool {}", n, b)
        }
    }

    impl Visitor<(i32, char)> for Describe {
        type Output = String;
        fn visit(&mut self, (n, c): (i32, char)) -> String {
            format!("i32 {} char {}", n, c)
        }
    }

    impl Visitor<(u8, bool)> for Describe {
        type Output = String;
        fn visit(&mut self, (n, b): (u8, bool)) -> String {
            format!("u8 {} bool {}", n, b)
        }
    }

    impl Visitor<(u8, char)> for Describe {
        type Output = String;
        fn visit(&mut self, (n, c): (u8, char)) -> String {
            format!("u8 {} char {}", n, c)
        }
    }

    struct Mixed;

    impl Visitor<(i32, bool)> for Mixed {
        type Output = String;
        fn visit(&mut self, (n, _): (i32, bool)) -> String {
            n.to_string()
        }
    }

    impl Visitor<(i32, char)> for Mixed {
        type Output = usize;
        fn visit(&mut self, (n, _): (i32, char)) -> usize {
            n as usize
        }
    }

    impl Visitor<(u8, bool)> for Mixed {
        type Output = Sum<T![usize, f64]>;
        fn visit(&mut self, (n, b): (u8, bool)) -> Sum<T![usize, f64]> {
            if b {
                Sum::new(n as usize)
            } else {
                Sum::new(n as f64)
            }
        }
    }

    impl Visitor<(u8, char)> for Mixed {
        type Output = f64;
        fn visit(&mut self, (n, _): (u8, char)) -> f64 {
            n as f64 / 2.0
        }
    }

    #[test]
    fn plain_operands_are_single_outcomes() {
        let outcomes = value(3).into_outcomes();
        assert_eq!(outcomes.alternatives(), 1);
        assert_eq!(outcomes.into_inner(), pack![3]);
        assert_eq!(fold(1, 2.5).into_inner(), pack![1, 2.5]);
    }

    #[test]
    fn packs_are_spliced_not_nested() {
        let appended: Pack<T![i32, char, bool]> = fold(pack![1, 'a'], true).into_inner();
        assert_eq!(appended, pack![1, 'a', true]);
        let prepended: Pack<T![bool, i32, char]> = fold(true, pack![1, 'a']).into_inner();
        assert_eq!(prepended, pack![true, 1, 'a']);
        let joined: Pack<T![u8, u16, u32]> = fold(pack![1u8], pack![2u16, 3u32]).into_inner();
        assert_eq!(joined.into_tuple(), (1, 2, 3));
        assert_eq!(fold(Pack::unit(), 'u').into_inner(), pack!['u']);
    }

    #[test]
    fn plain_operands_distribute_over_sums() {
        let s: Sum<T![i32, bool]> = Sum::new(true);
        let right: Sum<T![Pack<T![i32, char]>, Pack<T![bool, char]>]> = fold(s, 'x');
        assert_eq!(right.index(), 1);
        assert_eq!(right.get::<Pack<T![bool, char]>, _>(), Some(&pack![true, 'x']));
        let left: Sum<T![Pack<T![char, i32]>, Pack<T![char, bool]>]> = fold('x', s);
        assert_eq!(left.get::<Pack<T![char, bool]>, _>(), Some(&pack!['x', true]));
    }

    #[test]
    fn sums_fold_into_their_cartesian_product() {
        let pairs: Vec<(Sum<Small>, Sum<Flag>, usize)> = vec![
            (Sum::new(1i32), Sum::new(true), 0),
            (Sum::new(1i32), Sum::new('c'), 1),
            (Sum::new(2u8), Sum::new(false), 2),
            (Sum::new(2u8), Sum::new('d'), 3),
        ];
        let described: Vec<String> = pairs
            .into_iter()
            .map(|(small, flag, index)| {
                let both = fold(small, flag);
                assert_eq!(both.alternatives(), 4);
                assert_eq!(both.index(), index);
                call(Describe, both)
            })
            .collect();
        assert_eq!(
            described,
            ["i32 1 bool true", "i32 1 char c", "u8 2 bool false", "u8 2 char d"]
        );
    }

    #[test]
    fn duplicate_alternatives_stay_distinct_combinations() {
        type Ints = T![i32, i32];
        type Bools = T![bool, bool];
        let mut seen = Vec::new();
        for (i, n) in [1, 2].iter().enumerate() {
            for (j, b) in [true, false].iter().enumerate() {
                let ints: Sum<Ints> = if i == 0 {
                    Sum::at::<Here, _>(*n)
                } else {
                    Sum::at::<There<Here>, _>(*n)
                };
                let bools: Sum<Bools> = if j == 0 {
                    Sum::at::<Here, _>(*b)
                } else {
                    Sum::at::<There<Here>, _>(*b)
                };
                let both = fold(ints, bools);
                let index = both.index();
                seen.push((index, call(|(n, b): (i32, bool)| (n, b), both)));
            }
        }
        assert_eq!(
            seen,
            [(0, (1, true)), (1, (1, false)), (2, (2, true)), (3, (2, false))]
        );
    }

    #[test]
    fn regrouping_preserves_the_outcome_shape() {
        type Shape = T![Pack<T![i32, u8, u16, char]>, Pack<T![bool, u8, u16, char]>];
        let s: Sum<T![i32, bool]> = Sum::new(4);
        let p = pack![1u8, 2u16];
        let left: Sum<Shape> = fold(fold(s, p), 'v');
        let right: Sum<Shape> = fold(s, fold(p, 'v'));
        assert_eq!(left, right);
        let reordered = fold(fold('v', s), p);
        assert_eq!(reordered.alternatives(), left.alternatives());
        assert_eq!(reordered.index(), left.index());
    }

    #[test]
    fn many_operands_fold_left_to_right() {
        let s: Sum<Flag> = Sum::new('f');
        let three = fold3(1i32, s, pack![2.0, "x"]);
        let macro_three = crate::fold!(1i32, s, pack![2.0, "x"]);
        assert_eq!(three, macro_three);
        assert_eq!(
            three.get::<Pack<T![i32, char, f64, &str]>, _>(),
            Some(&pack![1, 'f', 2.0, "x"])
        );
        let single = crate::fold!(pack![1, 2]);
        assert_eq!(single.into_inner(), pack![1, 2]);
    }

    #[test]
    fn applying_collapses_branch_results() {
        let cases: Vec<(Sum<Small>, Sum<Flag>)> = vec![
            (Sum::new(7i32), Sum::new(true)),
            (Sum::new(7i32), Sum::new('c')),
            (Sum::new(3u8), Sum::new(true)),
            (Sum::new(3u8), Sum::new(false)),
            (Sum::new(3u8), Sum::new('c')),
        ];
        let results: Vec<Sum<T![String, usize, f64]>> = cases
            .into_iter()
            .map(|(small, flag)| -> Sum<T![String, usize, f64]> { apply(Mixed, fold(small, flag)) })
            .collect();
        assert_eq!(results[0].get::<String, _>(), Some(&"7".to_string()));
        assert_eq!(results[1].get::<usize, _>(), Some(&7));
        assert_eq!(results[2].get::<usize, _>(), Some(&3));
        assert_eq!(results[3].get::<f64, _>(), Some(&3.0));
        assert_eq!(results[4].get::<f64, _>(), Some(&1.5));
    }

    #[test]
    fn positional_functions_take_spread_arguments() {
        assert_eq!(call(Positional(|a: i32, b: i32| a - b), fold(5, 3)), 2);
        let joined: Sum<T![String]> = crate::apply!(
            Positional(|n: i32, c: char, b: bool| format!("{}{}{}", n, c, b));
            1,
            'c',
            true
        );
        assert_eq!(*joined, "1ctrue");
    }

    #[test]
    fn extra_arguments_come_first() {
        struct Label;
        impl<'a> Visitor<(&'a str, i32)> for Label {
            type Output = String;
            fn visit(&mut self, (name, n): (&'a str, i32)) -> String {
                format!("{}={}", name, n)
            }
        }
        impl<'a> Visitor<(&'a str, bool)> for Label {
            type Output = String;
            fn visit(&mut self, (name, b): (&'a str, bool)) -> String {
                format!("{}?{}", name, b)
            }
        }
        let s: Sum<T![i32, bool]> = Sum::new(5);
        assert_eq!(s.invoke_with(pack!["n"], Label), "n=5");
        let s: Sum<T![i32, bool]> = Sum::new(false);
        assert_eq!(s.invoke_with(pack!["b"], Label), "b?false");
    }

    #[test]
    fn wrapped_and_library_values_are_plain() {
        #[derive(Debug, Clone, PartialEq)]
        struct Point(i32, i32);
        let p = fold(value(Point(1, 2)), Some('o')).into_inner();
        assert_eq!(p, Pack::new(list![Point(1, 2), Some('o')]));
        let r = fold(Ok::<u8, ()>(2), vec![1, 2]).into_inner();
        assert_eq!(r.into_tuple(), (Ok(2), vec![1, 2]));
        assert_eq!(*value(4), 4);
        assert_eq!(value("s").into_inner(), "s");
    }

    #[test]
    fn combining_keeps_the_first_failure() {
        let both: Result<_, Sum<T![String, String]>> = combine(Ok::<_, String>(1), Ok::<_, String>('a'));
        assert_eq!(both, Ok(pack![1, 'a']));

        let first = combine(Err::<i32, _>("left".to_string()), Err::<char, _>("right".to_string()));
        let first = first.err().expect("both sides failed");
        assert_eq!(first.index(), 0);
        assert_eq!(first.invoke(|e: String| e), "left");

        let second = combine(Ok::<_, String>(1), Err::<char, _>(404u16));
        let second = second.err().expect("the right side failed");
        assert_eq!(second.index(), 1);
        assert_eq!(second.get::<u16, _>(), Some(&404));
    }
}
