/*!
Packs: fixed-size heterogeneous products, all of whose elements are live at once.

A `Pack<T![A, B, C]>` holds an `A`, a `B` and a `C`. Packs are what the [`fold`](crate::fold)
protocol builds when it combines operands, and what it spreads back out into positional arguments
when it finally calls a function:
```rust
use coprod::{pack, Pack, T};

let p: Pack<T![i32, bool]> = pack![3, true];
let q = p.append('c');
assert_eq!(q.len(), 3);
let described = q.invoke(|n: i32, b: bool, c: char| format!("{} {} {}", n, b, c));
assert_eq!(described, "3 true c");
```
*/
use crate::typelist::{Concat, Concatenated, Count, List};
use crate::visit::Visitor;
use ref_cast::RefCast;
use std::fmt::{self, Debug, DebugTuple, Formatter};

/// Build a [`Pack`] from a list of element expressions
#[macro_export]
macro_rules! pack {
    [$($element:expr),* $(,)?] => [$crate::pack::Pack::new($crate::list![$($element),*])];
}

/// A fixed-size heterogeneous product over the type-level list `L`
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, RefCast)]
#[repr(transparent)]
pub struct Pack<L> {
    list: L,
}

impl Pack<()> {
    /// The empty pack
    #[inline]
    pub fn unit() -> Pack<()> {
        Pack { list: () }
    }
}

impl<L> Pack<L> {
    /// Create a pack from a list value
    #[inline]
    pub fn new(list: L) -> Pack<L> {
        Pack { list }
    }
    /// View a list value as a pack
    #[inline]
    pub fn from_ref(list: &L) -> &Pack<L> {
        Pack::ref_cast(list)
    }
    /// Get the underlying list value
    #[inline]
    pub fn into_inner(self) -> L {
        self.list
    }
    /// Borrow the underlying list value
    #[inline]
    pub fn as_list(&self) -> &L {
        &self.list
    }
    /// Mutably borrow the underlying list value
    #[inline]
    pub fn as_list_mut(&mut self) -> &mut L {
        &mut self.list
    }
    /// The number of elements in this pack
    #[inline]
    pub fn len(&self) -> usize
    where
        L: Count,
    {
        L::LEN
    }
    /// Whether this pack has no elements
    #[inline]
    pub fn is_empty(&self) -> bool
    where
        L: Count,
    {
        L::LEN == 0
    }
    /// Add an element to the end of this pack
    #[inline]
    pub fn append<X>(self, element: X) -> Pack<Concatenated<L, (X, ())>>
    where
        L: Concat<(X, ())>,
    {
        Pack::new(self.list.concat((element, ())))
    }
    /// Add an element to the front of this pack
    #[inline]
    pub fn prepend<X>(self, element: X) -> Pack<(X, L)> {
        Pack::new((element, self.list))
    }
    /// Splice another pack onto the end of this one
    #[inline]
    pub fn concat<M>(self, other: Pack<M>) -> Pack<Concatenated<L, M>>
    where
        L: Concat<M>,
    {
        Pack::new(self.list.concat(other.list))
    }
    /// Borrow every element of this pack
    #[inline]
    pub fn as_ref(&self) -> Pack<L::Refs<'_>>
    where
        L: List,
    {
        Pack::new(self.list.list_ref())
    }
    /// Mutably borrow every element of this pack
    #[inline]
    pub fn as_mut(&mut self) -> Pack<L::Muts<'_>>
    where
        L: List,
    {
        Pack::new(self.list.list_mut())
    }
    /// Call `f` with the elements of this pack as positional arguments
    #[inline]
    pub fn invoke<F>(self, f: F) -> L::Output
    where
        L: Apply<F>,
    {
        self.list.apply(f)
    }
    /// Call `f` with the elements of `extra` followed by the elements of this pack
    #[inline]
    pub fn invoke_with<E, F>(self, extra: Pack<E>, f: F) -> <Concatenated<E, L> as Apply<F>>::Output
    where
        E: Concat<L>,
        Concatenated<E, L>: Apply<F>,
    {
        extra.concat(self).invoke(f)
    }
    /// Call `f` with the elements of this pack as positional arguments, converting the result
    #[inline]
    pub fn invoke_as<R, F>(self, f: F) -> R
    where
        L: Apply<F>,
        L::Output: Into<R>,
    {
        self.invoke(f).into()
    }
    /// Visit the elements of this pack as a single native tuple
    #[inline]
    pub fn visit<V>(self, mut visitor: V) -> V::Output
    where
        L: IntoTuple,
        V: Visitor<L::Tuple>,
    {
        visitor.visit(self.list.into_tuple())
    }
    /// Convert this pack into a native tuple
    #[inline]
    pub fn into_tuple(self) -> L::Tuple
    where
        L: IntoTuple,
    {
        self.list.into_tuple()
    }
}

impl<H, T> Pack<(H, T)> {
    /// The first element of this pack
    #[inline]
    pub fn head(&self) -> &H {
        &self.list.0
    }
    /// Mutably borrow the first element of this pack
    #[inline]
    pub fn head_mut(&mut self) -> &mut H {
        &mut self.list.0
    }
    /// Every element of this pack but the first
    #[inline]
    pub fn tail(&self) -> &Pack<T> {
        Pack::from_ref(&self.list.1)
    }
    /// Split this pack into its first element and the rest
    #[inline]
    pub fn split(self) -> (H, Pack<T>) {
        (self.list.0, Pack::new(self.list.1))
    }
}

/// A list value which can be passed to `F` as positional arguments
pub trait Apply<F> {
    /// The result of the call
    type Output;
    /// Call `f` with the elements of this list
    fn apply(self, f: F) -> Self::Output;
}

/**
A visitor of native tuples which calls a function with the tuple's elements as positional
arguments.

This lets an ordinary multi-argument closure stand in wherever a visitor of tuples is expected, such
as in [`apply`](crate::fold::apply).
*/
#[derive(Debug, Copy, Clone, Default)]
pub struct Positional<F>(pub F);

/// A list value convertible to a native tuple
pub trait IntoTuple {
    /// The corresponding native tuple
    type Tuple;
    /// Convert to a native tuple
    fn into_tuple(self) -> Self::Tuple;
}

/// A list value whose elements can all be debug-printed
pub trait Entries {
    /// Add each element as a field of `tuple`
    fn entries(&self, tuple: &mut DebugTuple<'_, '_>);
}

impl Entries for () {
    #[inline]
    fn entries(&self, _tuple: &mut DebugTuple<'_, '_>) {}
}

impl<H: Debug, T: Entries> Entries for (H, T) {
    #[inline]
    fn entries(&self, tuple: &mut DebugTuple<'_, '_>) {
        tuple.field(&self.0);
        self.1.entries(tuple)
    }
}

impl<L: Entries> Debug for Pack<L> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        let mut tuple = fmt.debug_tuple("Pack");
        self.list.entries(&mut tuple);
        tuple.finish()
    }
}

macro_rules! cons_pat {
    () => { () };
    ($head:ident $(, $tail:ident)*) => { ($head, cons_pat!($($tail),*)) };
}

macro_rules! tuple_conversions {
    ($(($($t:ident $v:ident),*))*) => {$(
        impl<$($t),*> IntoTuple for $crate::T![$($t),*] {
            type Tuple = ($($t,)*);
            #[inline]
            fn into_tuple(self) -> Self::Tuple {
                let cons_pat!($($v),*) = self;
                ($($v,)*)
            }
        }

        impl<$($t),*> From<($($t,)*)> for Pack<$crate::T![$($t),*]> {
            #[inline]
            fn from(($($v,)*): ($($t,)*)) -> Self {
                Pack::new($crate::list![$($v),*])
            }
        }

        impl<Func, Ret, $($t),*> Apply<Func> for $crate::T![$($t),*]
        where
            Func: FnOnce($($t),*) -> Ret,
        {
            type Output = Ret;
            #[inline]
            fn apply(self, f: Func) -> Ret {
                let cons_pat!($($v),*) = self;
                f($($v),*)
            }
        }

        impl<Func, Ret, $($t),*> Visitor<($($t,)*)> for Positional<Func>
        where
            Func: FnMut($($t),*) -> Ret,
        {
            type Output = Ret;
            #[inline]
            fn visit(&mut self, ($($v,)*): ($($t,)*)) -> Ret {
                (self.0)($($v),*)
            }
        }
    )*};
}

tuple_conversions! {
    ()
    (A a)
    (A a, B b)
    (A a, B b, C c)
    (A a, B b, C c, D d)
    (A a, B b, C c, D d, E e)
    (A a, B b, C c, D d, E e, F f)
    (A a, B b, C c, D d, E e, F f, G g)
    (A a, B b, C c, D d, E e, F f, G g, H h)
}
