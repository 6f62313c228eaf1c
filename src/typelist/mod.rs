/*!
Type-level lists and positions.

A list of types `A, B, C` is encoded as the nested tuple `(A, (B, (C, ())))`, which is what the
[`T!`](crate::T) macro expands to. Values of such a list (as held by a [`Pack`](crate::pack::Pack))
are the same nested tuples, built with [`list!`](crate::list).
*/
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Write a type-level list: `T![A, B, C]` is `(A, (B, (C, ())))`
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $tail:ty)* $(,)?] => [($head, $crate::T![$($tail),*])];
}

/// Build a value of a type-level list: `list![a, b]` is `(a, (b, ()))`
#[macro_export]
macro_rules! list {
    [] => [()];
    [$head:expr $(, $tail:expr)* $(,)?] => [($head, $crate::list![$($tail),*])];
}

/// The position of the head of a type-level list
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Here;

/// The position directly after `I` in a type-level list
pub struct There<I>(PhantomData<I>);

impl<I> Debug for There<I> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        write!(fmt, "There")
    }
}

impl<I> Clone for There<I> {
    #[inline]
    fn clone(&self) -> There<I> {
        *self
    }
}

impl<I> Copy for There<I> {}

impl<I> Default for There<I> {
    #[inline]
    fn default() -> There<I> {
        There(PhantomData)
    }
}

impl<I> PartialEq for There<I> {
    #[inline]
    fn eq(&self, _other: &There<I>) -> bool {
        true
    }
}

impl<I> Eq for There<I> {}

impl<I> Hash for There<I> {
    #[inline]
    fn hash<H: Hasher>(&self, _hasher: &mut H) {}
}

/// A type-level position, convertible to the index it denotes
pub trait Position {
    /// The index this position denotes
    const VALUE: usize;
}

impl Position for Here {
    const VALUE: usize = 0;
}

impl<I: Position> Position for There<I> {
    const VALUE: usize = I::VALUE + 1;
}

/// The length of a type-level list
pub trait Count {
    /// The number of types in this list
    const LEN: usize;
}

impl Count for () {
    const LEN: usize = 0;
}

impl<H, T: Count> Count for (H, T) {
    const LEN: usize = T::LEN + 1;
}

/// A type-level list whose values can be borrowed element-wise
pub trait List: Count + Sized {
    /// This list with every element borrowed immutably
    type Refs<'a>: List
    where
        Self: 'a;
    /// This list with every element borrowed mutably
    type Muts<'a>: List
    where
        Self: 'a;
    /// Borrow each element of a list value
    fn list_ref(&self) -> Self::Refs<'_>;
    /// Mutably borrow each element of a list value
    fn list_mut(&mut self) -> Self::Muts<'_>;
}

impl List for () {
    type Refs<'a> = ();
    type Muts<'a> = ();
    #[inline]
    fn list_ref(&self) -> Self::Refs<'_> {}
    #[inline]
    fn list_mut(&mut self) -> Self::Muts<'_> {}
}

impl<H, T: List> List for (H, T) {
    type Refs<'a> = (&'a H, T::Refs<'a>) where Self: 'a;
    type Muts<'a> = (&'a mut H, T::Muts<'a>) where Self: 'a;
    #[inline]
    fn list_ref(&self) -> Self::Refs<'_> {
        (&self.0, self.1.list_ref())
    }
    #[inline]
    fn list_mut(&mut self) -> Self::Muts<'_> {
        (&mut self.0, self.1.list_mut())
    }
}

/// Concatenate two type-level lists
pub trait Concat<R> {
    /// The concatenation of `Self` and `R`
    type Output;
    /// Concatenate two list values
    fn concat(self, rhs: R) -> Self::Output;
}

/// The concatenation of the lists `L` and `R`
pub type Concatenated<L, R> = <L as Concat<R>>::Output;

impl<R> Concat<R> for () {
    type Output = R;
    #[inline]
    fn concat(self, rhs: R) -> R {
        rhs
    }
}

impl<H, T: Concat<R>, R> Concat<R> for (H, T) {
    type Output = (H, T::Output);
    #[inline]
    fn concat(self, rhs: R) -> Self::Output {
        (self.0, self.1.concat(rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_count_from_the_head() {
        assert_eq!(Here::VALUE, 0);
        assert_eq!(<There<Here>>::VALUE, 1);
        assert_eq!(<There<There<There<Here>>>>::VALUE, 3);
    }

    #[test]
    fn lists_have_lengths() {
        assert_eq!(<T![]>::LEN, 0);
        assert_eq!(<T![u8]>::LEN, 1);
        assert_eq!(<T![u8, bool, String]>::LEN, 3);
    }

    #[test]
    fn concatenation_preserves_order() {
        let joined: T![u8, bool, char] = list![1u8].concat(list![true, 'c']);
        assert_eq!(joined, (1, (true, ('c', ()))));
        let left_unit: T![bool] = ().concat(list![false]);
        assert_eq!(left_unit, (false, ()));
    }

    #[test]
    fn lists_borrow_elementwise() {
        let mut l = list![1, String::from("x")];
        {
            let (n, (s, ())) = l.list_mut();
            *n += 1;
            s.push('y');
        }
        let (n, (s, ())) = l.list_ref();
        assert_eq!(*n, 2);
        assert_eq!(s, "xy");
    }
}
