/*!
Visitors, the handlers applied to the live alternative of a sum or to the elements of a pack.

A visitor for values of type `T` implements [`Visitor<T>`]. Every `FnMut(T) -> R` closure is a
visitor, and a struct implementing `Visitor` for several types acts as an overload set:
```rust
use coprod::{Sum, Visitor, T};

struct Describe;

impl Visitor<bool> for Describe {
    type Output = String;
    fn visit(&mut self, value: bool) -> String {
        format!("flag {}", value)
    }
}

impl Visitor<i32> for Describe {
    type Output = String;
    fn visit(&mut self, value: i32) -> String {
        format!("number {}", value)
    }
}

let s: Sum<T![bool, i32]> = Sum::new(5);
assert_eq!(s.invoke(Describe), "number 5");
```
*/
use crate::typelist::Position;
use std::any::type_name;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// A handler for values of type `T`
pub trait Visitor<T> {
    /// The result of visiting a `T`
    type Output;
    /// Visit a value
    fn visit(&mut self, value: T) -> Self::Output;
}

impl<F, T, R> Visitor<T> for F
where
    F: FnMut(T) -> R,
{
    type Output = R;
    #[inline]
    fn visit(&mut self, value: T) -> R {
        self(value)
    }
}

/// Build a positional list of handlers, one per alternative, for [`Sum::match_with`](crate::Sum::match_with)
#[macro_export]
macro_rules! cases {
    [$($case:expr),* $(,)?] => [$crate::list![$($case),*]];
}

/// A value tagged with the type-level position of the alternative it was dispatched from
pub struct Tagged<T, I> {
    value: T,
    position: PhantomData<I>,
}

impl<T, I> Tagged<T, I> {
    /// Tag a value
    #[inline]
    pub fn new(value: T) -> Tagged<T, I> {
        Tagged {
            value,
            position: PhantomData,
        }
    }
    /// Remove the tag
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
    /// Get the name of the tagged alternative's type
    #[inline]
    pub fn type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

impl<T, I: Position> Tagged<T, I> {
    /// Get the position of the alternative this value was dispatched from
    #[inline]
    pub fn index(&self) -> usize {
        I::VALUE
    }
}

impl<T, I> Deref for Tagged<T, I> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T, I> DerefMut for Tagged<T, I> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: Debug, I: Position> Debug for Tagged<T, I> {
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_struct("Tagged")
            .field("index", &I::VALUE)
            .field("value", &self.value)
            .finish()
    }
}
