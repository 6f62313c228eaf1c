/*!
Copying, comparing, hashing and formatting sums, each forwarded to the live alternative
*/
use super::Sum;
use crate::storage::{Alternatives, Probe, ReprEq};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};

impl<S: Alternatives> Clone for Sum<S>
where
    S::Repr: Clone,
{
    #[inline]
    fn clone(&self) -> Sum<S> {
        Sum::from_repr(self.repr().clone())
    }
}

impl<S: Alternatives> Copy for Sum<S> where S::Repr: Copy {}

/**
Two sums are equal if they hold the same alternative type with equal values.

The sums may range over different lists: comparing against a sum whose live alternative is not in
this sum's list is simply `false`. Both sides need every alternative to be comparable, so that
`a == b` compiles exactly when `b == a` does:
```compile_fail
use coprod::{Sum, T};

struct Opaque;

let plain: Sum<T![i32]> = Sum::new(1);
let mixed: Sum<T![i32, Opaque]> = Sum::new(1);
assert!(plain == mixed);
```
```compile_fail
use coprod::{Sum, T};

struct Opaque;

let plain: Sum<T![i32]> = Sum::new(1);
let mixed: Sum<T![i32, Opaque]> = Sum::new(1);
assert!(mixed == plain);
```
*/
impl<S, S2> PartialEq<Sum<S2>> for Sum<S>
where
    S: Alternatives,
    S2: Alternatives,
    S::Repr: ReprEq + Probe,
    S2::Repr: ReprEq + Probe,
{
    #[inline]
    fn eq(&self, other: &Sum<S2>) -> bool {
        self.repr().eq_any(other.repr().probe())
    }
}

impl<S: Alternatives> Eq for Sum<S> where S::Repr: ReprEq + Probe + Eq {}

impl<S: Alternatives> Hash for Sum<S>
where
    S::Repr: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.repr().hash(hasher)
    }
}

impl<S: Alternatives> Debug for Sum<S>
where
    S::Repr: Debug,
{
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        fmt.debug_tuple("Sum").field(self.repr()).finish()
    }
}

impl<S: Alternatives> Display for Sum<S>
where
    S::Repr: Display,
{
    fn fmt(&self, fmt: &mut Formatter) -> Result<(), fmt::Error> {
        Display::fmt(self.repr(), fmt)
    }
}
