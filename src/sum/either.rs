/*!
Conversions between two-alternative sums and `Either`
*/
use super::Sum;
use crate::storage::Slot;
use either::Either;

impl<A, B> From<Either<A, B>> for Sum<(A, (B, ()))> {
    #[inline]
    fn from(either: Either<A, B>) -> Sum<(A, (B, ()))> {
        match either {
            Either::Left(left) => Sum::from_repr(Slot::Here(left)),
            Either::Right(right) => Sum::from_repr(Slot::There(Slot::Here(right))),
        }
    }
}

impl<A, B> Sum<(A, (B, ()))> {
    /// Convert a two-alternative sum into an `Either`, with the first alternative on the left
    #[inline]
    pub fn into_either(self) -> Either<A, B> {
        match self.into_repr() {
            Slot::Here(left) => Either::Left(left),
            Slot::There(Slot::Here(right)) => Either::Right(right),
            Slot::There(Slot::There(never)) => match never {},
        }
    }
}
