/*!
[![License: MIT](https://img.shields.io/badge/License-MIT-blue.svg)](https://opensource.org/licenses/MIT)

`coprod` is a small algebra of closed-world data types, inspired by (and implemented in) Rust's own
enums and tuples: a coproduct [`Sum`](sum::Sum) which holds exactly one of a fixed list of
alternatives, a product [`Pack`](pack::Pack) which holds all of its elements at once, and a
[`fold`](fold) protocol which applies ordinary functions and visitors across any mix of the two.

Alternative lists are written as type-level cons lists using the [`T!`] macro, so that a value of
type `Sum<T![bool, i32]>` is either a `bool` or an `i32`, and is stored as a nested native enum:
there is no `unsafe` code anywhere in the crate, and dropping, cloning and copying a sum are
available exactly when every alternative supports them.
```rust
use coprod::{cases, Sum, T};

let answer: Sum<T![bool, i32]> = Sum::new(42);
assert!(answer.has_value::<i32, _>());
let next = answer.match_with(cases![|_: bool| 0, |i: i32| i + 1]);
assert_eq!(next, 43);
```

Contributions, ideas and collaboration proposals are welcome: please make an issue or e-mail jad.ghalayini@mail.utoronto.ca.
*/
#![forbid(unsafe_code, missing_docs, missing_debug_implementations)]

pub mod util;

pub mod typelist;
pub mod normal;
pub mod storage;
pub mod visit;
pub mod sum;
pub mod pack;
pub mod fold;
pub mod error;

pub use error::Error;
pub use fold::{apply, call, combine, fold, value, Spread, Value};
pub use normal::{Layout, TypeKey};
pub use pack::{Pack, Positional};
pub use sum::Sum;
pub use typelist::{Here, There};
pub use visit::{Tagged, Visitor};
