/*!
Miscellaneous utilities and macros used throughout `coprod`
*/

/// Quickly implement `Display` using a given function
#[macro_export]
macro_rules! quick_display {
    ($t:ty, $s:ident, $fmt:ident => $e:expr) => {
        impl std::fmt::Display for $t {
            fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
                let $s = self;
                let $fmt = fmt;
                $e
            }
        }
    };
}

/// Implement `Debug` for a type which implements `Display`
#[macro_export]
macro_rules! debug_from_display {
    ($t:ty) => {
        impl std::fmt::Debug for $t {
            fn fmt(&self, fmt: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
                std::fmt::Display::fmt(self, fmt)
            }
        }
    };
}

/// Implement a trait for a list of concrete types with one shared body
#[macro_export]
macro_rules! impl_for_each {
    (impl $tr:ident for { $($t:ty),* $(,)? } $body:tt) => {
        $(impl $tr for $t $body)*
    };
}

#[cfg(test)]
mod tests {
    use std::fmt::{self, Display};

    struct Shouty(&'static str);

    quick_display!(Shouty, s, fmt => write!(fmt, "{}!", s.0.to_uppercase()));
    debug_from_display!(Shouty);

    #[test]
    fn display_macros_forward() {
        let s = Shouty("sum");
        assert_eq!(format!("{}", s), "SUM!");
        assert_eq!(format!("{:?}", s), "SUM!");
        let _: &dyn Display = &s;
        let _: &dyn fmt::Debug = &s;
    }
}
