use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Matcher;

macro_rules! impl_matcher {
    ($type:ident, $trait:ident::$method:ident, $fmt:tt) => {
        #[doc = concat!("Create a new [`", stringify!($type), "`] matcher.")]
        pub fn $method<T>(value: T) -> $type<T> {
            $type(value)
        }

        #[doc = concat!(
            "Implements a [`Matcher`] that accepts an argument `x` if `x.",
            stringify!($method), "(&expected)` is `true`."
        )]
        #[must_use]
        #[derive(Debug, Clone)]
        pub struct $type<T>(pub T);

        impl<T, X> Matcher<X> for $type<T>
        where
            T: Display,
            X: $trait<T>,
        {
            fn matches(&self, value: &X) -> bool {
                value.$method(&self.0)
            }
        }

        impl<T> Display for $type<T>
        where
            T: Display,
        {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                write!(f, $fmt, self.0)
            }
        }
    };
}

impl_matcher!(Eq, PartialEq::eq, "Eq({})");
impl_matcher!(Ne, PartialEq::ne, "Ne({})");

impl_matcher!(Lt, PartialOrd::lt, "Lt({})");
impl_matcher!(Le, PartialOrd::le, "Le({})");
impl_matcher!(Gt, PartialOrd::gt, "Gt({})");
impl_matcher!(Ge, PartialOrd::ge, "Ge({})");
