//! `verimock` decides whether a recorded call on a mocked object matches an
//! expected call pattern, and lets a test capture the arguments of those calls
//! for later assertions.
//!
//! ```
//! use verimock::{args, matchers, ArgumentCaptor, Invocation, InvocationMatcher, Method, MockId};
//!
//! struct Greeter;
//!
//! let mock = MockId::named("greeter");
//! let greet = Method::new::<Greeter>("greet").param::<String>();
//!
//! let captor = ArgumentCaptor::<String>::new();
//! let pattern = InvocationMatcher::new(
//!     Invocation::new(mock.clone(), greet.clone(), args![String::new()]),
//!     matchers![captor.capture()],
//! );
//!
//! let john = Invocation::new(mock.clone(), greet.clone(), args!["John".to_owned()]);
//! let jane = Invocation::new(mock, greet, args!["Jane".to_owned()]);
//!
//! assert!(pattern.matches(&john));
//! assert!(pattern.matches(&jane));
//!
//! assert_eq!(captor.value().unwrap(), "Jane");
//! assert_eq!(captor.all_values(), vec!["John".to_owned(), "Jane".to_owned()]);
//! ```

pub mod argument;
pub mod captor;
pub mod error;
pub mod invocation;
pub mod matcher;
pub mod misc;

pub use argument::Argument;
pub use captor::ArgumentCaptor;
pub use error::{Error, Result};
pub use invocation::{Invocation, InvocationMatcher, Method, MockId};
pub use matcher::{arg, ArgumentMatcher, CapturingMatcher, Matcher};

/// Build the ordered argument list of an [`Invocation`].
///
/// Every expression is wrapped into an [`Arc<dyn Argument>`](Argument).
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<::std::sync::Arc<dyn $crate::Argument>>::new()
    };
    ($( $arg:expr ),+ $(,)?) => {
        ::std::vec![
            $(
                ::std::sync::Arc::new($arg) as ::std::sync::Arc<dyn $crate::Argument>
            ),+
        ]
    };
}

/// Build the ordered matcher list of an [`InvocationMatcher`].
///
/// Every expression must implement [`ArgumentMatcher`] and is boxed in the
/// order it is written, so the n-th expression is checked against the n-th
/// argument of the call.
#[macro_export]
macro_rules! matchers {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::ArgumentMatcher>>::new()
    };
    ($( $matcher:expr ),+ $(,)?) => {
        ::std::vec![
            $(
                ::std::boxed::Box::new($matcher) as ::std::boxed::Box<dyn $crate::ArgumentMatcher>
            ),+
        ]
    };
}
