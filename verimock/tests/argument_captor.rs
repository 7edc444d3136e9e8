use verimock::{
    arg, args,
    matcher::ge,
    matchers, ArgumentCaptor, Error, Invocation, InvocationMatcher, Method, MockId,
};

trait Greeter {}

trait Welcomer {}

fn greet() -> Method {
    Method::new::<dyn Greeter>("greet").param::<String>()
}

fn call(mock: &MockId, name: &str) -> Invocation {
    Invocation::new(mock.clone(), greet(), args![name.to_owned()])
}

#[test]
fn capture_single_call() {
    let mock = MockId::next();
    let captor = ArgumentCaptor::<String>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), greet(), args![]),
        matchers![captor.capture()],
    );

    assert!(pattern.matches(&call(&mock, "John")));

    assert_eq!(Ok("John".to_owned()), captor.value());
    assert_eq!(vec!["John".to_owned()], captor.all_values());
}

#[test]
fn capture_multiple_calls_in_order() {
    let mock = MockId::next();
    let captor = ArgumentCaptor::<String>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), greet(), args![]),
        matchers![captor.capture()],
    );

    assert!(pattern.matches(&call(&mock, "John")));
    assert!(pattern.matches(&call(&mock, "Jane")));

    assert_eq!(Ok("Jane".to_owned()), captor.value());
    assert_eq!(
        vec!["John".to_owned(), "Jane".to_owned()],
        captor.all_values()
    );
}

#[test]
fn fresh_captor_is_empty() {
    let captor = ArgumentCaptor::<String>::default();

    assert!(captor.all_values().is_empty());
    assert_eq!(Err(Error::NothingCaptured), captor.value());
}

#[test]
fn nothing_captured_for_other_mock_or_method() {
    let mock = MockId::next();
    let captor = ArgumentCaptor::<String>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), greet(), args![]),
        matchers![captor.capture()],
    );

    let welcome = Method::new::<dyn Greeter>("welcome").param::<String>();

    assert!(!pattern.matches(&call(&MockId::next(), "John")));
    assert!(!pattern.matches(&Invocation::new(mock, welcome, args!["John".to_owned()])));

    assert!(captor.all_values().is_empty());
}

#[test]
fn nothing_captured_on_argument_count_mismatch() {
    let mock = MockId::next();
    let method = Method::new::<dyn Greeter>("greet_twice")
        .param::<String>()
        .param::<String>();
    let captor = ArgumentCaptor::<String>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), method.clone(), args![]),
        matchers![captor.capture(), captor.capture()],
    );

    assert!(!pattern.matches(&Invocation::new(mock, method, args!["John".to_owned()])));

    assert!(captor.all_values().is_empty());
}

#[test]
fn capture_next_to_other_matchers() {
    let mock = MockId::next();
    let method = Method::new::<dyn Greeter>("greet_adult")
        .param::<String>()
        .param::<usize>();
    let captor = ArgumentCaptor::<String>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), method.clone(), args![]),
        matchers![captor.capture(), arg::<usize, _>(ge(18usize))],
    );

    let john = Invocation::new(
        mock.clone(),
        method.clone(),
        args!["John".to_owned(), 42usize],
    );
    let jim = Invocation::new(
        mock.clone(),
        method.clone(),
        args!["Jim".to_owned(), 12usize],
    );
    let jane = Invocation::new(mock, method, args!["Jane".to_owned(), 18usize]);

    assert!(pattern.matches(&john));
    assert!(!pattern.matches(&jim));
    assert!(pattern.matches(&jane));

    // The captor is checked before the age, so rejected calls are recorded as well.
    assert_eq!(
        vec!["John".to_owned(), "Jim".to_owned(), "Jane".to_owned()],
        captor.all_values()
    );
}

#[test]
fn diagnostic_checks_also_capture() {
    let mock = MockId::next();
    let captor = ArgumentCaptor::<String>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), greet(), args![]),
        matchers![captor.capture()],
    );

    let welcome = Method::new::<dyn Welcomer>("greet").param::<String>();

    assert!(pattern.matches_but_mocks_are_different(&call(&MockId::next(), "John")));
    let jane = Invocation::new(mock, welcome, args!["Jane".to_owned()]);

    assert!(pattern.matches_but_not_method_declared_class(&jane));

    assert_eq!(
        vec!["John".to_owned(), "Jane".to_owned()],
        captor.all_values()
    );
}

#[test]
fn captor_is_reused_by_multiple_patterns() {
    let mock = MockId::next();
    let captor = ArgumentCaptor::<String>::new();
    let first = InvocationMatcher::new(
        Invocation::new(mock.clone(), greet(), args![]),
        matchers![captor.capture()],
    );
    let second = InvocationMatcher::new(
        Invocation::new(mock.clone(), greet(), args![]),
        matchers![captor.capture()],
    );

    assert!(first.matches(&call(&mock, "John")));
    assert!(second.matches(&call(&mock, "Jane")));

    assert_eq!(2, captor.captured_count());
    assert_eq!(Ok("Jane".to_owned()), captor.value());
}

#[test]
fn typed_capture_inside_matcher() {
    let mock = MockId::next();
    let captor = ArgumentCaptor::<usize>::new();
    let method = Method::new::<dyn Greeter>("count").param::<usize>();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), method.clone(), args![]),
        matchers![arg::<usize, _>(captor.capture())],
    );

    assert!(pattern.matches(&Invocation::new(mock.clone(), method.clone(), args![5usize])));
    assert!(!pattern.matches(&Invocation::new(mock, method, args![5u32])));

    assert_eq!(vec![5], captor.all_values());
    assert_eq!(Ok(5), captor.value());
}

#[derive(Debug, Clone)]
struct Request {
    name: String,
    retries: usize,
}

#[test]
fn capture_value_without_equality() {
    let mock = MockId::next();
    let method = Method::new::<dyn Greeter>("send").param::<Request>();
    let captor = ArgumentCaptor::<Request>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), method.clone(), args![]),
        matchers![captor.capture()],
    );

    let request = Request {
        name: "John".to_owned(),
        retries: 3,
    };

    assert!(pattern.matches(&Invocation::new(mock, method, args![request])));

    let captured = captor.value().unwrap();
    assert_eq!("John", captured.name);
    assert_eq!(3, captured.retries);
}

#[test]
fn foreign_argument_type_matches_without_capture() {
    let mock = MockId::next();
    let method = Method::new::<dyn Greeter>("count").param::<usize>();
    let captor = ArgumentCaptor::<usize>::new();
    let pattern = InvocationMatcher::new(
        Invocation::new(mock.clone(), method.clone(), args![]),
        matchers![captor.capture()],
    );

    assert!(pattern.matches(&Invocation::new(mock, method, args![5u32])));

    assert!(captor.all_values().is_empty());
    assert_eq!(Err(Error::NothingCaptured), captor.value());
}
