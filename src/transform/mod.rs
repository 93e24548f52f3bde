//! Collection transforms.
//!
//! Explicit versions of map/filter/reduce/compose whose callback shape is part
//! of the API: callbacks receive the element, its index and the whole slice.

mod generator;

pub use generator::StatsGenerator;

use thiserror::Error;

/// Errors from the validating mapper.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error("The collection must be a sequence")]
    NotASequence,

    #[error("The callback must be a function")]
    NotCallable,
}

/// Apply `transform` to every element, returning a new vector of the same
/// length and order.
pub fn map_each<T, U, F>(items: &[T], mut transform: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    let mut result = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        result.push(transform(item, index, items));
    }
    result
}

/// Select elements matching `predicate`, keeping their relative order.
///
/// Written as tail recursion over `(index, accumulator)`; each "call" is a
/// loop iteration so long inputs cannot exhaust the stack.
pub fn filter_recursive<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T, usize, &[T]) -> bool,
{
    let mut index = 0;
    let mut accumulated = Vec::new();
    loop {
        if index >= items.len() {
            return accumulated;
        }
        if predicate(&items[index], index, items) {
            accumulated.push(items[index].clone());
        }
        index += 1;
    }
}

/// Select elements matching `predicate` with a plain counting loop.
pub fn filter_iterative<T, P>(items: &[T], predicate: P) -> Vec<T>
where
    T: Clone,
    P: Fn(&T, usize, &[T]) -> bool,
{
    let mut result = Vec::new();
    let mut index = 0;
    while index < items.len() {
        if predicate(&items[index], index, items) {
            result.push(items[index].clone());
        }
        index += 1;
    }
    result
}

/// Fold `items` into one value, visiting each element once in order.
pub fn reduce<T, A, F>(items: &[T], mut reducer: F, initial: A) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut accumulator = initial;
    for (index, item) in items.iter().enumerate() {
        accumulator = reducer(accumulator, item, index, items);
    }
    accumulator
}

/// Compose same-typed functions right-to-left: the last one runs first.
///
/// An empty list yields the identity function.
pub fn compose<T>(functions: Vec<Box<dyn Fn(T) -> T>>) -> impl Fn(T) -> T {
    move |initial| {
        functions
            .iter()
            .rev()
            .fold(initial, |value, function| function(value))
    }
}

/// `compose2(f, g)(x) == f(g(x))`.
pub fn compose2<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(B) -> C,
    G: Fn(A) -> B,
{
    move |x| f(g(x))
}

/// Map with argument validation and an optional context value.
///
/// A missing collection or callback fails fast. When `context` is given it
/// is handed to every callback invocation.
pub fn process_with_callback<T, U, C, F>(
    collection: Option<&[T]>,
    callback: Option<F>,
    context: Option<&C>,
) -> Result<Vec<U>, TransformError>
where
    F: Fn(&T, usize, &[T], Option<&C>) -> U,
{
    let collection = collection.ok_or(TransformError::NotASequence)?;
    let callback = callback.ok_or(TransformError::NotCallable)?;

    Ok(map_each(collection, |item, index, all| {
        callback(item, index, all, context)
    }))
}
