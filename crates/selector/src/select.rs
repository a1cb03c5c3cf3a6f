//! The six selection operations.
//!
//! Every operation takes a sequence (anything that is [`IntoIterator`]) and a
//! predicate, and consumes the sequence in a single forward pass. Nothing is
//! retained between calls.
//!
//! | Operation | Zero matches | Two or more matches |
//! |-----------|--------------|---------------------|
//! | [`first`] | `NotFound` | first match |
//! | [`first_or_default`] | fallback | first match |
//! | [`last`] | `NotFound` | last match |
//! | [`last_or_default`] | fallback | last match |
//! | [`single`] | `NotFound` | `MultipleMatches` |
//! | [`single_or_default`] | fallback | `MultipleMatches` |
//!
//! The or-default operations return `Option<T>`: the match, else the fallback
//! if one was supplied, else `None`.

use crate::error::{Result, SelectError};

/// Returns the first element matching `predicate`.
///
/// Stops scanning at the first match.
///
/// # Example
///
/// ```
/// use selector::{first, SelectError};
///
/// let colors = ["Blue", "Red", "Red"];
/// assert_eq!(first(&colors, |c| **c == "Red"), Ok(&"Red"));
/// assert_eq!(first(&colors, |c| **c == "Green"), Err(SelectError::NotFound));
/// ```
pub fn first<I, P>(items: I, mut predicate: P) -> Result<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items
        .into_iter()
        .find(|item| predicate(item))
        .ok_or(SelectError::NotFound)
}

/// Returns the first element matching `predicate`, or `fallback` when none does.
///
/// ```
/// use selector::first_or_default;
///
/// let ids = [1, 2, 3];
/// assert_eq!(first_or_default(ids, |id| *id > 1, None), Some(2));
/// assert_eq!(first_or_default(ids, |id| *id > 5, Some(-1)), Some(-1));
/// assert_eq!(first_or_default(ids, |id| *id > 5, None), None);
/// ```
pub fn first_or_default<I, P>(
    items: I,
    mut predicate: P,
    fallback: Option<I::Item>,
) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().find(|item| predicate(item)).or(fallback)
}

/// Returns the last element matching `predicate`.
///
/// The whole sequence is scanned; each later match replaces the earlier one.
pub fn last<I, P>(items: I, predicate: P) -> Result<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    last_match(items, predicate).ok_or(SelectError::NotFound)
}

/// Returns the last element matching `predicate`, or `fallback` when none does.
pub fn last_or_default<I, P>(
    items: I,
    predicate: P,
    fallback: Option<I::Item>,
) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    last_match(items, predicate).or(fallback)
}

/// Returns the only element matching `predicate`.
///
/// Fails with [`SelectError::NotFound`] when nothing matches and with
/// [`SelectError::MultipleMatches`] as soon as a second match is seen.
///
/// ```
/// use selector::{single, SelectError};
///
/// let ids = [704, 705, 706];
/// assert_eq!(single(&ids, |id| **id == 706), Ok(&706));
/// assert_eq!(single(&ids, |id| **id > 704), Err(SelectError::MultipleMatches));
/// ```
pub fn single<I, P>(items: I, predicate: P) -> Result<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    unique_match(items, predicate)?.ok_or(SelectError::NotFound)
}

/// Returns the only element matching `predicate`, or `fallback` when none does.
///
/// More than one match is still an error; the fallback only covers the
/// not-found case.
pub fn single_or_default<I, P>(
    items: I,
    predicate: P,
    fallback: Option<I::Item>,
) -> Result<Option<I::Item>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Ok(unique_match(items, predicate)?.or(fallback))
}

fn last_match<I, P>(items: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(|item| predicate(item)).last()
}

/// `Ok(None)` for no match, `Ok(Some(_))` for exactly one.
fn unique_match<I, P>(items: I, mut predicate: P) -> Result<Option<I::Item>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut matches = items.into_iter().filter(|item| predicate(item));

    let Some(found) = matches.next() else {
        return Ok(None);
    };

    if matches.next().is_some() {
        return Err(SelectError::MultipleMatches);
    }

    Ok(Some(found))
}
