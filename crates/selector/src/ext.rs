//! Method-call form of the selection operations.
//!
//! [`SelectExt`] is implemented for everything that is [`IntoIterator`], so the
//! operations chain directly off a collection or iterator:
//!
//! ```
//! use selector::SelectExt;
//!
//! let colors = vec!["Blue", "Red", "Black", "Red"];
//!
//! assert_eq!(colors.iter().select_first(|c| c.starts_with('B')), Ok(&"Blue"));
//! assert_eq!(colors.iter().select_last(|c| c.starts_with('B')), Ok(&"Black"));
//! assert!(colors.iter().select_single(|c| **c == "Red").is_err());
//! ```
//!
//! Each method forwards to the free function of the same name in
//! [`select`](crate::select).

use crate::error::Result;
use crate::select;

/// Selection operations as methods on any [`IntoIterator`].
pub trait SelectExt: IntoIterator + Sized {
    /// See [`select::first`].
    fn select_first<P>(self, predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        select::first(self, predicate)
    }

    /// See [`select::first_or_default`].
    fn select_first_or_default<P>(
        self,
        predicate: P,
        fallback: Option<Self::Item>,
    ) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        select::first_or_default(self, predicate, fallback)
    }

    /// See [`select::last`].
    fn select_last<P>(self, predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        select::last(self, predicate)
    }

    /// See [`select::last_or_default`].
    fn select_last_or_default<P>(
        self,
        predicate: P,
        fallback: Option<Self::Item>,
    ) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        select::last_or_default(self, predicate, fallback)
    }

    /// See [`select::single`].
    fn select_single<P>(self, predicate: P) -> Result<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        select::single(self, predicate)
    }

    /// See [`select::single_or_default`].
    fn select_single_or_default<P>(
        self,
        predicate: P,
        fallback: Option<Self::Item>,
    ) -> Result<Option<Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        select::single_or_default(self, predicate, fallback)
    }
}

impl<I: IntoIterator> SelectExt for I {}
