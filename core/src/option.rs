use core::slice;

use crate::error::{self, Error};
use crate::result::Result::{self, Err, Ok};

use self::Option::{None, Some};

type StdResult<T, E> = core::result::Result<T, E>;

/// An optional value: either [`Some`] value of type `T`, or [`None`].
///
/// Combinators take the container by value and produce a new one; there is no in-place transition between
/// variants.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Option<T> {
  /// No value.
  None,
  /// Some value of type `T`.
  Some(T),
}
impl<T> Default for Option<T> {
  #[inline]
  fn default() -> Self { None }
}

impl<T> Option<T> {
  #[inline]
  pub const fn is_some(&self) -> bool {
    matches!(self, Some(_))
  }

  #[inline]
  pub const fn is_none(&self) -> bool {
    !self.is_some()
  }

  /// Returns `true` if this is [`Some`] and `predicate` holds for the value.
  #[inline]
  pub fn is_some_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Some(value) => predicate(value),
      None => false,
    }
  }

  /// Returns `true` if this is [`None`], or if `predicate` holds for the value.
  #[inline]
  pub fn is_none_or(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Some(value) => predicate(value),
      None => true,
    }
  }


  /// Returns a slice of zero or one elements.
  #[inline]
  pub fn as_slice(&self) -> &[T] {
    match self {
      Some(value) => slice::from_ref(value),
      None => &[],
    }
  }

  #[inline]
  pub fn as_mut_slice(&mut self) -> &mut [T] {
    match self {
      Some(value) => slice::from_mut(value),
      None => &mut [],
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Option<&T> {
    match self {
      Some(value) => Some(value),
      None => None,
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Option<&mut T> {
    match self {
      Some(value) => Some(value),
      None => None,
    }
  }

  /// Gets a reference to the payload, if any.
  #[inline]
  pub fn value(&self) -> core::option::Option<&T> {
    match self {
      Some(value) => core::option::Option::Some(value),
      None => core::option::Option::None,
    }
  }

  #[inline]
  pub fn iter(&self) -> slice::Iter<'_, T> {
    self.as_slice().iter()
  }

  #[inline]
  pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
    self.as_mut_slice().iter_mut()
  }


  /// Returns the value, panicking with `message` if this is [`None`].
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Some(value) => value,
      None => error::unwrap_failed(Error::new_unwrap(message)),
    }
  }

  /// Returns the value, panicking with "error unwrapping None" if this is [`None`].
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Some(value) => value,
      None => error::unwrap_failed(Error::new_unwrap(error::UNWRAP_NONE)),
    }
  }

  /// Like [`expect`](Self::expect), but returns the [`Error::Unwrap`] instead of panicking.
  #[inline]
  pub fn try_expect(self, message: &str) -> StdResult<T, Error> {
    match self {
      Some(value) => StdResult::Ok(value),
      None => StdResult::Err(Error::new_unwrap(message)),
    }
  }

  /// Like [`unwrap`](Self::unwrap), but returns the [`Error::Unwrap`] instead of panicking.
  #[inline]
  pub fn try_unwrap(self) -> StdResult<T, Error> {
    self.try_expect(error::UNWRAP_NONE)
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Some(value) => value,
      None => default,
    }
  }

  #[inline]
  pub fn unwrap_or_else(self, default: impl FnOnce() -> T) -> T {
    match self {
      Some(value) => value,
      None => default(),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    self.unwrap_or_else(T::default)
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
    match self {
      Some(value) => Some(f(value)),
      None => None,
    }
  }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Some(value) => f(value),
      None => default,
    }
  }

  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce() -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Some(value) => f(value),
      None => default(),
    }
  }

  /// Calls `f` with a reference to the value if this is [`Some`], then returns `self`.
  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Some(value) = &self {
      f(value);
    }
    self
  }


  /// Converts into [`Ok`] with the value, or [`Err`] with `error` if this is [`None`].
  #[inline]
  pub fn ok_or<E>(self, error: E) -> Result<T, E> {
    match self {
      Some(value) => Ok(value),
      None => Err(error),
    }
  }

  #[inline]
  pub fn ok_or_else<E>(self, error: impl FnOnce() -> E) -> Result<T, E> {
    match self {
      Some(value) => Ok(value),
      None => Err(error()),
    }
  }


  /// Returns `other` if this is [`Some`], otherwise [`None`].
  #[inline]
  pub fn and<U>(self, other: Option<U>) -> Option<U> {
    match self {
      Some(_) => other,
      None => None,
    }
  }

  /// Chains a computation that may itself produce no value. [`None`] short-circuits without calling `f`.
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
    match self {
      Some(value) => f(value),
      None => None,
    }
  }

  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    match self {
      Some(value) if predicate(&value) => Some(value),
      _ => None,
    }
  }

  /// Returns `self` if this is [`Some`], otherwise `other`.
  #[inline]
  pub fn or(self, other: Option<T>) -> Option<T> {
    match self {
      Some(_) => self,
      None => other,
    }
  }

  #[inline]
  pub fn or_else(self, f: impl FnOnce() -> Option<T>) -> Option<T> {
    match self {
      Some(_) => self,
      None => f(),
    }
  }

  /// Returns whichever of `self` and `other` is [`Some`] when exactly one of them is, otherwise [`None`].
  #[inline]
  pub fn xor(self, other: Option<T>) -> Option<T> {
    match (self, other) {
      (Some(value), None) | (None, Some(value)) => Some(value),
      _ => None,
    }
  }

  /// Pairs the values of `self` and `other` if both are [`Some`].
  #[inline]
  pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
    match (self, other) {
      (Some(a), Some(b)) => Some((a, b)),
      _ => None,
    }
  }


  #[inline]
  pub fn into_std(self) -> core::option::Option<T> {
    self.into()
  }
}

impl<T, U> Option<(T, U)> {
  /// Splits a pair into a pair of options. [`None`] becomes `(None, None)`.
  #[inline]
  pub fn unzip(self) -> (Option<T>, Option<U>) {
    match self {
      Some((a, b)) => (Some(a), Some(b)),
      None => (None, None),
    }
  }
}

impl<T, E> Option<Result<T, E>> {
  /// Swaps the nesting: `None` becomes `Ok(None)`, `Some(Ok(v))` becomes `Ok(Some(v))`, and `Some(Err(e))` becomes
  /// `Err(e)`.
  #[inline]
  pub fn transpose(self) -> Result<Option<T>, E> {
    match self {
      Some(Ok(value)) => Ok(Some(value)),
      Some(Err(error)) => Err(error),
      None => Ok(None),
    }
  }
}

impl<T> Option<Option<T>> {
  /// Removes one level of nesting; [`None`] if either level is [`None`].
  #[inline]
  pub fn flatten(self) -> Option<T> {
    match self {
      Some(inner) => inner,
      None => None,
    }
  }
}

impl<T: Clone> Option<&T> {
  #[inline]
  pub fn cloned(self) -> Option<T> {
    self.map(T::clone)
  }
}

impl<T: Copy> Option<&T> {
  #[inline]
  pub fn copied(self) -> Option<T> {
    self.map(|value| *value)
  }
}


impl<T> From<core::option::Option<T>> for Option<T> {
  #[inline]
  fn from(option: core::option::Option<T>) -> Self {
    match option {
      core::option::Option::Some(value) => Some(value),
      core::option::Option::None => None,
    }
  }
}

impl<T> From<Option<T>> for core::option::Option<T> {
  #[inline]
  fn from(option: Option<T>) -> Self {
    match option {
      Some(value) => core::option::Option::Some(value),
      None => core::option::Option::None,
    }
  }
}

impl<T> IntoIterator for Option<T> {
  type Item = T;
  type IntoIter = core::option::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.into_std().into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Option<T> {
  type Item = &'a T;
  type IntoIter = slice::Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T> IntoIterator for &'a mut Option<T> {
  type Item = &'a mut T;
  type IntoIter = slice::IterMut<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}
