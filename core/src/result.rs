use core::fmt::Debug;

use crate::error::{self, Error};
use crate::option::Option::{self, None, Some};

use self::Result::{Err, Ok};

type StdResult<T, E> = core::result::Result<T, E>;

/// The outcome of a computation: either success ([`Ok`]) with a value of type `T`, or failure ([`Err`]) with an
/// error of type `E`.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Result<T, E> {
  /// Success value.
  Ok(T),
  /// Error value.
  Err(E),
}
impl<T, E> Result<T, E> {
  #[inline]
  pub const fn is_ok(&self) -> bool {
    matches!(self, Ok(_))
  }

  #[inline]
  pub const fn is_err(&self) -> bool {
    !self.is_ok()
  }

  #[inline]
  pub fn is_ok_and(&self, predicate: impl FnOnce(&T) -> bool) -> bool {
    match self {
      Ok(value) => predicate(value),
      Err(_) => false,
    }
  }

  #[inline]
  pub fn is_err_and(&self, predicate: impl FnOnce(&E) -> bool) -> bool {
    match self {
      Ok(_) => false,
      Err(error) => predicate(error),
    }
  }


  /// Converts into an [`Option`] of the success value, discarding the error.
  #[inline]
  pub fn ok(self) -> Option<T> {
    match self {
      Ok(value) => Some(value),
      Err(_) => None,
    }
  }

  /// Converts into an [`Option`] of the error, discarding the success value.
  #[inline]
  pub fn err(self) -> Option<E> {
    match self {
      Ok(_) => None,
      Err(error) => Some(error),
    }
  }

  #[inline]
  pub const fn as_ref(&self) -> Result<&T, &E> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => Err(error),
    }
  }

  #[inline]
  pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => Err(error),
    }
  }

  /// Gets a reference to whichever payload is held.
  #[inline]
  pub fn value(&self) -> StdResult<&T, &E> {
    match self {
      Ok(value) => StdResult::Ok(value),
      Err(error) => StdResult::Err(error),
    }
  }

  /// Iterates over the success value, if any.
  #[inline]
  pub fn iter(&self) -> core::option::IntoIter<&T> {
    self.as_ref().ok().into_iter()
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Result<U, E> {
    match self {
      Ok(value) => Ok(f(value)),
      Err(error) => Err(error),
    }
  }

  #[inline]
  pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Ok(value) => f(value),
      Err(_) => default,
    }
  }

  #[inline]
  pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, f: impl FnOnce(T) -> U) -> U {
    match self {
      Ok(value) => f(value),
      Err(error) => default(error),
    }
  }

  #[inline]
  pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Result<T, F> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => Err(f(error)),
    }
  }

  #[inline]
  pub fn inspect(self, f: impl FnOnce(&T)) -> Self {
    if let Ok(value) = &self {
      f(value);
    }
    self
  }

  #[inline]
  pub fn inspect_err(self, f: impl FnOnce(&E)) -> Self {
    if let Err(error) = &self {
      f(error);
    }
    self
  }


  /// Returns the success value, panicking with `message` if this is [`Err`].
  #[inline]
  #[track_caller]
  pub fn expect(self, message: &str) -> T {
    match self {
      Ok(value) => value,
      Err(_) => error::unwrap_failed(Error::new_unwrap(message)),
    }
  }

  /// Returns the success value, panicking with "error unwrapping Err" if this is [`Err`].
  #[inline]
  #[track_caller]
  pub fn unwrap(self) -> T {
    match self {
      Ok(value) => value,
      Err(_) => error::unwrap_failed(Error::new_unwrap(error::UNWRAP_ERR)),
    }
  }

  #[inline]
  pub fn try_expect(self, message: &str) -> StdResult<T, Error> {
    match self {
      Ok(value) => StdResult::Ok(value),
      Err(_) => StdResult::Err(Error::new_unwrap(message)),
    }
  }

  #[inline]
  pub fn try_unwrap(self) -> StdResult<T, Error> {
    self.try_expect(error::UNWRAP_ERR)
  }

  #[inline]
  pub fn unwrap_or(self, default: T) -> T {
    match self {
      Ok(value) => value,
      Err(_) => default,
    }
  }

  /// Returns the success value, or computes one from the error.
  #[inline]
  pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Ok(value) => value,
      Err(error) => f(error),
    }
  }

  #[inline]
  pub fn unwrap_or_default(self) -> T where
    T: Default
  {
    self.unwrap_or_else(|_| T::default())
  }


  /// Returns `other` if this is [`Ok`], otherwise the error of `self`.
  ///
  /// Always produces a `Result`: `Ok(1).and(Ok(2))` is `Ok(2)`. When both fail, the first failure wins.
  #[inline]
  pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
    match self {
      Ok(_) => other,
      Err(error) => Err(error),
    }
  }

  /// Chains a fallible computation on the success value. [`Err`] short-circuits without calling `f`.
  ///
  /// `f` returns a `Result` itself; to wrap a plain return value in [`Ok`], use [`map`](Self::map).
  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
    match self {
      Ok(value) => f(value),
      Err(error) => Err(error),
    }
  }

  /// Returns the first success among `self` and `other`. When both fail, the first failure wins.
  ///
  /// Always produces a `Result`: `Err("a").or(Ok(2))` is `Ok(2)`, never the bare `2`.
  #[inline]
  pub fn or(self, other: Result<T, E>) -> Result<T, E> {
    match (self, other) {
      (Ok(value), _) | (Err(_), Ok(value)) => Ok(value),
      (Err(error), Err(_)) => Err(error),
    }
  }

  /// Returns `self` if this is [`Ok`], otherwise recovers from the error with `f`.
  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
    match self {
      Ok(value) => Ok(value),
      Err(error) => f(error),
    }
  }


  #[inline]
  pub fn into_std(self) -> StdResult<T, E> {
    self.into()
  }
}

impl<T: Debug, E> Result<T, E> {
  /// Returns the error, panicking with `message` and the success value if this is [`Ok`].
  #[inline]
  #[track_caller]
  pub fn expect_err(self, message: &str) -> E {
    match self {
      Ok(value) => error::unwrap_failed(Error::new_unwrap(format!("{}; got Ok<{:?}>", message, value))),
      Err(error) => error,
    }
  }

  /// Returns the error, panicking with a message that embeds the success value if this is [`Ok`].
  #[inline]
  #[track_caller]
  pub fn unwrap_err(self) -> E {
    match self.try_unwrap_err() {
      StdResult::Ok(error) => error,
      StdResult::Err(error) => error::unwrap_failed(error),
    }
  }

  #[inline]
  pub fn try_unwrap_err(self) -> StdResult<E, Error> {
    match self {
      Ok(value) => StdResult::Err(Error::new_unwrap(format!("expected Err; got Ok<{:?}>", value))),
      Err(error) => StdResult::Ok(error),
    }
  }
}

impl<T, E> Result<Option<T>, E> {
  /// Swaps the nesting: `Ok(Some(v))` becomes `Some(Ok(v))`, `Ok(None)` becomes `None`, and `Err(e)` becomes
  /// `Some(Err(e))`.
  #[inline]
  pub fn transpose(self) -> Option<Result<T, E>> {
    match self {
      Ok(Some(value)) => Some(Ok(value)),
      Ok(None) => None,
      Err(error) => Some(Err(error)),
    }
  }
}

impl<T, E> Result<Result<T, E>, E> {
  #[inline]
  pub fn flatten(self) -> Result<T, E> {
    match self {
      Ok(inner) => inner,
      Err(error) => Err(error),
    }
  }
}


impl<T, E> From<StdResult<T, E>> for Result<T, E> {
  #[inline]
  fn from(result: StdResult<T, E>) -> Self {
    match result {
      StdResult::Ok(value) => Ok(value),
      StdResult::Err(error) => Err(error),
    }
  }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => StdResult::Ok(value),
      Err(error) => StdResult::Err(error),
    }
  }
}

impl<T, E> IntoIterator for Result<T, E> {
  type Item = T;
  type IntoIter = core::option::IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.ok().into_iter()
  }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
  type Item = &'a T;
  type IntoIter = core::option::IntoIter<&'a T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
