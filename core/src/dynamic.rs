//! Runtime-checked combinators for values whose shape is only known at runtime.
//!
//! The combinators on [`Option`] and [`Result`] are statically typed and cannot receive a payload of the wrong shape.
//! A [`Value`] can hold anything, so the combinators here check the shape and report an [`Error::TypeMismatch`] or
//! [`Error::ArityMismatch`] instead.

use crate::error::Error;
use crate::option::Option::{self, None, Some};
use crate::result::Result::{self, Err, Ok};

type StdResult<T, E> = core::result::Result<T, E>;

/// A dynamically typed value.
#[derive(Default, Clone, PartialEq, PartialOrd, Debug)]
pub enum Value {
  #[default]
  Unit,
  Bool(bool),
  Int(i64),
  Float(f64),
  Str(String),
  List(Vec<Value>),
  Option(Box<Option<Value>>),
  Result(Box<Result<Value, Value>>),
}
impl Value {
  /// Name of the variant, as used in mismatch messages.
  #[inline]
  pub fn type_name(&self) -> &'static str {
    match self {
      Value::Unit => "Unit",
      Value::Bool(_) => "Bool",
      Value::Int(_) => "Int",
      Value::Float(_) => "Float",
      Value::Str(_) => "Str",
      Value::List(_) => "List",
      Value::Option(_) => "Option",
      Value::Result(_) => "Result",
    }
  }

  #[inline]
  pub fn is_option(&self) -> bool {
    matches!(self, Value::Option(_))
  }

  #[inline]
  pub fn is_result(&self) -> bool {
    matches!(self, Value::Result(_))
  }

  #[inline]
  pub fn list(items: impl IntoIterator<Item=impl Into<Value>>) -> Self {
    Value::List(items.into_iter().map(Into::into).collect())
  }
}

fn mismatch(expected: &'static str, actual: &Value) -> Error {
  let actual = actual.type_name();
  trace_violation!(debug, expected, actual, "rejected dynamic value");
  Error::TypeMismatch { expected, actual }
}


impl TryFrom<Value> for Option<Value> {
  type Error = Error;

  #[inline]
  fn try_from(value: Value) -> StdResult<Self, Self::Error> {
    match value {
      Value::Option(option) => StdResult::Ok(*option),
      value => StdResult::Err(mismatch("Option", &value)),
    }
  }
}

impl TryFrom<Value> for Result<Value, Value> {
  type Error = Error;

  #[inline]
  fn try_from(value: Value) -> StdResult<Self, Self::Error> {
    match value {
      Value::Result(result) => StdResult::Ok(*result),
      value => StdResult::Err(mismatch("Result", &value)),
    }
  }
}

impl From<Option<Value>> for Value {
  #[inline]
  fn from(option: Option<Value>) -> Self { Value::Option(Box::new(option)) }
}

impl From<Result<Value, Value>> for Value {
  #[inline]
  fn from(result: Result<Value, Value>) -> Self { Value::Result(Box::new(result)) }
}

impl From<()> for Value {
  #[inline]
  fn from(_: ()) -> Self { Value::Unit }
}

impl From<bool> for Value {
  #[inline]
  fn from(boolean: bool) -> Self { Value::Bool(boolean) }
}

impl From<i32> for Value {
  #[inline]
  fn from(int: i32) -> Self { Value::Int(int.into()) }
}

impl From<i64> for Value {
  #[inline]
  fn from(int: i64) -> Self { Value::Int(int) }
}

impl From<f64> for Value {
  #[inline]
  fn from(float: f64) -> Self { Value::Float(float) }
}

impl From<&str> for Value {
  #[inline]
  fn from(string: &str) -> Self { Value::Str(string.to_owned()) }
}

impl From<String> for Value {
  #[inline]
  fn from(string: String) -> Self { Value::Str(string) }
}

impl From<Vec<Value>> for Value {
  #[inline]
  fn from(items: Vec<Value>) -> Self { Value::List(items) }
}


impl Option<Value> {
  /// Chains `f`, which must return an option value. [`None`] short-circuits without calling `f`.
  pub fn try_and_then(self, f: impl FnOnce(Value) -> Value) -> StdResult<Option<Value>, Error> {
    match self {
      Some(value) => Option::try_from(f(value)),
      None => StdResult::Ok(None),
    }
  }

  /// Splits a two-item list into a pair of options.
  pub fn try_unzip(self) -> StdResult<(Option<Value>, Option<Value>), Error> {
    let items = match self {
      Some(Value::List(items)) => items,
      Some(value) => return StdResult::Err(mismatch("List", &value)),
      None => return StdResult::Ok((None, None)),
    };
    match <[Value; 2]>::try_from(items) {
      StdResult::Ok([a, b]) => StdResult::Ok((Some(a), Some(b))),
      StdResult::Err(items) => {
        let len = items.len();
        trace_violation!(debug, len, "rejected tuple-like value");
        StdResult::Err(Error::ArityMismatch(len))
      }
    }
  }

  /// Like [`Option::transpose`], with the payload checked to be a result value.
  pub fn try_transpose(self) -> StdResult<Result<Option<Value>, Value>, Error> {
    let option: Option<Result<Value, Value>> = match self {
      Some(value) => Some(value.try_into()?),
      None => None,
    };
    StdResult::Ok(option.transpose())
  }

  /// Like [`Option::flatten`], with the payload checked to be an option value.
  pub fn try_flatten(self) -> StdResult<Option<Value>, Error> {
    match self {
      Some(value) => Option::try_from(value),
      None => StdResult::Ok(None),
    }
  }
}

impl Result<Value, Value> {
  /// Like [`Result::and`], with `other` checked to be a result value.
  pub fn try_and(self, other: Value) -> StdResult<Result<Value, Value>, Error> {
    let other: Result<Value, Value> = other.try_into()?;
    StdResult::Ok(self.and(other))
  }

  /// Like [`Result::or`], with `other` checked to be a result value.
  pub fn try_or(self, other: Value) -> StdResult<Result<Value, Value>, Error> {
    let other: Result<Value, Value> = other.try_into()?;
    StdResult::Ok(self.or(other))
  }

  /// Recovers from the error with `f`, which must return a result value. [`Ok`] short-circuits without calling `f`.
  pub fn try_or_else(self, f: impl FnOnce(Value) -> Value) -> StdResult<Result<Value, Value>, Error> {
    match self {
      Ok(value) => StdResult::Ok(Ok(value)),
      Err(error) => Result::try_from(f(error)),
    }
  }

  /// Like [`Result::transpose`], with the success value checked to be an option value.
  pub fn try_transpose(self) -> StdResult<Option<Result<Value, Value>>, Error> {
    let result = match self {
      Ok(value) => Ok(Option::<Value>::try_from(value)?),
      Err(error) => Err(error),
    };
    StdResult::Ok(result.transpose())
  }

  /// Like [`Result::flatten`], with the success value checked to be a result value.
  pub fn try_flatten(self) -> StdResult<Result<Value, Value>, Error> {
    match self {
      Ok(value) => Result::try_from(value),
      Err(error) => StdResult::Ok(Err(error)),
    }
  }
}


#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn some(value: impl Into<Value>) -> Option<Value> { Some(value.into()) }

  #[test]
  fn introspection() {
    assert!(Value::from(some(1)).is_option());
    assert!(!Value::from(some(1)).is_result());
    assert!(Value::from(Ok::<Value, Value>(Value::Unit)).is_result());
    assert!(!Value::Int(1).is_option());
    assert_eq!(Value::from("a").type_name(), "Str");
    assert_eq!(Value::list([1i64, 2]).type_name(), "List");
    assert_eq!(Value::default(), Value::Unit);
  }

  #[test]
  fn try_from_checks_shape() {
    assert_eq!(Option::<Value>::try_from(Value::from(some(1))), StdResult::Ok(some(1)));
    assert_eq!(
      Option::<Value>::try_from(Value::Int(1)),
      StdResult::Err(Error::TypeMismatch { expected: "Option", actual: "Int" })
    );
    assert_eq!(
      Result::<Value, Value>::try_from(Value::from(None::<Value>)),
      StdResult::Err(Error::TypeMismatch { expected: "Result", actual: "Option" })
    );
  }

  #[test]
  fn bare_values_are_checked_not_wrapped() {
    let checked: StdResult<Option<Value>, Error> = Value::Int(1).try_into();
    assert!(checked.unwrap_err().is_type_mismatch());
    let bridged = Option::from(core::option::Option::Some(Value::Int(1)));
    assert_eq!(bridged, some(1));
  }

  #[test]
  fn try_and_then_requires_option() {
    assert_eq!(some(2).try_and_then(|v| Value::from(Some(v))), StdResult::Ok(some(2)));
    assert_eq!(some(2).try_and_then(|_| Value::from(None::<Value>)), StdResult::Ok(None));
    assert_eq!(
      some(2).try_and_then(|v| v),
      StdResult::Err(Error::TypeMismatch { expected: "Option", actual: "Int" })
    );
    assert_eq!(None::<Value>.try_and_then(|_| -> Value { panic!("must not be called") }), StdResult::Ok(None));
  }

  #[test]
  fn try_unzip_checks_arity() {
    assert_eq!(some(Value::list([1i64, 2])).try_unzip(), StdResult::Ok((some(1), some(2))));
    assert_eq!(some(Value::list([1i64, 2, 3])).try_unzip(), StdResult::Err(Error::ArityMismatch(3)));
    assert_eq!(some(Value::list(Vec::<i64>::new())).try_unzip(), StdResult::Err(Error::ArityMismatch(0)));
    assert_eq!(
      some(1).try_unzip(),
      StdResult::Err(Error::TypeMismatch { expected: "List", actual: "Int" })
    );
    assert_eq!(None::<Value>.try_unzip(), StdResult::Ok((None, None)));
  }

  #[test]
  fn option_try_transpose() {
    assert_eq!(some(Ok::<Value, Value>(1.into())).try_transpose(), StdResult::Ok(Ok(some(1))));
    assert_eq!(some(Err::<Value, Value>("nope".into())).try_transpose(), StdResult::Ok(Err("nope".into())));
    assert_eq!(None::<Value>.try_transpose(), StdResult::Ok(Ok(None)));
    assert!(some(1).try_transpose().unwrap_err().is_type_mismatch());
  }

  #[test]
  fn option_try_flatten() {
    assert_eq!(some(some(6)).try_flatten(), StdResult::Ok(some(6)));
    assert_eq!(some(None::<Value>).try_flatten(), StdResult::Ok(None));
    assert_eq!(None::<Value>.try_flatten(), StdResult::Ok(None));
    assert_eq!(
      some(6).try_flatten(),
      StdResult::Err(Error::TypeMismatch { expected: "Option", actual: "Int" })
    );
  }

  #[test]
  fn result_try_and_and_try_or() {
    let ok = |v: i64| Ok::<Value, Value>(v.into());
    let err = |e: &str| Err::<Value, Value>(e.into());
    assert_eq!(ok(1).try_and(ok(2).into()), StdResult::Ok(ok(2)));
    assert_eq!(ok(1).try_and(err("nope").into()), StdResult::Ok(err("nope")));
    assert_eq!(err("first").try_and(err("second").into()), StdResult::Ok(err("first")));
    assert_eq!(ok(1).try_or(err("nope").into()), StdResult::Ok(ok(1)));
    assert_eq!(err("nope").try_or(ok(2).into()), StdResult::Ok(ok(2)));
    assert_eq!(
      err("nope").try_and(Value::Int(2)),
      StdResult::Err(Error::TypeMismatch { expected: "Result", actual: "Int" })
    );
    assert!(ok(1).try_or(Value::Unit).unwrap_err().is_type_mismatch());
  }

  #[test]
  fn result_try_or_else_requires_result() {
    let recovered = Err::<Value, Value>("nope".into()).try_or_else(|e| Ok::<Value, Value>(e).into());
    assert_eq!(recovered, StdResult::Ok(Ok("nope".into())));
    assert_eq!(
      Err::<Value, Value>("nope".into()).try_or_else(|e| e),
      StdResult::Err(Error::TypeMismatch { expected: "Result", actual: "Str" })
    );
    assert_eq!(Ok::<Value, Value>(Value::Unit).try_or_else(|e| e), StdResult::Ok(Ok(Value::Unit)));
  }

  #[test]
  fn result_try_transpose() {
    assert_eq!(Ok::<Value, Value>(some(1).into()).try_transpose(), StdResult::Ok(Some(Ok(1.into()))));
    assert_eq!(Ok::<Value, Value>(None::<Value>.into()).try_transpose(), StdResult::Ok(None));
    assert_eq!(Err::<Value, Value>("nope".into()).try_transpose(), StdResult::Ok(Some(Err("nope".into()))));
    assert_eq!(
      Ok::<Value, Value>(1.into()).try_transpose(),
      StdResult::Err(Error::TypeMismatch { expected: "Option", actual: "Int" })
    );
  }

  #[test]
  fn result_try_flatten() {
    let nested = Ok::<Value, Value>(Ok::<Value, Value>(1.into()).into());
    assert_eq!(nested.try_flatten(), StdResult::Ok(Ok(1.into())));
    let inner_err = Ok::<Value, Value>(Err::<Value, Value>("inner".into()).into());
    assert_eq!(inner_err.try_flatten(), StdResult::Ok(Err("inner".into())));
    assert_eq!(Err::<Value, Value>("outer".into()).try_flatten(), StdResult::Ok(Err("outer".into())));
    assert_eq!(
      Ok::<Value, Value>(1.into()).try_flatten(),
      StdResult::Err(Error::TypeMismatch { expected: "Result", actual: "Int" })
    );
  }
}
