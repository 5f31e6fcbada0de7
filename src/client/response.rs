//! Response shapes and their decoders
//!
//! Every request declares up front whether it expects a single object, a
//! list, or nothing. A body that does not match the declared shape is a
//! [`TestRailError::DecodeMismatch`], never a coerced value.

use crate::error::{TestRailError, TestRailResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// What a request expects back from the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    Single,
    List,
    Empty,
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseShape::Single => f.write_str("single object"),
            ResponseShape::List => f.write_str("list"),
            ResponseShape::Empty => f.write_str("empty"),
        }
    }
}

/// Type-level response shape, carried by [`Request`](crate::client::Request).
pub trait ResponseKind {
    type Output;

    const SHAPE: ResponseShape;

    fn decode(body: &[u8]) -> TestRailResult<Self::Output>;
}

/// One object of type `T`
pub struct Single<T>(PhantomData<fn() -> T>);

/// An ordered list of `T`
pub struct ListOf<T>(PhantomData<fn() -> T>);

/// No payload; any body is discarded
pub struct NoContent;

impl<T: DeserializeOwned> ResponseKind for Single<T> {
    type Output = T;

    const SHAPE: ResponseShape = ResponseShape::Single;

    fn decode(body: &[u8]) -> TestRailResult<T> {
        match parse(body, Self::SHAPE)? {
            value @ Value::Object(_) => {
                serde_json::from_value(value).map_err(TestRailError::MalformedBody)
            }
            other => Err(mismatch(Self::SHAPE, &other)),
        }
    }
}

impl<T: DeserializeOwned> ResponseKind for ListOf<T> {
    type Output = Vec<T>;

    const SHAPE: ResponseShape = ResponseShape::List;

    fn decode(body: &[u8]) -> TestRailResult<Vec<T>> {
        match parse(body, Self::SHAPE)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| serde_json::from_value(item).map_err(TestRailError::MalformedBody))
                .collect(),
            other => Err(mismatch(Self::SHAPE, &other)),
        }
    }
}

impl ResponseKind for NoContent {
    type Output = ();

    const SHAPE: ResponseShape = ResponseShape::Empty;

    fn decode(_body: &[u8]) -> TestRailResult<()> {
        Ok(())
    }
}

fn parse(body: &[u8], expected: ResponseShape) -> TestRailResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(TestRailError::DecodeMismatch {
            expected,
            found: "empty body",
        });
    }
    serde_json::from_slice(body).map_err(TestRailError::MalformedBody)
}

fn mismatch(expected: ResponseShape, found: &Value) -> TestRailError {
    let found = match found {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    };
    TestRailError::DecodeMismatch { expected, found }
}
