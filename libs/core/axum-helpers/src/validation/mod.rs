//! Declarative request validation.
//!
//! A route declares an ordered table of [`Rule`]s, each naming one field, where
//! to find it, a predicate, and the message reported when the predicate fails.
//! [`evaluate`] runs every rule independently and collects one [`Violation`]
//! per failed rule, in table order. The [`Validated`] extractor is the error
//! gate: any violation short-circuits the request with
//! `400 {"errors": [...]}` before the handler runs.
//!
//! ```ignore
//! use axum_helpers::validation::{checks, Location, Rule, RuleSet, RequestInput, Validated};
//!
//! struct ItemId(i32);
//!
//! impl RuleSet for ItemId {
//!     const RULES: &'static [Rule] = &[Rule::param("id", checks::is_int, "Invalid id")];
//!
//!     fn from_input(input: RequestInput) -> Result<Self, AppError> {
//!         input.int(Location::Params, "id").map(ItemId)
//!     }
//! }
//!
//! async fn get_item(Validated(ItemId(id)): Validated<ItemId>) -> String {
//!     id.to_string()
//! }
//! ```

pub mod checks;
mod extractor;

pub use extractor::Validated;

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::errors::AppError;

/// Where a validated field is read from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Path parameters
    Params,
    /// JSON request body
    Body,
}

/// Predicate over a possibly absent field value
pub type Check = fn(Option<&Value>) -> bool;

/// One `(field, location, predicate, message)` entry of a rule table
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub field: &'static str,
    pub location: Location,
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    pub const fn param(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            location: Location::Params,
            check,
            message,
        }
    }

    pub const fn body(field: &'static str, check: Check, message: &'static str) -> Self {
        Self {
            field,
            location: Location::Body,
            check,
            message,
        }
    }

    /// Returns the violation produced by this rule, if any
    pub fn apply(&self, input: &RequestInput) -> Option<Violation> {
        let value = input.get(self.location, self.field);
        if (self.check)(value) {
            return None;
        }
        Some(Violation {
            value: value.cloned(),
            msg: self.message.to_string(),
            param: self.field.to_string(),
            location: self.location,
        })
    }
}

/// A single failed rule as reported to the client
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    /// Submitted value, omitted when the field was absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub value: Option<Value>,
    pub msg: String,
    pub param: String,
    pub location: Location,
}

/// Body of a `400 Bad Request` produced by the error gate
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<Violation>,
}

impl IntoResponse for ValidationErrorBody {
    fn into_response(self) -> Response {
        tracing::info!(violations = self.errors.len(), "Request failed validation");
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// Raw field sources of a request: path parameters and the parsed JSON body
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestInput {
    params: Map<String, Value>,
    body: Value,
}

impl RequestInput {
    pub fn new(params: HashMap<String, String>, body: Value) -> Self {
        Self {
            params: params
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect(),
            body,
        }
    }

    pub fn get(&self, location: Location, field: &str) -> Option<&Value> {
        match location {
            Location::Params => self.params.get(field),
            Location::Body => self.body.get(field),
        }
    }

    /// Field as text; only JSON strings are accepted
    pub fn text(&self, location: Location, field: &str) -> Result<String, AppError> {
        match self.require(location, field)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(invalid(field)),
        }
    }

    pub fn int(&self, location: Location, field: &str) -> Result<i32, AppError> {
        checks::as_int(Some(self.require(location, field)?)).ok_or_else(|| invalid(field))
    }

    pub fn number(&self, location: Location, field: &str) -> Result<f64, AppError> {
        checks::as_number(Some(self.require(location, field)?)).ok_or_else(|| invalid(field))
    }

    /// `Ok(None)` when the field is absent
    pub fn optional_bool(&self, location: Location, field: &str) -> Result<Option<bool>, AppError> {
        match self.get(location, field) {
            None => Ok(None),
            value => checks::as_bool(value).map(Some).ok_or_else(|| invalid(field)),
        }
    }

    fn require(&self, location: Location, field: &str) -> Result<&Value, AppError> {
        self.get(location, field)
            .ok_or_else(|| AppError::BadRequest(format!("missing field `{field}`")))
    }
}

fn invalid(field: &str) -> AppError {
    AppError::BadRequest(format!("invalid value for `{field}`"))
}

/// Evaluate every rule against `input`, keeping table order
pub fn evaluate(rules: &[Rule], input: &RequestInput) -> Vec<Violation> {
    rules.iter().filter_map(|rule| rule.apply(input)).collect()
}

/// A request shape with a rule table and a conversion from validated input
pub trait RuleSet: Sized {
    const RULES: &'static [Rule];

    /// Called only after every rule passed
    fn from_input(input: RequestInput) -> Result<Self, AppError>;
}
