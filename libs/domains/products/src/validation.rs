//! Rule tables for the product routes.

use axum_helpers::{
    AppError,
    validation::{Location, RequestInput, Rule, RuleSet, checks},
};

use crate::models::{CreateProduct, INVALID_PRICE, NAME_REQUIRED, UpdateProduct};

pub const INVALID_ID: &str = "ID No Válido";
pub const INVALID_VALUE: &str = "Valor No Válido";
pub const PRICE_REQUIRED: &str = "El precio del producto no puede ir vacio";
pub const INVALID_AVAILABILITY: &str = "Valor de Disponibilidad No Válido";

const ID_RULE: Rule = Rule::param("id", checks::is_int, INVALID_ID);
const NAME_RULE: Rule = Rule::body("name", checks::non_empty_string, NAME_REQUIRED);
const PRICE_NUMERIC_RULE: Rule = Rule::body("price", checks::is_numeric, INVALID_VALUE);
const PRICE_PRESENT_RULE: Rule = Rule::body("price", checks::not_empty, PRICE_REQUIRED);
const PRICE_POSITIVE_RULE: Rule = Rule::body("price", checks::is_positive, INVALID_PRICE);
const AVAILABILITY_RULE: Rule =
    Rule::body("availability", checks::is_boolean_if_present, INVALID_AVAILABILITY);

/// `{id}` path parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProductId(pub i32);

impl RuleSet for ProductId {
    const RULES: &'static [Rule] = &[ID_RULE];

    fn from_input(input: RequestInput) -> Result<Self, AppError> {
        input.int(Location::Params, "id").map(ProductId)
    }
}

/// Body of `POST /`
#[derive(Clone, Debug, PartialEq)]
pub struct CreateProductRequest(pub CreateProduct);

impl RuleSet for CreateProductRequest {
    const RULES: &'static [Rule] = &[
        NAME_RULE,
        PRICE_NUMERIC_RULE,
        PRICE_PRESENT_RULE,
        PRICE_POSITIVE_RULE,
        AVAILABILITY_RULE,
    ];

    fn from_input(input: RequestInput) -> Result<Self, AppError> {
        Ok(Self(CreateProduct {
            name: input.text(Location::Body, "name")?,
            price: input.number(Location::Body, "price")?,
            availability: input.optional_bool(Location::Body, "availability")?,
        }))
    }
}

/// `{id}` plus body of `PUT /{id}`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateProductRequest {
    pub id: i32,
    pub input: UpdateProduct,
}

impl RuleSet for UpdateProductRequest {
    const RULES: &'static [Rule] = &[
        ID_RULE,
        NAME_RULE,
        PRICE_NUMERIC_RULE,
        PRICE_PRESENT_RULE,
        PRICE_POSITIVE_RULE,
        AVAILABILITY_RULE,
    ];

    fn from_input(input: RequestInput) -> Result<Self, AppError> {
        Ok(Self {
            id: input.int(Location::Params, "id")?,
            input: UpdateProduct {
                name: input.text(Location::Body, "name")?,
                price: input.number(Location::Body, "price")?,
                availability: input.optional_bool(Location::Body, "availability")?,
            },
        })
    }
}
