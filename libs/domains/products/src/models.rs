use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

pub const NAME_REQUIRED: &str = "El nombre del producto no puede ir vacio";
pub const INVALID_PRICE: &str = "Precio No Válido";

/// A product in the catalogue
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300.0)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(id: i32, input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace name and price; availability only when supplied
    pub fn apply_update(&mut self, update: UpdateProduct) {
        self.name = update.name;
        self.price = update.price;
        if let Some(availability) = update.availability {
            self.availability = availability;
        }
        self.updated_at = Utc::now();
    }

    pub fn toggle_availability(&mut self) {
        self.availability = !self.availability;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a product
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "El nombre del producto no puede ir vacio"))]
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Precio No Válido"))]
    #[schema(example = 399.0)]
    pub price: f64,
    /// Defaults to `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = true)]
    pub availability: Option<bool>,
}

/// Payload for a full update
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "El nombre del producto no puede ir vacio"))]
    #[schema(example = "Monitor Curvo 49 Pulgadas")]
    pub name: String,
    #[validate(range(exclusive_min = 0.0, message = "Precio No Válido"))]
    #[schema(example = 399.0)]
    pub price: f64,
    /// Kept unchanged when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = true)]
    pub availability: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: f64) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            availability: None,
        }
    }

    #[test]
    fn test_new_product_defaults_to_available() {
        let product = Product::new(1, create("Monitor Curvo", 300.0));

        assert!(product.availability);
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_apply_update_keeps_availability_when_omitted() {
        let mut product = Product::new(
            1,
            CreateProduct {
                availability: Some(false),
                ..create("Mouse", 20.0)
            },
        );

        product.apply_update(UpdateProduct {
            name: "Mouse Inalámbrico".to_string(),
            price: 25.0,
            availability: None,
        });

        assert_eq!(product.name, "Mouse Inalámbrico");
        assert_eq!(product.price, 25.0);
        assert!(!product.availability);
    }

    #[test]
    fn test_toggle_availability_is_an_involution() {
        let mut product = Product::new(1, create("Teclado", 50.0));
        product.toggle_availability();
        assert!(!product.availability);
        product.toggle_availability();
        assert!(product.availability);
    }

    #[test]
    fn test_create_product_validation() {
        assert!(create("Monitor", 300.0).validate().is_ok());

        let errors = create("", 300.0).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let errors = create("Monitor", 0.0).validate().unwrap_err();
        let price_errors = errors.field_errors();
        assert_eq!(
            price_errors["price"][0].message.as_deref(),
            Some(INVALID_PRICE)
        );
    }
}
