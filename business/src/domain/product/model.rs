use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

/// A catalog entry as served by the shop backend. Immutable once fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub price: BigDecimal,
    pub name: String,
    pub description: String,
    pub photo: String,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub price: BigDecimal,
    pub name: String,
    pub description: String,
    pub photo: String,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.price < BigDecimal::zero() {
            return Err(ProductError::NegativePrice);
        }

        Ok(Self {
            id: props.id,
            price: props.price,
            name: props.name,
            description: props.description,
            photo: props.photo,
        })
    }
}
