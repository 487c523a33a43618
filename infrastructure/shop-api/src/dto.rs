use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use business::domain::basket::model::{BasketLine, NewBasketLineProps};
use business::domain::errors::RemoteError;
use business::domain::product::model::{NewProductProps, Product};
use business::domain::shared::value_objects::{BasketLineId, ProductId, UserId};
use business::domain::user::model::{Credentials, ProfileUpdate, Registration, User};

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Photo", default)]
    pub photo: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
}

impl ProductDto {
    pub fn into_domain(self) -> Result<Product, RemoteError> {
        // Shortest round-trip text of the float, so 19.99 stays 19.99.
        let price = BigDecimal::from_str(&self.price.to_string())
            .map_err(|e| RemoteError::malformed(format!("price {}: {}", self.price, e)))?;

        Product::new(NewProductProps {
            id: ProductId::new(self.product_id),
            price,
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            photo: self.photo.unwrap_or_default(),
        })
        .map_err(|e| RemoteError::malformed(format!("product {}: {}", self.product_id, e)))
    }
}

#[derive(Debug, Deserialize)]
pub struct BasketLineDto {
    #[serde(rename = "BasketID")]
    pub basket_id: i64,
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    #[serde(rename = "UsersID")]
    pub users_id: i64,
    pub product: ProductDto,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl BasketLineDto {
    pub fn into_domain(self) -> Result<BasketLine, RemoteError> {
        let user_id = UserId::try_from(self.users_id)
            .map_err(|e| RemoteError::malformed(format!("basket line {}: {}", self.basket_id, e)))?;
        let basket_id = self.basket_id;

        BasketLine::new(NewBasketLineProps {
            id: BasketLineId::new(basket_id),
            product_id: ProductId::new(self.product_id),
            user_id,
            product: Arc::new(self.product.into_domain()?),
            quantity: self.quantity,
        })
        .map_err(|e| RemoteError::malformed(format!("basket line {}: {}", basket_id, e)))
    }
}

#[derive(Debug, Deserialize)]
pub struct UserDto {
    #[serde(rename = "UsersID")]
    pub users_id: i64,
    #[serde(rename = "Login", default)]
    pub login: Option<String>,
    #[serde(rename = "Password", default)]
    pub password: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Surname", default)]
    pub surname: Option<String>,
    #[serde(rename = "Patronymic", default)]
    pub patronymic: Option<String>,
    #[serde(rename = "Photo", default)]
    pub photo: Option<String>,
}

impl UserDto {
    pub fn into_domain(self) -> Result<User, RemoteError> {
        let id = UserId::try_from(self.users_id)
            .map_err(|e| RemoteError::malformed(format!("user: {}", e)))?;

        Ok(User {
            id,
            login: self.login.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            patronymic: self.patronymic.filter(|p| !p.is_empty()),
            photo: self.photo.filter(|p| !p.is_empty()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct UserAuthDto<'a> {
    #[serde(rename = "Login")]
    pub login: &'a str,
    #[serde(rename = "Password")]
    pub password: &'a str,
}

impl<'a> From<&'a Credentials> for UserAuthDto<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            login: &credentials.login,
            password: &credentials.password,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserRegistrationDto<'a> {
    #[serde(rename = "Login")]
    pub login: &'a str,
    #[serde(rename = "Password")]
    pub password: &'a str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Surname")]
    pub surname: &'a str,
    #[serde(rename = "Patronymic")]
    pub patronymic: Option<String>,
}

impl<'a> From<&'a Registration> for UserRegistrationDto<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            login: &registration.login,
            password: &registration.password,
            name: &registration.name,
            surname: &registration.surname,
            patronymic: registration.patronymic(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegistrationResponseDto {
    pub user_id: i64,
}

/// Query string of `PUT /v1/users/{id}`.
#[derive(Debug, Serialize)]
pub struct ProfileQueryDto<'a> {
    #[serde(rename = "Login")]
    pub login: &'a str,
    #[serde(rename = "Password")]
    pub password: &'a str,
    #[serde(rename = "Name")]
    pub name: &'a str,
    #[serde(rename = "Surname")]
    pub surname: &'a str,
    #[serde(rename = "Patronymic", skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
}

impl<'a> From<&'a ProfileUpdate> for ProfileQueryDto<'a> {
    fn from(update: &'a ProfileUpdate) -> Self {
        Self {
            login: &update.login,
            password: &update.password,
            name: &update.name,
            surname: &update.surname,
            patronymic: update.patronymic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASKET_JSON: &str = r#"[
        {
            "BasketID": 3,
            "ProductID": 42,
            "UsersID": 5,
            "product": {
                "ProductID": 42,
                "Price": 1999.99,
                "Photo": "img/42.png",
                "Description": "Winter boot",
                "Name": "Arctic"
            }
        },
        {
            "BasketID": 4,
            "ProductID": 43,
            "UsersID": 5,
            "product": {
                "ProductID": 43,
                "Price": 1000.0,
                "Photo": "img/43.png",
                "Description": "Sandal",
                "Name": "Beach"
            },
            "quantity": 2
        }
    ]"#;

    #[test]
    fn should_map_basket_listing_to_domain_lines() {
        let dtos: Vec<BasketLineDto> = serde_json::from_str(BASKET_JSON).unwrap();
        let lines: Vec<BasketLine> = dtos
            .into_iter()
            .map(BasketLineDto::into_domain)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].id, BasketLineId::new(3));
        assert_eq!(lines[0].quantity(), 1);
        assert_eq!(lines[0].product.price, BigDecimal::from_str("1999.99").unwrap());
        assert_eq!(lines[1].quantity(), 2);
        assert_eq!(lines[1].product.price, BigDecimal::from(1000));
        assert_eq!(lines[1].user_id.value(), 5);
    }

    #[test]
    fn should_reject_basket_line_with_zero_quantity() {
        let dto: BasketLineDto = serde_json::from_str(
            r#"{"BasketID": 1, "ProductID": 2, "UsersID": 5, "quantity": 0,
                "product": {"ProductID": 2, "Price": 10.0, "Name": "X"}}"#,
        )
        .unwrap();

        assert!(matches!(dto.into_domain(), Err(RemoteError::Malformed(_))));
    }

    #[test]
    fn should_reject_basket_line_without_valid_user() {
        let dto: BasketLineDto = serde_json::from_str(
            r#"{"BasketID": 1, "ProductID": 2, "UsersID": 0,
                "product": {"ProductID": 2, "Price": 10.0, "Name": "X"}}"#,
        )
        .unwrap();

        assert!(matches!(dto.into_domain(), Err(RemoteError::Malformed(_))));
    }

    #[test]
    fn should_reject_negative_price() {
        let dto: ProductDto =
            serde_json::from_str(r#"{"ProductID": 9, "Price": -5.0, "Name": "Broken"}"#).unwrap();

        assert!(matches!(dto.into_domain(), Err(RemoteError::Malformed(_))));
    }

    #[test]
    fn should_map_user_with_missing_optional_fields() {
        let dto: UserDto = serde_json::from_str(
            r#"{"UsersID": 5, "Login": "ivan", "Password": "secret",
                "Name": "Ivan", "Surname": "Petrov", "Patronymic": null, "Photo": ""}"#,
        )
        .unwrap();
        let user = dto.into_domain().unwrap();

        assert_eq!(user.id.value(), 5);
        assert_eq!(user.login, "ivan");
        assert!(user.patronymic.is_none());
        assert!(user.photo.is_none());
    }

    #[test]
    fn should_serialize_auth_with_backend_field_names() {
        let credentials = Credentials {
            login: "ivan".to_string(),
            password: "secret".to_string(),
        };
        let json = serde_json::to_value(UserAuthDto::from(&credentials)).unwrap();

        assert_eq!(json, serde_json::json!({"Login": "ivan", "Password": "secret"}));
    }

    #[test]
    fn should_send_null_patronymic_when_blank() {
        let registration = Registration {
            login: "olga".to_string(),
            password: "pa55".to_string(),
            name: "Olga".to_string(),
            surname: "Smirnova".to_string(),
            patronymic: Some(" ".to_string()),
            accepted_terms: true,
        };
        let json = serde_json::to_value(UserRegistrationDto::from(&registration)).unwrap();

        assert_eq!(json["Patronymic"], serde_json::Value::Null);
        assert_eq!(json["Surname"], "Smirnova");
    }

    #[test]
    fn should_omit_absent_patronymic_from_profile_query() {
        let update = ProfileUpdate {
            login: "ivan".to_string(),
            password: "secret".to_string(),
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: None,
            photo_path: None,
        };
        let json = serde_json::to_value(ProfileQueryDto::from(&update)).unwrap();

        assert!(json.get("Patronymic").is_none());
        assert_eq!(json["Login"], "ivan");
    }
}
