use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;

/// On-disk form of the signed-in user.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: UserId,
    pub login: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub patronymic: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub saved_at: DateTime<Utc>,
}

impl StoredUser {
    pub fn from_domain(user: &User, saved_at: DateTime<Utc>) -> Self {
        Self {
            id: user.id,
            login: user.login.clone(),
            password: user.password.clone(),
            name: user.name.clone(),
            surname: user.surname.clone(),
            patronymic: user.patronymic.clone(),
            photo: user.photo.clone(),
            saved_at,
        }
    }

    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            login: self.login,
            password: self.password,
            name: self.name,
            surname: self.surname,
            patronymic: self.patronymic,
            photo: self.photo,
        }
    }
}
