use std::path::PathBuf;

use super::errors::AccountError;
use crate::domain::shared::value_objects::UserId;

/// A shop account as returned by the backend and kept in the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub login: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub photo: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        match &self.patronymic {
            Some(patronymic) => format!("{} {} {}", self.surname, self.name, patronymic),
            None => format!("{} {}", self.surname, self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<(), AccountError> {
        if self.login.is_empty() || self.password.is_empty() {
            return Err(AccountError::MissingFields);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub login: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub accepted_terms: bool,
}

impl Registration {
    pub fn validate(&self) -> Result<(), AccountError> {
        if !self.accepted_terms {
            return Err(AccountError::TermsNotAccepted);
        }
        require_profile_fields(&self.login, &self.password, &self.name, &self.surname)
    }

    /// Patronymic with blank input treated as absent.
    pub fn patronymic(&self) -> Option<String> {
        non_blank(self.patronymic.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub login: String,
    pub password: String,
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    /// Local image file uploaded as the new avatar.
    pub photo_path: Option<PathBuf>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), AccountError> {
        require_profile_fields(&self.login, &self.password, &self.name, &self.surname)
    }

    pub fn patronymic(&self) -> Option<String> {
        non_blank(self.patronymic.as_deref())
    }
}

fn require_profile_fields(
    login: &str,
    password: &str,
    name: &str,
    surname: &str,
) -> Result<(), AccountError> {
    if [login, password, name, surname]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(AccountError::MissingFields);
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}
