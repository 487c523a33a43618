use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use business::domain::errors::RemoteError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{Credentials, ProfileUpdate, Registration, User};
use business::domain::user::service::AccountService;

use crate::client::ShopApiClient;
use crate::dto::{
    ProfileQueryDto, RegistrationResponseDto, UserAuthDto, UserDto, UserRegistrationDto,
};
use crate::response::{json_body, send};

/// Multipart field name the backend reads the avatar from.
const PHOTO_FIELD: &str = "photo_file";

pub struct AccountServiceHttp {
    client: ShopApiClient,
}

impl AccountServiceHttp {
    pub fn new(client: ShopApiClient) -> Self {
        Self { client }
    }

    fn photo_mime(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("webp") => "image/webp",
            Some("gif") => "image/gif",
            _ => "application/octet-stream",
        }
    }

    /// Local read failures are reported as transport errors: the request was never sent.
    async fn photo_form(path: &Path) -> Result<Form, RemoteError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            RemoteError::transport(format!("cannot read photo {}: {}", path.display(), e))
        })?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("photo")
            .to_string();

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(Self::photo_mime(path))
            .map_err(|e| RemoteError::transport(e.to_string()))?;

        Ok(Form::new().part(PHOTO_FIELD, part))
    }
}

#[async_trait]
impl AccountService for AccountServiceHttp {
    async fn login(&self, credentials: &Credentials) -> Result<User, RemoteError> {
        let response = send(
            self.client
                .client
                .post(self.client.token_url())
                .json(&UserAuthDto::from(credentials)),
        )
        .await?;

        let dto: UserDto = json_body(response).await?;
        dto.into_domain()
    }

    async fn register(&self, registration: &Registration) -> Result<UserId, RemoteError> {
        let response = send(
            self.client
                .client
                .post(self.client.register_url())
                .json(&UserRegistrationDto::from(registration)),
        )
        .await?;

        let dto: RegistrationResponseDto = json_body(response).await?;
        UserId::try_from(dto.user_id).map_err(|e| RemoteError::malformed(e.to_string()))
    }

    async fn get_user(&self, id: UserId) -> Result<User, RemoteError> {
        let response = send(self.client.client.get(self.client.user_url(id.value()))).await?;
        let dto: UserDto = json_body(response).await?;
        dto.into_domain()
    }

    async fn update_user(&self, id: UserId, update: &ProfileUpdate) -> Result<User, RemoteError> {
        let mut request = self
            .client
            .client
            .put(self.client.user_url(id.value()))
            .query(&ProfileQueryDto::from(update));

        if let Some(path) = &update.photo_path {
            request = request.multipart(Self::photo_form(path).await?);
        }

        let response = send(request).await?;
        let dto: UserDto = json_body(response).await?;
        dto.into_domain()
    }
}
