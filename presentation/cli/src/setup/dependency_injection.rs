use std::sync::Arc;

use logger::TracingLogger;
use session::file_store::FileSessionStore;
use shop_api::account_service::AccountServiceHttp;
use shop_api::basket_service::BasketServiceHttp;
use shop_api::client::ShopApiClient;
use shop_api::product_catalog::ProductCatalogHttp;

use business::application::basket::store::BasketStore;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::user::get_profile::GetProfileUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::logout::LogoutUseCaseImpl;
use business::application::user::register::RegisterUseCaseImpl;
use business::application::user::update_profile::UpdateProfileUseCaseImpl;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::user::session::SessionStore;
use business::domain::user::use_cases::get_profile::GetProfileUseCase;
use business::domain::user::use_cases::login::LoginUseCase;
use business::domain::user::use_cases::logout::LogoutUseCase;
use business::domain::user::use_cases::register::RegisterUseCase;
use business::domain::user::use_cases::update_profile::UpdateProfileUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub session: Arc<dyn SessionStore>,
    pub basket: Arc<BasketStore>,
    pub get_all_products: Arc<dyn GetAllProductsUseCase>,
    pub get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    pub login: Arc<dyn LoginUseCase>,
    pub register: Arc<dyn RegisterUseCase>,
    pub get_profile: Arc<dyn GetProfileUseCase>,
    pub update_profile: Arc<dyn UpdateProfileUseCase>,
    pub logout: Arc<dyn LogoutUseCase>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client = ShopApiClient::new(&config.api.base_url, config.api.timeout);
        let session = Arc::new(FileSessionStore::open(config.session.file.clone()).await);
        let basket_service = Arc::new(BasketServiceHttp::new(client.clone()));
        let catalog = Arc::new(ProductCatalogHttp::new(client.clone()));
        let accounts = Arc::new(AccountServiceHttp::new(client));

        tracing::debug!(
            "Using shop backend {} and session file {}",
            config.api.base_url,
            session.path().display()
        );

        // Basket
        let basket = Arc::new(BasketStore::new(
            basket_service,
            session.clone(),
            logger.clone(),
        ));

        // Catalog use cases
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id = Arc::new(GetProductByIdUseCaseImpl {
            catalog,
            logger: logger.clone(),
        });

        // Account use cases
        let login = Arc::new(LoginUseCaseImpl {
            accounts: accounts.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let register = Arc::new(RegisterUseCaseImpl {
            accounts: accounts.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let get_profile = Arc::new(GetProfileUseCaseImpl {
            accounts: accounts.clone(),
            session: session.clone(),
            logger: logger.clone(),
        });
        let update_profile = Arc::new(UpdateProfileUseCaseImpl {
            accounts,
            session: session.clone(),
            logger: logger.clone(),
        });
        let logout = Arc::new(LogoutUseCaseImpl {
            session: session.clone(),
            logger,
        });

        Self {
            session,
            basket,
            get_all_products,
            get_product_by_id,
            login,
            register,
            get_profile,
            update_profile,
            logout,
        }
    }
}
