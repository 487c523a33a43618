use business::domain::product::use_cases::get_by_id::GetProductByIdParams;
use business::domain::shared::value_objects::ProductId;

use super::error::IntoCliError;
use super::render::{render_product, render_products};
use crate::cli::ProductsCommand;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(container: &DependencyContainer, command: ProductsCommand) -> anyhow::Result<()> {
    match command {
        ProductsCommand::List => {
            let products = container
                .get_all_products
                .execute()
                .await
                .map_err(IntoCliError::into_cli_error)?;
            print!("{}", render_products(&products));
        }
        ProductsCommand::Show { id } => {
            let product = container
                .get_product_by_id
                .execute(GetProductByIdParams {
                    id: ProductId::new(id),
                })
                .await
                .map_err(IntoCliError::into_cli_error)?;
            print!("{}", render_product(&product));
        }
    }
    Ok(())
}
