use business::domain::shared::value_objects::ProductId;

use super::error::IntoCliError;
use super::render::render_basket;
use super::shell;
use crate::cli::BasketCommand;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(container: &DependencyContainer, command: BasketCommand) -> anyhow::Result<()> {
    let basket = &container.basket;
    let result = match command {
        BasketCommand::Show => basket.fetch().await,
        BasketCommand::Add { product_id } => basket.add_to_basket(ProductId::new(product_id)).await,
        BasketCommand::Remove { product_id } => {
            basket.remove_from_basket(ProductId::new(product_id)).await
        }
        BasketCommand::Shell => return shell::run(basket.clone()).await,
    };
    result.map_err(IntoCliError::into_cli_error)?;

    print!("{}", render_basket(&basket.state()));
    Ok(())
}
