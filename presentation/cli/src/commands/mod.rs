mod account;
mod basket;
mod error;
mod products;
mod render;
mod shell;

use crate::cli::Command;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(command: Command, container: &DependencyContainer) -> anyhow::Result<()> {
    match command {
        Command::Login { login, password } => account::login(container, login, password).await,
        Command::Register(args) => account::register(container, args).await,
        Command::Logout => account::logout(container).await,
        Command::Profile(command) => account::profile(container, command).await,
        Command::Products(command) => products::run(container, command).await,
        Command::Basket(command) => basket::run(container, command).await,
    }
}
