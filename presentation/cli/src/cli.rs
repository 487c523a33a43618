use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command-line client for the shoe shop.
#[derive(Debug, Parser)]
#[command(name = "shop", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and remember the user
    Login {
        #[arg(long)]
        login: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register(RegisterArgs),
    /// Forget the signed-in user
    Logout,
    #[command(subcommand)]
    Profile(ProfileCommand),
    #[command(subcommand)]
    Products(ProductsCommand),
    #[command(subcommand)]
    Basket(BasketCommand),
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub login: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub surname: String,
    #[arg(long)]
    pub patronymic: Option<String>,
    /// Confirms the terms of service
    #[arg(long)]
    pub accept_terms: bool,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Reload and print the signed-in user
    Show,
    /// Change profile fields; omitted fields keep their current value
    Update(ProfileUpdateArgs),
}

#[derive(Debug, Args)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub login: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub surname: Option<String>,
    #[arg(long)]
    pub patronymic: Option<String>,
    /// Image file to upload as the avatar
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ProductsCommand {
    List,
    Show { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum BasketCommand {
    /// Fetch and print the basket
    Show,
    Add { product_id: i64 },
    Remove { product_id: i64 },
    /// Interactive session that keeps the basket in memory
    Shell,
}
