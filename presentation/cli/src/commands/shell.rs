use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};

use business::application::basket::store::BasketStore;
use business::domain::shared::value_objects::{BasketLineId, ProductId};

use super::render::render_basket;

const HELP: &str = "\
commands:
  show            print the basket
  fetch           reload the basket from the server
  add <product>   add a product
  remove <product> remove a product
  inc <line>      one more unit of a basket line
  dec <line>      one less unit (removes the product at 1)
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellCommand {
    Show,
    Fetch,
    Add(ProductId),
    Remove(ProductId),
    Increase(BasketLineId),
    Decrease(BasketLineId),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
enum ShellInputError {
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("'{0}' needs an id")]
    MissingId(String),
    #[error("'{0}' is not a number")]
    InvalidId(String),
}

impl FromStr for ShellCommand {
    type Err = ShellInputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let name = words.next().unwrap_or("show").to_ascii_lowercase();

        let mut id = || -> Result<i64, ShellInputError> {
            let raw = words
                .next()
                .ok_or_else(|| ShellInputError::MissingId(name.clone()))?;
            raw.parse()
                .map_err(|_| ShellInputError::InvalidId(raw.to_string()))
        };

        match name.as_str() {
            "show" | "ls" => Ok(ShellCommand::Show),
            "fetch" | "refresh" => Ok(ShellCommand::Fetch),
            "add" => Ok(ShellCommand::Add(ProductId::new(id()?))),
            "remove" | "rm" => Ok(ShellCommand::Remove(ProductId::new(id()?))),
            "inc" | "+" => Ok(ShellCommand::Increase(BasketLineId::new(id()?))),
            "dec" | "-" => Ok(ShellCommand::Decrease(BasketLineId::new(id()?))),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" | "q" => Ok(ShellCommand::Quit),
            _ => Err(ShellInputError::Unknown(name.clone())),
        }
    }
}

/// Line-driven basket session. The store lives for the whole session, so
/// local quantity edits stay visible until the next fetch.
pub async fn run(basket: Arc<BasketStore>) -> anyhow::Result<()> {
    let mut updates = basket.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let phase = updates.borrow_and_update().phase();
            tracing::debug!("Basket phase is now {:?}", phase);
        }
    });

    if let Err(e) = basket.fetch().await {
        println!("{}", e.user_message());
    }
    print!("{}", render_basket(&basket.state()));
    println!("Type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let outcome = match command {
            ShellCommand::Show => Ok(()),
            ShellCommand::Fetch => basket.fetch().await,
            ShellCommand::Add(product_id) => basket.add_to_basket(product_id).await,
            ShellCommand::Remove(product_id) => basket.remove_from_basket(product_id).await,
            ShellCommand::Increase(line_id) => {
                if !basket.increase_quantity(line_id) {
                    println!("No basket line {}", line_id);
                }
                Ok(())
            }
            ShellCommand::Decrease(line_id) => basket.decrease_quantity(line_id).await,
            ShellCommand::Help => {
                println!("{}", HELP);
                continue;
            }
            ShellCommand::Quit => break,
        };

        if let Err(e) = outcome {
            println!("{}", e.user_message());
        }
        print!("{}", render_basket(&basket.state()));
    }

    watcher.abort();
    Ok(())
}
