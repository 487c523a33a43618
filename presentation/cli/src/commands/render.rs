use std::fmt::Write;

use bigdecimal::{BigDecimal, RoundingMode};

use business::domain::basket::state::{BasketPhase, BasketState};
use business::domain::product::model::Product;
use business::domain::user::model::User;

fn price(value: &BigDecimal) -> String {
    value.with_scale_round(2, RoundingMode::HalfUp).to_string()
}

pub fn render_products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products".to_string();
    }

    let mut out = String::new();
    for product in products {
        let _ = writeln!(out, "{:>5}  {:<30} {:>10}", product.id.value(), product.name, price(&product.price));
    }
    out
}

pub fn render_product(product: &Product) -> String {
    let mut out = format!("#{} {}\nPrice: {}\n", product.id.value(), product.name, price(&product.price));
    if !product.description.is_empty() {
        let _ = writeln!(out, "{}", product.description);
    }
    if !product.photo.is_empty() {
        let _ = writeln!(out, "Photo: {}", product.photo);
    }
    out
}

pub fn render_user(user: &User) -> String {
    let mut out = format!("#{} {} ({})\n", user.id, user.full_name(), user.login);
    if let Some(photo) = &user.photo {
        let _ = writeln!(out, "Photo: {}", photo);
    }
    out
}

pub fn render_basket(state: &BasketState) -> String {
    let snapshot = &state.snapshot;
    let mut out = String::new();

    match state.phase() {
        BasketPhase::Loading => out.push_str("Basket is loading...\n"),
        BasketPhase::Empty => out.push_str("Basket not loaded yet\n"),
        BasketPhase::Loaded | BasketPhase::Failed => {
            if snapshot.is_empty() {
                out.push_str("Basket is empty\n");
            }
        }
    }

    for line in snapshot.lines() {
        let _ = writeln!(
            out,
            "  [{}] {} (product {})  {} x {} = {}",
            line.id,
            line.product.name,
            line.product_id,
            price(&line.product.price),
            line.quantity(),
            price(&line.subtotal())
        );
    }

    if !snapshot.is_empty() {
        let _ = writeln!(
            out,
            "Total: {} ({} items)",
            price(snapshot.total()),
            snapshot.item_count()
        );
    }
    if snapshot.is_locally_modified() {
        out.push_str("Quantities changed locally, not saved on the server\n");
    }
    if let Some(synced_at) = snapshot.synced_at() {
        let _ = writeln!(out, "Synced at {}", synced_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    if let Some(error) = &state.error {
        let _ = writeln!(out, "Error: {}", error.user_message());
    }
    out
}
