use std::sync::Arc;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

use super::errors::BasketError;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::{BasketLineId, ProductId, UserId};

/// One product entry in a user's basket.
///
/// `quantity` is private so it can never drop below 1: a line at quantity 1
/// refuses to decrement and must be removed through the remote service.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketLine {
    pub id: BasketLineId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub product: Arc<Product>,
    quantity: u32,
}

pub struct NewBasketLineProps {
    pub id: BasketLineId,
    pub product_id: ProductId,
    pub user_id: UserId,
    pub product: Arc<Product>,
    /// Missing quantities default to a single unit.
    pub quantity: Option<u32>,
}

impl BasketLine {
    pub fn new(props: NewBasketLineProps) -> Result<Self, BasketError> {
        let quantity = props.quantity.unwrap_or(1);
        if quantity == 0 {
            return Err(BasketError::InvalidQuantity);
        }

        Ok(Self {
            id: props.id,
            product_id: props.product_id,
            user_id: props.user_id,
            product: props.product,
            quantity,
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> BigDecimal {
        self.product.price.clone() * BigDecimal::from(self.quantity)
    }

    fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    fn try_decrement(&mut self) -> bool {
        if self.quantity <= 1 {
            return false;
        }
        self.quantity -= 1;
        true
    }
}

/// Outcome of a local quantity decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityDecrease {
    Decremented,
    /// The line is at quantity 1; the product has to leave the basket.
    RemovalRequired(ProductId),
    LineNotFound,
}

/// The in-memory basket at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketSnapshot {
    lines: Vec<BasketLine>,
    total: BigDecimal,
    synced_at: Option<DateTime<Utc>>,
    locally_modified: bool,
}

impl BasketSnapshot {
    pub fn empty() -> Self {
        Self {
            lines: Vec::new(),
            total: BigDecimal::zero(),
            synced_at: None,
            locally_modified: false,
        }
    }

    /// Builds the snapshot from an authoritative server listing.
    pub fn synced(lines: Vec<BasketLine>, synced_at: DateTime<Utc>) -> Self {
        let mut snapshot = Self {
            lines,
            total: BigDecimal::zero(),
            synced_at: Some(synced_at),
            locally_modified: false,
        };
        snapshot.recompute_total();
        snapshot
    }

    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    pub fn line(&self, id: BasketLineId) -> Option<&BasketLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn total(&self) -> &BigDecimal {
        &self.total
    }

    /// When the lines were last replaced by a server listing.
    pub fn synced_at(&self) -> Option<DateTime<Utc>> {
        self.synced_at
    }

    /// True when quantities were edited locally after the last sync.
    pub fn is_locally_modified(&self) -> bool {
        self.locally_modified
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(BasketLine::quantity).sum()
    }

    /// Adds one unit to the line. Returns false when the line does not exist.
    pub fn increase(&mut self, id: BasketLineId) -> bool {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return false;
        };
        line.increment();
        self.locally_modified = true;
        self.recompute_total();
        true
    }

    pub fn decrease(&mut self, id: BasketLineId) -> QuantityDecrease {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return QuantityDecrease::LineNotFound;
        };
        if !line.try_decrement() {
            return QuantityDecrease::RemovalRequired(line.product_id);
        }
        self.locally_modified = true;
        self.recompute_total();
        QuantityDecrease::Decremented
    }

    fn recompute_total(&mut self) {
        self.total = self
            .lines
            .iter()
            .map(BasketLine::subtotal)
            .fold(BigDecimal::zero(), |acc, subtotal| acc + subtotal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::NewProductProps;
    use proptest::prelude::*;

    fn product(id: i64, price: i64) -> Arc<Product> {
        Arc::new(
            Product::new(NewProductProps {
                id: ProductId::new(id),
                price: BigDecimal::from(price),
                name: format!("Shoe {}", id),
                description: String::new(),
                photo: String::new(),
            })
            .unwrap(),
        )
    }

    fn line(id: i64, price: i64, quantity: u32) -> BasketLine {
        BasketLine::new(NewBasketLineProps {
            id: BasketLineId::new(id),
            product_id: ProductId::new(id * 10),
            user_id: UserId::new(5).unwrap(),
            product: product(id * 10, price),
            quantity: Some(quantity),
        })
        .unwrap()
    }

    fn expected_total(snapshot: &BasketSnapshot) -> BigDecimal {
        snapshot
            .lines()
            .iter()
            .map(|l| l.product.price.clone() * BigDecimal::from(l.quantity()))
            .fold(BigDecimal::zero(), |acc, s| acc + s)
    }

    #[test]
    fn should_default_missing_quantity_to_one() {
        let line = BasketLine::new(NewBasketLineProps {
            id: BasketLineId::new(1),
            product_id: ProductId::new(10),
            user_id: UserId::new(5).unwrap(),
            product: product(10, 100),
            quantity: None,
        })
        .unwrap();

        assert_eq!(line.quantity(), 1);
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = BasketLine::new(NewBasketLineProps {
            id: BasketLineId::new(1),
            product_id: ProductId::new(10),
            user_id: UserId::new(5).unwrap(),
            product: product(10, 100),
            quantity: Some(0),
        });

        assert!(matches!(result.unwrap_err(), BasketError::InvalidQuantity));
    }

    #[test]
    fn should_apply_quantity_to_synced_total() {
        let snapshot = BasketSnapshot::synced(vec![line(1, 1000, 2), line(2, 250, 3)], Utc::now());

        assert_eq!(*snapshot.total(), BigDecimal::from(2750));
        assert_eq!(snapshot.item_count(), 5);
        assert!(!snapshot.is_locally_modified());
    }

    #[test]
    fn should_start_empty_with_zero_total() {
        let snapshot = BasketSnapshot::empty();

        assert!(snapshot.is_empty());
        assert_eq!(*snapshot.total(), BigDecimal::zero());
        assert!(snapshot.synced_at().is_none());
    }

    #[test]
    fn should_increase_quantity_and_total() {
        let mut snapshot = BasketSnapshot::synced(vec![line(1, 1000, 1)], Utc::now());

        assert!(snapshot.increase(BasketLineId::new(1)));

        assert_eq!(snapshot.line(BasketLineId::new(1)).unwrap().quantity(), 2);
        assert_eq!(*snapshot.total(), BigDecimal::from(2000));
        assert!(snapshot.is_locally_modified());
    }

    #[test]
    fn should_ignore_increase_of_unknown_line() {
        let mut snapshot = BasketSnapshot::synced(vec![line(1, 1000, 1)], Utc::now());
        let before = snapshot.clone();

        assert!(!snapshot.increase(BasketLineId::new(99)));
        assert_eq!(snapshot, before);
    }

    #[test]
    fn should_decrement_by_exactly_one_when_above_one() {
        let mut snapshot = BasketSnapshot::synced(vec![line(1, 300, 3)], Utc::now());

        assert_eq!(
            snapshot.decrease(BasketLineId::new(1)),
            QuantityDecrease::Decremented
        );
        assert_eq!(snapshot.line(BasketLineId::new(1)).unwrap().quantity(), 2);
        assert_eq!(*snapshot.total(), BigDecimal::from(600));
    }

    #[test]
    fn should_require_removal_instead_of_reaching_zero() {
        let mut snapshot = BasketSnapshot::synced(vec![line(1, 300, 1)], Utc::now());

        assert_eq!(
            snapshot.decrease(BasketLineId::new(1)),
            QuantityDecrease::RemovalRequired(ProductId::new(10))
        );
        assert_eq!(snapshot.line(BasketLineId::new(1)).unwrap().quantity(), 1);
    }

    #[test]
    fn should_report_missing_line_on_decrease() {
        let mut snapshot = BasketSnapshot::empty();

        assert_eq!(
            snapshot.decrease(BasketLineId::new(1)),
            QuantityDecrease::LineNotFound
        );
    }

    proptest! {
        #[test]
        fn total_matches_price_times_quantity_after_increases(
            prices in proptest::collection::vec(0i64..100_000, 1..6),
            taps in proptest::collection::vec(0usize..6, 0..40),
        ) {
            let lines = prices
                .iter()
                .enumerate()
                .map(|(i, price)| line(i as i64 + 1, *price, 1))
                .collect();
            let mut snapshot = BasketSnapshot::synced(lines, Utc::now());

            for tap in taps {
                let id = BasketLineId::new((tap % prices.len()) as i64 + 1);
                snapshot.increase(id);
                prop_assert_eq!(snapshot.total().clone(), expected_total(&snapshot));
            }
        }

        #[test]
        fn quantity_never_drops_below_one(
            start in 1u32..10,
            decreases in 0usize..20,
        ) {
            let mut snapshot = BasketSnapshot::synced(vec![line(1, 100, start)], Utc::now());

            for _ in 0..decreases {
                snapshot.decrease(BasketLineId::new(1));
                prop_assert!(snapshot.line(BasketLineId::new(1)).unwrap().quantity() >= 1);
            }
        }
    }
}
