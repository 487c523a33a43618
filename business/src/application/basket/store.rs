use std::sync::Arc;

use chrono::Utc;
use tokio::sync::{Mutex, watch};

use crate::domain::basket::errors::BasketError;
use crate::domain::basket::model::{BasketSnapshot, QuantityDecrease};
use crate::domain::basket::service::BasketService;
use crate::domain::basket::state::BasketState;
use crate::domain::errors::RemoteError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::{BasketLineId, ProductId, UserId};
use crate::domain::user::session::SessionProvider;

/// Client-side basket for the signed-in user.
///
/// Quantity edits are applied locally and never sent to the server; the next
/// authoritative fetch replaces them. Add, remove and fetch go through the
/// remote service and are serialized by a FIFO gate, so overlapping calls
/// land in the order they were issued.
///
/// State is published on a watch channel; every operation also returns its
/// error so callers can branch on it directly.
pub struct BasketStore {
    service: Arc<dyn BasketService>,
    session: Arc<dyn SessionProvider>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<BasketState>,
    remote_gate: Mutex<()>,
}

impl BasketStore {
    pub fn new(
        service: Arc<dyn BasketService>,
        session: Arc<dyn SessionProvider>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (state, _) = watch::channel(BasketState::new());
        Self {
            service,
            session,
            logger,
            state,
            remote_gate: Mutex::new(()),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<BasketState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> BasketState {
        self.state.borrow().clone()
    }

    /// Replaces the snapshot with the server's listing.
    ///
    /// On failure the previous snapshot is kept as is.
    pub async fn fetch(&self) -> Result<(), BasketError> {
        let user_id = self.require_user()?;
        let _turn = self.remote_gate.lock().await;

        self.begin_remote();
        let result = self.sync(user_id).await;
        self.finish_remote(&result);
        result
    }

    /// Adds one unit to a line, locally only. Returns false when the line is unknown.
    ///
    /// A successful edit clears the error left by an earlier operation.
    pub fn increase_quantity(&self, line_id: BasketLineId) -> bool {
        let mut changed = false;
        self.state.send_if_modified(|state| {
            changed = state.snapshot.increase(line_id);
            if changed {
                state.error = None;
            }
            changed
        });

        if changed {
            self.logger
                .debug(&format!("Increased quantity of basket line {}", line_id));
        } else {
            self.logger
                .debug(&format!("Basket line {} not found, nothing to increase", line_id));
        }
        changed
    }

    /// Removes one unit from a line; a line at quantity 1 is removed remotely instead.
    pub async fn decrease_quantity(&self, line_id: BasketLineId) -> Result<(), BasketError> {
        let mut outcome = QuantityDecrease::LineNotFound;
        self.state.send_if_modified(|state| {
            outcome = state.snapshot.decrease(line_id);
            let decremented = outcome == QuantityDecrease::Decremented;
            if decremented {
                state.error = None;
            }
            decremented
        });

        match outcome {
            QuantityDecrease::Decremented => {
                self.logger
                    .debug(&format!("Decreased quantity of basket line {}", line_id));
                Ok(())
            }
            QuantityDecrease::RemovalRequired(product_id) => {
                self.logger.info(&format!(
                    "Basket line {} is at quantity 1, removing product {}",
                    line_id, product_id
                ));
                self.remove_from_basket(product_id).await
            }
            QuantityDecrease::LineNotFound => {
                self.logger
                    .debug(&format!("Basket line {} not found, nothing to decrease", line_id));
                Ok(())
            }
        }
    }

    pub async fn add_to_basket(&self, product_id: ProductId) -> Result<(), BasketError> {
        let user_id = self.require_user()?;
        let _turn = self.remote_gate.lock().await;

        self.begin_remote();
        self.logger.info(&format!(
            "Adding product {} to basket of user {}",
            product_id, user_id
        ));
        let result = match self.service.add(user_id, product_id).await {
            Ok(()) => self.sync(user_id).await,
            Err(RemoteError::AlreadyInBasket) => {
                self.logger
                    .warn(&format!("Product {} is already in the basket", product_id));
                Err(BasketError::AlreadyInBasket)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to add product {}: {:?}", product_id, e));
                Err(BasketError::AddFailed(e))
            }
        };
        self.finish_remote(&result);
        result
    }

    pub async fn remove_from_basket(&self, product_id: ProductId) -> Result<(), BasketError> {
        let user_id = self.require_user()?;
        let _turn = self.remote_gate.lock().await;

        self.begin_remote();
        self.logger.info(&format!(
            "Removing product {} from basket of user {}",
            product_id, user_id
        ));
        let result = match self.service.remove(user_id, product_id).await {
            Ok(()) => self.sync(user_id).await,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to remove product {}: {:?}", product_id, e));
                Err(BasketError::RemoveFailed(e))
            }
        };
        self.finish_remote(&result);
        result
    }

    /// Drops the snapshot and any error, e.g. on logout.
    pub fn clear(&self) {
        self.state.send_replace(BasketState::new());
    }

    fn require_user(&self) -> Result<UserId, BasketError> {
        match self.session.current_user_id() {
            Some(user_id) => Ok(user_id),
            None => {
                self.logger.warn("Basket operation without a signed-in user");
                self.state.send_modify(|state| {
                    state.error = Some(BasketError::NotAuthenticated);
                });
                Err(BasketError::NotAuthenticated)
            }
        }
    }

    /// Must be called while holding the remote gate.
    async fn sync(&self, user_id: UserId) -> Result<(), BasketError> {
        let lines = self.service.get_all(user_id).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to load basket of user {}: {:?}", user_id, e));
            BasketError::LoadFailed(e)
        })?;

        self.logger
            .info(&format!("Loaded {} basket lines", lines.len()));
        let snapshot = BasketSnapshot::synced(lines, Utc::now());
        self.state.send_modify(|state| state.snapshot = snapshot);
        Ok(())
    }

    fn begin_remote(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    fn finish_remote(&self, result: &Result<(), BasketError>) {
        self.state.send_modify(|state| {
            state.is_loading = false;
            if let Err(e) = result {
                state.error = Some(e.clone());
            }
        });
    }
}
