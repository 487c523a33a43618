use super::errors::BasketError;
use super::model::BasketSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketPhase {
    Empty,
    Loading,
    Loaded,
    Failed,
}

/// Observable basket state: data plus the loading and error flags a UI renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketState {
    pub snapshot: BasketSnapshot,
    pub is_loading: bool,
    pub error: Option<BasketError>,
}

impl BasketState {
    pub fn new() -> Self {
        Self {
            snapshot: BasketSnapshot::empty(),
            is_loading: false,
            error: None,
        }
    }

    pub fn phase(&self) -> BasketPhase {
        if self.is_loading {
            BasketPhase::Loading
        } else if self.error.is_some() {
            BasketPhase::Failed
        } else if self.snapshot.synced_at().is_some() {
            BasketPhase::Loaded
        } else {
            BasketPhase::Empty
        }
    }
}

impl Default for BasketState {
    fn default() -> Self {
        Self::new()
    }
}
