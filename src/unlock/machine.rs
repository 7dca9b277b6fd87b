use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::store::KeyValueStore;
use crate::error::{StoreError, UnlockError};

/// Set once the one-time free unlock has been spent
pub const FREE_UNLOCK_KEY: &str = "contact.free_unlock_used";
/// JSON list of property ids whose contact details are visible
pub const UNLOCKED_KEY: &str = "contact.unlocked_properties";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentReceipt {
    pub reference: String,
    pub property_id: String,
    pub amount: u64,
    pub paid_at: DateTime<Utc>,
}

/// Charges the fee for a paid unlock. An `Err` carries the decline reason.
pub trait PaymentGateway {
    fn charge(&mut self, property_id: &str, amount: u64) -> Result<PaymentReceipt, String>;
}

/// Gateway that approves every charge
#[derive(Debug, Default)]
pub struct SimulatedPayment {
    issued: u64,
}

impl PaymentGateway for SimulatedPayment {
    fn charge(&mut self, property_id: &str, amount: u64) -> Result<PaymentReceipt, String> {
        self.issued += 1;
        Ok(PaymentReceipt {
            reference: format!("sim-{:06}", self.issued),
            property_id: property_id.to_string(),
            amount,
            paid_at: Utc::now(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactState {
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UnlockOutcome {
    /// The one free unlock was spent on this property
    Free,
    Paid(PaymentReceipt),
    AlreadyUnlocked,
}

/// Per-property contact unlock workflow.
///
/// `Locked -> Free` at most once per store, `Locked -> Paid` afterwards.
/// Both end states simply mean the contact is visible; nothing ever relocks.
pub struct ContactUnlocker<S, P> {
    store: S,
    gateway: P,
    fee: u64,
    /// Charges whose unlock has not been saved yet, by property id
    unsaved: HashMap<String, PaymentReceipt>,
}

impl<S: KeyValueStore, P: PaymentGateway> ContactUnlocker<S, P> {
    pub fn new(store: S, gateway: P, fee: u64) -> Self {
        Self {
            store,
            gateway,
            fee,
            unsaved: HashMap::new(),
        }
    }

    pub fn fee(&self) -> u64 {
        self.fee
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn free_unlock_used(&self) -> Result<bool, StoreError> {
        match self.store.get(FREE_UNLOCK_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(false),
        }
    }

    pub fn unlocked_properties(&self) -> Result<Vec<String>, StoreError> {
        match self.store.get(UNLOCKED_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn state(&self, property_id: &str) -> Result<ContactState, StoreError> {
        if self.unlocked_properties()?.iter().any(|id| id == property_id) {
            Ok(ContactState::Unlocked)
        } else {
            Ok(ContactState::Locked)
        }
    }

    /// Reveals the contact for `property_id`, spending the free unlock if it
    /// is still available and charging the fee otherwise.
    ///
    /// A declined charge returns [`UnlockError::PaymentFailed`] and leaves the
    /// store untouched so the caller can retry. A charge that succeeds but
    /// cannot be saved returns [`UnlockError::Unrecorded`]; the next call for
    /// the same property saves it again without a second charge.
    pub fn unlock(&mut self, property_id: &str) -> Result<UnlockOutcome, UnlockError> {
        let mut unlocked = self.unlocked_properties()?;
        if unlocked.iter().any(|id| id == property_id) {
            self.unsaved.remove(property_id);
            return Ok(UnlockOutcome::AlreadyUnlocked);
        }

        unlocked.push(property_id.to_string());
        let list = serde_json::to_string(&unlocked).map_err(StoreError::from)?;

        if let Some(receipt) = self.unsaved.remove(property_id) {
            return self.record_paid(list, receipt);
        }

        if !self.free_unlock_used()? {
            self.store.set_many(&[
                (UNLOCKED_KEY, list),
                (FREE_UNLOCK_KEY, "true".to_string()),
            ])?;
            info!("contact for {} unlocked with the free allowance", property_id);
            return Ok(UnlockOutcome::Free);
        }

        let receipt = self.gateway.charge(property_id, self.fee).map_err(|reason| {
            warn!("payment for {} declined: {}", property_id, reason);
            UnlockError::PaymentFailed {
                property_id: property_id.to_string(),
                reason,
            }
        })?;

        self.record_paid(list, receipt)
    }

    fn record_paid(
        &mut self,
        list: String,
        receipt: PaymentReceipt,
    ) -> Result<UnlockOutcome, UnlockError> {
        match self.store.set(UNLOCKED_KEY, list) {
            Ok(()) => {
                info!(
                    "contact for {} unlocked, payment {}",
                    receipt.property_id, receipt.reference
                );
                Ok(UnlockOutcome::Paid(receipt))
            }
            Err(source) => {
                warn!(
                    "payment {} taken but unlock for {} not saved: {}",
                    receipt.reference, receipt.property_id, source
                );
                self.unsaved.insert(receipt.property_id.clone(), receipt.clone());
                Err(UnlockError::Unrecorded { receipt, source })
            }
        }
    }
}
