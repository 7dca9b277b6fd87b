pub mod machine;
pub mod store;

pub use machine::{
    ContactState, ContactUnlocker, PaymentGateway, PaymentReceipt, SimulatedPayment, UnlockOutcome,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
