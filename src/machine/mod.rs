//! The transaction state machine and the actor service that owns it.

pub mod controller;
pub mod error;
pub mod outcome;
pub mod service;

pub use controller::Controller;
pub use error::VendError;
pub use outcome::{Dispensed, MachineView, Refund};
pub use service::MachineService;
