use tokio::sync::oneshot;

use crate::domain::{Denomination, Money};
use crate::machine::{Dispensed, MachineView, Refund, VendError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the machine actor. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum MachineRequest {
    InsertCoin {
        denomination: Denomination,
        respond_to: ServiceResponse<Money, VendError>,
    },
    Refund {
        respond_to: ServiceResponse<Refund, VendError>,
    },
    Purchase {
        product_id: u32,
        respond_to: ServiceResponse<Dispensed, VendError>,
    },
    Snapshot {
        respond_to: ServiceResponse<MachineView, VendError>,
    },
    Shutdown,
}
