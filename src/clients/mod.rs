use tokio::sync::mpsc;
use tracing::{debug, instrument};

use crate::domain::{Denomination, Money};
use crate::machine::{Dispensed, MachineView, Refund, VendError};
use crate::messages::MachineRequest;

/// Generate client methods with the oneshot channel boilerplate and
/// automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, VendError> {
                debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| VendError::ChannelClosed("machine service closed".to_string()))?;

                response.await.map_err(|_| VendError::ChannelClosed("machine service dropped".to_string()))?
            }
        }
    };
}

/// Handle for talking to the machine actor. Thin and cloneable; all state
/// lives behind the channel.
#[derive(Clone)]
pub struct MachineClient {
    sender: mpsc::Sender<MachineRequest>,
}

impl MachineClient {
    pub fn new(sender: mpsc::Sender<MachineRequest>) -> Self {
        Self { sender }
    }

    /// Fire-and-forget; the service stops after draining its mailbox.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), VendError> {
        debug!("Sending shutdown request");
        self.sender
            .send(MachineRequest::Shutdown)
            .await
            .map_err(|_| VendError::ChannelClosed("machine service closed".to_string()))
    }
}

client_method!(MachineClient => fn insert_coin(denomination: Denomination) -> Money as MachineRequest::InsertCoin);
client_method!(MachineClient => fn request_refund() -> Refund as MachineRequest::Refund);
client_method!(MachineClient => fn request_purchase(product_id: u32) -> Dispensed as MachineRequest::Purchase);
client_method!(MachineClient => fn snapshot() -> MachineView as MachineRequest::Snapshot);
