use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::MachineClient;
use crate::domain::{Denomination, Money};
use crate::inventory::Inventory;
use crate::messages::{MachineRequest, ServiceResponse};

use super::controller::Controller;
use super::error::VendError;
use super::outcome::{Dispensed, MachineView, Refund};

/// The machine actor. Owns the controller and serializes every operation
/// through its mailbox: each check-then-act sequence runs to completion
/// before the next request is picked up.
pub struct MachineService {
    receiver: mpsc::Receiver<MachineRequest>,
    controller: Controller,
}

impl MachineService {
    pub fn new(buffer_size: usize, inventory: Inventory) -> (Self, MachineClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            controller: Controller::new(inventory),
        };
        let client = MachineClient::new(sender);
        (service, client)
    }

    #[instrument(name = "machine_service", skip(self))]
    pub async fn run(mut self) {
        info!("MachineService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MachineRequest::InsertCoin {
                    denomination,
                    respond_to,
                } => {
                    self.handle_insert_coin(denomination, respond_to);
                }
                MachineRequest::Refund { respond_to } => {
                    self.handle_refund(respond_to);
                }
                MachineRequest::Purchase {
                    product_id,
                    respond_to,
                } => {
                    self.handle_purchase(product_id, respond_to);
                }
                MachineRequest::Snapshot { respond_to } => {
                    self.handle_snapshot(respond_to);
                }
                MachineRequest::Shutdown => {
                    info!("MachineService shutting down");
                    break;
                }
            }
        }

        info!("MachineService stopped");
    }

    #[instrument(fields(denomination = ?denomination), skip(self, respond_to))]
    fn handle_insert_coin(
        &mut self,
        denomination: Denomination,
        respond_to: ServiceResponse<Money, VendError>,
    ) {
        debug!("Processing insert_coin request");

        let total = self.controller.insert_coin(denomination);
        info!(credit = %total, "Coin accepted");

        let _ = respond_to.send(Ok(total));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_refund(&mut self, respond_to: ServiceResponse<Refund, VendError>) {
        debug!("Processing refund request");

        let refund = self.controller.refund();
        match refund {
            Refund::Returned(amount) => info!(amount = %amount, "Credit returned"),
            Refund::NothingToRefund => debug!("No credit to return"),
        }

        let _ = respond_to.send(Ok(refund));
    }

    #[instrument(fields(product_id = %product_id), skip(self, respond_to))]
    fn handle_purchase(
        &mut self,
        product_id: u32,
        respond_to: ServiceResponse<Dispensed, VendError>,
    ) {
        debug!("Processing purchase request");

        let result = self.controller.purchase(product_id);
        match &result {
            Ok(dispensed) => info!(
                product_name = %dispensed.product_name,
                remaining_credit = %dispensed.remaining_credit,
                "Product dispensed"
            ),
            Err(e) => warn!(error = %e, "Purchase rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_snapshot(&self, respond_to: ServiceResponse<MachineView, VendError>) {
        debug!(credit = %self.controller.credit(), "Processing snapshot request");

        let _ = respond_to.send(Ok(self.controller.view()));
    }
}
