use tracing::{error, info, instrument};

use crate::clients::MachineClient;
use crate::inventory::Inventory;
use crate::machine::{MachineService, VendError};

/// Owns the machine actor's lifecycle.
///
/// Responsible for starting the service, handing out its client, and
/// handling shutdown.
pub struct VendingSystem {
    pub machine_client: MachineClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl VendingSystem {
    #[instrument(name = "vending_system")]
    pub fn new() -> Self {
        Self::with_inventory(Inventory::seed())
    }

    /// Start the system over a custom catalog. Tests use this to set up
    /// specific stock situations.
    pub fn with_inventory(inventory: Inventory) -> Self {
        let mut handles = Vec::new();

        info!("Starting vending system");

        let (service, machine_client) = MachineService::new(32, inventory);
        handles.push(tokio::spawn(service.run()));

        info!("Vending system started");

        Self {
            machine_client,
            handles,
        }
    }

    /// Gracefully stop the machine actor and wait for it to drain.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), VendError> {
        info!("Shutting down vending system");

        let _ = self.machine_client.shutdown().await;

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
            }
        }

        info!("Vending system shutdown complete");
        Ok(())
    }
}

impl Default for VendingSystem {
    fn default() -> Self {
        Self::new()
    }
}
