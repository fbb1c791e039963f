//! Device-facing presentation: the simulated LCD, coin acceptor, and
//! delivery motor.

mod console;

pub use console::ConsoleDevice;

use crate::machine::MachineView;

/// Rendering surface the shell drives. Machine state is always mutated
/// before any of these run, so however long an animation takes, the state
/// it renders is already consistent.
#[allow(async_fn_in_trait)]
pub trait DeviceOutput {
    /// Full idle frame: banner, catalog table, credit display, controls.
    async fn show_catalog(&self, view: &MachineView);

    /// Two-line LCD message.
    async fn show_message(&self, line1: &str, line2: Option<&str>);

    /// Coin-accepted acknowledgement effect.
    async fn coin_accepted(&self);

    /// Delivery animation for a dispensed product.
    async fn dispense(&self, product_name: &str);
}
