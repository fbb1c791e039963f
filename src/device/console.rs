use std::io::Write;
use std::time::Duration;

use tokio::time::sleep;

use crate::domain::Denomination;
use crate::machine::MachineView;

use super::DeviceOutput;

mod color {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[1;31m";
    pub const GREEN: &str = "\x1b[1;32m";
    pub const YELLOW: &str = "\x1b[1;33m";
    pub const BLUE: &str = "\x1b[1;34m";
    pub const MAGENTA: &str = "\x1b[1;35m";
    pub const CYAN: &str = "\x1b[1;36m";
    pub const GRAY: &str = "\x1b[1;90m";
}

/// ANSI console renderer. Clears the screen for each idle frame and
/// simulates the cabinet's LCD, coin acceptor, and delivery motor, delays
/// included.
pub struct ConsoleDevice;

impl ConsoleDevice {
    pub fn new() -> Self {
        Self
    }

    fn clear_screen(&self) {
        print!("\x1b[2J\x1b[1;1H");
    }

    fn draw_header(&self) {
        println!("{}╔═══════════════════════════════════════════════╗", color::GREEN);
        println!("║                 VENDOMAT 3000                 ║");
        println!("╚═══════════════════════════════════════════════╝{}", color::RESET);
    }

    fn draw_catalog_table(&self, view: &MachineView) {
        println!("  ID  | TYPE      | NAME            | PRICE     | STOCK");
        println!("  ----+-----------+-----------------+-----------+-------");

        for item in &view.products {
            let (stock_color, stock_text) = if item.in_stock() {
                (color::GREEN, item.stock.to_string())
            } else {
                (color::RED, "SOLD OUT".to_string())
            };

            println!(
                "  {}{:>3}{} | {} | {:<15} | {}{:>9}{} | {}{}{}",
                color::CYAN,
                item.id,
                color::RESET,
                item.category.label(),
                item.name,
                color::YELLOW,
                item.price.to_string(),
                color::RESET,
                stock_color,
                stock_text,
                color::RESET,
            );
        }
        println!();
    }

    fn draw_controls(&self) {
        let coins = Denomination::ALL
            .iter()
            .enumerate()
            .map(|(i, d)| format!("{} = {}", i + 1, d.value()))
            .collect::<Vec<_>>()
            .join(", ");

        println!("  [COINS]  : {coins}");
        println!("  [ACTION] : type a product id to buy");
        println!("  [SYSTEM] : 99 = refund / 0 = quit");
        print!("{}  Your choice > {}", color::GRAY, color::RESET);
        let _ = std::io::stdout().flush();
    }

    fn lcd_frame(&self, line1: &str, line2: Option<&str>) {
        println!();
        println!("{}  [LCD] ┌───────────────────────────────────────┐{}", color::BLUE, color::RESET);
        println!(
            "{}  [LCD] │ {}{:<37}{} │{}",
            color::BLUE,
            color::YELLOW,
            line1,
            color::BLUE,
            color::RESET
        );
        if let Some(line2) = line2 {
            println!(
                "{}  [LCD] │ {}{:<37}{} │{}",
                color::BLUE,
                color::YELLOW,
                line2,
                color::BLUE,
                color::RESET
            );
        }
        println!("{}  [LCD] └───────────────────────────────────────┘{}", color::BLUE, color::RESET);
        println!();
    }
}

impl Default for ConsoleDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceOutput for ConsoleDevice {
    async fn show_catalog(&self, view: &MachineView) {
        self.clear_screen();
        self.draw_header();
        self.draw_catalog_table(view);
        self.lcd_frame(
            "Please choose a product",
            Some(&format!("CREDIT : {}", view.credit)),
        );
        self.draw_controls();
    }

    async fn show_message(&self, line1: &str, line2: Option<&str>) {
        self.lcd_frame(line1, line2);
        sleep(Duration::from_millis(1600)).await;
    }

    async fn coin_accepted(&self) {
        println!("{}  (Clink! Coin accepted...){}", color::GRAY, color::RESET);
        sleep(Duration::from_millis(300)).await;
    }

    async fn dispense(&self, product_name: &str) {
        println!("{}  [MOTOR] Delivering: {}{}", color::MAGENTA, product_name, color::RESET);
        print!("  ");
        let _ = std::io::stdout().flush();

        for _ in 0..20 {
            print!("▓");
            let _ = std::io::stdout().flush();
            sleep(Duration::from_millis(100)).await;
        }
        println!(" OK!");
        sleep(Duration::from_millis(500)).await;

        println!("{}  >>> CLUNK! The product dropped into the tray. <<<{}", color::GREEN, color::RESET);
        sleep(Duration::from_millis(1500)).await;
    }
}
