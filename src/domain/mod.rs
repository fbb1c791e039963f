//! Pure business data: money, denominations, products. No actor concerns.

pub mod money;
pub mod product;

pub use money::*;
pub use product::*;
