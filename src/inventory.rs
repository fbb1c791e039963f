use crate::domain::{Category, Money, Product};
use crate::machine::VendError;

/// The machine's catalog: an ordered product list, loaded once at startup
/// and never resized afterwards. Insertion order is the display order.
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The catalog the machine ships with.
    pub fn seed() -> Self {
        Self::new(vec![
            Product::new(10, "Coca-Cola Zero", Money::from_cents(120), 5, Category::Drink),
            Product::new(11, "Peach Ice Tea", Money::from_cents(140), 4, Category::Drink),
            Product::new(12, "Mineral Water", Money::from_cents(80), 8, Category::Drink),
            Product::new(20, "Kinder Bueno", Money::from_cents(110), 6, Category::Snack),
            Product::new(21, "M&Ms Peanut", Money::from_cents(130), 3, Category::Snack),
            Product::new(22, "Plain Crisps", Money::from_cents(100), 2, Category::Snack),
            Product::new(30, "USB-C Cable", Money::from_cents(550), 2, Category::Tech),
            Product::new(31, "Earbuds", Money::from_cents(800), 1, Category::Tech),
        ])
    }

    pub fn find(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Takes one unit off the shelf. The stock check lives with the mutation,
    /// so no caller can drive stock below zero.
    pub fn decrement_stock(&mut self, id: u32) -> Result<(), VendError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(VendError::UnknownProduct(id))?;

        if product.stock == 0 {
            return Err(VendError::OutOfStock(product.name.clone()));
        }
        product.stock -= 1;
        Ok(())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
