use super::money::Money;

/// Display grouping for catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Drink,
    Snack,
    Tech,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Category::Drink => "[ Drink ]",
            Category::Snack => "[ Snack ]",
            Category::Tech => "[ Tech  ]",
        }
    }
}

/// A catalog entry. `stock` is the only field that changes after startup,
/// and only through `Inventory::decrement_stock`.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Money,
    pub stock: u32,
    pub category: Category,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        stock: u32,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            stock,
            category,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
