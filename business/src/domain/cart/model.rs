/// Session cart. Only counts items; there are no line items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cart {
    item_count: u32,
}

impl Cart {
    pub fn with_items(item_count: u32) -> Self {
        Self { item_count }
    }

    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn add_item(&mut self) -> u32 {
        self.item_count = self.item_count.saturating_add(1);
        self.item_count
    }
}
