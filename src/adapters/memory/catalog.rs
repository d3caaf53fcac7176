use crate::domain::{Item, ItemId};
use crate::ports::catalog::Catalog as CatalogTrait;
use std::collections::HashMap;

/// Catalogのインメモリ実装
///
/// プロセス内でのみ保持し、永続化はしない。
#[derive(Debug, Default)]
pub struct Catalog {
    items: HashMap<ItemId, Item>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CatalogTrait for Catalog {
    fn get_item(&self, item_id: &ItemId) -> Option<&Item> {
        self.items.get(item_id)
    }

    fn get_item_mut(&mut self, item_id: &ItemId) -> Option<&mut Item> {
        self.items.get_mut(item_id)
    }

    fn add_item(&mut self, item: Item) {
        self.items.insert(item.id().clone(), item);
    }

    fn items(&self) -> Vec<&Item> {
        self.items.values().collect()
    }
}
