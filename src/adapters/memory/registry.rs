use crate::domain::{CardNumber, User};
use crate::ports::registry::Registry as RegistryTrait;
use std::collections::HashMap;

/// Registryのインメモリ実装
#[derive(Debug, Default)]
pub struct Registry {
    users: HashMap<CardNumber, User>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RegistryTrait for Registry {
    fn get_user(&self, card_number: &CardNumber) -> Option<&User> {
        self.users.get(card_number)
    }

    fn get_user_mut(&mut self, card_number: &CardNumber) -> Option<&mut User> {
        self.users.get_mut(card_number)
    }

    fn add_user(&mut self, user: User) {
        self.users.insert(user.card_number().clone(), user);
    }

    fn users(&self) -> Vec<&User> {
        self.users.values().collect()
    }
}
