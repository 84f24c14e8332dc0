//! Handler registry.
//!
//! The router never instantiates handlers. It only asks whether a handler
//! exists at a symbolic address and, if so, what parameters it declares.
//! Any table that can answer that is a [`HandlerRegistry`].

use std::collections::BTreeMap;

use crate::routing::route::HandlerAddress;
use crate::routing::signature::Signature;

/// Lookup of handler signatures by address.
pub trait HandlerRegistry: Send + Sync {
    /// The signature of the handler at `address`, if one is registered.
    fn lookup(&self, address: &HandlerAddress) -> Option<&Signature>;

    fn contains(&self, address: &HandlerAddress) -> bool {
        self.lookup(address).is_some()
    }
}

/// Registry backed by a static table, populated once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticRegistry {
    handlers: BTreeMap<HandlerAddress, Signature>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a handler, replacing any previous one at the same address.
    pub fn register(mut self, address: HandlerAddress, signature: Signature) -> Self {
        self.insert(address, signature);
        self
    }

    pub fn insert(&mut self, address: HandlerAddress, signature: Signature) -> Option<Signature> {
        self.handlers.insert(address, signature)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Registered handlers in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&HandlerAddress, &Signature)> {
        self.handlers.iter()
    }
}

impl HandlerRegistry for StaticRegistry {
    fn lookup(&self, address: &HandlerAddress) -> Option<&Signature> {
        self.handlers.get(address)
    }
}

impl FromIterator<(HandlerAddress, Signature)> for StaticRegistry {
    fn from_iter<T: IntoIterator<Item = (HandlerAddress, Signature)>>(iter: T) -> Self {
        Self {
            handlers: iter.into_iter().collect(),
        }
    }
}

impl<R: HandlerRegistry + ?Sized> HandlerRegistry for &R {
    fn lookup(&self, address: &HandlerAddress) -> Option<&Signature> {
        (**self).lookup(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let address = HandlerAddress::new("Project::Http::Ping", "PostAction");
        let registry = StaticRegistry::new().register(address.clone(), Signature::empty());

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&address));
        assert_eq!(registry.lookup(&address), Some(&Signature::empty()));
        assert!(!registry.contains(&HandlerAddress::new("Project::Http::Ping", "GetAction")));
    }

    #[test]
    fn test_insert_replaces() {
        let address = HandlerAddress::new("App::Home", "GetAction");
        let mut registry = StaticRegistry::new();
        assert!(registry.insert(address.clone(), Signature::empty()).is_none());
        assert!(registry.insert(address, Signature::empty()).is_some());
        assert_eq!(registry.len(), 1);
    }
}
