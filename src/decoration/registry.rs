//! Registry of decoration providers.

use std::fmt;
use tracing::{debug, trace, warn};

use super::{Decoration, DecorationProvider, DecorationRange};
use crate::parser::Parser;

/// Handle returned by [`DecorationRegistry::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProviderId(u64);

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider#{}", self.0)
    }
}

/// Ordered set of providers run against one document.
#[derive(Default)]
pub struct DecorationRegistry {
    providers: Vec<(ProviderId, Box<dyn DecorationProvider>)>,
    next_id: u64,
}

impl fmt::Debug for DecorationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.providers
                    .iter()
                    .map(|(id, provider)| (id, provider.name())),
            )
            .finish()
    }
}

impl DecorationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider. Providers run in registration order.
    pub fn add<P>(&mut self, provider: P) -> ProviderId
    where
        P: DecorationProvider + 'static,
    {
        let id = ProviderId(self.next_id);
        self.next_id += 1;
        debug!(%id, name = provider.name(), "Registered decoration provider");
        self.providers.push((id, Box::new(provider)));
        id
    }

    /// Unregister a provider. Returns false if `id` is unknown.
    pub fn remove(&mut self, id: ProviderId) -> bool {
        let before = self.providers.len();
        self.providers.retain(|(existing, _)| *existing != id);
        self.providers.len() != before
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Run every provider and hand each resolved group to `apply`.
    ///
    /// A provider that fails is logged and skipped; the others still run.
    /// Keys that resolve to `None` are not passed on. Returns the number of
    /// groups applied.
    pub fn execute<F>(&mut self, parser: &Parser, mut apply: F) -> usize
    where
        F: FnMut(ProviderId, &Decoration, &[DecorationRange]),
    {
        let mut applied = 0;

        for (id, provider) in &mut self.providers {
            let groups = match provider.provide(parser) {
                Ok(groups) => groups,
                Err(e) => {
                    warn!(%id, name = provider.name(), error = %e, "Decoration provider failed");
                    continue;
                }
            };

            for (key, ranges) in &groups {
                match provider.resolve(key) {
                    Ok(Some(decoration)) => {
                        apply(*id, &decoration, ranges);
                        applied += 1;
                    }
                    Ok(None) => trace!(%id, key = %key, "No decoration for key"),
                    Err(e) => {
                        warn!(%id, key = %key, error = %e, "Could not resolve decoration");
                    }
                }
            }
        }

        applied
    }
}
