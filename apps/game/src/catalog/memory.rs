//! Fixture-backed catalog adapter.
//!
//! Used by the integration tests (and handy for offline experiments): a
//! plain map of entities plus a scripted plan queue for failure injection
//! and response pacing, so lookup failures and out-of-order completions are
//! reproducible.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::catalog::provider::CatalogProvider;
use crate::domain::Entity;
use crate::errors::CatalogError;

/// Scripted behavior for one upcoming lookup.
#[derive(Debug, Clone, Copy)]
struct CallPlan {
    delay: Duration,
    fail: bool,
}

/// In-memory [`CatalogProvider`].
///
/// An id absent from the map resolves to [`CatalogError::NotFound`], exactly
/// like the live catalog. Each lookup first pops one plan from the script
/// queue (if any): it sleeps the plan's delay, then fails with a transport
/// error when the plan says so. Lookups beyond the queue answer immediately.
pub struct InMemoryCatalog {
    entities: HashMap<u32, Entity>,
    /// Ids that always fail with a transport error.
    failing_ids: HashSet<u32>,
    plans: Mutex<VecDeque<CallPlan>>,
    calls: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = Entity>,
    {
        Self {
            entities: entities.into_iter().map(|e| (e.id, e)).collect(),
            failing_ids: HashSet::new(),
            plans: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A catalog covering `[min, max)` with synthetic, unique names.
    pub fn generated(min: u32, max: u32) -> Self {
        Self::new((min..max).map(|id| Entity::new(id, format!("creature-{id:03}"))))
    }

    /// Make lookups for `id` fail with a transport error.
    pub fn with_failing_id(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    /// Make the next `n` lookups (whatever their ids) fail with a transport
    /// error; later lookups succeed again.
    pub fn with_transport_failures(self, n: usize) -> Self {
        self.push_failures(Duration::ZERO, n);
        self
    }

    /// Queue `n` lookups that pause `delay` before answering normally.
    pub fn push_delays(&self, delay: Duration, n: usize) {
        self.push_plans(CallPlan { delay, fail: false }, n);
    }

    /// Queue `n` lookups that pause `delay` and then fail with a transport
    /// error.
    pub fn push_failures(&self, delay: Duration, n: usize) {
        self.push_plans(CallPlan { delay, fail: true }, n);
    }

    fn push_plans(&self, plan: CallPlan, n: usize) {
        let mut plans = self.plans.lock();
        for _ in 0..n {
            plans.push_back(plan);
        }
    }

    /// Total number of lookups served (including failed ones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn fetch_entity(&self, id: u32) -> Result<Entity, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let plan = self.plans.lock().pop_front();
        if let Some(plan) = plan {
            if !plan.delay.is_zero() {
                tokio::time::sleep(plan.delay).await;
            }
            if plan.fail {
                return Err(CatalogError::transport("injected failure"));
            }
        }

        if self.failing_ids.contains(&id) {
            return Err(CatalogError::transport(format!(
                "injected failure for id {id}"
            )));
        }

        self.entities
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound { id })
    }
}
