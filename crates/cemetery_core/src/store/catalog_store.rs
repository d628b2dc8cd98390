//! Catalog store over an injected persistence adapter.
//!
//! # Invariants
//! - Every mutator saves the full collection before returning.
//! - A failed save keeps the in-memory change and reports `Persistence`.
//! - `updated_at` is strictly increasing per record, even with a coarse clock.
//!   Stamps saturate at `i64::MAX` instead of wrapping.
//! - Logged events carry ids and counts only, never record text.

use crate::filter::{apply_filters, FilterSpec};
use crate::model::person::{NewPerson, Person};
use crate::model::space::{BurialSpace, BurialSpacePatch, NewBurialSpace, SpaceId};
use crate::persist::{PersistError, PersistenceAdapter};
use crate::stats::{compute_stats, compute_system_stats, SpaceStats, SystemStats};
use crate::store::clock::{Clock, SystemClock};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug)]
pub enum StoreError {
    /// No record has the referenced id.
    NotFound(SpaceId),
    /// The mutation applied in memory but could not be saved.
    Persistence(PersistError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "burial space not found: {id}"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<PersistError> for StoreError {
    fn from(value: PersistError) -> Self {
        Self::Persistence(value)
    }
}

/// Derived state for one render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    /// Records passing the filter, in insertion order.
    pub items: Vec<BurialSpace>,
    /// Counters over the whole collection, not just `items`.
    pub stats: SpaceStats,
}

/// Owner of the burial-space collection.
pub struct CatalogStore<P: PersistenceAdapter> {
    adapter: P,
    spaces: Vec<BurialSpace>,
    people: Vec<Person>,
    clock: Box<dyn Clock>,
}

impl<P: PersistenceAdapter> CatalogStore<P> {
    /// Loads prior state from `adapter`. Missing or malformed state yields
    /// an empty store.
    pub fn open(adapter: P) -> Self {
        let spaces = adapter.load();
        info!(
            "event=store_open module=store status=ok records={}",
            spaces.len()
        );
        Self {
            adapter,
            spaces,
            people: Vec::new(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the time source used for `created_at`/`updated_at`.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn adapter(&self) -> &P {
        &self.adapter
    }

    pub fn into_adapter(self) -> P {
        self.adapter
    }

    /// Creates a record with a fresh id, `active = true` and no `updated_at`.
    ///
    /// Input is not re-validated; see [`NewBurialSpace::validate`].
    pub fn create(&mut self, input: NewBurialSpace) -> StoreResult<BurialSpace> {
        let id = self.next_space_id();
        let space = BurialSpace::from_input(id, input, self.clock.now_ms());
        let kind = space.type_name();
        self.spaces.push(space.clone());
        self.persist("space_create")?;

        info!("event=space_create module=store status=ok space_id={id} kind={kind}");
        Ok(space)
    }

    /// Merges `patch` into the matching record and stamps `updated_at`.
    pub fn update(&mut self, id: SpaceId, patch: BurialSpacePatch) -> StoreResult<BurialSpace> {
        self.modify(id, "space_update", |space| space.apply_patch(patch))
    }

    /// Removes the matching record. Absent ids are a no-op.
    pub fn delete(&mut self, id: SpaceId) -> StoreResult<()> {
        let before = self.spaces.len();
        self.spaces.retain(|space| space.id != id);
        let removed = before - self.spaces.len();
        self.persist("space_delete")?;

        info!("event=space_delete module=store status=ok space_id={id} removed={removed}");
        Ok(())
    }

    /// Flips `active` on the matching record.
    pub fn toggle_active(&mut self, id: SpaceId) -> StoreResult<BurialSpace> {
        self.modify(id, "space_toggle", |space| space.active = !space.active)
    }

    pub fn activate(&mut self, id: SpaceId) -> StoreResult<BurialSpace> {
        self.modify(id, "space_activate", |space| space.active = true)
    }

    pub fn deactivate(&mut self, id: SpaceId) -> StoreResult<BurialSpace> {
        self.modify(id, "space_deactivate", |space| space.active = false)
    }

    pub fn find_by_id(&self, id: SpaceId) -> Option<BurialSpace> {
        self.spaces.iter().find(|space| space.id == id).cloned()
    }

    /// Returns an owned copy of the collection in insertion order.
    pub fn list_all(&self) -> Vec<BurialSpace> {
        self.spaces.clone()
    }

    /// Removes every inactive record and returns how many were removed.
    pub fn clear_inactive(&mut self) -> StoreResult<usize> {
        let before = self.spaces.len();
        self.spaces.retain(|space| space.active);
        let removed = before - self.spaces.len();
        self.persist("space_clear_inactive")?;

        info!("event=space_clear_inactive module=store status=ok removed={removed}");
        Ok(removed)
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Adds a person to the in-memory directory. Input is not re-validated.
    pub fn register_person(&mut self, input: NewPerson) -> Person {
        let id = self.next_person_id();
        let person = Person::from_input(id, input);
        self.people.push(person.clone());
        debug!(
            "event=person_register module=store status=ok person_id={id} role={:?}",
            person.role
        );
        person
    }

    pub fn people(&self) -> Vec<Person> {
        self.people.clone()
    }

    pub fn stats(&self) -> SpaceStats {
        compute_stats(&self.spaces)
    }

    pub fn system_stats(&self) -> SystemStats {
        compute_system_stats(&self.spaces, &self.people)
    }

    /// Filtered items plus whole-collection stats for one render pass.
    pub fn view(&self, spec: &FilterSpec) -> CatalogView {
        CatalogView {
            items: apply_filters(&self.spaces, spec),
            stats: self.stats(),
        }
    }

    fn modify(
        &mut self,
        id: SpaceId,
        event: &'static str,
        change: impl FnOnce(&mut BurialSpace),
    ) -> StoreResult<BurialSpace> {
        let now = self.clock.now_ms();
        let Some(space) = self.spaces.iter_mut().find(|space| space.id == id) else {
            debug!("event={event} module=store status=not_found space_id={id}");
            return Err(StoreError::NotFound(id));
        };

        change(space);
        space.updated_at = Some(now.max(space.last_modified().saturating_add(1)));
        let updated = space.clone();
        self.persist(event)?;

        info!(
            "event={event} module=store status=ok space_id={id} active={}",
            updated.active
        );
        Ok(updated)
    }

    fn persist(&mut self, event: &'static str) -> StoreResult<()> {
        if let Err(err) = self.adapter.save(&self.spaces) {
            error!(
                "event={event} module=store status=error error_code=persist_failed records={} error={}",
                self.spaces.len(),
                err
            );
            return Err(err.into());
        }
        Ok(())
    }

    fn next_space_id(&self) -> SpaceId {
        loop {
            let id = Uuid::new_v4();
            if !self.spaces.iter().any(|space| space.id == id) {
                return id;
            }
        }
    }

    fn next_person_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.people.iter().any(|person| person.id == id) {
                return id;
            }
        }
    }
}
