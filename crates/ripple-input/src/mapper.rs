//! Contact-to-grid mapping.
//!
//! Hosts deliver contact events through [`InputSink`]. The
//! [`ContactMapper`] owns only the tracking records; the grid it writes
//! into is passed per call (or bound once with [`ContactMapper::bind`]),
//! so the mapper never shares ownership of the solver.

use std::collections::HashMap;

use ripple_raster::LinePoints;
use ripple_solver::ImpulseTarget;
use ripple_types::{ContactId, RippleResult, Scalar};

use crate::config::InputConfig;
use crate::surface::SurfacePoint;
use crate::tracker::ContactTracker;

/// Receiver of host contact events.
///
/// Calls arrive in host order on one thread; each completes its grid
/// writes before returning.
pub trait InputSink {
    /// A contact touched down at `pos`.
    fn on_contact_start(&mut self, contact: ContactId, pos: SurfacePoint);

    /// A contact moved to `pos`.
    fn on_contact_move(&mut self, contact: ContactId, pos: SurfacePoint);

    /// A contact was released.
    fn on_contact_end(&mut self, contact: ContactId);
}

/// Tracks active contacts and turns their motion into impulses.
#[derive(Debug, Clone, Default)]
pub struct ContactMapper {
    config: InputConfig,
    contacts: HashMap<ContactId, ContactTracker>,
}

impl ContactMapper {
    /// Creates a mapper with validated magnitudes.
    pub fn new(config: InputConfig) -> RippleResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            contacts: HashMap::new(),
        })
    }

    /// The magnitudes in use.
    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Touch-down: one tap impulse at the contact's cell.
    ///
    /// A start for a contact that is already tracked is ignored.
    /// Returns whether a tap was deposited.
    pub fn contact_start<T>(&mut self, target: &mut T, contact: ContactId, pos: SurfacePoint) -> bool
    where
        T: ImpulseTarget + ?Sized,
    {
        if self.contacts.contains_key(&contact) {
            return false;
        }
        self.contacts.insert(contact, ContactTracker::new(pos));

        let (i, j) = pos.to_cell(target.cell_count_x(), target.cell_count_y());
        target.inject_impulse(self.config.tap_magnitude, i as Scalar, j as Scalar);
        tracing::trace!(contact = contact.raw(), i, j, "contact started");
        true
    }

    /// Move: a drag impulse at every cell on the line from the previous
    /// cell to the current one, endpoints included.
    ///
    /// A move for an untracked contact starts tracking it without a tap,
    /// depositing at the current cell only. Returns the number of cells
    /// deposited into.
    pub fn contact_move<T>(&mut self, target: &mut T, contact: ContactId, pos: SurfacePoint) -> usize
    where
        T: ImpulseTarget + ?Sized,
    {
        let tracker = self
            .contacts
            .entry(contact)
            .and_modify(|t| t.move_to(pos))
            .or_insert_with(|| ContactTracker::new(pos));

        let (count_x, count_y) = (target.cell_count_x(), target.cell_count_y());
        let (x0, y0) = tracker.previous().to_cell(count_x, count_y);
        let (x1, y1) = tracker.current().to_cell(count_x, count_y);

        let amount = self.config.drag_magnitude;
        let mut deposited = 0;
        for (i, j) in LinePoints::new(x0, y0, x1, y1) {
            target.inject_impulse(amount, i as Scalar, j as Scalar);
            deposited += 1;
        }
        deposited
    }

    /// Release: forget the contact. Returns whether it was tracked.
    pub fn contact_end(&mut self, contact: ContactId) -> bool {
        let removed = self.contacts.remove(&contact).is_some();
        if removed {
            tracing::trace!(contact = contact.raw(), "contact ended");
        }
        removed
    }

    /// Number of contacts currently tracked.
    pub fn active_contacts(&self) -> usize {
        self.contacts.len()
    }

    /// Tracking record of one contact.
    pub fn tracker(&self, contact: ContactId) -> Option<&ContactTracker> {
        self.contacts.get(&contact)
    }

    /// Forgets every contact, e.g. when the grid it mapped onto is replaced.
    pub fn clear(&mut self) {
        self.contacts.clear();
    }

    /// Pairs the mapper with a target, giving an [`InputSink`].
    pub fn bind<'a, T>(&'a mut self, target: &'a mut T) -> BoundMapper<'a, T>
    where
        T: ImpulseTarget + ?Sized,
    {
        BoundMapper {
            mapper: self,
            target,
        }
    }
}

/// A [`ContactMapper`] borrowed together with the grid it writes into.
pub struct BoundMapper<'a, T: ImpulseTarget + ?Sized> {
    mapper: &'a mut ContactMapper,
    target: &'a mut T,
}

impl<T: ImpulseTarget + ?Sized> InputSink for BoundMapper<'_, T> {
    fn on_contact_start(&mut self, contact: ContactId, pos: SurfacePoint) {
        self.mapper.contact_start(&mut *self.target, contact, pos);
    }

    fn on_contact_move(&mut self, contact: ContactId, pos: SurfacePoint) {
        self.mapper.contact_move(&mut *self.target, contact, pos);
    }

    fn on_contact_end(&mut self, contact: ContactId) {
        self.mapper.contact_end(contact);
    }
}
