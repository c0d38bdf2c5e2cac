//! Museum admissions engine
//!
//! Owns the exhibit catalogue and the roster of admitted patrons and is the
//! single writer for both. An admission reads interests, checks and mutates
//! the patron's balance, and updates revenue as one logical transaction.
//!
//! Key behaviors:
//! - A patron always joins the roster, whatever the payment outcomes
//! - Entry processing follows catalogue order, never interest order
//! - Free exhibits grant entry without charge; paid exhibits charge iff
//!   the remaining balance covers the cost
//! - Eligibility queries re-derive from current balances on every call;
//!   there is no stored visit log behind them

use crate::domain::types::{Exhibit, ExhibitId, Patron, PatronId};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use tracing::{debug, info};
use uuid::Uuid;

/// Receipt for a single admission, kept for end-of-day reporting
///
/// The eligibility queries never read these; they exist for egress only.
#[derive(Debug, Clone)]
pub struct AdmissionRecord {
    /// UUIDv7 ticket id (time-sortable)
    pub ticket: String,
    pub patron: PatronId,
    /// Exhibits the patron was granted entry to during this admission
    pub granted: SmallVec<[ExhibitId; 4]>,
    /// Total charged across paid exhibits in this admission
    pub spent: u64,
}

/// A venue holding an exhibit catalogue and a roster of admitted patrons
#[derive(Debug)]
pub struct Museum {
    name: String,
    exhibits: Vec<Exhibit>,
    patrons: Vec<Patron>,
    revenue: u64,
    admissions: Vec<AdmissionRecord>,
}

impl Museum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exhibits: Vec::new(),
            patrons: Vec::new(),
            revenue: 0,
            admissions: Vec::new(),
        }
    }

    /// Append an exhibit to the catalogue and return its handle.
    ///
    /// No duplicate check; two exhibits may share a name and each keeps
    /// its own handle.
    pub fn add_exhibit(&mut self, exhibit: Exhibit) -> ExhibitId {
        let id = ExhibitId(self.exhibits.len());
        debug!(
            exhibit = %exhibit.name(),
            cost = %exhibit.cost(),
            id = %id,
            "exhibit_added"
        );
        self.exhibits.push(exhibit);
        id
    }

    /// Exhibits the patron has declared interest in, in catalogue order.
    ///
    /// Catalogue ordering wins over the patron's interest ordering; the
    /// result is empty when nothing overlaps. The patron does not need to
    /// be admitted.
    pub fn recommend_exhibits(&self, patron: &Patron) -> Vec<&Exhibit> {
        self.exhibits.iter().filter(|exhibit| patron.is_interested_in(exhibit.name())).collect()
    }

    /// Admit a patron and process entry to every exhibit they are
    /// interested in, in catalogue order.
    ///
    /// Free exhibits grant entry unconditionally. A paid exhibit charges
    /// its cost iff the remaining balance covers it, so an expensive
    /// exhibit early in the catalogue can exhaust the funds a cheaper one
    /// later would have taken. Insufficient funds skips that exhibit and
    /// moves on; it never fails the admission itself.
    pub fn admit(&mut self, mut patron: Patron) -> PatronId {
        let patron_id = PatronId(self.patrons.len());
        let mut granted: SmallVec<[ExhibitId; 4]> = SmallVec::new();
        let mut spent = 0u64;

        for (idx, exhibit) in self.exhibits.iter().enumerate() {
            if !patron.is_interested_in(exhibit.name()) {
                continue;
            }
            if exhibit.is_free() {
                granted.push(ExhibitId(idx));
                info!(
                    patron = %patron.name(),
                    exhibit = %exhibit.name(),
                    "entry_granted_free"
                );
            } else if patron.spending_money() >= exhibit.cost() {
                patron.charge(exhibit.cost());
                self.revenue += exhibit.cost();
                spent += exhibit.cost();
                granted.push(ExhibitId(idx));
                info!(
                    patron = %patron.name(),
                    exhibit = %exhibit.name(),
                    cost = %exhibit.cost(),
                    balance = %patron.spending_money(),
                    "entry_granted"
                );
            } else {
                debug!(
                    patron = %patron.name(),
                    exhibit = %exhibit.name(),
                    cost = %exhibit.cost(),
                    balance = %patron.spending_money(),
                    "entry_declined_insufficient_funds"
                );
            }
        }

        let record = AdmissionRecord {
            ticket: Uuid::now_v7().to_string(),
            patron: patron_id,
            granted,
            spent,
        };
        info!(
            patron = %patron.name(),
            ticket = %record.ticket,
            granted = %record.granted.len(),
            spent = %spent,
            "patron_admitted"
        );
        self.admissions.push(record);
        self.patrons.push(patron);
        patron_id
    }

    /// Every exhibit (catalogue order) mapped to the admitted patrons
    /// (admission order) interested in it, regardless of cost or balance.
    ///
    /// Exhibits nobody is interested in still appear, with an empty list.
    pub fn patrons_by_exhibit_interest(&self) -> Vec<(ExhibitId, Vec<PatronId>)> {
        self.exhibits
            .iter()
            .enumerate()
            .map(|(idx, exhibit)| {
                let interested = self
                    .patrons
                    .iter()
                    .enumerate()
                    .filter(|(_, patron)| patron.is_interested_in(exhibit.name()))
                    .map(|(i, _)| PatronId(i))
                    .collect();
                (ExhibitId(idx), interested)
            })
            .collect()
    }

    /// Exhibits (catalogue order) mapped to the admitted patrons
    /// (admission order) who are interested and can currently cover the
    /// cost. Exhibits with no qualifying patrons are omitted.
    ///
    /// Eligibility is recomputed from current balances on every call,
    /// each exhibit against its full cost independently of the others.
    /// A patron whose balance or interests change after admission moves
    /// in and out of these results accordingly; in particular, a patron
    /// whose admission charges drained their balance no longer qualifies
    /// for the exhibits they paid for.
    pub fn patrons_of_exhibits(&self) -> Vec<(ExhibitId, Vec<PatronId>)> {
        self.exhibits
            .iter()
            .enumerate()
            .filter_map(|(idx, exhibit)| {
                let eligible: Vec<PatronId> = self
                    .patrons
                    .iter()
                    .enumerate()
                    .filter(|(_, patron)| Self::qualifies(patron, exhibit))
                    .map(|(i, _)| PatronId(i))
                    .collect();
                if eligible.is_empty() {
                    None
                } else {
                    Some((ExhibitId(idx), eligible))
                }
            })
            .collect()
    }

    /// Admitted patrons eligible for an exhibit's ticket lottery:
    /// interested, and able to pay the cost should they win.
    ///
    /// For a free exhibit that is every interested admitted patron.
    /// Unknown handles yield an empty list.
    pub fn ticket_lottery_contestants(&self, exhibit_id: ExhibitId) -> Vec<PatronId> {
        let Some(exhibit) = self.exhibits.get(exhibit_id.0) else {
            return Vec::new();
        };
        self.patrons
            .iter()
            .enumerate()
            .filter(|(_, patron)| Self::qualifies(patron, exhibit))
            .map(|(i, _)| PatronId(i))
            .collect()
    }

    /// Draw one lottery winner uniformly among the current contestants.
    ///
    /// A pure draw: nothing is charged or recorded, so repeated draws are
    /// independent. Returns the winner's name, or `None` when the exhibit
    /// has no contestants.
    pub fn draw_lottery_winner<R: Rng + ?Sized>(
        &self,
        exhibit_id: ExhibitId,
        rng: &mut R,
    ) -> Option<&str> {
        let contestants = self.ticket_lottery_contestants(exhibit_id);
        let winner = contestants.choose(rng)?;
        self.patrons.get(winner.0).map(Patron::name)
    }

    // Interest plus affordability against the exhibit's full cost;
    // vacuously affordable when the exhibit is free.
    fn qualifies(patron: &Patron, exhibit: &Exhibit) -> bool {
        patron.is_interested_in(exhibit.name()) && patron.spending_money() >= exhibit.cost()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exhibits(&self) -> &[Exhibit] {
        &self.exhibits
    }

    pub fn patrons(&self) -> &[Patron] {
        &self.patrons
    }

    #[inline]
    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    pub fn exhibit(&self, id: ExhibitId) -> Option<&Exhibit> {
        self.exhibits.get(id.0)
    }

    pub fn patron(&self, id: PatronId) -> Option<&Patron> {
        self.patrons.get(id.0)
    }

    /// Mutable access to an admitted patron.
    ///
    /// Interests declared through this hatch after admission are picked
    /// up by the eligibility queries on their next call.
    pub fn patron_mut(&mut self, id: PatronId) -> Option<&mut Patron> {
        self.patrons.get_mut(id.0)
    }

    pub fn admissions(&self) -> &[AdmissionRecord] {
        &self.admissions
    }
}
