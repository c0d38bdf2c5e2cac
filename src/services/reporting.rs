//! End-of-day reporting
//!
//! Builds a serializable snapshot of museum state plus the admission
//! receipts, for egress by the simulator (pretty JSON on stdout).

use crate::services::museum::Museum;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One exhibit line in the day summary
#[derive(Debug, Serialize)]
pub struct ExhibitLine {
    pub name: String,
    pub cost: u64,
    /// Admitted patrons interested in the exhibit
    pub interested: usize,
    /// Interested patrons whose current balance still covers the cost
    pub eligible: usize,
}

/// One admission receipt in the day summary
#[derive(Debug, Serialize)]
pub struct TicketLine {
    pub ticket: String,
    pub patron: String,
    /// Names of the exhibits the patron was granted entry to
    pub granted: Vec<String>,
    pub spent: u64,
}

/// Serializable snapshot of one admission day
#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub museum: String,
    pub generated_at: DateTime<Utc>,
    pub patrons_admitted: usize,
    pub revenue: u64,
    pub exhibits: Vec<ExhibitLine>,
    pub tickets: Vec<TicketLine>,
}

impl DaySummary {
    /// Snapshot the museum's current state.
    ///
    /// Eligibility counts come from the live queries, so a summary built
    /// after the admission charges reflects the drained balances.
    pub fn build(museum: &Museum) -> Self {
        let eligible_by_exhibit = museum.patrons_of_exhibits();

        let exhibits = museum
            .patrons_by_exhibit_interest()
            .into_iter()
            .filter_map(|(id, interested)| {
                let exhibit = museum.exhibit(id)?;
                let eligible = eligible_by_exhibit
                    .iter()
                    .find(|(eligible_id, _)| *eligible_id == id)
                    .map_or(0, |(_, patrons)| patrons.len());
                Some(ExhibitLine {
                    name: exhibit.name().to_string(),
                    cost: exhibit.cost(),
                    interested: interested.len(),
                    eligible,
                })
            })
            .collect();

        let tickets = museum
            .admissions()
            .iter()
            .map(|record| TicketLine {
                ticket: record.ticket.clone(),
                patron: museum
                    .patron(record.patron)
                    .map_or_else(String::new, |patron| patron.name().to_string()),
                granted: record
                    .granted
                    .iter()
                    .filter_map(|id| museum.exhibit(*id))
                    .map(|exhibit| exhibit.name().to_string())
                    .collect(),
                spent: record.spent,
            })
            .collect();

        Self {
            museum: museum.name().to_string(),
            generated_at: Utc::now(),
            patrons_admitted: museum.patrons().len(),
            revenue: museum.revenue(),
            exhibits,
            tickets,
        }
    }
}
