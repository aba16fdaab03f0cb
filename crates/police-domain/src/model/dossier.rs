//! VehicleDossier - Everything the police know about one plate
//!
//! ```text
//! stolen report ─┐
//! active flags  ─┼──► VehicleDossier { isStolen, activeFlags,
//! violations    ─┤                     unpaidViolations, accidentCount,
//! accidents     ─┘                     totalFinesDue }
//! ```
//!
//! Built fresh per request and never stored.

use rust_decimal::Decimal;
use serde::Serialize;

use super::plate::Plate;
use super::stolen_vehicle::StolenVehicle;
use super::vehicle_flag::VehicleFlag;
use super::violation::Violation;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDossier {
    plate_number: Plate,
    is_stolen: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stolen_details: Option<StolenVehicle>,
    active_flags: Vec<VehicleFlag>,
    unpaid_violations: Vec<Violation>,
    accident_count: u64,
    #[serde(with = "rust_decimal::serde::float")]
    total_fines_due: Decimal,
}

impl VehicleDossier {
    /// Combine query results into a dossier.
    ///
    /// Only an ACTIVE stolen report, active flags and PENDING violations are
    /// kept, whatever the caller passes in. The fine total is the exact sum
    /// of the kept violations.
    pub fn assemble(
        plate: Plate,
        stolen: Option<StolenVehicle>,
        flags: Vec<VehicleFlag>,
        violations: Vec<Violation>,
        accident_count: u64,
    ) -> Self {
        let stolen_details = stolen.filter(StolenVehicle::is_active);
        let active_flags: Vec<VehicleFlag> =
            flags.into_iter().filter(VehicleFlag::is_active).collect();
        let unpaid_violations: Vec<Violation> = violations
            .into_iter()
            .filter(Violation::is_pending)
            .collect();
        let total_fines_due = total_of(&unpaid_violations);

        Self {
            plate_number: plate,
            is_stolen: stolen_details.is_some(),
            stolen_details,
            active_flags,
            unpaid_violations,
            accident_count,
            total_fines_due,
        }
    }

    /// A plate the police know nothing about
    pub fn all_clear(plate: Plate) -> Self {
        Self::assemble(plate, None, Vec::new(), Vec::new(), 0)
    }

    // ========== Getters ==========

    pub fn plate(&self) -> &Plate {
        &self.plate_number
    }

    pub fn is_stolen(&self) -> bool {
        self.is_stolen
    }

    pub fn stolen_details(&self) -> Option<&StolenVehicle> {
        self.stolen_details.as_ref()
    }

    pub fn active_flags(&self) -> &[VehicleFlag] {
        &self.active_flags
    }

    pub fn unpaid_violations(&self) -> &[Violation] {
        &self.unpaid_violations
    }

    pub fn accident_count(&self) -> u64 {
        self.accident_count
    }

    pub fn total_fines_due(&self) -> Decimal {
        self.total_fines_due
    }
}

/// Exact sum of the fines, saturating at `Decimal::MAX` instead of overflowing
fn total_of(violations: &[Violation]) -> Decimal {
    violations
        .iter()
        .try_fold(Decimal::ZERO, |total, v| total.checked_add(v.fine_amount))
        .unwrap_or(Decimal::MAX)
}
