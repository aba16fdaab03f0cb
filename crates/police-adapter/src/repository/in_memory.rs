//! In-Memory Repository Implementation
//!
//! One store implementing every record port. Each record kind lives in its
//! own `RwLock`-guarded table; every create and update happens under a
//! single write lock, so rows change atomically and the "one ACTIVE stolen
//! report per plate" check cannot race with another insert.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use police_domain::{
    Accident, AccidentRepository, NewAccident, NewOfficer, NewStolenReport, NewVehicleFlag,
    NewViolation, Officer, OfficerRepository, Plate, PlateMatch, RecordId, RepositoryError,
    StolenStatus, StolenVehicle, StolenVehicleRepository, VehicleFlag, VehicleFlagRepository,
    Violation, ViolationRepository, ViolationStatus,
};

/// Rows of one record kind, keyed (and therefore ordered) by id
#[derive(Debug)]
struct Table<T> {
    last_id: u64,
    rows: BTreeMap<RecordId, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    fn next_id(&mut self) -> RecordId {
        self.last_id += 1;
        RecordId::new(self.last_id)
    }

    fn insert(&mut self, id: RecordId, row: T) -> T {
        self.rows.insert(id, row.clone());
        row
    }

    fn select<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.rows.values().filter(|row| predicate(row)).cloned().collect()
    }
}

type Shared<T> = Arc<RwLock<Table<T>>>;

/// In-memory record store
///
/// Thread-safe implementation using RwLock. Cloning shares the tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    officers: Shared<Officer>,
    violations: Shared<Violation>,
    accidents: Shared<Accident>,
    stolen: Shared<StolenVehicle>,
    flags: Shared<VehicleFlag>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn read<T>(table: &Shared<T>) -> Result<RwLockReadGuard<'_, Table<T>>, RepositoryError> {
    table.read().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire read lock".to_string(),
    })
}

fn write<T>(table: &Shared<T>) -> Result<RwLockWriteGuard<'_, Table<T>>, RepositoryError> {
    table.write().map_err(|_| RepositoryError::PersistenceError {
        message: "Failed to acquire write lock".to_string(),
    })
}

#[async_trait]
impl OfficerRepository for InMemoryRecordStore {
    async fn create(&self, officer: NewOfficer) -> Result<Officer, RepositoryError> {
        let mut officers = write(&self.officers)?;
        if officers
            .rows
            .values()
            .any(|o| o.badge_number == officer.badge_number)
        {
            return Err(RepositoryError::Conflict {
                message: format!("Badge number {} is already registered", officer.badge_number),
            });
        }
        let id = officers.next_id();
        Ok(officers.insert(id, Officer::from_new(id, officer, Utc::now())))
    }

    async fn find_all(&self) -> Result<Vec<Officer>, RepositoryError> {
        Ok(read(&self.officers)?.select(|_| true))
    }

    async fn find_by_badge(&self, badge_number: &str) -> Result<Option<Officer>, RepositoryError> {
        let officers = read(&self.officers)?;
        Ok(officers
            .rows
            .values()
            .find(|o| o.badge_number == badge_number)
            .cloned())
    }
}

#[async_trait]
impl ViolationRepository for InMemoryRecordStore {
    async fn create(&self, violation: NewViolation) -> Result<Violation, RepositoryError> {
        let mut violations = write(&self.violations)?;
        let id = violations.next_id();
        Ok(violations.insert(id, Violation::from_new(id, violation, Utc::now())))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Violation>, RepositoryError> {
        Ok(read(&self.violations)?.rows.get(&id).cloned())
    }

    async fn find_by_plate(&self, plate: &Plate) -> Result<Vec<Violation>, RepositoryError> {
        Ok(read(&self.violations)?.select(|v| &v.plate == plate))
    }

    async fn find_by_plate_and_status(
        &self,
        plate: &Plate,
        status: ViolationStatus,
    ) -> Result<Vec<Violation>, RepositoryError> {
        Ok(read(&self.violations)?.select(|v| &v.plate == plate && v.status() == status))
    }

    async fn update_status(
        &self,
        id: RecordId,
        status: ViolationStatus,
    ) -> Result<Violation, RepositoryError> {
        let mut violations = write(&self.violations)?;
        let violation = violations
            .rows
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound {
                kind: "Violation",
                id,
            })?;
        violation.transition_to(status, Utc::now())?;
        Ok(violation.clone())
    }
}

#[async_trait]
impl AccidentRepository for InMemoryRecordStore {
    async fn create(&self, accident: NewAccident) -> Result<Accident, RepositoryError> {
        let mut accidents = write(&self.accidents)?;
        let id = accidents.next_id();
        Ok(accidents.insert(id, Accident::from_new(id, accident, Utc::now())))
    }

    async fn find_involving(
        &self,
        plate: &Plate,
        mode: PlateMatch,
    ) -> Result<Vec<Accident>, RepositoryError> {
        Ok(read(&self.accidents)?.select(|a| a.involves(plate, mode)))
    }

    async fn count_involving(&self, plate: &Plate, mode: PlateMatch) -> Result<u64, RepositoryError> {
        let accidents = read(&self.accidents)?;
        Ok(accidents
            .rows
            .values()
            .filter(|a| a.involves(plate, mode))
            .count() as u64)
    }
}

#[async_trait]
impl StolenVehicleRepository for InMemoryRecordStore {
    async fn create(&self, report: NewStolenReport) -> Result<StolenVehicle, RepositoryError> {
        let mut stolen = write(&self.stolen)?;
        if stolen
            .rows
            .values()
            .any(|s| s.plate == report.plate && s.is_active())
        {
            return Err(RepositoryError::Conflict {
                message: format!("Vehicle {} already has an active stolen report", report.plate),
            });
        }
        let id = stolen.next_id();
        Ok(stolen.insert(id, StolenVehicle::from_new(id, report, Utc::now())))
    }

    async fn find_all(&self) -> Result<Vec<StolenVehicle>, RepositoryError> {
        Ok(read(&self.stolen)?.select(|_| true))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<StolenVehicle>, RepositoryError> {
        Ok(read(&self.stolen)?.rows.get(&id).cloned())
    }

    async fn find_active_by_plate(
        &self,
        plate: &Plate,
    ) -> Result<Option<StolenVehicle>, RepositoryError> {
        let stolen = read(&self.stolen)?;
        Ok(stolen
            .rows
            .values()
            .find(|s| &s.plate == plate && s.is_active())
            .cloned())
    }

    async fn update_status(
        &self,
        id: RecordId,
        status: StolenStatus,
    ) -> Result<StolenVehicle, RepositoryError> {
        let mut stolen = write(&self.stolen)?;
        let report = stolen.rows.get_mut(&id).ok_or(RepositoryError::NotFound {
            kind: "Stolen vehicle report",
            id,
        })?;
        report.transition_to(status, Utc::now())?;
        Ok(report.clone())
    }
}

#[async_trait]
impl VehicleFlagRepository for InMemoryRecordStore {
    async fn create(&self, flag: NewVehicleFlag) -> Result<VehicleFlag, RepositoryError> {
        let mut flags = write(&self.flags)?;
        let id = flags.next_id();
        Ok(flags.insert(id, VehicleFlag::from_new(id, flag, Utc::now())))
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<VehicleFlag>, RepositoryError> {
        Ok(read(&self.flags)?.rows.get(&id).cloned())
    }

    async fn find_active_by_plate(&self, plate: &Plate) -> Result<Vec<VehicleFlag>, RepositoryError> {
        Ok(read(&self.flags)?.select(|f| &f.plate == plate && f.is_active()))
    }

    async fn deactivate(&self, id: RecordId) -> Result<VehicleFlag, RepositoryError> {
        let mut flags = write(&self.flags)?;
        let flag = flags.rows.get_mut(&id).ok_or(RepositoryError::NotFound {
            kind: "Vehicle flag",
            id,
        })?;
        flag.resolve(Utc::now());
        Ok(flag.clone())
    }
}
