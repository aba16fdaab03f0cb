//! Hand-written stub ports shared by the unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use police_domain::{
    Accident, AccidentRepository, BearerToken, FailureKind, InvolvedPlates, LookupOutcome,
    MailMessage, MailNotifier, NewAccident, NewOfficer, NewStolenReport, NewVehicleFlag,
    NewViolation, Officer, OfficerRepository, Plate, PlateMatch, RecordId, RecordStore,
    RemoteFailure, RepositoryError, StolenStatus, StolenVehicle, StolenVehicleRepository,
    VehicleFlag, VehicleFlagRepository, VehicleRegistry, VehicleStatus, Violation,
    ViolationRepository, ViolationStatus,
};

pub(crate) fn plate(raw: &str) -> Plate {
    Plate::parse(raw).unwrap()
}

pub(crate) fn stolen_report(id: u64, raw: &str) -> StolenVehicle {
    StolenVehicle::from_new(RecordId::new(id), NewStolenReport::new(plate(raw)), Utc::now())
}

pub(crate) fn accident(id: u64, involved: &str) -> Accident {
    Accident::from_new(
        RecordId::new(id),
        NewAccident::new(InvolvedPlates::parse(involved).unwrap()),
        Utc::now(),
    )
}

// ========== Registry ==========

/// Records every call; fails on demand
#[derive(Default)]
pub(crate) struct RecordingRegistry {
    notified: Mutex<Vec<(String, VehicleStatus)>>,
    fail_all: Option<u16>,
    fail_plate: Option<(String, u16)>,
    lookup: Option<LookupOutcome>,
    lookups: AtomicUsize,
}

impl RecordingRegistry {
    pub(crate) fn failing_notifications(status: u16) -> Self {
        Self {
            fail_all: Some(status),
            ..Default::default()
        }
    }

    pub(crate) fn failing_for(raw: &str, status: u16) -> Self {
        Self {
            fail_plate: Some((raw.to_string(), status)),
            ..Default::default()
        }
    }

    pub(crate) fn answering(outcome: LookupOutcome) -> Self {
        Self {
            lookup: Some(outcome),
            ..Default::default()
        }
    }

    pub(crate) fn notified(&self) -> Vec<(String, VehicleStatus)> {
        self.notified.lock().unwrap().clone()
    }

    pub(crate) fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VehicleRegistry for RecordingRegistry {
    async fn notify_status(
        &self,
        plate: &Plate,
        status: VehicleStatus,
    ) -> Result<(), RemoteFailure> {
        self.notified
            .lock()
            .unwrap()
            .push((plate.to_string(), status));

        let failing = self.fail_all.or_else(|| {
            self.fail_plate
                .as_ref()
                .filter(|(p, _)| p == plate.as_str())
                .map(|(_, code)| *code)
        });
        match failing {
            Some(code) => Err(RemoteFailure::new(FailureKind::Status(code), "stub failure")),
            None => Ok(()),
        }
    }

    async fn fetch_by_plate(&self, _plate: &Plate, _credential: &BearerToken) -> LookupOutcome {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.lookup.clone().unwrap_or(LookupOutcome::NotFound)
    }
}

// ========== Mailer ==========

#[derive(Default)]
pub(crate) struct RecordingMailer {
    sent: Mutex<Vec<MailMessage>>,
}

impl RecordingMailer {
    pub(crate) fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailNotifier for RecordingMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), RemoteFailure> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

// ========== Store ==========

/// Minimal store backed by vectors. Record kinds listed in `failing`
/// answer every call with a persistence error.
#[derive(Default)]
pub(crate) struct FixtureStore {
    next_id: AtomicUsize,
    failing: Vec<&'static str>,
    officers: Mutex<Vec<Officer>>,
    violations: Mutex<Vec<Violation>>,
    accidents: Mutex<Vec<Accident>>,
    stolen: Mutex<Vec<StolenVehicle>>,
    flags: Mutex<Vec<VehicleFlag>>,
}

impl FixtureStore {
    pub(crate) fn failing(kinds: &[&'static str]) -> Self {
        Self {
            failing: kinds.to_vec(),
            ..Default::default()
        }
    }

    pub(crate) fn into_store(self) -> RecordStore {
        RecordStore::from_backend(Arc::new(self))
    }

    fn check(&self, kind: &'static str) -> Result<RecordId, RepositoryError> {
        if self.failing.contains(&kind) {
            return Err(RepositoryError::PersistenceError {
                message: format!("{} table unavailable", kind),
            });
        }
        Ok(RecordId::new(self.next_id.fetch_add(1, Ordering::SeqCst) as u64 + 1))
    }
}

#[async_trait]
impl OfficerRepository for FixtureStore {
    async fn create(&self, officer: NewOfficer) -> Result<Officer, RepositoryError> {
        let id = self.check("officers")?;
        let mut officers = self.officers.lock().unwrap();
        if officers.iter().any(|o| o.badge_number == officer.badge_number) {
            return Err(RepositoryError::Conflict {
                message: format!("badge {} already registered", officer.badge_number),
            });
        }
        let officer = Officer::from_new(id, officer, Utc::now());
        officers.push(officer.clone());
        Ok(officer)
    }

    async fn find_all(&self) -> Result<Vec<Officer>, RepositoryError> {
        self.check("officers")?;
        Ok(self.officers.lock().unwrap().clone())
    }

    async fn find_by_badge(&self, badge_number: &str) -> Result<Option<Officer>, RepositoryError> {
        self.check("officers")?;
        let officers = self.officers.lock().unwrap();
        Ok(officers.iter().find(|o| o.badge_number == badge_number).cloned())
    }
}

#[async_trait]
impl ViolationRepository for FixtureStore {
    async fn create(&self, violation: NewViolation) -> Result<Violation, RepositoryError> {
        let id = self.check("violations")?;
        let violation = Violation::from_new(id, violation, Utc::now());
        self.violations.lock().unwrap().push(violation.clone());
        Ok(violation)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<Violation>, RepositoryError> {
        self.check("violations")?;
        let violations = self.violations.lock().unwrap();
        Ok(violations.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_plate(&self, plate: &Plate) -> Result<Vec<Violation>, RepositoryError> {
        self.check("violations")?;
        let violations = self.violations.lock().unwrap();
        Ok(violations.iter().filter(|v| &v.plate == plate).cloned().collect())
    }

    async fn find_by_plate_and_status(
        &self,
        plate: &Plate,
        status: ViolationStatus,
    ) -> Result<Vec<Violation>, RepositoryError> {
        self.check("violations")?;
        let violations = self.violations.lock().unwrap();
        Ok(violations
            .iter()
            .filter(|v| &v.plate == plate && v.status() == status)
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: RecordId,
        status: ViolationStatus,
    ) -> Result<Violation, RepositoryError> {
        self.check("violations")?;
        let mut violations = self.violations.lock().unwrap();
        let violation = violations
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(RepositoryError::NotFound {
                kind: "Violation",
                id,
            })?;
        violation.transition_to(status, Utc::now())?;
        Ok(violation.clone())
    }
}

#[async_trait]
impl AccidentRepository for FixtureStore {
    async fn create(&self, accident: NewAccident) -> Result<Accident, RepositoryError> {
        let id = self.check("accidents")?;
        let accident = Accident::from_new(id, accident, Utc::now());
        self.accidents.lock().unwrap().push(accident.clone());
        Ok(accident)
    }

    async fn find_involving(
        &self,
        plate: &Plate,
        mode: PlateMatch,
    ) -> Result<Vec<Accident>, RepositoryError> {
        self.check("accidents")?;
        let accidents = self.accidents.lock().unwrap();
        Ok(accidents.iter().filter(|a| a.involves(plate, mode)).cloned().collect())
    }

    async fn count_involving(&self, plate: &Plate, mode: PlateMatch) -> Result<u64, RepositoryError> {
        Ok(self.find_involving(plate, mode).await?.len() as u64)
    }
}

#[async_trait]
impl StolenVehicleRepository for FixtureStore {
    async fn create(&self, report: NewStolenReport) -> Result<StolenVehicle, RepositoryError> {
        let id = self.check("stolen")?;
        let mut stolen = self.stolen.lock().unwrap();
        if stolen.iter().any(|s| s.plate == report.plate && s.is_active()) {
            return Err(RepositoryError::Conflict {
                message: format!("{} is already reported stolen", report.plate),
            });
        }
        let report = StolenVehicle::from_new(id, report, Utc::now());
        stolen.push(report.clone());
        Ok(report)
    }

    async fn find_all(&self) -> Result<Vec<StolenVehicle>, RepositoryError> {
        self.check("stolen")?;
        Ok(self.stolen.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<StolenVehicle>, RepositoryError> {
        self.check("stolen")?;
        let stolen = self.stolen.lock().unwrap();
        Ok(stolen.iter().find(|s| s.id == id).cloned())
    }

    async fn find_active_by_plate(
        &self,
        plate: &Plate,
    ) -> Result<Option<StolenVehicle>, RepositoryError> {
        self.check("stolen")?;
        let stolen = self.stolen.lock().unwrap();
        Ok(stolen.iter().find(|s| &s.plate == plate && s.is_active()).cloned())
    }

    async fn update_status(
        &self,
        id: RecordId,
        status: StolenStatus,
    ) -> Result<StolenVehicle, RepositoryError> {
        self.check("stolen")?;
        let mut stolen = self.stolen.lock().unwrap();
        let report = stolen
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RepositoryError::NotFound {
                kind: "Stolen vehicle report",
                id,
            })?;
        report.transition_to(status, Utc::now())?;
        Ok(report.clone())
    }
}

#[async_trait]
impl VehicleFlagRepository for FixtureStore {
    async fn create(&self, flag: NewVehicleFlag) -> Result<VehicleFlag, RepositoryError> {
        let id = self.check("flags")?;
        let flag = VehicleFlag::from_new(id, flag, Utc::now());
        self.flags.lock().unwrap().push(flag.clone());
        Ok(flag)
    }

    async fn find_by_id(&self, id: RecordId) -> Result<Option<VehicleFlag>, RepositoryError> {
        self.check("flags")?;
        let flags = self.flags.lock().unwrap();
        Ok(flags.iter().find(|f| f.id == id).cloned())
    }

    async fn find_active_by_plate(&self, plate: &Plate) -> Result<Vec<VehicleFlag>, RepositoryError> {
        self.check("flags")?;
        let flags = self.flags.lock().unwrap();
        Ok(flags
            .iter()
            .filter(|f| &f.plate == plate && f.is_active())
            .cloned()
            .collect())
    }

    async fn deactivate(&self, id: RecordId) -> Result<VehicleFlag, RepositoryError> {
        self.check("flags")?;
        let mut flags = self.flags.lock().unwrap();
        let flag = flags
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(RepositoryError::NotFound {
                kind: "Vehicle flag",
                id,
            })?;
        flag.resolve(Utc::now());
        Ok(flag.clone())
    }
}
