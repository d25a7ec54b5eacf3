use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;

use super::domain::{Application, ApplicationId, ApplicationStatus};

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("application not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Canonical owner of the application collection.
///
/// `list` returns the collection newest-first; `insert_front` preserves that
/// order by prepending. `put` replaces an existing record wholesale by id and
/// inserts at the front when the id is unknown. Identifier generation lives on
/// the store so uniqueness holds across everything it ever handed out.
pub trait ApplicationStore: Send + Sync {
    fn list(&self) -> Result<Vec<Application>, StoreError>;
    fn get(&self, id: &ApplicationId) -> Result<Application, StoreError>;
    fn put(&self, record: Application) -> Result<(), StoreError>;
    fn insert_front(&self, record: Application) -> Result<(), StoreError>;
    fn next_id(&self) -> Result<ApplicationId, StoreError>;
}

/// Demo dataset the portal starts from when no persisted collection exists.
pub fn seed_applications() -> Vec<Application> {
    fn app(
        id: &str,
        student: &str,
        course: &str,
        applied: (i32, u32, u32),
        status: ApplicationStatus,
        progress: u8,
    ) -> Application {
        Application {
            id: ApplicationId(id.to_string()),
            student_name: student.to_string(),
            course_title: course.to_string(),
            applied_date: NaiveDate::from_ymd_opt(applied.0, applied.1, applied.2)
                .expect("valid seed date"),
            status,
            progress,
        }
    }

    vec![
        app(
            "app-001",
            "Rahul Sharma",
            "B.Sc. Nursing",
            (2023, 10, 15),
            ApplicationStatus::Approved,
            100,
        ),
        app(
            "app-002",
            "Priya Verma",
            "MBA",
            (2023, 10, 18),
            ApplicationStatus::UnderReview,
            60,
        ),
        app(
            "app-003",
            "Amit Patel",
            "Computer Science",
            (2023, 10, 20),
            ApplicationStatus::Submitted,
            40,
        ),
        app(
            "app-004",
            "Sneha Gupta",
            "Diploma Pharmacy",
            (2023, 10, 21),
            ApplicationStatus::FeePending,
            90,
        ),
        app(
            "app-005",
            "Vikram Singh",
            "B.Sc. Nursing",
            (2023, 10, 22),
            ApplicationStatus::Rejected,
            100,
        ),
    ]
}

fn sequence_after(records: &[Application]) -> u64 {
    records
        .iter()
        .filter_map(|record| record.id.0.strip_prefix("app-"))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

fn format_id(sequence: u64) -> ApplicationId {
    ApplicationId(format!("app-{sequence:03}"))
}

fn upsert(records: &mut Vec<Application>, record: Application) {
    match records.iter_mut().find(|existing| existing.id == record.id) {
        Some(existing) => *existing = record,
        None => records.insert(0, record),
    }
}

/// In-memory store used by tests, the demo command, and servers that do not
/// configure a data path.
pub struct InMemoryApplicationStore {
    records: Mutex<Vec<Application>>,
    sequence: AtomicU64,
}

impl InMemoryApplicationStore {
    pub fn empty() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn seeded() -> Self {
        Self::from_records(seed_applications())
    }

    pub fn from_records(records: Vec<Application>) -> Self {
        let sequence = AtomicU64::new(sequence_after(&records));
        Self {
            records: Mutex::new(records),
            sequence,
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Application>>, StoreError> {
        self.records
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))
    }
}

impl ApplicationStore for InMemoryApplicationStore {
    fn list(&self) -> Result<Vec<Application>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn get(&self, id: &ApplicationId) -> Result<Application, StoreError> {
        self.lock()?
            .iter()
            .find(|record| &record.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn put(&self, record: Application) -> Result<(), StoreError> {
        upsert(&mut *self.lock()?, record);
        Ok(())
    }

    fn insert_front(&self, record: Application) -> Result<(), StoreError> {
        self.lock()?.insert(0, record);
        Ok(())
    }

    fn next_id(&self) -> Result<ApplicationId, StoreError> {
        Ok(format_id(self.sequence.fetch_add(1, Ordering::Relaxed)))
    }
}

/// File-backed store holding the serialized collection in a single JSON file.
///
/// The file is read lazily on first access and initialized with the seed
/// dataset when absent; every write rewrites the full file. Durability beyond
/// that is explicitly out of scope.
pub struct JsonFileStore {
    path: PathBuf,
    cache: Mutex<Option<Vec<Application>>>,
    sequence: AtomicU64,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: Mutex::new(None),
            sequence: AtomicU64::new(0),
        }
    }

    fn unavailable(err: impl std::fmt::Display) -> StoreError {
        StoreError::Unavailable(err.to_string())
    }

    fn load(&self) -> Result<Vec<Application>, StoreError> {
        if !self.path.exists() {
            let records = seed_applications();
            self.persist(&records)?;
            return Ok(records);
        }

        let raw = fs::read_to_string(&self.path).map_err(Self::unavailable)?;
        serde_json::from_str(&raw).map_err(Self::unavailable)
    }

    fn persist(&self, records: &[Application]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(Self::unavailable)?;
        }
        let raw = serde_json::to_string_pretty(records).map_err(Self::unavailable)?;
        fs::write(&self.path, raw).map_err(Self::unavailable)
    }

    fn with_records<T>(
        &self,
        mutates: bool,
        f: impl FnOnce(&mut Vec<Application>) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self
            .cache
            .lock()
            .map_err(|_| StoreError::Unavailable("store mutex poisoned".to_string()))?;

        if guard.is_none() {
            let records = self.load()?;
            self.sequence
                .store(sequence_after(&records), Ordering::Relaxed);
            *guard = Some(records);
        }

        let records = guard.as_mut().expect("cache populated above");
        let value = f(records)?;
        if mutates {
            self.persist(records)?;
        }
        Ok(value)
    }
}

impl ApplicationStore for JsonFileStore {
    fn list(&self) -> Result<Vec<Application>, StoreError> {
        self.with_records(false, |records| Ok(records.clone()))
    }

    fn get(&self, id: &ApplicationId) -> Result<Application, StoreError> {
        self.with_records(false, |records| {
            records
                .iter()
                .find(|record| &record.id == id)
                .cloned()
                .ok_or(StoreError::NotFound)
        })
    }

    fn put(&self, record: Application) -> Result<(), StoreError> {
        self.with_records(true, |records| {
            upsert(records, record);
            Ok(())
        })
    }

    fn insert_front(&self, record: Application) -> Result<(), StoreError> {
        self.with_records(true, |records| {
            records.insert(0, record);
            Ok(())
        })
    }

    fn next_id(&self) -> Result<ApplicationId, StoreError> {
        // Touch the cache so the sequence reflects any persisted records.
        self.with_records(false, |_| Ok(()))?;
        Ok(format_id(self.sequence.fetch_add(1, Ordering::Relaxed)))
    }
}
