#![forbid(unsafe_code)]
//! Brigade — planification de services pour un site unique (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Génération automatique depuis les disponibilités hebdomadaires.
//! - Évaluation de couverture par poste (têtes + heures).
//! - Heures "HH:MM" locales au site ; dates ISO ; rendu hors de la lib.

pub mod coverage;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod settings;
pub mod storage;
pub mod timeutil;

pub use coverage::{
    validate_daily_coverage, CoverageReport, CoverageStatus, Issue, IssueKind, PositionStats,
};
pub use model::{
    Employee, EmployeeId, Roster, Shift, ShiftId, TimeRange, Weekly, AUTO_GENERATED_NOTE,
};
pub use scheduler::{generate_daily_schedule, generate_weekly_schedule};
pub use settings::{DayHours, Requirement, Settings, SettingsError, SettingsStore};
pub use storage::{JsonStorage, Storage};
pub use timeutil::{ClockTime, TimeError, Weekday};
