use crate::timeutil::{ClockTime, Weekday};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Identifiant fort pour Employee
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Créneau de disponibilité déclaré pour un jour de semaine.
/// `end < start` en valeur brute signifie que le créneau passe minuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Disponibilités hebdomadaires : jour de semaine → créneaux ordonnés.
pub type Weekly = BTreeMap<Weekday, Vec<TimeRange>>;

/// Membre de la brigade (un seul poste par personne).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub position: String,
    #[serde(
        default,
        deserialize_with = "forgiving_weekly",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub availability: Weekly,
}

impl Employee {
    pub fn new<N: Into<String>, P: Into<String>>(name: N, position: P) -> Self {
        Self {
            id: EmployeeId::random(),
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            position: position.into(),
            availability: Weekly::new(),
        }
    }

    /// Créneaux déclarés pour `day` ; tranche vide si rien n'est déclaré.
    pub fn availability_for(&self, day: Weekday) -> &[TimeRange] {
        self.availability.get(&day).map_or(&[], Vec::as_slice)
    }
}

/// Désérialisation tolérante des disponibilités : une entrée illisible
/// (champ manquant, "HH:MM" invalide) est écartée, jamais fatale — une
/// fiche abîmée rend la personne indisponible, elle ne bloque pas le
/// reste du roster.
fn forgiving_weekly<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekly, D::Error> {
    #[derive(Deserialize)]
    struct RawRange {
        #[serde(default)]
        start: Option<String>,
        #[serde(default)]
        end: Option<String>,
    }

    let raw: BTreeMap<Weekday, Vec<RawRange>> = BTreeMap::deserialize(deserializer)?;
    let mut out = Weekly::new();
    for (day, ranges) in raw {
        let parsed: Vec<TimeRange> = ranges
            .into_iter()
            .filter_map(|r| {
                let start = r.start?.parse().ok()?;
                let end = r.end?.parse().ok()?;
                Some(TimeRange { start, end })
            })
            .collect();
        if !parsed.is_empty() {
            out.insert(day, parsed);
        }
    }
    Ok(out)
}

/// Identifiant fort pour Shift
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftId(String);

impl ShiftId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Marqueur de provenance des shifts issus du générateur.
pub const AUTO_GENERATED_NOTE: &str = "Auto-generated";

/// Service planifié (généré ou saisi à la main).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub position: String,
    /// Date calendaire ISO "YYYY-MM-DD".
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    #[serde(default)]
    pub notes: String,
}

impl Shift {
    pub fn is_auto_generated(&self) -> bool {
        self.notes == AUTO_GENERATED_NOTE
    }

    /// Durée en heures entières, composantes heure uniquement
    /// (+24 si le service passe minuit).
    pub fn duration_hours(&self) -> u32 {
        ClockTime::span_hours(self.start_time, self.end_time)
    }
}

/// Roster complet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub shifts: Vec<Shift>,
}

impl Roster {
    pub fn find_employee_by_id<'a>(&'a self, id: &EmployeeId) -> Option<&'a Employee> {
        self.employees.iter().find(|e| &e.id == id)
    }
    pub fn find_employee_by_name<'a>(&'a self, name: &str) -> Option<&'a Employee> {
        self.employees.iter().find(|e| e.name == name)
    }
    /// Services du jour `date`, dans l'ordre de stockage.
    pub fn shifts_on(&self, date: NaiveDate) -> Vec<Shift> {
        self.shifts.iter().filter(|s| s.date == date).cloned().collect()
    }
}
