use crate::timeutil::{ClockTime, Weekday};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Horaires d'ouverture d'un jour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    pub open: ClockTime,
    pub close: ClockTime,
    #[serde(default)]
    pub closed: bool,
}

/// Exigence de staffing d'un poste pour une journée : au moins
/// `min_count` personnes distinctes et `min_hours` heures cumulées.
/// Les deux seuils sont évalués indépendamment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub min_count: u32,
    pub min_hours: u32,
}

/// Paramétrage du site : horaires d'ouverture + exigences par poste.
///
/// Les exigences sont parcourues en ordre alphabétique de poste
/// (BTreeMap), ce qui rend la génération déterministe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub opening_hours: BTreeMap<Weekday, DayHours>,
    pub requirements: BTreeMap<String, Requirement>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("openingHours missing day: {0}")]
    MissingDay(Weekday),
    #[error("requirements must not be empty")]
    NoRequirements,
    #[error("requirement position name must not be empty")]
    EmptyPosition,
}

impl Settings {
    /// Valide la forme une fois pour toutes à la frontière, avant toute
    /// génération ou évaluation : les sept jours présents, des exigences
    /// nommées.
    pub fn validate(&self) -> Result<(), SettingsError> {
        for day in Weekday::ALL {
            if !self.opening_hours.contains_key(&day) {
                return Err(SettingsError::MissingDay(day));
            }
        }
        if self.requirements.is_empty() {
            return Err(SettingsError::NoRequirements);
        }
        if self.requirements.keys().any(|p| p.trim().is_empty()) {
            return Err(SettingsError::EmptyPosition);
        }
        Ok(())
    }

    /// Paramétrage de repli d'un site unique : ouvert tous les jours
    /// 11:00–04:00 (dimanche 12:00), cinq postes suivis.
    pub fn default_single_location() -> Self {
        fn open(open: ClockTime) -> DayHours {
            DayHours {
                open,
                close: ClockTime::hm(4, 0),
                closed: false,
            }
        }

        let mut opening_hours = BTreeMap::new();
        for day in Weekday::ALL {
            let at = if day == Weekday::Sunday {
                ClockTime::hm(12, 0)
            } else {
                ClockTime::hm(11, 0)
            };
            opening_hours.insert(day, open(at));
        }

        let mut requirements = BTreeMap::new();
        requirements.insert("Server".to_string(), Requirement { min_count: 2, min_hours: 8 });
        requirements.insert("Bartender".to_string(), Requirement { min_count: 1, min_hours: 8 });
        requirements.insert("Kitchen".to_string(), Requirement { min_count: 2, min_hours: 8 });
        requirements.insert("Host".to_string(), Requirement { min_count: 1, min_hours: 6 });
        requirements.insert("Manager".to_string(), Requirement { min_count: 1, min_hours: 8 });

        Self {
            opening_hours,
            requirements,
        }
    }

    /// Le jour est-il fermé ? Un jour absent du paramétrage est traité
    /// comme ouvert (la validation de frontière signale l'absence).
    pub fn is_closed(&self, day: Weekday) -> bool {
        self.opening_hours.get(&day).is_some_and(|h| h.closed)
    }
}

/// Persistance JSON du paramétrage sur disque.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Settings> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let settings: Settings = serde_json::from_slice(&data)
            .with_context(|| format!("parsing settings {}", self.path.display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Fichier absent → paramétrage de repli ; fichier illisible → erreur.
    pub fn load_or_default(&self) -> Result<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default_single_location());
        }
        self.load()
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        settings.validate()?;
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing settings {}", self.path.display()))?;
        Ok(())
    }
}
