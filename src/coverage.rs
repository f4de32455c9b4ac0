//! Évaluateur de couverture : confronte les services d'une journée aux
//! exigences par poste. Fonction pure, aucun état caché.

use crate::model::Shift;
use crate::settings::Settings;
use crate::timeutil::{ClockTime, Weekday};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Optimal,
    Warning,
    Critical,
    Closed,
}

impl CoverageStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CoverageStatus::Optimal => "optimal",
            CoverageStatus::Warning => "warning",
            CoverageStatus::Critical => "critical",
            CoverageStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
}

/// Constat de sous-couverture, destiné à l'affichage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
}

/// Cumul observé pour un poste : têtes distinctes et heures entières.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PositionStats {
    pub count: u32,
    pub hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub status: CoverageStatus,
    pub issues: Vec<Issue>,
    pub stats: BTreeMap<String, PositionStats>,
}

/// Évalue la couverture d'une journée.
///
/// L'appelant fournit des services déjà filtrés sur la date cible ;
/// la fonction ne refiltre pas. Les heures sont cumulées sur les
/// composantes heure uniquement, avec un seul rabattement +24 quand le
/// service passe minuit — approximation grossière assumée.
pub fn validate_daily_coverage(
    date: NaiveDate,
    shifts: &[Shift],
    settings: &Settings,
) -> CoverageReport {
    let day = Weekday::from_date(date);
    if settings.is_closed(day) {
        return CoverageReport {
            status: CoverageStatus::Closed,
            issues: Vec::new(),
            stats: BTreeMap::new(),
        };
    }

    let mut stats: BTreeMap<String, PositionStats> = settings
        .requirements
        .keys()
        .map(|pos| (pos.clone(), PositionStats::default()))
        .collect();

    for shift in shifts {
        if shift.position.is_empty() {
            continue;
        }
        let entry = stats.entry(shift.position.clone()).or_default();
        entry.count += 1;
        entry.hours += ClockTime::span_hours(shift.start_time, shift.end_time);
    }

    let mut issues = Vec::new();
    for (position, req) in &settings.requirements {
        let actual = stats.get(position).copied().unwrap_or_default();
        if actual.count < req.min_count {
            issues.push(Issue {
                kind: IssueKind::Error,
                message: format!(
                    "Need {} more {}(s)",
                    req.min_count - actual.count,
                    position
                ),
            });
        }
        if actual.hours < req.min_hours {
            issues.push(Issue {
                kind: IssueKind::Warning,
                message: format!(
                    "{} hours low ({}/{})",
                    position, actual.hours, req.min_hours
                ),
            });
        }
    }

    let status = if issues.iter().any(|i| i.kind == IssueKind::Error) {
        CoverageStatus::Critical
    } else if issues.iter().any(|i| i.kind == IssueKind::Warning) {
        CoverageStatus::Warning
    } else {
        CoverageStatus::Optimal
    };

    CoverageReport {
        status,
        issues,
        stats,
    }
}
