//! Générateur automatique de planning.
//!
//! Fonctions pures : elles reçoivent un instantané (roster, paramétrage)
//! et rendent des services candidats ; la persistance et le rendu restent
//! dehors. Un jour sous-staffé n'est jamais une erreur ici — c'est
//! l'évaluateur de couverture qui le signale.

mod daily;

pub use daily::generate_daily_schedule;

use crate::model::{Employee, Shift};
use crate::settings::Settings;
use chrono::NaiveDate;

/// Génère sept jours calendaires consécutifs à partir de `week_start`,
/// chaque jour indépendamment (pas d'optimisation inter-jours), et
/// concatène les résultats.
pub fn generate_weekly_schedule(
    week_start: NaiveDate,
    employees: &[Employee],
    settings: &Settings,
) -> Vec<Shift> {
    let mut all = Vec::new();
    let mut current = week_start;
    for _ in 0..7 {
        all.extend(generate_daily_schedule(current, employees, settings));
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    all
}
