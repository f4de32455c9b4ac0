use crate::model::{Employee, EmployeeId, Shift, ShiftId, AUTO_GENERATED_NOTE};
use crate::settings::Settings;
use crate::timeutil::Weekday;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Génère les services d'une journée à partir des disponibilités.
///
/// Déroulé, par poste en ordre alphabétique des exigences :
/// prendre les personnes disponibles non encore assignées ce jour-là,
/// dans leur ordre de liste, à hauteur de `min_count` ; durée cible
/// `ceil(min_hours / min_count)` heures à partir du début du premier
/// créneau déclaré. Les créneaux suivants d'une même journée ne sont
/// jamais considérés.
///
/// Le rognage de fin de service est une comparaison "HH:MM" brute, sans
/// dépliage au-delà de minuit : une fin calculée qui retombe après
/// minuit (valeur brute inférieure à la borne de disponibilité) n'est
/// jamais rognée, même quand l'ordre mural l'exigerait. Comportement
/// historique, conservé tel quel.
pub fn generate_daily_schedule(
    date: NaiveDate,
    employees: &[Employee],
    settings: &Settings,
) -> Vec<Shift> {
    let day = Weekday::from_date(date);
    if settings.is_closed(day) {
        #[cfg(feature = "logging")]
        tracing::debug!(%date, day = day.as_str(), "closed day, nothing to generate");
        return Vec::new();
    }

    // disponibles ce jour-là, groupés par poste
    let mut by_position: BTreeMap<&str, Vec<&Employee>> = BTreeMap::new();
    for emp in employees {
        if !emp.availability_for(day).is_empty() {
            by_position.entry(emp.position.as_str()).or_default().push(emp);
        }
    }

    let mut assigned: HashSet<&EmployeeId> = HashSet::new();
    let mut shifts = Vec::new();

    for (position, req) in &settings.requirements {
        let Some(candidates) = by_position.get(position.as_str()) else {
            #[cfg(feature = "logging")]
            tracing::debug!(%date, %position, "no available employee for position");
            continue;
        };
        if req.min_count == 0 {
            continue;
        }

        // durée dérivée de l'exigence, pas de la fenêtre déclarée
        let duration = req.min_hours.div_ceil(req.min_count);

        let picked: Vec<&Employee> = candidates
            .iter()
            .filter(|e| !assigned.contains(&e.id))
            .take(req.min_count as usize)
            .copied()
            .collect();

        for emp in picked {
            // revérifié dans la boucle : deux fiches portant le même id
            // ne doivent produire qu'un seul service
            if assigned.contains(&emp.id) {
                continue;
            }
            let Some(window) = emp.availability_for(day).first() else {
                continue;
            };
            let start = window.start;
            let mut end = start.add_hours(duration);
            // comparaison brute : pas de rognage si la fin calculée
            // retombe "avant" la borne après passage de minuit
            if end > window.end {
                end = window.end;
            }

            shifts.push(Shift {
                id: ShiftId::random(),
                employee_id: emp.id.clone(),
                employee_name: emp.name.clone(),
                position: emp.position.clone(),
                date,
                start_time: start,
                end_time: end,
                notes: AUTO_GENERATED_NOTE.to_string(),
            });
            assigned.insert(&emp.id);
        }
    }

    shifts
}
