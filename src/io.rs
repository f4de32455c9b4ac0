use crate::model::{Employee, Roster, TimeRange, Weekly};
use crate::timeutil::Weekday;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import d'employés depuis CSV : header
/// `name,email,phone,position[,availability]`.
///
/// La colonne `availability` encode des créneaux `jour HH:MM-HH:MM`
/// séparés par `;` (ex. `monday 11:00-19:00;friday 17:00-02:00`).
/// Un créneau illisible est écarté avec un avertissement, il ne fait
/// pas échouer l'import.
pub fn import_employees_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Employee>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        let position = rec.get(3).context("missing position")?.trim();
        if name.is_empty() || position.is_empty() {
            bail!("invalid employee row (empty name or position)");
        }
        let mut employee = Employee::new(name, position);
        if let Some(email) = rec.get(1) {
            employee.email = email.trim().to_string();
        }
        if let Some(phone) = rec.get(2) {
            employee.phone = phone.trim().to_string();
        }
        if let Some(raw) = rec.get(4) {
            employee.availability = parse_availability(raw.trim());
        }
        out.push(employee);
    }
    Ok(out)
}

fn parse_availability(raw: &str) -> Weekly {
    let mut weekly = Weekly::new();
    for chunk in raw.split(';') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        match parse_availability_chunk(chunk) {
            Some((day, range)) => weekly.entry(day).or_default().push(range),
            None => eprintln!("Warning: skipping unreadable availability chunk: {chunk}"),
        }
    }
    weekly
}

fn parse_availability_chunk(chunk: &str) -> Option<(Weekday, TimeRange)> {
    let (day_raw, range_raw) = chunk.split_once(' ')?;
    let day = day_raw.trim().parse().ok()?;
    let (start_raw, end_raw) = range_raw.trim().split_once('-')?;
    let start = start_raw.trim().parse().ok()?;
    let end = end_raw.trim().parse().ok()?;
    Some((day, TimeRange { start, end }))
}

/// Export JSON du roster (jolie mise en forme)
pub fn export_roster_json<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(roster)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV des services : header
/// `id,employee,position,date,start,end,notes`
pub fn export_shifts_csv<P: AsRef<Path>>(path: P, roster: &Roster) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "employee", "position", "date", "start", "end", "notes"])?;
    for s in &roster.shifts {
        let date = s.date.to_string();
        let start = s.start_time.to_string();
        let end = s.end_time.to_string();
        w.write_record([
            s.id.as_str(),
            s.employee_name.as_str(),
            s.position.as_str(),
            date.as_str(),
            start.as_str(),
            end.as_str(),
            s.notes.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
