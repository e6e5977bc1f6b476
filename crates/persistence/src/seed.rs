// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo seating data for fresh installations.

use tracing::info;
use workplace_finder_domain::{PlaceStatus, WorkplaceRecord, strip_last_segment};

use crate::error::PersistenceError;
use crate::store::WorkplaceStore;

/// One demo seat: place, zone, occupant, personnel number, department,
/// team, position. An empty occupant means the seat is free.
type DemoSeat = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

const DEMO_SEATS: &[DemoSeat] = &[
    (
        "5.А.01.001",
        "Open space 1",
        "Иванов Иван Иванович",
        "001",
        "Департамент ИТ блока 'Сеть продаж'",
        "SberGeo",
        "Ведущий инженер по разработке",
    ),
    (
        "5.А.01.002",
        "Open space 1",
        "Петров Петр Петрович",
        "002",
        "Департамент ИТ блока 'Сеть продаж'",
        "SberPay",
        "Старший разработчик",
    ),
    (
        "5.А.01.003",
        "Open space 1",
        "Сидоров Алексей Михайлович",
        "003",
        "Департамент информационной безопасности",
        "Security",
        "Аналитик безопасности",
    ),
    ("5.А.01.004", "Open space 1", "", "", "", "", ""),
    (
        "5.А.02.001",
        "Open space 2",
        "Кузнецова Мария Сергеевна",
        "004",
        "Департамент маркетинга",
        "Digital Marketing",
        "Маркетолог",
    ),
    (
        "5.А.02.002",
        "Open space 2",
        "Волкова Ольга Дмитриевна",
        "005",
        "Департамент маркетинга",
        "Brand",
        "Бренд-менеджер",
    ),
    (
        "5.А.02.003",
        "Open space 2",
        "Соколова Анна Александровна",
        "006",
        "Департамент HR",
        "Recruiting",
        "Рекрутер",
    ),
    (
        "5.В.01.056",
        "Open space 29",
        "Морозов Дмитрий Андреевич",
        "007",
        "Департамент разработки",
        "Backend",
        "Senior Backend Developer",
    ),
    (
        "5.В.01.057",
        "Open space 29",
        "Новиков Сергей Викторович",
        "008",
        "Департамент разработки",
        "Frontend",
        "Senior Frontend Developer",
    ),
    (
        "5.В.01.058",
        "Open space 29",
        "Федоров Александр Павлович",
        "009",
        "Департамент QA",
        "Automation",
        "QA Automation Engineer",
    ),
    (
        "5.В.02.001",
        "Open space 30",
        "Смирнова Елена Борисовна",
        "010",
        "Департамент аналитики",
        "Data Science",
        "Data Scientist",
    ),
    (
        "5.В.02.002",
        "Open space 30",
        "Попова Татьяна Ивановна",
        "011",
        "Департамент аналитики",
        "BI",
        "BI Analyst",
    ),
    (
        "5.В.02.003",
        "Open space 30",
        "Васильева Наталья Сергеевна",
        "012",
        "Департамент финансов",
        "Accounting",
        "Финансовый аналитик",
    ),
];

/// Builds the demo workplace set.
#[must_use]
pub fn demo_workplaces() -> Vec<WorkplaceRecord> {
    DEMO_SEATS
        .iter()
        .map(
            |&(place_number, zone, employee_name, tab_number, department, team, position)| {
                let status: PlaceStatus = if employee_name.is_empty() {
                    PlaceStatus::Free
                } else {
                    PlaceStatus::Occupied
                };
                let block_code: &str = strip_last_segment(place_number).unwrap_or(place_number);

                let mut record: WorkplaceRecord =
                    WorkplaceRecord::new(place_number, block_code, status);
                record.zone = zone.to_string();
                record.employee_name = employee_name.to_string();
                record.tab_number = tab_number.to_string();
                record.department = department.to_string();
                record.team = team.to_string();
                record.position = position.to_string();
                record
            },
        )
        .collect()
}

/// Loads the demo workplaces into an empty store.
///
/// A store that already holds workplaces is left untouched.
///
/// # Returns
///
/// The number of workplaces written.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written.
pub fn seed_demo_data(store: &mut dyn WorkplaceStore) -> Result<usize, PersistenceError> {
    if store.count_workplaces()? > 0 {
        info!(backend = store.backend_name(), "Store not empty, skipping seed");
        return Ok(0);
    }

    let records: Vec<WorkplaceRecord> = demo_workplaces();
    for record in &records {
        store.upsert_by_key(record)?;
    }

    info!(
        backend = store.backend_name(),
        seeded = records.len(),
        "Seeded demo workplaces"
    );
    Ok(records.len())
}
