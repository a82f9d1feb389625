use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use tracing::info;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{AttendanceRecord, User};
use crate::store::Store;

fn now_date_time() -> (NaiveDate, NaiveTime) {
    let now = Local::now();
    let time = now.time();
    (now.date_naive(), time.with_nanosecond(0).unwrap_or(time))
}

/// Today's record for an employee, if one exists.
pub fn today_record(store: &Store, employee_id: Uuid) -> Option<AttendanceRecord> {
    let today = Local::now().date_naive();
    store
        .attendance
        .load()
        .into_iter()
        .find(|r| r.employee_id == employee_id && r.date == today)
}

/// Opens today's attendance record with the current wall-clock time.
pub fn check_in(store: &Store, user: &User) -> Result<AttendanceRecord, ServiceError> {
    let (date, time) = now_date_time();
    check_in_at(store, user, date, time)
}

pub fn check_in_at(
    store: &Store,
    user: &User,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<AttendanceRecord, ServiceError> {
    store.attendance.update(|records| {
        if records
            .iter()
            .any(|r| r.employee_id == user.id && r.date == date)
        {
            return Err(ServiceError::DuplicateCheckIn);
        }
        let record = AttendanceRecord {
            id: Uuid::new_v4(),
            employee_id: user.id,
            employee_name: user.name.clone(),
            date,
            check_in: time,
            check_out: None,
        };
        records.push(record.clone());
        info!(employee_id = %user.id, %date, "checked in");
        Ok(record)
    })
}

/// Closes today's open record with the current wall-clock time. `check_out`
/// is set exactly once and never cleared.
pub fn check_out(store: &Store, employee_id: Uuid) -> Result<AttendanceRecord, ServiceError> {
    let (date, time) = now_date_time();
    check_out_at(store, employee_id, date, time)
}

pub fn check_out_at(
    store: &Store,
    employee_id: Uuid,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<AttendanceRecord, ServiceError> {
    store.attendance.update(|records| {
        let record = records
            .iter_mut()
            .find(|r| r.employee_id == employee_id && r.date == date && r.check_out.is_none())
            .ok_or(ServiceError::InvalidCheckoutState)?;
        record.check_out = Some(time);
        info!(%employee_id, %date, "checked out");
        Ok(record.clone())
    })
}

/// All records for an employee, newest day first for display.
pub fn history(store: &Store, employee_id: Uuid) -> Vec<AttendanceRecord> {
    let mut records: Vec<_> = store
        .attendance
        .load()
        .into_iter()
        .filter(|r| r.employee_id == employee_id)
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Worked hours and leftover minutes, or `None` while still checked in.
/// A check-out earlier than the check-in (a shift crossing midnight) comes
/// out negative; there is no agreed handling for that yet, so the value is
/// passed through as computed.
pub fn duration(record: &AttendanceRecord) -> Option<(i64, i64)> {
    let check_out = record.check_out?;
    let delta = check_out - record.check_in;
    Some((delta.num_hours(), delta.num_minutes() % 60))
}

/// The display form used in history views: `"7h 58m"` or `"N/A"`.
pub fn duration_label(record: &AttendanceRecord) -> String {
    match duration(record) {
        Some((hours, minutes)) => format!("{hours}h {minutes}m"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn test_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (dir, store)
    }

    fn employee() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            password: "secret".into(),
            role: Role::Employee,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    #[test]
    fn second_check_in_same_day_is_rejected() {
        let (_dir, store) = test_store();
        let user = employee();
        check_in_at(&store, &user, date("2024-03-15"), time("09:00:00")).unwrap();
        let err = check_in_at(&store, &user, date("2024-03-15"), time("09:05:00")).unwrap_err();
        assert!(matches!(err, ServiceError::DuplicateCheckIn));

        let todays: Vec<_> = store
            .attendance
            .load()
            .into_iter()
            .filter(|r| r.employee_id == user.id && r.date == date("2024-03-15"))
            .collect();
        assert_eq!(todays.len(), 1);
    }

    #[test]
    fn check_in_allowed_on_a_new_day() {
        let (_dir, store) = test_store();
        let user = employee();
        check_in_at(&store, &user, date("2024-03-15"), time("09:00:00")).unwrap();
        check_in_at(&store, &user, date("2024-03-16"), time("09:00:00")).unwrap();
        assert_eq!(store.attendance.load().len(), 2);
    }

    #[test]
    fn check_out_without_check_in_fails() {
        let (_dir, store) = test_store();
        let user = employee();
        let err =
            check_out_at(&store, user.id, date("2024-03-15"), time("17:00:00")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCheckoutState));
    }

    #[test]
    fn double_check_out_fails() {
        let (_dir, store) = test_store();
        let user = employee();
        check_in_at(&store, &user, date("2024-03-15"), time("09:00:00")).unwrap();
        check_out_at(&store, user.id, date("2024-03-15"), time("17:00:00")).unwrap();
        let err =
            check_out_at(&store, user.id, date("2024-03-15"), time("18:00:00")).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidCheckoutState));
    }

    #[test]
    fn duration_matches_check_times_to_the_minute() {
        let (_dir, store) = test_store();
        let user = employee();
        check_in_at(&store, &user, date("2024-03-15"), time("09:02:00")).unwrap();
        let record =
            check_out_at(&store, user.id, date("2024-03-15"), time("17:31:00")).unwrap();
        assert!(record.check_out.is_some());
        assert_eq!(duration(&record), Some((8, 29)));
        assert_eq!(duration_label(&record), "8h 29m");
    }

    #[test]
    fn open_record_has_no_duration() {
        let (_dir, store) = test_store();
        let user = employee();
        let record = check_in_at(&store, &user, date("2024-03-15"), time("09:00:00")).unwrap();
        assert_eq!(duration(&record), None);
        assert_eq!(duration_label(&record), "N/A");
    }

    #[test]
    fn history_is_newest_first() {
        let (_dir, store) = test_store();
        let user = employee();
        check_in_at(&store, &user, date("2024-03-14"), time("09:00:00")).unwrap();
        check_in_at(&store, &user, date("2024-03-16"), time("09:00:00")).unwrap();
        check_in_at(&store, &user, date("2024-03-15"), time("09:00:00")).unwrap();

        let dates: Vec<_> = history(&store, user.id).iter().map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![date("2024-03-16"), date("2024-03-15"), date("2024-03-14")]
        );
    }

    #[test]
    fn history_excludes_other_employees() {
        let (_dir, store) = test_store();
        let a = employee();
        let b = employee();
        check_in_at(&store, &a, date("2024-03-15"), time("09:00:00")).unwrap();
        check_in_at(&store, &b, date("2024-03-15"), time("09:30:00")).unwrap();
        assert_eq!(history(&store, a.id).len(), 1);
    }
}
