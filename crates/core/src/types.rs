/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates (birthdates, release dates) map to PostgreSQL DATE.
pub type Date = chrono::NaiveDate;

/// Wall-clock times (program durations, airtimes) map to PostgreSQL TIME.
pub type TimeOfDay = chrono::NaiveTime;
