/// Pack identifiers are authored as plain integers in the record file.
pub type PackId = i64;

/// Calendar day used for "new" / "updated" windows. No time-of-day component.
pub type CalendarDate = chrono::NaiveDate;
