use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::Deserialize;

use ftswatch_core::ProcessStatus;

use crate::DecodeError;

/// Wire shape of a status document.
///
/// The service encodes timestamps as raw numeric arrays instead of
/// strings, so they land here untyped and are converted in a second
/// pass. Counters and scalars are required; a payload without them is
/// malformed.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProcessStatus {
    process_id: String,
    phase: String,
    #[serde(default)]
    created_at: Vec<i64>,
    #[serde(default)]
    finished_at: Vec<i64>,
    total_patients: u64,
    total_bundles: u64,
    deidentified_bundles: u64,
    sent_bundles: u64,
    skipped_bundles: u64,
}

/// Decodes one raw status payload. Pure; performs no I/O.
pub fn decode_status(raw: &[u8]) -> Result<ProcessStatus, DecodeError> {
    let raw: RawProcessStatus = serde_json::from_slice(raw)?;
    Ok(ProcessStatus {
        process_id: raw.process_id,
        phase: raw.phase,
        created_at: timestamp_from_fields(&raw.created_at),
        finished_at: timestamp_from_fields(&raw.finished_at),
        total_patients: raw.total_patients,
        total_bundles: raw.total_bundles,
        deidentified_bundles: raw.deidentified_bundles,
        sent_bundles: raw.sent_bundles,
        skipped_bundles: raw.skipped_bundles,
    })
}

/// Interprets `[year, month, day, hour, minute, second, nanosecond]` as
/// a UTC civil timestamp.
///
/// The service omits timestamps the process has not reached yet, so
/// anything but exactly seven representable fields yields `None` rather
/// than a decode failure.
fn timestamp_from_fields(fields: &[i64]) -> Option<DateTime<Utc>> {
    let &[year, month, day, hour, minute, second, nanosecond] = fields else {
        return None;
    };
    Utc.with_ymd_and_hms(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
        u32::try_from(hour).ok()?,
        u32::try_from(minute).ok()?,
        u32::try_from(second).ok()?,
    )
    .single()?
    .with_nanosecond(u32::try_from(nanosecond).ok()?)
}
