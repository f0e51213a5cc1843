//! CSV export formatter
//!
//! Produces the downloadable report artifact: UTF-8 with a leading
//! byte-order marker so non-Latin text (e.g. Arabic addresses) displays
//! correctly in common spreadsheet tools, a fixed column set, two-decimal
//! currency and a fixed 12-hour timestamp format.

use std::io::Write;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

use shared::models::{OrderRecord, format_amount};

use crate::api::OrdersApi;
use crate::report::collect::collect_orders;
use crate::report::range::{ReportKind, ReportRange};
use crate::{ClientConfig, ClientResult};

/// Fixed export column set, in order
pub const EXPORT_COLUMNS: [&str; 13] = [
    "Task ID",
    "Date/Time Delivered",
    "Driver ID",
    "Driver Name",
    "Driver Phone",
    "Customer Name",
    "Customer Phone",
    "Pickup Address",
    "Delivery Address",
    "COD",
    "Order Fees",
    "Status",
    "Tags",
];

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Deterministic artifact name: `<daily|monthly>-report-<YYYY-MM-DD>.csv`
pub fn report_filename(kind: ReportKind, date: NaiveDate) -> String {
    format!("{}-report-{}.csv", kind.as_str(), date.format("%Y-%m-%d"))
}

/// Write the header row and one row per record to `out`
pub fn write_report<W: Write>(records: &[OrderRecord], out: &mut W) -> ClientResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(EXPORT_COLUMNS)?;
    for record in records {
        writer.write_record(export_row(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Collect, normalize and export one report; returns the row count
///
/// Zero rows is not an error: the artifact is still written with its header
/// row and the caller surfaces an informational notice.
pub async fn export_report<W: Write>(
    api: &dyn OrdersApi,
    config: &ClientConfig,
    kind: ReportKind,
    today: NaiveDate,
    out: &mut W,
) -> ClientResult<usize> {
    let range = ReportRange::for_date(kind, today);
    let records = collect_orders(api, &range, config.page_size, config.max_pages).await?;
    write_report(&records, out)?;
    Ok(records.len())
}

/// Flat display row derived 1:1 from a record; purely presentational
fn export_row(record: &OrderRecord) -> [String; 13] {
    [
        record.task_id.clone(),
        record
            .completed_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_default(),
        record.driver_id.clone().unwrap_or_default(),
        record.driver_name.clone().unwrap_or_default(),
        record.driver_phone.clone().unwrap_or_default(),
        record.customer_name.clone().unwrap_or_default(),
        record.customer_phone.clone().unwrap_or_default(),
        record.pickup_address.clone(),
        record.delivery_address.clone(),
        format_amount(record.cod_amount),
        format_amount(record.order_fees),
        record
            .status
            .map(|s| s.label())
            .unwrap_or_else(|| "N/A".to_string()),
        record.tags.clone().unwrap_or_default(),
    ]
}

/// Render a timestamp as `YYYY-MM-DD HH:MM AM/PM` from its local components;
/// an unparseable value passes through verbatim rather than failing the row
fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %I:%M %p";
    const NAIVE_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return parsed.format(DISPLAY).to_string();
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format(DISPLAY).to_string();
    }
    raw.to_string()
}
