//! CSV export (§4.5, §6): a deterministic, locale-independent rendering of
//! a [`BootstrapResult`]'s discount-factor grid.

use crate::point::BootstrapResult;

/// Fixed header row, column order and casing exactly as specified.
const HEADER: &[&str] = &["Tenor", "Discount Factor", "Zero Rate (%)", "Forward Rate (%)", "Source", "Day Count", "Compounding"];

/// Renders `result`'s grid as CSV: ASCII, LF-terminated, comma-separated,
/// dot decimal separator, one row per grid point in ascending-tenor order.
#[must_use]
pub fn export_csv(result: &BootstrapResult) -> String {
    let mut writer = csv::WriterBuilder::new().terminator(csv::Terminator::Any(b'\n')).from_writer(Vec::new());

    writer.write_record(HEADER).expect("in-memory CSV write cannot fail");

    let day_count = result.basis_convention.day_count.to_string();
    let compounding = result.basis_convention.compounding.to_string();

    for point in &result.discount_factors {
        writer
            .write_record([
                format!("{:.2}", point.tenor),
                format!("{:.8}", point.df),
                format!("{:.4}", point.zero_rate * 100.0),
                format!("{:.4}", point.forward_rate * 100.0),
                point.source.to_string(),
                day_count.clone(),
                compounding.clone(),
            ])
            .expect("in-memory CSV write cannot fail");
    }

    String::from_utf8(writer.into_inner().expect("in-memory CSV writer always flushes")).expect("CSV output is ASCII")
}
