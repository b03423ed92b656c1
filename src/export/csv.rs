//! CSV export of recorded expenses

use crate::error::WarikanResult;
use crate::store::LedgerStore;
use std::io::Write;

/// Write every expense as `Paid By,Description,Amount`
pub fn export_expenses_csv<W: Write>(store: &LedgerStore, writer: W) -> WarikanResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Paid By", "Description", "Amount"])?;

    for expense in store.expenses() {
        csv_writer.write_record([
            expense.paid_by.as_str(),
            expense.description.as_str(),
            expense.amount.to_decimal_string().as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
