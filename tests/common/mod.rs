use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes `rows` quotes alternating between registered and unregistered
/// customers, with amounts 1.00, 2.00, ... and no coupon.
pub fn generate_quotes_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["registered", "amount", "coupon"])?;

    for i in 1..=rows {
        let registered = if i % 2 == 0 { "true" } else { "false" };
        wtr.write_record([registered, &format!("{i}.00"), ""])?;
    }

    wtr.flush()?;
    Ok(())
}
