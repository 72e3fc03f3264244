use std::io::{self, Write};

use counted_sort::SortStatistics;

const VALUES_PER_ROW: usize = 5;

/// Writes one sort's statistics followed by the first `max_to_print` sorted values,
/// five to a row.
pub fn write_report<W: Write>(
    out: &mut W,
    name: &str,
    stats: &SortStatistics,
    sorted: &[u32],
    max_to_print: usize,
) -> io::Result<()> {
    writeln!(out, "{name}")?;
    writeln!(
        out,
        "{} elements, {} moves, {} compares",
        stats.elements, stats.moves, stats.compares
    )?;
    if stats.max_ds_size > 0 {
        writeln!(out, "Max data structure size: {}", stats.max_ds_size)?;
    }

    let shown = &sorted[..max_to_print.min(sorted.len())];
    for (i, value) in shown.iter().enumerate() {
        write!(out, "   {value:10}")?;
        if (i + 1) % VALUES_PER_ROW == 0 {
            writeln!(out)?;
        }
    }
    if shown.len() % VALUES_PER_ROW != 0 {
        writeln!(out)?;
    }

    Ok(())
}
