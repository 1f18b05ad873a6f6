#![allow(clippy::uninlined_format_args)]

use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use log_sketch_rs::{HyperLogLogEstimator, bytes2hr};

const TRUE_COUNT: usize = 100_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "HyperLogLog accuracy across precisions ({} distinct items)\n",
        TRUE_COUNT
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Precision").set_alignment(CellAlignment::Center),
            Cell::new("Registers").set_alignment(CellAlignment::Center),
            Cell::new("Memory").set_alignment(CellAlignment::Center),
            Cell::new("Estimate").set_alignment(CellAlignment::Center),
            Cell::new("Error").set_alignment(CellAlignment::Center),
            Cell::new("Expected RSE").set_alignment(CellAlignment::Center),
        ]);

    for precision in [8u8, 10, 12, 14, 16] {
        let mut hll = HyperLogLogEstimator::new(precision)?;
        for i in 0..TRUE_COUNT {
            let ip =
                format!("10.{}.{}.{}", i >> 16 & 0xff, i >> 8 & 0xff, i & 0xff);
            hll.add(ip.as_bytes());
        }

        let estimate = hll.estimate();
        let error =
            (estimate - TRUE_COUNT as f64).abs() / TRUE_COUNT as f64 * 100.0;

        table.add_row(vec![
            Cell::new(format!("{}", precision)),
            Cell::new(format!("{}", hll.num_registers())),
            Cell::new(bytes2hr(hll.size_bytes())),
            Cell::new(format!("{:.0}", estimate)),
            Cell::new(format!("{:.2}%", error)),
            Cell::new(format!("±{:.2}%", hll.relative_error() * 100.0)),
        ]);
    }

    println!("{}", table);
    Ok(())
}
