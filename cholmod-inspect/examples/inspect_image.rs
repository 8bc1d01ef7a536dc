//! Render a cholmod_sparse value from a synthetic memory image

use cholmod_inspect::{
    register_cholmod_printers, ImageBuilder, OwnedValue, PrinterTable, SPARSE_TYPE_TAG,
};

fn main() -> cholmod_inspect::Result<()> {
    // 4 x 3 packed sorted CSC:
    //   [[1.0, 0,   0  ],
    //    [0,   0,   2.5],
    //    [0,   0,   0  ],
    //    [3.0, 0,   4.5]]
    let mut builder = ImageBuilder::new(0x7f60_0000_0000);
    let p = builder.push_i64s(&[0, 2, 2, 4])?;
    let i = builder.push_i64s(&[0, 3, 1, 3])?;
    let x = builder.push_f64s(&[1.0, 3.0, 2.5, 4.5])?;
    let image = builder.finish();

    let value = OwnedValue::structure(SPARSE_TYPE_TAG)
        .with_field("nrow", OwnedValue::int(4))
        .with_field("ncol", OwnedValue::int(3))
        .with_field("p", OwnedValue::address(p))
        .with_field("i", OwnedValue::address(i))
        .with_field("x", OwnedValue::address(x))
        .with_field("stype", OwnedValue::int(0))
        .with_field("itype", OwnedValue::int(2))
        .with_field("xtype", OwnedValue::int(1))
        .with_field("dtype", OwnedValue::int(0))
        .with_field("packed", OwnedValue::int(1))
        .with_field("sorted", OwnedValue::int(1));

    // Register once, dispatch like a host display layer would
    let mut table: PrinterTable<OwnedValue, _> = PrinterTable::new();
    register_cholmod_printers(&mut table);

    match table.find(&value, &image)? {
        Some(printer) => {
            println!("{}", printer.summary());
            for entry in printer.entries() {
                let (label, value) = entry?;
                println!("  {label} = {value}");
            }
        }
        None => println!("no printer claimed the value"),
    }

    Ok(())
}
