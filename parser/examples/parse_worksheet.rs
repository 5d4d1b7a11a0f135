//! Basic worksheet parsing example.
//!
//! Demonstrates how to use `parse_worksheet_with_report()` to turn a report
//! dump into departments, sub-departments and items, and how to read the
//! diagnostics that come with it.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p worksheet-parser --example parse_worksheet
//! ```

use worksheet_parser::{OutputFormat, ParserConfig, format_worksheet, parse_worksheet_with_report};

fn main() {
    // Example report text, as exported from the ordering system
    let text = r#"
OPR241                    STORE ORDER WORKSHEET                      Page:    1
Store Number: 4521 SPRINGFIELD           Order Number: 778899
DC#: 12 CENTRAL DC
Date: 05/01/2024                         Time: 14:30
--------------------------------------------------------------------------------
Merch Code  Sku/Description                         Icons   Qty  Ctn
--------------------------------------------------------------------------------
Dept: 040 DAIRY              Sub-Dept: 010 MILK
222222 WHOLE MILK GALLON              R      6    2  ______
Dept: 010 GROCERY            Sub-Dept: 030 DRY GOODS
345678 RICE LONG GRAIN 5LB                   3    8  SZ
Dept: 010 GROCERY            Sub-Dept: 020 CANNED GOODS
123456 CANNED BEANS                   U M   12    4  ______
98765 TOMATO PASTE 6OZ               T      2   24  "
123456 TRUNCATED ROW
"#;

    // Parse with the default configuration
    let run = parse_worksheet_with_report(text, &ParserConfig::default());
    let worksheet = &run.worksheet;

    println!("Store: {} - {}", worksheet.header.store_number, worksheet.header.location);
    println!("Order: {}", worksheet.header.order_number);

    // Walk the sorted hierarchy
    for dept in &worksheet.departments {
        println!("\nDEPT {} - {}", dept.dept_number, dept.dept_name);
        for sub in &dept.sub_departments {
            println!("  SUB DEPT {} - {}", sub.sub_dept_number, sub.sub_dept_name);
            for item in &sub.items {
                println!(
                    "    {}  {:<32} {:<5} {:>3} {:>4}",
                    item.sku,
                    item.description,
                    item.icon_string(),
                    item.quantity,
                    item.carton_qty
                );
            }
        }
    }

    println!("\nTotal cases: {}", worksheet.summary.total_cases);
    println!("Coverage: {:.2}", run.report.coverage);

    if !run.report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &run.report.warnings {
            println!("  - {warning}");
        }
    }

    // Render the same worksheet as a markdown document
    match format_worksheet(worksheet, OutputFormat::Markdown) {
        Ok(markdown) => println!("\n{markdown}"),
        Err(err) => eprintln!("failed to render markdown: {err}"),
    }
}
