//! Output formatting for worksheets and reports.

use worksheet_core::{Department, HeaderInfo, Worksheet};

use crate::error::Result;
use crate::report::{ParseReport, ParseRun};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a worksheet in the requested output format.
pub fn format_worksheet(worksheet: &Worksheet, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(worksheet)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(worksheet)?),
        OutputFormat::Markdown => Ok(worksheet_to_markdown(worksheet)),
        OutputFormat::Table => Ok(worksheet_to_table(worksheet)),
    }
}

/// Formats only the header record.
pub fn format_header(header: &HeaderInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(header)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(header)?),
        OutputFormat::Markdown => Ok(header_to_markdown(header)),
        OutputFormat::Table => Ok(header_lines(header).join("\n") + "\n"),
    }
}

/// Formats a parse report in the requested output format.
pub fn format_report(report: &ParseReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Markdown => Ok(report_to_markdown(report)),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

/// Formats a worksheet together with its report.
///
/// Structured formats emit one document with `worksheet` and `report` keys;
/// text formats render the worksheet followed by the report.
pub fn format_run(run: &ParseRun, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(run)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(run)?),
        OutputFormat::Markdown | OutputFormat::Table => {
            let mut out = format_worksheet(&run.worksheet, format)?;
            out.push('\n');
            out.push_str(&format_report(&run.report, format)?);
            Ok(out)
        }
    }
}

fn header_lines(header: &HeaderInfo) -> Vec<String> {
    vec![
        format!("Store: {} - {}", header.store_number, header.location),
        format!("Order: {}", header.order_number),
        format!("DC: {} - {}", header.dc_number, header.dc_name),
        format!("Date: {} Time: {}", header.date, header.time),
    ]
}

fn header_to_markdown(header: &HeaderInfo) -> String {
    let mut out = String::from("# Store Order Worksheet\n\n");
    for line in header_lines(header) {
        out.push_str(&format!("- {line}\n"));
    }
    out
}

fn worksheet_to_markdown(worksheet: &Worksheet) -> String {
    let mut out = header_to_markdown(&worksheet.header);
    out.push('\n');

    for dept in &worksheet.departments {
        out.push_str(&format!("## DEPT {} - {}\n\n", dept.dept_number, dept.dept_name));
        for sub in &dept.sub_departments {
            out.push_str(&format!(
                "### SUB DEPT {} - {}\n\n",
                sub.sub_dept_number, sub.sub_dept_name
            ));
            if sub.items.is_empty() {
                out.push_str("_No items._\n\n");
                continue;
            }
            out.push_str("| SKU | Description | Icons | Quantity | Carton Qty |\n");
            out.push_str("|-----|-------------|-------|----------|------------|\n");
            for item in &sub.items {
                out.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    item.sku,
                    item.description,
                    item.icon_string(),
                    item.quantity,
                    item.carton_qty
                ));
            }
            out.push('\n');
        }
    }

    out.push_str(&format!(
        "**Departments:** {}  **Items:** {}  **Total cases:** {}\n",
        worksheet.summary.department_count,
        worksheet.summary.item_count,
        worksheet.summary.total_cases
    ));
    out
}

fn worksheet_to_table(worksheet: &Worksheet) -> String {
    let mut out = header_lines(&worksheet.header).join("\n");
    out.push('\n');

    for dept in &worksheet.departments {
        out.push('\n');
        out.push_str(&department_to_table(dept));
    }

    out.push_str(&format!(
        "\n{} departments, {} sub-departments, {} items, {} cases\n",
        worksheet.summary.department_count,
        worksheet.summary.sub_department_count,
        worksheet.summary.item_count,
        worksheet.summary.total_cases
    ));
    out
}

fn department_to_table(dept: &Department) -> String {
    let mut out = format!("DEPT {} - {}\n", dept.dept_number, dept.dept_name);

    for sub in &dept.sub_departments {
        out.push_str(&format!(
            "  SUB DEPT {} - {}\n",
            sub.sub_dept_number, sub.sub_dept_name
        ));
        let desc_width = sub
            .items
            .iter()
            .map(|item| item.description.chars().count())
            .max()
            .unwrap_or(0)
            .max("Description".len());

        if sub.items.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "    {:<6}  {:<desc_width$}  {:<11}  {:>8}  {:>10}\n",
            "SKU", "Description", "Icons", "Quantity", "Carton Qty"
        ));
        for item in &sub.items {
            out.push_str(&format!(
                "    {:<6}  {:<desc_width$}  {:<11}  {:>8}  {:>10}\n",
                item.sku.as_str(),
                item.description,
                item.icon_string(),
                item.quantity,
                item.carton_qty
            ));
        }
    }

    out
}

fn report_to_markdown(report: &ParseReport) -> String {
    let mut out = String::from("# Parse Report\n\n");
    out.push_str(&format!(
        "- **Header found:** {}\n",
        if report.header_found { "yes" } else { "no" }
    ));
    out.push_str(&format!("- **Lines:** {}\n", report.total_lines));
    out.push_str(&format!("- **Noise lines:** {}\n", report.noise_lines));
    out.push_str(&format!("- **Coverage:** {:.2}\n", report.coverage));
    out.push_str(&format!("- **Total cases:** {}\n", report.summary.total_cases));

    if !report.unmatched_lines.is_empty() {
        out.push_str("\n## Unmatched lines\n\n");
        for line in &report.unmatched_lines {
            out.push_str(&format!("- `{line}`\n"));
        }
    }

    if !report.warnings.is_empty() {
        out.push_str("\n## Warnings\n\n");
        for w in &report.warnings {
            out.push_str(&format!("- {w}\n"));
        }
    }

    out
}

fn report_to_table(report: &ParseReport) -> String {
    let mut out = format!(
        "lines={} noise={} recognized={} cov={:.2} unmatched={} orphans={}\n",
        report.total_lines,
        report.noise_lines,
        report.recognized_lines,
        report.coverage,
        report.unmatched_item_count,
        report.orphan_items,
    );
    for w in &report.warnings {
        out.push_str(&format!("warning: {w}\n"));
    }
    out
}
