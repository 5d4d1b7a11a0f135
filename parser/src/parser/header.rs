//! Report header extraction.
//!
//! Scans every raw line independently of the department walk. Markers are
//! checked in priority order store → DC → date, so a line carrying the store
//! marker is never read as a DC or date line. When a field group matches on
//! several lines, the last match wins.

use worksheet_core::HeaderInfo;

use super::grammar::{
    DATE_MARKER, DC_MARKER, STORE_MARKER, match_date_line, match_dc_line, match_store_line,
};

/// Extracts the header record from the raw report text.
pub fn extract_header(text: &str) -> HeaderInfo {
    let mut header = HeaderInfo::default();

    for line in text.lines() {
        if line.contains(STORE_MARKER) {
            if let Some(store) = match_store_line(line) {
                header.store_number = store.store_number;
                header.location = store.location;
                header.order_number = store.order_number;
            }
        } else if line.contains(DC_MARKER) {
            if let Some(dc) = match_dc_line(line) {
                header.dc_number = dc.dc_number;
                header.dc_name = dc.dc_name;
            }
        } else if line.contains(DATE_MARKER) {
            if let Some(date) = match_date_line(line) {
                header.date = date.date;
                header.time = date.time;
            }
        }
    }

    header
}
