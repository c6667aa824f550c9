//! Composite entry point for sheet-fed quotations.
//!
//! `compute_quotation` returns `None` instead of failing when the request is
//! incomplete, so forms can be priced on every keystroke and show
//! "no estimate yet" until width, height and copies are all positive.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::quotation::cost::{compose, per_copy, CostBreakdown, QuotationRates};
use crate::quotation::sheet_packer::{pack, MasterSheet, SheetLayout};

/// Inputs for one quotation. Constructed fresh per computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotationRequest {
    /// Finished copy width, inches.
    #[serde(default)]
    pub width: f64,
    /// Finished copy height, inches.
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub copies: i64,
    #[serde(default)]
    pub colored: bool,
    #[serde(default)]
    pub back_to_back: bool,
    #[serde(flatten)]
    pub rates: QuotationRates,
    /// Quote nothing for copies that do not fit the master sheet, instead of
    /// pricing them at one copy per sheet.
    #[serde(default)]
    pub reject_oversized: bool,
}

impl QuotationRequest {
    /// A request at the shop's default rates.
    pub fn new(width: f64, height: f64, copies: i64, colored: bool) -> Self {
        Self {
            width,
            height,
            copies,
            colored,
            back_to_back: false,
            rates: QuotationRates::default(),
            reject_oversized: false,
        }
    }

    pub fn back_to_back(mut self, back_to_back: bool) -> Self {
        self.back_to_back = back_to_back;
        self
    }

    pub fn with_rates(mut self, rates: QuotationRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn reject_oversized(mut self, reject: bool) -> Self {
        self.reject_oversized = reject;
        self
    }
}

/// Full quotation: sheet layout, cost breakdown and per-copy price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuotationResult {
    pub copies: u64,
    #[serde(flatten)]
    pub layout: SheetLayout,
    #[serde(flatten)]
    pub cost: CostBreakdown,
    pub per_copy: u64,
}

impl QuotationResult {
    pub fn total(&self) -> f64 {
        self.cost.total
    }
}

/// Prices a sheet-fed job on the standard master sheet.
pub fn compute_quotation(request: &QuotationRequest) -> Option<QuotationResult> {
    compute_quotation_on(&MasterSheet::STANDARD, request)
}

/// Prices a sheet-fed job on an arbitrary master sheet.
pub fn compute_quotation_on(
    sheet: &MasterSheet,
    request: &QuotationRequest,
) -> Option<QuotationResult> {
    // `!(x > 0)` also rejects NaN.
    if !(request.width > 0.0) || !(request.height > 0.0) || request.copies <= 0 {
        return None;
    }
    if request.reject_oversized && !sheet.fits(request.width, request.height) {
        debug!(
            width = request.width,
            height = request.height,
            "copy does not fit master sheet; no quotation"
        );
        return None;
    }

    let copies = request.copies as u64;
    let layout = pack(sheet, request.width, request.height, copies);
    let cost = compose(
        layout.total_sheets,
        request.colored,
        request.back_to_back,
        &request.rates,
    );
    let result = QuotationResult {
        copies,
        layout,
        cost,
        per_copy: per_copy(cost.total, copies),
    };

    debug!(
        copies,
        outs = layout.outs,
        total_sheets = layout.total_sheets,
        total = cost.total,
        "quotation computed"
    );
    Some(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_single_color_scenario() {
        let q = compute_quotation(&QuotationRequest::new(8.5, 11.0, 100, false)).unwrap();
        assert_eq!(q.layout.outs, 6);
        assert_eq!(q.layout.sheets_needed, 17);
        assert_eq!(q.layout.waste, 1);
        assert_eq!(q.layout.total_sheets, 18);
        assert_eq!(q.cost.paper_total, 360.0);
        assert_eq!(q.cost.plate_count, 1);
        assert_eq!(q.cost.plate_total, 500.0);
        assert_eq!(q.cost.run_total, 400.0);
        assert_eq!(q.cost.base_cost, 1260.0);
        assert_eq!(q.total(), 2520.0);
        assert_eq!(q.per_copy, 26);
    }

    #[test]
    fn test_letter_full_color_scenario() {
        let q = compute_quotation(&QuotationRequest::new(8.5, 11.0, 100, true)).unwrap();
        assert_eq!(q.cost.plate_count, 4);
        assert_eq!(q.cost.plate_total, 2000.0);
        assert_eq!(q.cost.run_total, 1600.0);
        assert_eq!(q.cost.base_cost, 3960.0);
        assert_eq!(q.total(), 7920.0);
        assert_eq!(q.per_copy, 80);
    }

    #[test]
    fn test_oversized_copy_still_quoted() {
        let q = compute_quotation(&QuotationRequest::new(30.0, 40.0, 1, false)).unwrap();
        assert_eq!(q.layout.per_row, 0);
        assert_eq!(q.layout.per_col, 0);
        assert_eq!(q.layout.outs, 1);
        assert_eq!(q.layout.sheets_needed, 1);
        assert!(q.total() > 0.0);
    }

    #[test]
    fn test_tiny_copy_is_quoted_on_one_sheet() {
        let q = compute_quotation(&QuotationRequest::new(1e-9, 1e-9, 100, false)).unwrap();
        assert_eq!(q.layout.sheets_needed, 1);
        assert_eq!(q.layout.total_sheets, 2);
        // 2*20 + 500 + 400 = 940, doubled
        assert_eq!(q.total(), 1880.0);
        assert_eq!(q.per_copy, 19);
    }

    #[test]
    fn test_reject_oversized_flag() {
        let req = QuotationRequest::new(30.0, 40.0, 1, false).reject_oversized(true);
        assert!(compute_quotation(&req).is_none());

        let fits = QuotationRequest::new(8.5, 11.0, 100, false).reject_oversized(true);
        assert!(compute_quotation(&fits).is_some());
    }

    #[test]
    fn test_invalid_inputs_yield_none() {
        assert!(compute_quotation(&QuotationRequest::new(0.0, 10.0, 5, false)).is_none());
        assert!(compute_quotation(&QuotationRequest::new(10.0, 0.0, 5, false)).is_none());
        assert!(compute_quotation(&QuotationRequest::new(10.0, 10.0, 0, false)).is_none());
        assert!(compute_quotation(&QuotationRequest::new(-2.0, 10.0, 5, false)).is_none());
        assert!(compute_quotation(&QuotationRequest::new(10.0, 10.0, -5, false)).is_none());
        assert!(compute_quotation(&QuotationRequest::new(f64::NAN, 10.0, 5, false)).is_none());
    }

    #[test]
    fn test_deterministic() {
        let req = QuotationRequest::new(3.5, 2.0, 1234, true).back_to_back(true);
        let a = compute_quotation(&req).unwrap();
        let b = compute_quotation(&req).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total().to_bits(), b.total().to_bits());
    }

    #[test]
    fn test_total_monotonic_in_copies() {
        for (w, h, colored) in [(8.5, 11.0, false), (3.5, 2.0, true), (30.0, 40.0, false)] {
            let mut previous = 0.0;
            for copies in 1..=2_000 {
                let q = compute_quotation(&QuotationRequest::new(w, h, copies, colored)).unwrap();
                assert!(q.total() >= previous, "total dropped at {copies} copies");
                previous = q.total();
            }
        }
    }

    #[test]
    fn test_custom_sheet() {
        let sheet = MasterSheet {
            width: 20.0,
            height: 26.0,
        };
        let q = compute_quotation_on(&sheet, &QuotationRequest::new(8.5, 11.0, 40, false)).unwrap();
        assert_eq!(q.layout.outs, 4);
        assert_eq!(q.layout.sheets_needed, 10);
    }

    #[test]
    fn test_request_json_defaults() {
        let req: QuotationRequest =
            serde_json::from_str(r#"{"width": 8.5, "height": 11, "copies": 100, "colored": false}"#)
                .unwrap();
        assert!(!req.back_to_back);
        assert!(!req.reject_oversized);
        assert_eq!(req.rates, QuotationRates::default());
        assert_eq!(compute_quotation(&req).unwrap().total(), 2520.0);
    }

    #[test]
    fn test_request_json_missing_width_quotes_nothing() {
        let req: QuotationRequest =
            serde_json::from_str(r#"{"height": 11, "copies": 100, "colored": false}"#).unwrap();
        assert_eq!(req.width, 0.0);
        assert!(compute_quotation(&req).is_none());
    }

    #[test]
    fn test_result_json_is_flat() {
        let q = compute_quotation(&QuotationRequest::new(8.5, 11.0, 100, false)).unwrap();
        let value = serde_json::to_value(q).unwrap();
        assert_eq!(value["outs"], 6);
        assert_eq!(value["total_sheets"], 18);
        assert_eq!(value["total"], 2520.0);
        assert_eq!(value["per_copy"], 26);
    }
}
