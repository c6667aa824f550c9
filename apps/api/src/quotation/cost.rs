//! Cost Composer — turns a sheet count and plate requirements into money.
//!
//! Plates: 4 per side for full-color process, 1 per side otherwise, doubled
//! for back-to-back jobs. Each plate carries a plate charge and one run charge.
//! The run charge does not grow with the number of sheets.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAPER_COST: f64 = 20.0;
pub const DEFAULT_PLATE_PRICE: f64 = 500.0;
pub const DEFAULT_RUN_PRICE: f64 = 400.0;
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

const PROCESS_COLOR_PLATES: u64 = 4;
const SINGLE_COLOR_PLATES: u64 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Shop unit rates, in local currency, plus the markup multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotationRates {
    /// Price of one master sheet.
    pub paper_cost: f64,
    pub plate_price: f64,
    pub run_price: f64,
    /// Markup applied to the base cost.
    pub multiplier: f64,
}

impl Default for QuotationRates {
    fn default() -> Self {
        Self {
            paper_cost: DEFAULT_PAPER_COST,
            plate_price: DEFAULT_PLATE_PRICE,
            run_price: DEFAULT_RUN_PRICE,
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

/// Monetary breakdown of a sheet-fed job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub paper_total: f64,
    pub plate_count: u64,
    pub plate_total: f64,
    pub run_total: f64,
    pub base_cost: f64,
    pub total: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Number of plates for a job.
pub fn plate_count(colored: bool, back_to_back: bool) -> u64 {
    let per_side = if colored {
        PROCESS_COLOR_PLATES
    } else {
        SINGLE_COLOR_PLATES
    };
    if back_to_back {
        per_side * 2
    } else {
        per_side
    }
}

/// Composes paper, plate and run charges, then applies the markup.
pub fn compose(
    total_sheets: u64,
    colored: bool,
    back_to_back: bool,
    rates: &QuotationRates,
) -> CostBreakdown {
    let paper_total = total_sheets as f64 * rates.paper_cost;
    let plate_count = plate_count(colored, back_to_back);
    let plate_total = plate_count as f64 * rates.plate_price;
    let run_total = plate_count as f64 * rates.run_price;
    let base_cost = paper_total + plate_total + run_total;

    CostBreakdown {
        paper_total,
        plate_count,
        plate_total,
        run_total,
        base_cost,
        total: base_cost * rates.multiplier,
    }
}

/// Price per copy, rounded up so rounding never undercharges.
pub fn per_copy(total: f64, copies: u64) -> u64 {
    (total / copies as f64).ceil() as u64
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
