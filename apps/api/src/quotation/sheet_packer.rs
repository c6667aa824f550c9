//! Sheet Packer — how many finished copies fit on one master sheet, and how
//! many master sheets a run needs once spoilage is added.
//!
//! The layout is a plain row/column division of an axis-aligned master sheet.
//! No rotation, no mixed orientation. Prices quoted to customers depend on this
//! exact (conservative) count, so it must not be replaced by a smarter packer.

use serde::{Deserialize, Serialize};

/// Spoilage allowance added on top of the sheets a run strictly needs.
pub const SPOILAGE_RATE: f64 = 0.03;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Dimensions of the press master sheet, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasterSheet {
    pub width: f64,
    pub height: f64,
}

impl MasterSheet {
    /// The shop's 25" × 38" press sheet.
    pub const STANDARD: MasterSheet = MasterSheet {
        width: 25.0,
        height: 38.0,
    };

    /// Copies of `width × height` that fit along each axis, without rotation.
    /// Either value is 0 when the copy is larger than the sheet on that axis.
    pub fn grid(&self, width: f64, height: f64) -> (u64, u64) {
        let per_row = (self.width / width).floor() as u64;
        let per_col = (self.height / height).floor() as u64;
        (per_row, per_col)
    }

    /// Copies per sheet from the grid, saturating for vanishingly small copies.
    pub fn capacity(&self, width: f64, height: f64) -> u64 {
        let (per_row, per_col) = self.grid(width, height);
        per_row.saturating_mul(per_col)
    }

    /// True when at least one copy fits on the sheet.
    pub fn fits(&self, width: f64, height: f64) -> bool {
        self.capacity(width, height) > 0
    }
}

impl Default for MasterSheet {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Result of laying out a print run on master sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    pub per_row: u64,
    pub per_col: u64,
    /// Copies per master sheet. Never below 1.
    pub outs: u64,
    /// Master sheets needed before spoilage.
    pub sheets_needed: u64,
    /// Spoilage sheets.
    pub waste: u64,
    /// `sheets_needed + waste`.
    pub total_sheets: u64,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Lays out `copies` finished copies of `width × height` on `sheet`.
///
/// A copy that does not fit the sheet still counts as one out per sheet, so
/// the result is always usable for pricing. Callers validate that `width`,
/// `height` and `copies` are positive.
pub fn pack(sheet: &MasterSheet, width: f64, height: f64, copies: u64) -> SheetLayout {
    let (per_row, per_col) = sheet.grid(width, height);
    let outs = per_row.saturating_mul(per_col).max(1);

    let sheets_needed = copies.div_ceil(outs);
    let waste = spoilage(sheets_needed);

    SheetLayout {
        per_row,
        per_col,
        outs,
        sheets_needed,
        waste,
        total_sheets: sheets_needed + waste,
    }
}

/// Spoilage sheets for a run: 3% of the needed sheets, rounded up.
pub fn spoilage(sheets_needed: u64) -> u64 {
    (sheets_needed as f64 * SPOILAGE_RATE).ceil() as u64
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
