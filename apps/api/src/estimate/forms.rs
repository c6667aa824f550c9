//! Product order forms and their live price estimate.
//!
//! A `ProductForm` is the caller-owned state of one product page. Every change
//! to quantity, size, color or duplex produces a fresh `PriceEstimate` from
//! `estimate_price`; nothing is cached between calls. An incomplete form is
//! priced at 0 rather than rejected.

use serde::{Deserialize, Serialize};

use crate::estimate::sizes::lookup_size;
use crate::quotation::{
    compute_binding_quotation, compute_quotation, BindingQuotationRequest,
    BindingQuotationResult, QuotationRates, QuotationRequest, QuotationResult,
};

/// Color select value that maps to four-color process printing.
pub const FULL_COLOR: &str = "Full Color";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    CallingCard,
    Flyer,
    Newsletter,
    Binding,
}

impl ProductKind {
    /// Minimum order quantity shown on the form. A hint only: pricing does not enforce it.
    pub fn min_quantity(self) -> u32 {
        match self {
            ProductKind::CallingCard => 100,
            ProductKind::Flyer => 100,
            ProductKind::Newsletter => 1000,
            ProductKind::Binding => 1,
        }
    }

    /// Binding jobs are priced per unit; everything else goes through sheet layout.
    pub fn is_sheet_fed(self) -> bool {
        !matches!(self, ProductKind::Binding)
    }
}

/// State of a product order form, as far as pricing is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub product: ProductKind,
    #[serde(default)]
    pub quantity: i64,
    /// Display name from the size select. `None` until the customer picks one.
    #[serde(default)]
    pub size: Option<String>,
    /// Raw color select value, e.g. "Full Color" or "Black & White".
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub back_to_back: bool,
    /// Per-unit price for binding jobs.
    #[serde(default)]
    pub binding_price: Option<f64>,
}

impl ProductForm {
    pub fn new(product: ProductKind) -> Self {
        Self {
            product,
            quantity: 0,
            size: None,
            color: None,
            back_to_back: false,
            binding_price: None,
        }
    }

    pub fn is_full_color(&self) -> bool {
        self.color.as_deref() == Some(FULL_COLOR)
    }
}

/// Shop-wide pricing settings applied to every form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PricingSettings {
    pub rates: QuotationRates,
    pub reject_oversized: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Breakdown {
    Sheet(QuotationResult),
    Binding(BindingQuotationResult),
}

/// What the product page displays and what the order payload carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub product: ProductKind,
    /// Total for the job, or 0 when no estimate is available.
    pub estimated_price: f64,
    pub per_copy: f64,
    pub breakdown: Option<Breakdown>,
}

impl PriceEstimate {
    fn unavailable(product: ProductKind) -> Self {
        Self {
            product,
            estimated_price: 0.0,
            per_copy: 0.0,
            breakdown: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.breakdown.is_some()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

/// Derives the current estimate from the form state.
pub fn estimate_price(form: &ProductForm, settings: &PricingSettings) -> PriceEstimate {
    if form.quantity <= 0 {
        return PriceEstimate::unavailable(form.product);
    }

    if !form.product.is_sheet_fed() {
        let request = BindingQuotationRequest {
            copies: form.quantity,
            binding_price: form.binding_price.unwrap_or(0.0),
        };
        return match compute_binding_quotation(&request) {
            Some(quote) => PriceEstimate {
                product: form.product,
                estimated_price: quote.total,
                per_copy: quote.per_copy,
                breakdown: Some(Breakdown::Binding(quote)),
            },
            None => PriceEstimate::unavailable(form.product),
        };
    }

    let Some(size_name) = form.size.as_deref().filter(|s| !s.is_empty()) else {
        return PriceEstimate::unavailable(form.product);
    };
    let size = lookup_size(size_name);

    let colored = form.is_full_color();
    let request = QuotationRequest::new(size.width, size.height, form.quantity, colored)
        .back_to_back(form.back_to_back)
        .with_rates(settings.rates)
        .reject_oversized(settings.reject_oversized);

    match compute_quotation(&request) {
        Some(quote) => PriceEstimate {
            product: form.product,
            estimated_price: quote.total(),
            per_copy: quote.per_copy as f64,
            breakdown: Some(Breakdown::Sheet(quote)),
        },
        None => PriceEstimate::unavailable(form.product),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn newsletter(quantity: i64, size: &str, color: &str) -> ProductForm {
        ProductForm {
            quantity,
            size: Some(size.to_string()),
            color: Some(color.to_string()),
            ..ProductForm::new(ProductKind::Newsletter)
        }
    }

    #[test]
    fn test_newsletter_letter_single_color() {
        let form = newsletter(100, "Letter (8.5”x11”)", "Black & White");
        let estimate = estimate_price(&form, &PricingSettings::default());
        assert_eq!(estimate.estimated_price, 2520.0);
        assert_eq!(estimate.per_copy, 26.0);
        assert!(matches!(estimate.breakdown, Some(Breakdown::Sheet(_))));
    }

    #[test]
    fn test_full_color_select_maps_to_colored() {
        let form = newsletter(100, "Letter (8.5”x11”)", FULL_COLOR);
        assert!(form.is_full_color());
        let estimate = estimate_price(&form, &PricingSettings::default());
        assert_eq!(estimate.estimated_price, 7920.0);
        assert_eq!(estimate.per_copy, 80.0);

        assert!(!newsletter(100, "A4", "full color").is_full_color());
        assert!(!ProductForm::new(ProductKind::Flyer).is_full_color());
    }

    #[test]
    fn test_unknown_size_prices_as_letter() {
        let unknown = newsletter(100, "Broadsheet", "Black & White");
        let letter = newsletter(100, "Letter (8.5”x11”)", "Black & White");
        let settings = PricingSettings::default();
        assert_eq!(
            estimate_price(&unknown, &settings).estimated_price,
            estimate_price(&letter, &settings).estimated_price
        );
    }

    #[test]
    fn test_zero_price_for_incomplete_form() {
        let settings = PricingSettings::default();

        let no_quantity = newsletter(0, "A4", FULL_COLOR);
        assert_eq!(estimate_price(&no_quantity, &settings).estimated_price, 0.0);

        let negative = newsletter(-10, "A4", FULL_COLOR);
        assert_eq!(estimate_price(&negative, &settings).estimated_price, 0.0);

        let mut no_size = newsletter(500, "A4", FULL_COLOR);
        no_size.size = None;
        let estimate = estimate_price(&no_size, &settings);
        assert_eq!(estimate.estimated_price, 0.0);
        assert!(!estimate.is_available());

        let empty_size = newsletter(500, "", FULL_COLOR);
        assert_eq!(estimate_price(&empty_size, &settings).estimated_price, 0.0);
    }

    #[test]
    fn test_minimum_quantity_is_not_enforced() {
        let form = ProductForm {
            quantity: 10,
            size: Some("Calling Card (2”x3.5”)".to_string()),
            ..ProductForm::new(ProductKind::CallingCard)
        };
        assert!(form.quantity < i64::from(ProductKind::CallingCard.min_quantity()));
        assert!(estimate_price(&form, &PricingSettings::default()).estimated_price > 0.0);
    }

    #[test]
    fn test_back_to_back_raises_price() {
        let settings = PricingSettings::default();
        let simplex = newsletter(1000, "A4", FULL_COLOR);
        let duplex = ProductForm {
            back_to_back: true,
            ..simplex.clone()
        };
        assert!(
            estimate_price(&duplex, &settings).estimated_price
                > estimate_price(&simplex, &settings).estimated_price
        );
    }

    #[test]
    fn test_binding_form() {
        let settings = PricingSettings::default();
        let form = ProductForm {
            quantity: 50,
            binding_price: Some(30.0),
            ..ProductForm::new(ProductKind::Binding)
        };
        let estimate = estimate_price(&form, &settings);
        assert_eq!(estimate.estimated_price, 1500.0);
        assert_eq!(estimate.per_copy, 30.0);

        let unpriced = ProductForm {
            quantity: 50,
            ..ProductForm::new(ProductKind::Binding)
        };
        assert_eq!(estimate_price(&unpriced, &settings).estimated_price, 0.0);
    }

    #[test]
    fn test_settings_reject_oversized() {
        let settings = PricingSettings {
            reject_oversized: true,
            ..PricingSettings::default()
        };
        // Every listed size fits the master sheet.
        let form = newsletter(100, "Tabloid (11”x17”)", FULL_COLOR);
        assert!(estimate_price(&form, &settings).is_available());
    }

    #[test]
    fn test_form_json_defaults() {
        let form: ProductForm = serde_json::from_str(r#"{"product": "calling_card"}"#).unwrap();
        assert_eq!(form, ProductForm::new(ProductKind::CallingCard));
        let estimate = estimate_price(&form, &PricingSettings::default());
        let json = serde_json::to_value(estimate).unwrap();
        assert_eq!(json["estimated_price"], 0.0);
        assert!(json["breakdown"].is_null());
    }
}
