//! Supplier offers and quantity-break pricing.

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreak {
    /// Minimum quantity this tier starts at.
    pub qty: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierOffer {
    pub name: String,
    pub stock: u64,
    pub moq: u32,
    pub lead_time: String,
    pub breaks: Vec<PriceBreak>,
}

/// The deepest break whose minimum quantity is covered, regardless of
/// the order the breaks arrive in. `None` when the quantity is below
/// every tier (the pricing table renders a dash there).
pub fn break_at_quantity(breaks: &[PriceBreak], quantity: u32) -> Option<&PriceBreak> {
    breaks
        .iter()
        .filter(|b| b.qty <= quantity)
        .max_by_key(|b| b.qty)
}

/// Break used to price an order of `quantity`: the matching tier, or
/// the smallest tier when the quantity is below every break.
pub fn break_for_order(breaks: &[PriceBreak], quantity: u32) -> Option<&PriceBreak> {
    break_at_quantity(breaks, quantity).or_else(|| breaks.iter().min_by_key(|b| b.qty))
}

/// Unit price an offer quotes at the given quantity.
pub fn unit_price(offer: &SupplierOffer, quantity: u32) -> Option<f64> {
    break_for_order(&offer.breaks, quantity).map(|b| b.unit_price)
}

/// Extended line total at the given quantity.
pub fn total_price(offer: &SupplierOffer, quantity: u32) -> Option<f64> {
    unit_price(offer, quantity).map(|p| p * f64::from(quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer() -> SupplierOffer {
        SupplierOffer {
            name: "Arrow Electronics".to_string(),
            stock: 3000,
            moq: 10,
            lead_time: "Ships in 2 days".to_string(),
            breaks: vec![
                PriceBreak { qty: 10, unit_price: 0.98 },
                PriceBreak { qty: 100, unit_price: 0.88 },
                PriceBreak { qty: 1000, unit_price: 0.78 },
            ],
        }
    }

    #[test]
    fn quantity_selects_the_deepest_covered_tier() {
        let offer = offer();
        assert_eq!(unit_price(&offer, 10), Some(0.98));
        assert_eq!(unit_price(&offer, 99), Some(0.98));
        assert_eq!(unit_price(&offer, 100), Some(0.88));
        assert_eq!(unit_price(&offer, 5000), Some(0.78));
    }

    #[test]
    fn below_every_tier_falls_back_to_the_smallest() {
        let offer = offer();
        // The table cell shows a dash, but an order still prices at the
        // entry tier.
        assert_eq!(break_at_quantity(&offer.breaks, 1), None);
        assert_eq!(unit_price(&offer, 1), Some(0.98));
    }

    #[test]
    fn tier_selection_is_order_independent() {
        let mut offer = offer();
        offer.breaks.reverse();
        assert_eq!(unit_price(&offer, 250), Some(0.88));
        assert_eq!(unit_price(&offer, 1), Some(0.98));
    }

    #[test]
    fn totals_scale_linearly_with_quantity() {
        let offer = offer();
        assert_eq!(total_price(&offer, 100), Some(88.0));
        assert_eq!(total_price(&offer, 200), Some(176.0));
    }

    #[test]
    fn empty_breaks_price_nothing() {
        let offer = SupplierOffer {
            breaks: Vec::new(),
            ..offer()
        };
        assert_eq!(unit_price(&offer, 100), None);
        assert_eq!(total_price(&offer, 100), None);
    }
}
