/// A service the customer picked for the appointment
#[derive(Debug, Clone, PartialEq)]
pub struct CartService {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i64,
}

/// Services selected for a single visit. Totals are always derived from the
/// contents so adding and removing can never drift out of sync.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DomainCart {
    pub barber_shop_id: String,
    pub barber_id: Option<String>,
    pub services: Vec<CartService>,
}

impl DomainCart {
    pub fn new(barber_shop_id: impl Into<String>, barber_id: Option<String>) -> Self {
        Self {
            barber_shop_id: barber_shop_id.into(),
            barber_id,
            services: Vec::new(),
        }
    }

    pub fn add_service(&mut self, service: CartService) {
        self.services.push(service);
    }

    /// Remove every entry for `service_id`, returning how many were dropped
    pub fn remove_service(&mut self, service_id: &str) -> usize {
        let before = self.services.len();
        self.services.retain(|s| s.id != service_id);
        before - self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn total_price(&self) -> f64 {
        self.services.iter().map(|s| s.price).sum()
    }

    /// `None` when the durations overflow
    pub fn total_duration_minutes(&self) -> Option<i64> {
        self.services
            .iter()
            .try_fold(0i64, |total, s| total.checked_add(s.duration_minutes))
    }
}
