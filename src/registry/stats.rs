use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub rejected_registrations: usize,
    pub checks_run: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self) {
        self.total_routes_registered += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejected_registrations += 1;
    }

    pub fn record_check(&mut self) {
        self.checks_run += 1;
    }
}
