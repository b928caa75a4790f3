/// Reporting layer - Pure domain logic for deployment reports
///
/// This layer contains the domain model (component records, payloads)
/// and the domain services (selection state, milestone sessions).
pub mod domain;
pub mod services;
