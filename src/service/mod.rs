pub mod income_api;
pub mod registry;

pub use income_api::IncomeApi;
pub use registry::ServiceRegistry;
