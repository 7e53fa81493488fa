pub mod router;

pub use router::{PortalState, portal_router};
