//! In-memory application state for Community Pulse: the event store, the
//! single-user session, the view router and the `Pulse` controller that ties
//! them together.

pub mod pulse;
pub mod router;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

pub use pulse::{Pulse, Registration};
pub use router::{Route, Router};
pub use session::Session;
pub use store::EventStore;
pub use view::View;
