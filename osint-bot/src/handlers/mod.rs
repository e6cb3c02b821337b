//! Application handlers, in chain order: [`StartHandler`] then [`LookupHandler`].

mod lookup;
mod start;

pub use lookup::{
    build_command, render_envelope, LookupHandler, LookupOutcome, MSG_API_ERROR,
    MSG_MISSING_ARGUMENT, MSG_NO_DATA, MSG_PROCESSING,
};
pub use start::StartHandler;
