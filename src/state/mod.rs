// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod reactivity;
pub mod search_state;

pub use reactivity::*;
pub use search_state::*;
