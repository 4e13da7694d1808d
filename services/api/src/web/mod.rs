pub mod rest;
pub mod state;

// Re-export the handlers to make them easily accessible to the binary that
// builds the web server router.
pub use rest::{
    assistant_handler, create_journal_handler, get_journal_handler, insights_handler,
    list_journal_handler, strategies_handler,
};
