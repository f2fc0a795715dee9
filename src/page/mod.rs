pub mod lead_form;
pub mod runtime;
pub mod state;

pub use lead_form::{FormField, FormStatus, LeadForm};
pub use runtime::PageRuntime;
pub use state::{update, Effect, Msg, PageState, ScrollDirection};
