//! Record services - One service per record kind
//!
//! Inputs arrive already validated as `New*` drafts; the services add the
//! cross-record rules (uniqueness, notifications, receipts).

pub mod accidents;
pub mod flags;
pub mod officers;
pub mod stolen;
pub mod violations;
