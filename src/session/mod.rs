//! Scanner session state
//!
//! The classifier is pure; the screen around it is not. This module owns the
//! idle -> scanning -> result-shown -> idle cycle and the scan lock that keeps
//! a shown result from being replaced by the next camera frame.

pub mod scan_session;

pub use scan_session::{ScanEvent, ScanSession, SessionState};
