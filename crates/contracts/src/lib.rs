//! Types shared by the backend and the browser client.
//!
//! `domain` holds the aggregates the backend serves (cameras, parts,
//! locations, part detections); `shared::remote_selection` holds the state
//! machine the client uses to turn a listing endpoint into a dropdown.

pub mod domain;
pub mod shared;
