//! Validity-chain computation
//!
//! The one algorithmic core of the system, implemented once and called from
//! every entry point (upload processor, record review). Pure throughout: no
//! I/O, no database, no hidden state.
//!
//! Pipeline order matters: classify affected survey numbers against the
//! parcel, establish the total nondh order, collect declared statuses, then
//! run the parity engine over the sorted sequence.

pub mod classify;
pub mod engine;
pub mod pipeline;
pub mod sort;
pub mod validate;

pub use classify::{classify, valid_number_set};
pub use engine::compute_validity;
pub use pipeline::{
    process_batch, record_validity, sorted_chain, AcceptedDetail, ChainNondh, NondhValidity,
    OwnerRow, ProcessedBatch, ProcessedNondh,
};
pub use sort::sort_for_chain;
pub use validate::{parse_ddmmyyyy, validate_detail};
