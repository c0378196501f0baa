//! BIN validation and lookup pipeline.
//!
//! A parameter becomes a [`Fragment`], passes the checksum filter, is sent
//! to a [`BinSource`], and the response is walked by the field
//! [`Extraction`] into a [`BinRecord`].

mod checksum;
mod client;
mod error;
mod extractor;
mod fragment;
mod pipeline;
mod record;

pub use checksum::is_checksum_valid;
pub use client::{BinSource, BinsSuClient};
pub use error::LookupError;
pub use extractor::{
    Anchor, ExtractFailure, Extraction, HEADER_LABELS, ISSUER_LABEL, Stage, extract_record,
};
pub use fragment::{FRAGMENT_LEN, Fragment};
pub use pipeline::{CHECKSUM_FAILED, checked_fragment, lookup_bin};
pub use record::BinRecord;
