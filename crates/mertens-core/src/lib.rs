#![deny(missing_docs)]
#![doc = "Shared error taxonomy, provenance descriptors and canonical serialization for the Mertens workspace."]

pub mod errors;
pub mod hash;
pub mod provenance;
pub mod serde;

pub use errors::{ErrorInfo, MertensError, INVALID_ARGUMENT};
pub use hash::stable_hash_string;
pub use provenance::{RunProvenance, SchemaVersion};
pub use self::serde::{from_json_slice, from_yaml_slice, to_canonical_json_bytes, to_yaml_string};
