//! `courier-map` — street network representation and map loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`index`]   | `BucketIndex` (growable separate-chaining hash table)    |
//! | [`network`] | `StreetNetwork`, `StreetNetworkBuilder`                  |
//! | [`loader`]  | `load_streets` / `load_streets_reader`                   |
//! | [`error`]   | `MapError`, `MapResult<T>`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Propagates serde derives to the `courier-core` types.       |

pub mod error;
pub mod index;
pub mod loader;
pub mod network;


pub use error::{MapError, MapResult};
pub use index::BucketIndex;
pub use loader::{load_streets, load_streets_reader};
pub use network::{StreetNetwork, StreetNetworkBuilder};
