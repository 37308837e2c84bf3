//! `rp-network` — location store, proximity graph, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`store`]   | `Location`, `LocationStore`, `append_location`              |
//! | [`graph`]   | `ProximityGraph`, `ProximityGraphBuilder`, `Edge`           |
//! | [`router`]  | `Router` trait, `Path`, `DijkstraRouter`                    |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod router;
pub mod store;


pub use error::{NetworkError, NetworkResult};
pub use graph::{DEFAULT_RADIUS_KM, Edge, ProximityGraph, ProximityGraphBuilder};
pub use router::{DijkstraRouter, Path, Router};
pub use store::{Location, LocationStore, append_location};
