//! Site structure for the forgepack documentation site.
//!
//! This crate provides:
//! - [`Registry`]: validated set of [`DocPackage`]s with package resolution
//! - [`Route`]: explicit page identity for a request path
//! - [`Neighbors`]: previous/next navigation in sidebar order
//! - [`Site`]: page assembly from a [`ContentSource`]
//!
//! # Quick Start
//!
//! ```
//! use fp_site::{Registry, Route, forgepack_packages};
//!
//! let registry = Registry::new(forgepack_packages()).unwrap();
//! assert_eq!(registry.resolve("/docs/leaflet/quick-start").id, "leaflet");
//! assert_eq!(registry.resolve("/pricing").id, "request");
//! assert_eq!(registry.route("/"), Route::Home);
//! ```

mod builtin;
mod content;
mod contribution;
mod registry;
mod route;
mod sequencer;
mod site;

pub use builtin::forgepack_packages;
pub use content::{ContentError, ContentSource, FsContent, MemoryContent};
pub use contribution::ContributionLinks;
pub use registry::{DocPackage, NavItem, Registry, RegistryError, Section, normalize_path};
pub use route::{DocRoute, Route};
pub use sequencer::Neighbors;
pub use site::{DEFAULT_REPOSITORY_URL, DocPage, MissingPage, Site};
