//! # ugly-avatar
//!
//! Procedural generator for cartoon-style "ugly avatar" faces. Every avatar
//! is synthesized from independent randomized sub-shape generators (face
//! outline, eyes and pupils, nose, mouth, hair) as plain point sequences,
//! then turned into SVG path data for rendering.
//!
//! ## Architecture
//!
//! Generation is a single synchronous pipeline:
//!
//! 1. **Random Source**: uniform real/integer sampling, seeded or not
//! 2. **Face Shape**: 101-point closed silhouette (egg or rectangle family)
//! 3. **Features**: eyes + pupils, mouth, nose in face-local coordinates
//! 4. **Hair**: strands anchored on the face silhouette, one of four styles
//! 5. **Composer**: gathers everything into one immutable `AvatarData`
//!
//! The path builder and SVG renderer then map an `AvatarData` onto vector
//! paths in a `[-100, 100] x [-100, 100]` viewport.
//!
//! ## Coordinate space
//!
//! Origin at the face centre, +x to the right, +y downwards. "Up" is
//! negative y throughout.

// Foundation Types
pub mod basics;
pub mod color;
pub mod gradient;
pub mod palette;
pub mod random;

// Geometry Primitives
pub mod bounding_rect;
pub mod ellipse;
pub mod path_storage;
pub mod rect_outline;

// Generators
pub mod eyes;
pub mod face;
pub mod hair;
pub mod mouth;
pub mod nose;

// Composition & Output
pub mod avatar;
pub mod path_builder;
pub mod svg;

pub use avatar::{generate_avatar, generate_avatar_with, AvatarData};
pub use basics::PointD;
pub use path_builder::{to_polyline_path, to_smooth_path};
pub use random::{RandomSource, RngSource, SeededRandom};
