//! Core normalization building blocks: the key alias table, sensor family
//! profiles, the band accumulator, the derived-attribute synthesizer, the
//! bounding-box calculator, and the normalized scene data model. These are
//! the primitives the `io::mtl` reader drives.
pub mod bands;
pub mod derive;
pub mod geobox;
pub mod keys;
pub mod scene;
pub mod sensor;
