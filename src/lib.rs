#![doc = r#"
LANDMETA — a Landsat LPGS metadata normalization library.

This crate reads the MTL metadata record delivered alongside a Landsat
level-1 product (Landsat 4 through 9; TM, ETM+, OLI, TIRS, and combined
OLI/TIRS instruments, pre-Collection through Collection-2 spellings) and
folds it into one normalized, typed scene description: global scene
attributes, the map projection block, the geodetic bounding box, and a
fully synthesized per-band attribute list.

The reader is deliberately tolerant of the record itself (unknown keys and
malformed values are skipped, a missing `END` sentinel is tolerated) and
deliberately strict about the result: a scene either normalizes completely
or the reader returns an error, never a partially populated record.

Stability
---------
The public API is experimental in initial releases and may evolve as the
crate stabilizes. Breaking changes can occur.

Quick start: normalize an MTL record
------------------------------------
```rust,no_run
use landmeta::{ProjectionEngine, ProjectionError, ProjectionInfo, read_mtl_file};

// Forward projection is delegated to the caller. Implementations usually
// wrap a geodesy library; this one is a stand-in.
struct FlatEarth;

impl ProjectionEngine for FlatEarth {
    type Context = ();

    fn initialize(&self, _proj: &ProjectionInfo) -> Result<(), ProjectionError> {
        Ok(())
    }

    fn forward(
        &self,
        _ctx: &(),
        line: f64,
        sample: f64,
    ) -> Result<(f64, f64), ProjectionError> {
        Ok((45.0 - line * 1e-4, -120.0 + sample * 1e-4))
    }
}

fn main() -> landmeta::Result<()> {
    let scene = read_mtl_file("LC08_L1TP_045030_20200916_20200921_02_T1_MTL.txt", &FlatEarth)?;
    println!(
        "{} {}: {} bands, bounds {:?}",
        scene.satellite, scene.instrument, scene.bands.len(), scene.bounds
    );
    Ok(())
}
```

Reading from any `BufRead`
--------------------------
`read_mtl` accepts any buffered reader plus a provenance name, so records
can come from archives or network streams as easily as from disk.

Serialization
-------------
Every type in the normalized scene model derives `serde` traits; absent
attributes are `Option::None` and serialize as explicit nulls, so a fill
sentinel never leaks into downstream metadata.
"#]

pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::bands::MAX_BANDS;
pub use crate::core::geobox::{GeoBounds, ProjectionEngine, ProjectionError, compute_bounds};
pub use crate::core::scene::{
    BandEntry, GeodeticCorner, MapProjection, ProjectedCorner, ProjectionInfo, RasterExtent,
    SceneMetadata,
};
pub use error::{Error, Result};
pub use io::mtl::{read_mtl, read_mtl_file};
pub use types::{
    BandId, BandRole, Datum, GridOrigin, Instrument, PixelType, ResampleMethod, ResolutionClass,
    Satellite,
};
