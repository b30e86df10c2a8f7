//! Canonical scene description: the handoff contract between this crate and
//! whichever serializer writes the product metadata out. One `SceneMetadata`
//! plus its ordered `BandEntry` list is built per conversion run, fully
//! populated before handoff, and never mutated afterwards. Optional fields
//! use `Option` for "not applicable / not present", never magic fill values.
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::geobox::GeoBounds;
use crate::types::{
    BandId, BandRole, Datum, GridOrigin, Instrument, PixelType, ResampleMethod, Satellite,
};

/// A corner of the scene in geodetic coordinates (degrees).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeodeticCorner {
    pub lat: f64,
    pub lon: f64,
}

/// A corner of the scene in projected map coordinates (meters).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectedCorner {
    pub x: f64,
    pub y: f64,
}

/// Raster extent and pixel size of one resolution class.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RasterExtent {
    pub nlines: usize,
    pub nsamps: usize,
    /// (x, y) pixel size; LPGS grid cells are square so both come from the
    /// single declared cell size.
    pub pixel_size: (f64, f64),
}

/// Map projection of the scene with the parameters that apply to it.
/// LPGS level-1 products use UTM, Polar Stereographic, or Albers.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MapProjection {
    Utm {
        zone: i32,
    },
    PolarStereographic {
        longitude_pole: f64,
        latitude_true_scale: f64,
        false_easting: f64,
        false_northing: f64,
    },
    Albers {
        standard_parallel_1: f64,
        standard_parallel_2: f64,
        central_meridian: f64,
        origin_latitude: f64,
        false_easting: f64,
        false_northing: f64,
    },
}

/// Scene projection block: projection, datum, units, and the projected
/// UL/LR corners (pixel centers, per `grid_origin`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInfo {
    pub projection: MapProjection,
    pub datum: Datum,
    pub units: String,
    pub grid_origin: GridOrigin,
    pub ul: ProjectedCorner,
    pub lr: ProjectedCorner,
}

/// Global metadata for one scene plus its ordered band list.
///
/// The stored `ul`/`lr` corners come straight from the source record, while
/// `bounds` holds true geodetic extrema; comparing the two is how consumers
/// detect vertically flipped scenes (ascending orbits, polar scenes).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub instrument: Instrument,
    pub satellite: Satellite,
    pub product_id: String,
    pub level: String,
    pub acquisition_date: NaiveDate,
    pub scene_center_time: NaiveTime,
    pub production_date: DateTime<Utc>,
    /// Derived as 90 degrees minus the declared sun elevation.
    pub solar_zenith: f64,
    pub solar_azimuth: f64,
    pub solar_units: String,
    pub earth_sun_distance: Option<f64>,
    pub wrs_system: i32,
    pub wrs_path: i32,
    pub wrs_row: i32,
    pub orientation_angle: f64,
    pub data_provider: String,
    /// Name of the source metadata record this scene was normalized from.
    pub metadata_source: String,
    pub ul: GeodeticCorner,
    pub ur: GeodeticCorner,
    pub ll: GeodeticCorner,
    pub lr: GeodeticCorner,
    pub projection: ProjectionInfo,
    pub bounds: GeoBounds,
    pub bands: Vec<BandEntry>,
}

/// One physical band file of the scene, in declaration order.
///
/// Radiometric fields are mutually exclusive per band: image-role thermal
/// bands carry K1/K2, image-role non-thermal bands carry reflectance
/// gain/bias, and QA bands carry none of the four. `None` always means
/// "not applicable or not present in the source".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BandEntry {
    pub source_file: String,
    pub id: BandId,
    pub role: BandRole,
    pub thermal: bool,
    pub name: String,
    pub long_name: String,
    pub short_name: String,
    /// Synthesized output file name: `{product_id}_{name}.img`.
    pub file_name: String,
    pub product: String,
    pub app_version: Option<String>,
    pub production_date: DateTime<Utc>,
    pub nlines: usize,
    pub nsamps: usize,
    pub pixel_size: (f64, f64),
    pub pixel_units: String,
    pub data_type: PixelType,
    pub fill_value: Option<i64>,
    pub valid_range: Option<(f64, f64)>,
    pub data_units: String,
    pub rad_gain: Option<f64>,
    pub rad_bias: Option<f64>,
    pub refl_gain: Option<f64>,
    pub refl_bias: Option<f64>,
    pub k1: Option<f64>,
    pub k2: Option<f64>,
    /// Angle bands store hundredths of a degree; 0.01 per the data format
    /// control book, never present in the MTL itself.
    pub scale_factor: Option<f64>,
    pub resample_method: Option<ResampleMethod>,
    /// Per-bit descriptions for recognized quality bitmap bands, 16 entries
    /// when present.
    pub bitmap: Option<Vec<String>>,
}
