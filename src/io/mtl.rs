//! LPGS MTL record reader: line tokenizer plus the dispatch loop that folds
//! a raw metadata record into [`SceneMetadata`].
//!
//! The record is read twice, the way the original processing chain does it:
//! a pre-scan resolves the sensor family from `SENSOR_ID` (band lines appear
//! before the family in Collection-2 records), then the main pass tokenizes
//! every line, resolves the key through the alias table, and routes the value
//! into the scratch aggregates. `END` short-circuits the record;
//! `END_GROUP = PRODUCT_CONTENTS` closes the band section so the duplicated
//! Collection-2 band listing is never accumulated twice.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};

use crate::core::bands::BandAccumulator;
use crate::core::derive::{BandCoefficients, BandSynthesis};
use crate::core::geobox::{ProjectionEngine, compute_bounds};
use crate::core::keys::CanonicalKey;
use crate::core::scene::{
    GeodeticCorner, MapProjection, ProjectedCorner, ProjectionInfo, RasterExtent, SceneMetadata,
};
use crate::error::{Error, Result};
use crate::types::{BandId, Datum, GridOrigin, Instrument, ResampleMethod, Satellite};

/// Split one MTL line into a key token and a value token.
///
/// The separator is the first `=`; quotes and surrounding whitespace are
/// stripped from both sides. A non-blank line without a separator (the bare
/// `END` sentinel) yields the trimmed line as the key with an empty value.
/// Blank lines yield `None`. The tokenizer never interprets keys.
///
/// `=` is deliberately the sole separator. LPGS also accepts quotes and
/// whitespace as token boundaries, but every key in a real record is a
/// single unquoted word followed by `=`, so treating embedded quotes or
/// spaces as separators can only split values, never keys; a key that would
/// need it does not resolve in the alias table anyway and the line is
/// skipped.
pub fn tokenize(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.split_once('=') {
        Some((key, value)) => {
            let key = key.trim();
            let value = value.trim().trim_matches('"').trim();
            if key.is_empty() { None } else { Some((key, value)) }
        }
        None => Some((line, "")),
    }
}

/// Read an MTL record from an open reader. `source_name` is recorded as the
/// scene's metadata provenance field; `read_mtl_file` passes the file name.
pub fn read_mtl<R: BufRead, E: ProjectionEngine>(
    reader: R,
    engine: &E,
    source_name: &str,
) -> Result<SceneMetadata> {
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;

    let family = prescan_family(&lines)?;
    info!(family = %family, source = source_name, "reading MTL record");

    let mut scratch = Scratch::new(family);
    let mut saw_end = false;
    for line in &lines {
        let Some((raw, value)) = tokenize(line) else {
            continue;
        };
        let Some(key) = CanonicalKey::resolve(raw) else {
            debug!(key = raw, "unrecognized key, skipped");
            continue;
        };
        if key == CanonicalKey::EndOfRecord {
            saw_end = true;
            break;
        }
        scratch.dispatch(key, raw, value)?;
    }
    if !saw_end {
        warn!(source = source_name, "record ended without END sentinel");
    }

    scratch.finish(engine, source_name)
}

/// Read an MTL record from a file on disk.
pub fn read_mtl_file<E: ProjectionEngine>(
    path: impl AsRef<Path>,
    engine: &E,
) -> Result<SceneMetadata> {
    let path = path.as_ref();
    let source_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let file = File::open(path)?;
    read_mtl(BufReader::new(file), engine, &source_name)
}

fn prescan_family(lines: &[String]) -> Result<Instrument> {
    for line in lines {
        if let Some(("SENSOR_ID", value)) = tokenize(line) {
            return Instrument::resolve(value);
        }
    }
    Err(Error::missing("SENSOR_ID"))
}

/// Lines, samples, and cell size for one resolution class. The class exists
/// in the scene only when all three arrive.
#[derive(Default)]
struct ClassExtent {
    lines: Option<usize>,
    samples: Option<usize>,
    cell_size: Option<f64>,
}

impl ClassExtent {
    fn finish(&self) -> Option<RasterExtent> {
        let size = self.cell_size?;
        Some(RasterExtent {
            nlines: self.lines?,
            nsamps: self.samples?,
            pixel_size: (size, size),
        })
    }
}

/// Scratch aggregates for the main pass. Everything is optional until
/// `finish` decides what the scene actually requires.
struct Scratch {
    family: Instrument,
    satellite: Option<Satellite>,
    product_id: Option<String>,
    level: Option<String>,
    software_version: Option<String>,
    acquisition_date: Option<NaiveDate>,
    scene_center_time: Option<NaiveTime>,
    production_date: Option<DateTime<Utc>>,
    solar_zenith: Option<f64>,
    solar_azimuth: Option<f64>,
    earth_sun_distance: Option<f64>,
    wrs_path: Option<i32>,
    wrs_row: Option<i32>,
    ul_lat: Option<f64>,
    ul_lon: Option<f64>,
    ur_lat: Option<f64>,
    ur_lon: Option<f64>,
    ll_lat: Option<f64>,
    ll_lon: Option<f64>,
    lr_lat: Option<f64>,
    lr_lon: Option<f64>,
    proj_ul: (Option<f64>, Option<f64>),
    proj_lr: (Option<f64>, Option<f64>),
    reflective: ClassExtent,
    thermal: ClassExtent,
    panchromatic: ClassExtent,
    projection_type: Option<String>,
    datum: Option<Datum>,
    utm_zone: Option<i32>,
    longitude_pole: Option<f64>,
    true_scale_lat: Option<f64>,
    false_easting: Option<f64>,
    false_northing: Option<f64>,
    standard_parallel_1: Option<f64>,
    standard_parallel_2: Option<f64>,
    central_meridian: Option<f64>,
    origin_latitude: Option<f64>,
    resample_method: Option<ResampleMethod>,
    gain_bias_present: bool,
    refl_gain_bias_present: bool,
    coefficients: BTreeMap<BandId, BandCoefficients>,
    accumulator: BandAccumulator,
}

impl Scratch {
    fn new(family: Instrument) -> Self {
        Scratch {
            family,
            satellite: None,
            product_id: None,
            level: None,
            software_version: None,
            acquisition_date: None,
            scene_center_time: None,
            production_date: None,
            solar_zenith: None,
            solar_azimuth: None,
            earth_sun_distance: None,
            wrs_path: None,
            wrs_row: None,
            ul_lat: None,
            ul_lon: None,
            ur_lat: None,
            ur_lon: None,
            ll_lat: None,
            ll_lon: None,
            lr_lat: None,
            lr_lon: None,
            proj_ul: (None, None),
            proj_lr: (None, None),
            reflective: ClassExtent::default(),
            thermal: ClassExtent::default(),
            panchromatic: ClassExtent::default(),
            projection_type: None,
            datum: None,
            utm_zone: None,
            longitude_pole: None,
            true_scale_lat: None,
            false_easting: None,
            false_northing: None,
            standard_parallel_1: None,
            standard_parallel_2: None,
            central_meridian: None,
            origin_latitude: None,
            resample_method: None,
            gain_bias_present: false,
            refl_gain_bias_present: false,
            coefficients: BTreeMap::new(),
            accumulator: BandAccumulator::new(),
        }
    }

    fn dispatch(&mut self, key: CanonicalKey, raw: &str, value: &str) -> Result<()> {
        use CanonicalKey::*;

        match key {
            SoftwareVersion => self.software_version = Some(value.to_string()),
            Level => self.level = Some(value.to_string()),
            ProductId => self.product_id = Some(value.to_string()),
            SpacecraftId => self.satellite = Some(Satellite::resolve(value)?),
            // Already handled by the pre-scan; resolving again keeps a
            // contradictory record from slipping through.
            SensorId => {
                let family = Instrument::resolve(value)?;
                if family != self.family {
                    return Err(Error::UnsupportedSensor {
                        value: value.to_string(),
                    });
                }
            }
            AcquisitionDate => self.acquisition_date = parse_date(raw, value),
            SceneCenterTime => self.scene_center_time = parse_time(raw, value),
            ProductionDate => self.production_date = parse_datetime(raw, value),
            // The record carries sun elevation; the scene stores zenith.
            SunElevation => self.solar_zenith = put_f64(raw, value).map(|e| 90.0 - e),
            SunAzimuth => self.solar_azimuth = put_f64(raw, value),
            EarthSunDistance => self.earth_sun_distance = put_f64(raw, value),
            WrsPath => self.wrs_path = put_i32(raw, value),
            WrsRow => self.wrs_row = put_i32(raw, value),
            UlLat => self.ul_lat = put_f64(raw, value),
            UlLon => self.ul_lon = put_f64(raw, value),
            UrLat => self.ur_lat = put_f64(raw, value),
            UrLon => self.ur_lon = put_f64(raw, value),
            LlLat => self.ll_lat = put_f64(raw, value),
            LlLon => self.ll_lon = put_f64(raw, value),
            LrLat => self.lr_lat = put_f64(raw, value),
            LrLon => self.lr_lon = put_f64(raw, value),
            ProjUlX => self.proj_ul.0 = put_f64(raw, value),
            ProjUlY => self.proj_ul.1 = put_f64(raw, value),
            ProjLrX => self.proj_lr.0 = put_f64(raw, value),
            ProjLrY => self.proj_lr.1 = put_f64(raw, value),
            ReflectiveLines => self.reflective.lines = put_usize(raw, value),
            ReflectiveSamples => self.reflective.samples = put_usize(raw, value),
            ThermalLines => self.thermal.lines = put_usize(raw, value),
            ThermalSamples => self.thermal.samples = put_usize(raw, value),
            PanchromaticLines => self.panchromatic.lines = put_usize(raw, value),
            PanchromaticSamples => self.panchromatic.samples = put_usize(raw, value),
            CellSizeReflective => self.reflective.cell_size = put_f64(raw, value),
            CellSizeThermal => self.thermal.cell_size = put_f64(raw, value),
            CellSizePanchromatic => self.panchromatic.cell_size = put_f64(raw, value),
            CanonicalKey::MapProjection => self.projection_type = Some(value.to_string()),
            CanonicalKey::Datum => {
                self.datum = Some(match value {
                    "WGS84" => crate::types::Datum::Wgs84,
                    other => {
                        return Err(Error::ProjectionUnavailable {
                            reason: format!("unexpected datum type: {other}"),
                        });
                    }
                });
            }
            UtmZone => self.utm_zone = put_i32(raw, value),
            LongitudePole => self.longitude_pole = put_f64(raw, value),
            TrueScaleLat => self.true_scale_lat = put_f64(raw, value),
            FalseEasting => self.false_easting = put_f64(raw, value),
            FalseNorthing => self.false_northing = put_f64(raw, value),
            StandardParallel1 => self.standard_parallel_1 = put_f64(raw, value),
            StandardParallel2 => self.standard_parallel_2 = put_f64(raw, value),
            CentralMeridian => self.central_meridian = put_f64(raw, value),
            OriginLatitude => self.origin_latitude = put_f64(raw, value),
            ResamplingOption => {
                self.resample_method = match value {
                    "CUBIC_CONVOLUTION" => Some(ResampleMethod::CubicConvolution),
                    "NEAREST_NEIGHBOR" => Some(ResampleMethod::NearestNeighbor),
                    "BILINEAR" => Some(ResampleMethod::Bilinear),
                    other => {
                        warn!(option = other, "unsupported resampling option, skipped");
                        None
                    }
                };
            }
            BandFile(id) => self.accumulator.push(self.family, id, value)?,
            QuantizeMin(id) => self.coefficient(id).quantize_min = put_f64(raw, value),
            QuantizeMax(id) => self.coefficient(id).quantize_max = put_f64(raw, value),
            RadianceMult(id) => {
                // Presence of the band-1 key is the signal that the radiance
                // coefficient set exists in this record at all.
                if id == BandId::Num(1) {
                    self.gain_bias_present = true;
                }
                self.coefficient(id).rad_gain = put_f64(raw, value);
            }
            RadianceAdd(id) => self.coefficient(id).rad_bias = put_f64(raw, value),
            ReflectanceMult(id) => {
                if id == BandId::Num(1) {
                    self.refl_gain_bias_present = true;
                }
                self.coefficient(id).refl_gain = put_f64(raw, value);
            }
            ReflectanceAdd(id) => self.coefficient(id).refl_bias = put_f64(raw, value),
            K1Constant(id) => self.coefficient(id).k1 = put_f64(raw, value),
            K2Constant(id) => self.coefficient(id).k2 = put_f64(raw, value),
            EndGroup => {
                if value == "PRODUCT_CONTENTS" {
                    self.accumulator.close_section();
                }
            }
            // Consumed by the read loop before dispatch.
            EndOfRecord => {}
        }
        Ok(())
    }

    fn coefficient(&mut self, id: BandId) -> &mut BandCoefficients {
        self.coefficients.entry(id).or_default()
    }

    fn projection(&self) -> Result<MapProjection> {
        let kind = self
            .projection_type
            .as_deref()
            .ok_or_else(|| Error::missing("MAP_PROJECTION"))?;
        Ok(match kind {
            "UTM" => MapProjection::Utm {
                zone: self.utm_zone.ok_or_else(|| Error::missing("UTM_ZONE"))?,
            },
            "PS" => MapProjection::PolarStereographic {
                longitude_pole: self
                    .longitude_pole
                    .ok_or_else(|| Error::missing("VERTICAL_LON_FROM_POLE"))?,
                latitude_true_scale: self
                    .true_scale_lat
                    .ok_or_else(|| Error::missing("TRUE_SCALE_LAT"))?,
                false_easting: self
                    .false_easting
                    .ok_or_else(|| Error::missing("FALSE_EASTING"))?,
                false_northing: self
                    .false_northing
                    .ok_or_else(|| Error::missing("FALSE_NORTHING"))?,
            },
            "AEA" => MapProjection::Albers {
                standard_parallel_1: self
                    .standard_parallel_1
                    .ok_or_else(|| Error::missing("STANDARD_PARALLEL_1_LAT"))?,
                standard_parallel_2: self
                    .standard_parallel_2
                    .ok_or_else(|| Error::missing("STANDARD_PARALLEL_2_LAT"))?,
                central_meridian: self
                    .central_meridian
                    .ok_or_else(|| Error::missing("CENTRAL_MERIDIAN_LON"))?,
                origin_latitude: self
                    .origin_latitude
                    .ok_or_else(|| Error::missing("ORIGIN_LAT"))?,
                false_easting: self
                    .false_easting
                    .ok_or_else(|| Error::missing("FALSE_EASTING"))?,
                false_northing: self
                    .false_northing
                    .ok_or_else(|| Error::missing("FALSE_NORTHING"))?,
            },
            other => {
                return Err(Error::ProjectionUnavailable {
                    reason: format!("unsupported map projection: {other}"),
                });
            }
        })
    }

    fn finish<E: ProjectionEngine>(self, engine: &E, source_name: &str) -> Result<SceneMetadata> {
        let map_projection = self.projection()?;
        let satellite = self
            .satellite
            .ok_or_else(|| Error::missing("SPACECRAFT_ID"))?;
        let product_id = self
            .product_id
            .ok_or_else(|| Error::missing("LANDSAT_PRODUCT_ID"))?;
        let level = self.level.ok_or_else(|| Error::missing("PROCESSING_LEVEL"))?;
        let acquisition_date = self
            .acquisition_date
            .ok_or_else(|| Error::missing("DATE_ACQUIRED"))?;
        let scene_center_time = self
            .scene_center_time
            .ok_or_else(|| Error::missing("SCENE_CENTER_TIME"))?;
        let production_date = self
            .production_date
            .ok_or_else(|| Error::missing("DATE_PRODUCT_GENERATED"))?;
        let solar_zenith = self
            .solar_zenith
            .ok_or_else(|| Error::missing("SUN_ELEVATION"))?;
        let solar_azimuth = self
            .solar_azimuth
            .ok_or_else(|| Error::missing("SUN_AZIMUTH"))?;
        let wrs_path = self.wrs_path.ok_or_else(|| Error::missing("WRS_PATH"))?;
        let wrs_row = self.wrs_row.ok_or_else(|| Error::missing("WRS_ROW"))?;

        let corner = |lat: Option<f64>, lon: Option<f64>, field| match (lat, lon) {
            (Some(lat), Some(lon)) => Ok(GeodeticCorner { lat, lon }),
            _ => Err(Error::missing(field)),
        };
        let ul = corner(self.ul_lat, self.ul_lon, "CORNER_UL_LAT/LON_PRODUCT")?;
        let ur = corner(self.ur_lat, self.ur_lon, "CORNER_UR_LAT/LON_PRODUCT")?;
        let ll = corner(self.ll_lat, self.ll_lon, "CORNER_LL_LAT/LON_PRODUCT")?;
        let lr = corner(self.lr_lat, self.lr_lon, "CORNER_LR_LAT/LON_PRODUCT")?;

        let proj_corner = |(x, y): (Option<f64>, Option<f64>), field| match (x, y) {
            (Some(x), Some(y)) => Ok(ProjectedCorner { x, y }),
            _ => Err(Error::missing(field)),
        };
        let proj_ul = proj_corner(self.proj_ul, "CORNER_UL_PROJECTION_X/Y_PRODUCT")?;
        let proj_lr = proj_corner(self.proj_lr, "CORNER_LR_PROJECTION_X/Y_PRODUCT")?;

        let reflective = self
            .reflective
            .finish()
            .ok_or_else(|| Error::missing("reflective raster extent"))?;
        let thermal = self.thermal.finish();
        let panchromatic = self.panchromatic.finish();

        let projection = ProjectionInfo {
            projection: map_projection,
            datum: self.datum.ok_or_else(|| Error::missing("DATUM"))?,
            units: "meters".to_string(),
            grid_origin: GridOrigin::Center,
            ul: proj_ul,
            lr: proj_lr,
        };

        if self.accumulator.is_empty() {
            return Err(Error::missing("FILE_NAME_BAND entries"));
        }

        let synthesis = BandSynthesis {
            family: self.family,
            satellite,
            product_id: &product_id,
            level: &level,
            app_version: self.software_version.as_deref(),
            production_date,
            reflective,
            thermal,
            panchromatic,
            resample_method: self.resample_method,
            gain_bias_present: self.gain_bias_present,
            refl_gain_bias_present: self.refl_gain_bias_present,
            coefficients: &self.coefficients,
        };
        let bands = synthesis.synthesize(self.accumulator.bands())?;

        let bounds = compute_bounds(engine, &projection, reflective.nlines, reflective.nsamps)?;

        Ok(SceneMetadata {
            instrument: self.family,
            satellite,
            product_id,
            level,
            acquisition_date,
            scene_center_time,
            production_date,
            solar_zenith,
            solar_azimuth,
            solar_units: "degrees".to_string(),
            earth_sun_distance: self.earth_sun_distance,
            wrs_system: 2,
            wrs_path,
            wrs_row,
            orientation_angle: 0.0,
            data_provider: "USGS/EROS".to_string(),
            metadata_source: source_name.to_string(),
            ul,
            ur,
            ll,
            lr,
            projection,
            bounds,
            bands,
        })
    }
}

fn put_f64(key: &str, value: &str) -> Option<f64> {
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value, "unparseable numeric value, skipped");
            None
        }
    }
}

fn put_i32(key: &str, value: &str) -> Option<i32> {
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value, "unparseable integer value, skipped");
            None
        }
    }
}

fn put_usize(key: &str, value: &str) -> Option<usize> {
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value, "unparseable dimension value, skipped");
            None
        }
    }
}

fn parse_date(key: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(d) => Some(d),
        Err(_) => {
            warn!(key, value, "unparseable date, skipped");
            None
        }
    }
}

fn parse_time(key: &str, value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim_end_matches('Z');
    match NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f") {
        Ok(t) => Some(t),
        Err(_) => {
            warn!(key, value, "unparseable time, skipped");
            None
        }
    }
}

fn parse_datetime(key: &str, value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(d) => Some(d.with_timezone(&Utc)),
        Err(_) => {
            warn!(key, value, "unparseable timestamp, skipped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_on_equals_and_strips_quotes() {
        assert_eq!(
            tokenize("    LANDSAT_PRODUCT_ID = \"LC08_L1TP_045030_20200916_20200921_02_T1\""),
            Some(("LANDSAT_PRODUCT_ID", "LC08_L1TP_045030_20200916_20200921_02_T1"))
        );
        assert_eq!(
            tokenize("  REFLECTIVE_LINES = 7861"),
            Some(("REFLECTIVE_LINES", "7861"))
        );
        assert_eq!(
            tokenize("  GROUP = PRODUCT_CONTENTS"),
            Some(("GROUP", "PRODUCT_CONTENTS"))
        );
    }

    #[test]
    fn tokenize_handles_bare_sentinel_and_blank_lines() {
        assert_eq!(tokenize("END"), Some(("END", "")));
        assert_eq!(tokenize("  END  "), Some(("END", "")));
        assert_eq!(tokenize(""), None);
        assert_eq!(tokenize("   \t"), None);
    }

    #[test]
    fn tokenize_keeps_whitespace_inside_quoted_values() {
        assert_eq!(
            tokenize("    ORIGIN = \"Image courtesy of the U.S. Geological Survey\""),
            Some(("ORIGIN", "Image courtesy of the U.S. Geological Survey"))
        );
    }

    #[test]
    fn tokenize_tolerates_missing_value() {
        assert_eq!(tokenize("SOME_KEY ="), Some(("SOME_KEY", "")));
    }

    #[test]
    fn sun_elevation_becomes_zenith() {
        let mut scratch = Scratch::new(Instrument::OliTirs);
        scratch
            .dispatch(CanonicalKey::SunElevation, "SUN_ELEVATION", "48.5")
            .unwrap();
        assert_eq!(scratch.solar_zenith, Some(41.5));
    }

    #[test]
    fn unparseable_values_are_skipped_not_fatal() {
        let mut scratch = Scratch::new(Instrument::OliTirs);
        scratch
            .dispatch(CanonicalKey::WrsPath, "WRS_PATH", "not-a-number")
            .unwrap();
        assert_eq!(scratch.wrs_path, None);
    }

    #[test]
    fn contradictory_sensor_id_is_fatal() {
        let mut scratch = Scratch::new(Instrument::Tm);
        let err = scratch
            .dispatch(CanonicalKey::SensorId, "SENSOR_ID", "OLI_TIRS")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedSensor { .. }));
    }

    #[test]
    fn unexpected_datum_is_fatal() {
        let mut scratch = Scratch::new(Instrument::OliTirs);
        let err = scratch
            .dispatch(CanonicalKey::Datum, "DATUM", "NAD27")
            .unwrap_err();
        assert!(matches!(err, Error::ProjectionUnavailable { .. }));
    }

    #[test]
    fn unsupported_projection_type_is_fatal_at_finish() {
        let mut scratch = Scratch::new(Instrument::OliTirs);
        scratch
            .dispatch(CanonicalKey::MapProjection, "MAP_PROJECTION", "SINUSOIDAL")
            .unwrap();
        let err = scratch.projection().unwrap_err();
        assert!(matches!(err, Error::ProjectionUnavailable { .. }));
    }

    #[test]
    fn polar_stereographic_requires_all_parameters() {
        let mut scratch = Scratch::new(Instrument::OliTirs);
        scratch
            .dispatch(CanonicalKey::MapProjection, "MAP_PROJECTION", "PS")
            .unwrap();
        scratch
            .dispatch(CanonicalKey::LongitudePole, "VERTICAL_LON_FROM_POLE", "0.0")
            .unwrap();
        assert!(matches!(
            scratch.projection().unwrap_err(),
            Error::IncompleteMetadata { field: "TRUE_SCALE_LAT" }
        ));

        scratch
            .dispatch(CanonicalKey::TrueScaleLat, "TRUE_SCALE_LAT", "-71.0")
            .unwrap();
        scratch
            .dispatch(CanonicalKey::FalseEasting, "FALSE_EASTING", "0.0")
            .unwrap();
        scratch
            .dispatch(CanonicalKey::FalseNorthing, "FALSE_NORTHING", "0.0")
            .unwrap();
        assert_eq!(
            scratch.projection().unwrap(),
            MapProjection::PolarStereographic {
                longitude_pole: 0.0,
                latitude_true_scale: -71.0,
                false_easting: 0.0,
                false_northing: 0.0,
            }
        );
    }
}
