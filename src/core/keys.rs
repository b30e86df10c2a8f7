//! Key Alias Table: maps every historically observed MTL key spelling to one
//! canonical field identifier. The table is many-to-one (several spellings
//! per concept, spanning pre-Collection through Collection-2 products) and a
//! raw key never maps to two canonical fields. Unrecognized keys resolve to
//! `None` and are skipped by the reader, which keeps the parser forward
//! compatible with metadata revisions we have not seen yet.
use crate::types::BandId;

/// Canonical field identifier for one MTL concept. Band-indexed keys carry
/// the parsed designator so the reader never has to reason about positional
/// slots: `RADIANCE_MULT_BAND_7` means band 7 for every instrument family.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CanonicalKey {
    SoftwareVersion,
    Level,
    ProductId,
    SpacecraftId,
    SensorId,
    AcquisitionDate,
    SceneCenterTime,
    ProductionDate,
    SunElevation,
    SunAzimuth,
    EarthSunDistance,
    WrsPath,
    WrsRow,
    UlLat,
    UlLon,
    UrLat,
    UrLon,
    LlLat,
    LlLon,
    LrLat,
    LrLon,
    ProjUlX,
    ProjUlY,
    ProjLrX,
    ProjLrY,
    ReflectiveLines,
    ReflectiveSamples,
    ThermalLines,
    ThermalSamples,
    PanchromaticLines,
    PanchromaticSamples,
    CellSizeReflective,
    CellSizeThermal,
    CellSizePanchromatic,
    MapProjection,
    Datum,
    UtmZone,
    LongitudePole,
    TrueScaleLat,
    FalseEasting,
    FalseNorthing,
    StandardParallel1,
    StandardParallel2,
    CentralMeridian,
    OriginLatitude,
    ResamplingOption,
    BandFile(BandId),
    QuantizeMin(BandId),
    QuantizeMax(BandId),
    RadianceMult(BandId),
    RadianceAdd(BandId),
    ReflectanceMult(BandId),
    ReflectanceAdd(BandId),
    K1Constant(BandId),
    K2Constant(BandId),
    /// `END`: end-of-record sentinel; processing of the remaining text stops
    /// immediately and successfully.
    EndOfRecord,
    /// `END_GROUP`: the reader inspects the value to detect the close of the
    /// band-listing group (Collection-2 repeats the file names later).
    EndGroup,
}

impl CanonicalKey {
    /// Resolve a raw MTL key into its canonical identifier. Collection-2
    /// spellings are listed first, historical aliases after them.
    pub fn resolve(raw: &str) -> Option<CanonicalKey> {
        use CanonicalKey::*;

        if let Some(key) = resolve_band_key(raw) {
            return Some(key);
        }

        Some(match raw {
            "PROCESSING_SOFTWARE_VERSION" | "PROCESSING_SOFTWARE" => SoftwareVersion,
            "PROCESSING_LEVEL" | "PRODUCT_TYPE" => Level,
            "LANDSAT_PRODUCT_ID" | "LANDSAT_SCENE_ID" => ProductId,
            "SPACECRAFT_ID" => SpacecraftId,
            "SENSOR_ID" => SensorId,
            "DATE_ACQUIRED" | "ACQUISITION_DATE" => AcquisitionDate,
            "SCENE_CENTER_TIME" | "SCENE_CENTER_SCAN_TIME" => SceneCenterTime,
            "DATE_PRODUCT_GENERATED" | "FILE_DATE" | "PRODUCT_CREATION_TIME" => ProductionDate,
            "SUN_ELEVATION" => SunElevation,
            "SUN_AZIMUTH" => SunAzimuth,
            "EARTH_SUN_DISTANCE" => EarthSunDistance,
            "WRS_PATH" => WrsPath,
            "WRS_ROW" | "STARTING_ROW" => WrsRow,
            "CORNER_UL_LAT_PRODUCT" | "PRODUCT_UL_CORNER_LAT" => UlLat,
            "CORNER_UL_LON_PRODUCT" | "PRODUCT_UL_CORNER_LON" => UlLon,
            "CORNER_UR_LAT_PRODUCT" | "PRODUCT_UR_CORNER_LAT" => UrLat,
            "CORNER_UR_LON_PRODUCT" | "PRODUCT_UR_CORNER_LON" => UrLon,
            "CORNER_LL_LAT_PRODUCT" | "PRODUCT_LL_CORNER_LAT" => LlLat,
            "CORNER_LL_LON_PRODUCT" | "PRODUCT_LL_CORNER_LON" => LlLon,
            "CORNER_LR_LAT_PRODUCT" | "PRODUCT_LR_CORNER_LAT" => LrLat,
            "CORNER_LR_LON_PRODUCT" | "PRODUCT_LR_CORNER_LON" => LrLon,
            "CORNER_UL_PROJECTION_X_PRODUCT" | "PRODUCT_UL_CORNER_MAPX" => ProjUlX,
            "CORNER_UL_PROJECTION_Y_PRODUCT" | "PRODUCT_UL_CORNER_MAPY" => ProjUlY,
            "CORNER_LR_PROJECTION_X_PRODUCT" | "PRODUCT_LR_CORNER_MAPX" => ProjLrX,
            "CORNER_LR_PROJECTION_Y_PRODUCT" | "PRODUCT_LR_CORNER_MAPY" => ProjLrY,
            "REFLECTIVE_LINES" | "PRODUCT_LINES_REF" => ReflectiveLines,
            "REFLECTIVE_SAMPLES" | "PRODUCT_SAMPLES_REF" => ReflectiveSamples,
            "THERMAL_LINES" | "PRODUCT_LINES_THM" => ThermalLines,
            "THERMAL_SAMPLES" | "PRODUCT_SAMPLES_THM" => ThermalSamples,
            "PANCHROMATIC_LINES" | "PRODUCT_LINES_PAN" => PanchromaticLines,
            "PANCHROMATIC_SAMPLES" | "PRODUCT_SAMPLES_PAN" => PanchromaticSamples,
            "GRID_CELL_SIZE_REFLECTIVE" | "GRID_CELL_SIZE_REF" => CellSizeReflective,
            "GRID_CELL_SIZE_THERMAL" | "GRID_CELL_SIZE_THM" => CellSizeThermal,
            "GRID_CELL_SIZE_PANCHROMATIC" | "GRID_CELL_SIZE_PAN" => CellSizePanchromatic,
            "MAP_PROJECTION" => MapProjection,
            "DATUM" | "REFERENCE_DATUM" => Datum,
            "UTM_ZONE" | "ZONE_NUMBER" => UtmZone,
            "VERTICAL_LON_FROM_POLE" => LongitudePole,
            "TRUE_SCALE_LAT" => TrueScaleLat,
            "FALSE_EASTING" => FalseEasting,
            "FALSE_NORTHING" => FalseNorthing,
            "STANDARD_PARALLEL_1_LAT" => StandardParallel1,
            "STANDARD_PARALLEL_2_LAT" => StandardParallel2,
            "CENTRAL_MERIDIAN_LON" => CentralMeridian,
            "ORIGIN_LAT" => OriginLatitude,
            "RESAMPLING_OPTION" => ResamplingOption,
            "END" => EndOfRecord,
            "END_GROUP" => EndGroup,
            _ => return None,
        })
    }
}

/// Resolve the band-indexed key families. Returns `None` for anything that
/// is not a recognized band key, including unparseable band suffixes.
fn resolve_band_key(raw: &str) -> Option<CanonicalKey> {
    use CanonicalKey::*;

    // Fixed-tag file name keys first; the numeric prefix match below would
    // otherwise never see them.
    match raw {
        "FILE_NAME_ANGLE_SENSOR_AZIMUTH_BAND_4" => {
            return Some(BandFile(BandId::SensorAzimuth));
        }
        "FILE_NAME_ANGLE_SENSOR_ZENITH_BAND_4" => {
            return Some(BandFile(BandId::SensorZenith));
        }
        "FILE_NAME_ANGLE_SOLAR_AZIMUTH_BAND_4" => {
            return Some(BandFile(BandId::SolarAzimuth));
        }
        "FILE_NAME_ANGLE_SOLAR_ZENITH_BAND_4" => {
            return Some(BandFile(BandId::SolarZenith));
        }
        "FILE_NAME_QUALITY_L1_PIXEL" | "FILE_NAME_BAND_QUALITY" => {
            return Some(BandFile(BandId::QaPixel));
        }
        "FILE_NAME_QUALITY_L1_RADIOMETRIC_SATURATION" => {
            return Some(BandFile(BandId::QaRadsat));
        }
        _ => {}
    }

    const NUMBERED: &[(&str, fn(BandId) -> CanonicalKey)] = &[
        ("FILE_NAME_BAND_", BandFile),
        ("QUANTIZE_CAL_MIN_BAND_", QuantizeMin),
        ("QUANTIZE_CAL_MAX_BAND_", QuantizeMax),
        ("RADIANCE_MULT_BAND_", RadianceMult),
        ("RADIANCE_ADD_BAND_", RadianceAdd),
        ("REFLECTANCE_MULT_BAND_", ReflectanceMult),
        ("REFLECTANCE_ADD_BAND_", ReflectanceAdd),
        ("K1_CONSTANT_BAND_", K1Constant),
        ("K2_CONSTANT_BAND_", K2Constant),
    ];

    for (prefix, make) in NUMBERED {
        if let Some(suffix) = raw.strip_prefix(prefix) {
            return parse_band_suffix(suffix).map(make);
        }
    }
    None
}

/// Parse the band designator suffix of a numbered key. The ETM+ band-6
/// low/high gain files are spelled `6_VCID_1` and `6_VCID_2` and normalize
/// to designators 61 and 62.
fn parse_band_suffix(suffix: &str) -> Option<BandId> {
    match suffix {
        "6_VCID_1" => Some(BandId::Num(61)),
        "6_VCID_2" => Some(BandId::Num(62)),
        _ => match suffix.parse::<u8>() {
            Ok(n) if (1..=11).contains(&n) => Some(BandId::Num(n)),
            _ => None,
        },
    }
}
