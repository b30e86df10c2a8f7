//! Sensor Family Resolver and the static per-family lookup tables.
//! The family gates every band-designator interpretation downstream, so it is
//! resolved from `SENSOR_ID` in a dedicated pre-scan before the main parse.
//! `SensorProfile` is the single source of truth for the per-family derived
//! constants; keeping it as data keeps the per-family rules auditable.
use crate::error::{Error, Result};
use crate::types::{BandId, BandRole, Instrument, PixelType, ResolutionClass, Satellite};

impl Instrument {
    /// Resolve the instrument family from the `SENSOR_ID` value. Every ETM+
    /// spelling observed over the years starts with `ETM`.
    pub fn resolve(sensor_id: &str) -> Result<Instrument> {
        match sensor_id {
            "TM" => Ok(Instrument::Tm),
            "OLI_TIRS" => Ok(Instrument::OliTirs),
            "OLI" => Ok(Instrument::Oli),
            "TIRS" => Ok(Instrument::Tirs),
            s if s.starts_with("ETM") => Ok(Instrument::EtmPlus),
            other => Err(Error::UnsupportedSensor {
                value: other.to_string(),
            }),
        }
    }
}

impl Satellite {
    /// Resolve the platform from the `SPACECRAFT_ID` value.
    pub fn resolve(spacecraft_id: &str) -> Result<Satellite> {
        match spacecraft_id {
            "LANDSAT_4" => Ok(Satellite::Landsat4),
            "LANDSAT_5" => Ok(Satellite::Landsat5),
            "LANDSAT_7" => Ok(Satellite::Landsat7),
            "LANDSAT_8" => Ok(Satellite::Landsat8),
            "LANDSAT_9" => Ok(Satellite::Landsat9),
            other => Err(Error::UnsupportedSensor {
                value: other.to_string(),
            }),
        }
    }
}

/// Static per-family constants consulted by the derived-attribute
/// synthesizer: pixel storage type, fill value, and the two-letter sensor
/// code that feeds synthesized short names (`{code}{nn}{suffix}`, e.g.
/// `LC08DN`, `LE07PQA`).
#[derive(Copy, Clone, Debug)]
pub struct SensorProfile {
    pub data_type: PixelType,
    pub fill_value: i64,
    pub sensor_code: &'static str,
}

impl SensorProfile {
    pub fn of(instrument: Instrument) -> SensorProfile {
        match instrument {
            Instrument::Tm => SensorProfile {
                data_type: PixelType::UInt8,
                fill_value: 0,
                sensor_code: "LT",
            },
            Instrument::EtmPlus => SensorProfile {
                data_type: PixelType::UInt8,
                fill_value: 0,
                sensor_code: "LE",
            },
            Instrument::OliTirs => SensorProfile {
                data_type: PixelType::UInt16,
                fill_value: 0,
                sensor_code: "LC",
            },
            Instrument::Oli => SensorProfile {
                data_type: PixelType::UInt16,
                fill_value: 0,
                sensor_code: "LO",
            },
            Instrument::Tirs => SensorProfile {
                data_type: PixelType::UInt16,
                fill_value: 0,
                sensor_code: "LT",
            },
        }
    }

    /// Synthesized short name: sensor code, two-digit platform number, and a
    /// role suffix (`DN` for image bands, `PQA`/`RADSAT`/angle codes for QA).
    pub fn short_name(&self, satellite: Satellite, suffix: &str) -> String {
        format!("{}{:02}{}", self.sensor_code, satellite.number(), suffix)
    }
}

impl BandId {
    /// Role of this designator. Numeric designators are measured image
    /// layers; angle and quality tags are QA layers.
    pub fn role(&self) -> BandRole {
        match self {
            BandId::Num(_) => BandRole::Image,
            _ => BandRole::Qa,
        }
    }

    /// Thermal flag, partitioned by family: band 6 senses long-wave infrared
    /// on TM only, 61/62 are the ETM+ thermal gain pair, and 10/11 are the
    /// TIRS thermal pair.
    pub fn is_thermal(&self, family: Instrument) -> bool {
        match self {
            BandId::Num(6) => family == Instrument::Tm,
            BandId::Num(61) | BandId::Num(62) => family == Instrument::EtmPlus,
            BandId::Num(10) | BandId::Num(11) => {
                matches!(family, Instrument::OliTirs | Instrument::Tirs)
            }
            _ => false,
        }
    }

    /// Resolution class whose raster extent and pixel size this band uses.
    /// Band 8 is the panchromatic slot on both ETM+ and OLI; QA and angle
    /// layers ride along with the reflective class.
    pub fn resolution_class(&self, family: Instrument) -> ResolutionClass {
        if self.is_thermal(family) {
            ResolutionClass::Thermal
        } else if *self == BandId::Num(8) {
            ResolutionClass::Panchromatic
        } else {
            ResolutionClass::Reflective
        }
    }
}
