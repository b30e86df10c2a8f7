//! Shared types and enums used across LANDMETA.
//! Includes the instrument family and platform enums, band designators and
//! roles, pixel data types, and the small closed enums that describe map
//! projection bookkeeping (`Datum`, `GridOrigin`, `ResampleMethod`).
use serde::{Deserialize, Serialize};

/// Landsat instrument family. Resolved once per scene, before any
/// band-designator interpretation, because the same designator can mean
/// different things per family (band 6 is the TM thermal band; bands 61/62
/// are the two ETM+ thermal gain settings; bands 10/11 are TIRS thermal).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Instrument {
    Tm,
    EtmPlus,
    Oli,
    Tirs,
    OliTirs,
}

impl Instrument {
    /// True for the OLI-carrying families (OLI and OLI_TIRS); the cirrus and
    /// terrain-occlusion QA bits only exist on these.
    pub fn has_oli(&self) -> bool {
        matches!(self, Instrument::Oli | Instrument::OliTirs)
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Instrument::Tm => "TM",
            Instrument::EtmPlus => "ETM+",
            Instrument::Oli => "OLI",
            Instrument::Tirs => "TIRS",
            Instrument::OliTirs => "OLI_TIRS",
        };
        write!(f, "{}", s)
    }
}

/// Landsat platform, as declared by `SPACECRAFT_ID`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Satellite {
    Landsat4,
    Landsat5,
    Landsat7,
    Landsat8,
    Landsat9,
}

impl Satellite {
    pub fn number(&self) -> u8 {
        match self {
            Satellite::Landsat4 => 4,
            Satellite::Landsat5 => 5,
            Satellite::Landsat7 => 7,
            Satellite::Landsat8 => 8,
            Satellite::Landsat9 => 9,
        }
    }
}

impl std::fmt::Display for Satellite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LANDSAT_{}", self.number())
    }
}

/// Band designator: either a numeric band number (61/62 stand for the ETM+
/// band-6 low/high gain files) or a fixed tag for the per-pixel angle and
/// quality layers.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum BandId {
    Num(u8),
    SensorAzimuth,
    SensorZenith,
    SolarAzimuth,
    SolarZenith,
    QaPixel,
    QaRadsat,
}

impl BandId {
    /// Canonical band name used in synthesized file names and the handoff
    /// record ("b4", "b61", "vaa", "qa_pixel", ...).
    pub fn name(&self) -> String {
        match self {
            BandId::Num(n) => format!("b{}", n),
            BandId::SensorAzimuth => "vaa".to_string(),
            BandId::SensorZenith => "vza".to_string(),
            BandId::SolarAzimuth => "saa".to_string(),
            BandId::SolarZenith => "sza".to_string(),
            BandId::QaPixel => "qa_pixel".to_string(),
            BandId::QaRadsat => "qa_radsat".to_string(),
        }
    }
}

impl std::fmt::Display for BandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Band role in the scene: a measured image layer or a quality/ancillary
/// layer (per-pixel angles and quality bitmaps).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum BandRole {
    Image,
    Qa,
}

impl std::fmt::Display for BandRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BandRole::Image => write!(f, "image"),
            BandRole::Qa => write!(f, "qa"),
        }
    }
}

/// Resolution class a band draws its raster extent and pixel size from.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ResolutionClass {
    Reflective,
    Thermal,
    Panchromatic,
}

/// Pixel storage type of a band file.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum PixelType {
    UInt8,
    Int16,
    UInt16,
}

impl std::fmt::Display for PixelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PixelType::UInt8 => "UINT8",
            PixelType::Int16 => "INT16",
            PixelType::UInt16 => "UINT16",
        };
        write!(f, "{}", s)
    }
}

/// Horizontal datum of the scene projection. LPGS products are WGS84 only.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Datum {
    Wgs84,
}

impl std::fmt::Display for Datum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WGS84")
    }
}

/// Which point of the corner pixel the projected corner coordinates refer to.
/// LPGS corner coordinates are pixel centers.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum GridOrigin {
    Center,
    UpperLeft,
}

impl std::fmt::Display for GridOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridOrigin::Center => write!(f, "CENTER"),
            GridOrigin::UpperLeft => write!(f, "UL"),
        }
    }
}

/// Resampling kernel declared by the level-1 processing system.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ResampleMethod {
    CubicConvolution,
    NearestNeighbor,
    Bilinear,
}

impl std::fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResampleMethod::CubicConvolution => "cubic convolution",
            ResampleMethod::NearestNeighbor => "nearest neighbor",
            ResampleMethod::Bilinear => "bilinear",
        };
        write!(f, "{}", s)
    }
}
