//! Derived Attribute Synthesizer: fills in the per-band fields that are
//! never present verbatim in the source record. Everything here is table
//! lookup keyed by the resolved family and the band designator; coefficient
//! values collected by the reader arrive in designator-keyed maps, so the
//! historical position-in-file bookkeeping never matters.
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::core::bands::AccumulatedBand;
use crate::core::scene::{BandEntry, RasterExtent};
use crate::core::sensor::SensorProfile;
use crate::error::{Error, Result};
use crate::types::{BandId, BandRole, Instrument, PixelType, ResampleMethod, ResolutionClass, Satellite};

/// Radiometric values collected for one band designator while reading the
/// record. Every field may legitimately be absent.
#[derive(Copy, Clone, Debug, Default)]
pub struct BandCoefficients {
    pub rad_gain: Option<f64>,
    pub rad_bias: Option<f64>,
    pub refl_gain: Option<f64>,
    pub refl_bias: Option<f64>,
    pub k1: Option<f64>,
    pub k2: Option<f64>,
    pub quantize_min: Option<f64>,
    pub quantize_max: Option<f64>,
}

/// Inputs the synthesizer needs beyond the accumulated band list: the
/// resolved family, scene identification, the three named resolution-class
/// extents, and the coefficient maps with their presence signals.
pub struct BandSynthesis<'a> {
    pub family: Instrument,
    pub satellite: Satellite,
    pub product_id: &'a str,
    pub level: &'a str,
    pub app_version: Option<&'a str>,
    pub production_date: DateTime<Utc>,
    pub reflective: RasterExtent,
    pub thermal: Option<RasterExtent>,
    pub panchromatic: Option<RasterExtent>,
    pub resample_method: Option<ResampleMethod>,
    /// Presence of `RADIANCE_MULT_BAND_1` anywhere in the record: the signal
    /// that the radiance coefficient set exists at all.
    pub gain_bias_present: bool,
    /// Presence of `REFLECTANCE_MULT_BAND_1`: same signal for the TOA
    /// reflectance coefficients and brightness-temperature constants.
    pub refl_gain_bias_present: bool,
    pub coefficients: &'a BTreeMap<BandId, BandCoefficients>,
}

impl BandSynthesis<'_> {
    /// Build the final band entries, in accumulation order.
    pub fn synthesize(&self, accumulated: &[AccumulatedBand]) -> Result<Vec<BandEntry>> {
        let profile = SensorProfile::of(self.family);
        let mut entries = Vec::with_capacity(accumulated.len());
        for band in accumulated {
            entries.push(self.synthesize_one(band, &profile)?);
        }
        info!(bands = entries.len(), family = %self.family, "synthesized band attributes");
        Ok(entries)
    }

    fn synthesize_one(&self, band: &AccumulatedBand, profile: &SensorProfile) -> Result<BandEntry> {
        let extent = self.class_extent(band)?;
        let coeffs = self
            .coefficients
            .get(&band.id)
            .copied()
            .unwrap_or_default();

        let name = band.id.name();
        let mut entry = BandEntry {
            source_file: band.source_file.clone(),
            id: band.id,
            role: band.role,
            thermal: band.thermal,
            long_name: long_name(band.id),
            short_name: profile.short_name(self.satellite, short_suffix(band.id)),
            file_name: format!("{}_{}.img", self.product_id, name),
            name,
            product: self.level.to_string(),
            app_version: self.app_version.map(str::to_string),
            production_date: self.production_date,
            nlines: extent.nlines,
            nsamps: extent.nsamps,
            pixel_size: extent.pixel_size,
            pixel_units: "meters".to_string(),
            data_type: profile.data_type,
            fill_value: Some(profile.fill_value),
            valid_range: coeffs
                .quantize_min
                .zip(coeffs.quantize_max),
            data_units: "digital numbers".to_string(),
            rad_gain: None,
            rad_bias: None,
            refl_gain: None,
            refl_bias: None,
            k1: None,
            k2: None,
            scale_factor: None,
            resample_method: None,
            bitmap: None,
        };

        // Radiometric fields only ever apply to measured image bands; QA
        // layers keep all four pairs at "not applicable".
        if band.role == BandRole::Image {
            if self.gain_bias_present {
                entry.rad_gain = coeffs.rad_gain;
                entry.rad_bias = coeffs.rad_bias;
            }
            if self.refl_gain_bias_present {
                if band.thermal {
                    entry.k1 = coeffs.k1;
                    entry.k2 = coeffs.k2;
                } else {
                    entry.refl_gain = coeffs.refl_gain;
                    entry.refl_bias = coeffs.refl_bias;
                }
            }
            entry.resample_method = self.resample_method;
        }

        match band.id {
            BandId::QaPixel | BandId::QaRadsat => {
                entry.data_type = PixelType::UInt16;
                entry.valid_range = Some((0.0, 65535.0));
                entry.data_units = "quality/feature classification".to_string();
                entry.bitmap = Some(match band.id {
                    BandId::QaPixel => pixel_quality_bitmap(self.family),
                    _ => radiometric_saturation_bitmap(self.family),
                });
            }
            BandId::SensorAzimuth
            | BandId::SensorZenith
            | BandId::SolarAzimuth
            | BandId::SolarZenith => {
                entry.data_type = PixelType::Int16;
                entry.data_units = "degrees".to_string();
                entry.product = "angle_bands".to_string();
                entry.scale_factor = Some(0.01);
                entry.fill_value = None;
                entry.valid_range = None;
            }
            BandId::Num(_) => {}
        }

        Ok(entry)
    }

    fn class_extent(&self, band: &AccumulatedBand) -> Result<RasterExtent> {
        match band.id.resolution_class(self.family) {
            ResolutionClass::Reflective => Ok(self.reflective),
            ResolutionClass::Thermal => self
                .thermal
                .ok_or_else(|| Error::missing("thermal raster extent")),
            ResolutionClass::Panchromatic => self
                .panchromatic
                .ok_or_else(|| Error::missing("panchromatic raster extent")),
        }
    }
}

fn long_name(id: BandId) -> String {
    match id {
        BandId::Num(n) => format!("band {} digital numbers", n),
        BandId::SensorAzimuth => "band 4 view/sensor azimuth angles".to_string(),
        BandId::SensorZenith => "band 4 view/sensor zenith angles".to_string(),
        BandId::SolarAzimuth => "band 4 solar azimuth angles".to_string(),
        BandId::SolarZenith => "band 4 solar zenith angles".to_string(),
        BandId::QaPixel => "level-1 pixel quality".to_string(),
        BandId::QaRadsat => "level-1 radiometric saturation and terrain occlusion".to_string(),
    }
}

fn short_suffix(id: BandId) -> &'static str {
    match id {
        BandId::Num(_) => "DN",
        BandId::SensorAzimuth => "SENAZ",
        BandId::SensorZenith => "SENZEN",
        BandId::SolarAzimuth => "SOLAZ",
        BandId::SolarZenith => "SOLZEN",
        BandId::QaPixel => "PQA",
        BandId::QaRadsat => "RADSAT",
    }
}

const NOT_USED: &str = "Not used";

/// Per-bit descriptions for the level-1 pixel quality band. The cirrus bits
/// (2, 14, 15) only exist on the OLI families.
fn pixel_quality_bitmap(family: Instrument) -> Vec<String> {
    let cirrus = family.has_oli();
    let mut bits: Vec<String> = Vec::with_capacity(16);
    bits.push("Data Fill Flag (0 = image data, 1 = fill data)".to_string());
    bits.push(
        "Dilated Cloud (0 = cloud not dilated or no cloud, 1 = cloud dilation)".to_string(),
    );
    bits.push(if cirrus {
        "Cirrus (0 = no confidence level set or low confidence, 1 = high confidence cirrus)"
            .to_string()
    } else {
        NOT_USED.to_string()
    });
    bits.push("Cloud (0 = cloud confidence is not high, 1 = high confidence cloud)".to_string());
    bits.push(
        "Cloud Shadow (0 = cloud shadow confidence is not high, 1 = high confidence cloud shadow)"
            .to_string(),
    );
    bits.push(
        "Snow (0 = snow/ice confidence is not high, 1 = high confidence snow cover)".to_string(),
    );
    bits.push(
        "Clear (0 = cloud or dilated cloud bits are set, 1 = cloud and dilated cloud bits are not set)"
            .to_string(),
    );
    bits.push("Water (0 = land or cloud, 1 = for water)".to_string());
    bits.push("Cloud Confidence".to_string());
    bits.push("Cloud Confidence".to_string());
    bits.push("Cloud Shadow Confidence".to_string());
    bits.push("Cloud Shadow Confidence".to_string());
    bits.push("Snow/Ice Confidence".to_string());
    bits.push("Snow/Ice Confidence".to_string());
    for _ in 0..2 {
        bits.push(if cirrus {
            "Cirrus Confidence".to_string()
        } else {
            NOT_USED.to_string()
        });
    }
    bits
}

/// Per-bit descriptions for the level-1 radiometric saturation band. Bits
/// 5, 8, 9, and 11 differ per family: OLI has band-6/band-9 saturation and
/// terrain occlusion, ETM+ has the 6L/6H pair and the dropped-pixel flag,
/// TM has band 6 and dropped pixel.
fn radiometric_saturation_bitmap(family: Instrument) -> Vec<String> {
    let saturation = |band: &str| {
        format!(
            "Band {} saturation (0 = no saturation, 1 = saturated data)",
            band
        )
    };
    let mut bits: Vec<String> = (1..=5).map(|n| saturation(&n.to_string())).collect();
    match family {
        f if f.has_oli() => {
            bits.push(saturation("6"));
            bits.push(saturation("7"));
            bits.push(NOT_USED.to_string());
            bits.push(saturation("9"));
            bits.push(NOT_USED.to_string());
            bits.push(NOT_USED.to_string());
            bits.push(
                "Terrain occlusion (0 = no terrain occlusion, 1 = terrain occlusion)".to_string(),
            );
        }
        Instrument::EtmPlus => {
            bits.push(saturation("6L"));
            bits.push(saturation("7"));
            bits.push(NOT_USED.to_string());
            bits.push(saturation("6H"));
            bits.push("Dropped Pixel".to_string());
            bits.push(NOT_USED.to_string());
            bits.push(NOT_USED.to_string());
        }
        _ => {
            // TM and TIRS-only products
            bits.push(saturation("6"));
            bits.push(saturation("7"));
            bits.push(NOT_USED.to_string());
            bits.push(NOT_USED.to_string());
            bits.push("Dropped Pixel".to_string());
            bits.push(NOT_USED.to_string());
            bits.push(NOT_USED.to_string());
        }
    }
    while bits.len() < 16 {
        bits.push(NOT_USED.to_string());
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BandRole;
    use chrono::TimeZone;

    fn extent(nlines: usize, nsamps: usize, size: f64) -> RasterExtent {
        RasterExtent {
            nlines,
            nsamps,
            pixel_size: (size, size),
        }
    }

    fn accumulated(family: Instrument, id: BandId, file: &str) -> AccumulatedBand {
        AccumulatedBand {
            id,
            source_file: file.to_string(),
            role: id.role(),
            thermal: id.is_thermal(family),
        }
    }

    fn synthesis<'a>(
        family: Instrument,
        satellite: Satellite,
        coeffs: &'a BTreeMap<BandId, BandCoefficients>,
        refl_present: bool,
    ) -> BandSynthesis<'a> {
        BandSynthesis {
            family,
            satellite,
            product_id: "LT05_L1TP_035027_19890712_20200916_02_T1",
            level: "L1TP",
            app_version: Some("LPGS_16.3.0"),
            production_date: Utc.with_ymd_and_hms(2020, 9, 16, 20, 18, 10).unwrap(),
            reflective: extent(7021, 7891, 30.0),
            thermal: Some(extent(7021, 7891, 30.0)),
            panchromatic: Some(extent(14041, 15781, 15.0)),
            resample_method: Some(ResampleMethod::CubicConvolution),
            gain_bias_present: true,
            refl_gain_bias_present: refl_present,
            coefficients: coeffs,
        }
    }

    #[test]
    fn tm_band_six_gets_k_constants_not_reflectance() {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(
            BandId::Num(6),
            BandCoefficients {
                rad_gain: Some(0.055375),
                rad_bias: Some(1.18243),
                refl_gain: None,
                refl_bias: None,
                k1: Some(607.76),
                k2: Some(1260.56),
                quantize_min: Some(1.0),
                quantize_max: Some(255.0),
            },
        );
        let syn = synthesis(Instrument::Tm, Satellite::Landsat5, &coeffs, true);
        let band = accumulated(Instrument::Tm, BandId::Num(6), "b6.tif");
        let entry = syn.synthesize(&[band]).unwrap().remove(0);

        assert!(entry.thermal);
        assert_eq!(entry.k1, Some(607.76));
        assert_eq!(entry.k2, Some(1260.56));
        assert_eq!(entry.refl_gain, None);
        assert_eq!(entry.refl_bias, None);
        assert_eq!(entry.rad_gain, Some(0.055375));
        assert_eq!(entry.data_type, PixelType::UInt8);
        assert_eq!(entry.short_name, "LT05DN");
        assert_eq!(
            entry.file_name,
            "LT05_L1TP_035027_19890712_20200916_02_T1_b6.img"
        );
    }

    #[test]
    fn reflective_band_gets_reflectance_not_k_constants() {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(
            BandId::Num(4),
            BandCoefficients {
                refl_gain: Some(2.0e-5),
                refl_bias: Some(-0.1),
                ..Default::default()
            },
        );
        let syn = synthesis(Instrument::OliTirs, Satellite::Landsat8, &coeffs, true);
        let band = accumulated(Instrument::OliTirs, BandId::Num(4), "b4.tif");
        let entry = syn.synthesize(&[band]).unwrap().remove(0);

        assert!(!entry.thermal);
        assert_eq!(entry.refl_gain, Some(2.0e-5));
        assert_eq!(entry.k1, None);
        assert_eq!(entry.k2, None);
        assert_eq!(entry.data_type, PixelType::UInt16);
    }

    #[test]
    fn qa_bands_never_carry_radiometric_fields() {
        let mut coeffs = BTreeMap::new();
        // Even a (bogus) coefficient entry for the QA designator must not
        // leak into the synthesized band.
        coeffs.insert(
            BandId::QaPixel,
            BandCoefficients {
                rad_gain: Some(1.0),
                ..Default::default()
            },
        );
        let syn = synthesis(Instrument::OliTirs, Satellite::Landsat8, &coeffs, true);
        let band = accumulated(Instrument::OliTirs, BandId::QaPixel, "qa.tif");
        let entry = syn.synthesize(&[band]).unwrap().remove(0);

        assert_eq!(entry.role, BandRole::Qa);
        assert_eq!(entry.rad_gain, None);
        assert_eq!(entry.rad_bias, None);
        assert_eq!(entry.refl_gain, None);
        assert_eq!(entry.k1, None);
        assert_eq!(entry.valid_range, Some((0.0, 65535.0)));
        assert_eq!(entry.short_name, "LC08PQA");
        let bitmap = entry.bitmap.unwrap();
        assert_eq!(bitmap.len(), 16);
        assert!(bitmap[2].starts_with("Cirrus"));
        assert_eq!(bitmap[14], "Cirrus Confidence");
    }

    #[test]
    fn pixel_quality_cirrus_bits_are_family_dependent() {
        let tm = pixel_quality_bitmap(Instrument::Tm);
        assert_eq!(tm[2], NOT_USED);
        assert_eq!(tm[14], NOT_USED);
        assert_eq!(tm[15], NOT_USED);
        let oli = pixel_quality_bitmap(Instrument::OliTirs);
        assert_ne!(oli[2], NOT_USED);
    }

    #[test]
    fn radsat_bits_follow_family_wording() {
        let etm = radiometric_saturation_bitmap(Instrument::EtmPlus);
        assert!(etm[5].starts_with("Band 6L"));
        assert!(etm[8].starts_with("Band 6H"));
        assert_eq!(etm[9], "Dropped Pixel");
        assert_eq!(etm[11], NOT_USED);
        let oli = radiometric_saturation_bitmap(Instrument::Oli);
        assert!(oli[8].starts_with("Band 9"));
        assert!(oli[11].starts_with("Terrain occlusion"));
        assert_eq!(oli[9], NOT_USED);
        for family in [Instrument::Tm, Instrument::EtmPlus, Instrument::Oli] {
            assert_eq!(radiometric_saturation_bitmap(family).len(), 16);
        }
    }

    #[test]
    fn angle_bands_are_scaled_int16_degrees() {
        let coeffs = BTreeMap::new();
        let syn = synthesis(Instrument::OliTirs, Satellite::Landsat8, &coeffs, false);
        let band = accumulated(Instrument::OliTirs, BandId::SolarZenith, "sza.tif");
        let entry = syn.synthesize(&[band]).unwrap().remove(0);

        assert_eq!(entry.data_type, PixelType::Int16);
        assert_eq!(entry.scale_factor, Some(0.01));
        assert_eq!(entry.fill_value, None);
        assert_eq!(entry.valid_range, None);
        assert_eq!(entry.product, "angle_bands");
        assert_eq!(entry.data_units, "degrees");
        assert_eq!(entry.short_name, "LC08SOLZEN");
    }

    #[test]
    fn absent_gain_signal_leaves_all_gain_fields_unpopulated() {
        let mut coeffs = BTreeMap::new();
        coeffs.insert(
            BandId::Num(1),
            BandCoefficients {
                rad_gain: Some(0.7),
                rad_bias: Some(-6.2),
                ..Default::default()
            },
        );
        let mut syn = synthesis(Instrument::Tm, Satellite::Landsat5, &coeffs, false);
        syn.gain_bias_present = false;
        let band = accumulated(Instrument::Tm, BandId::Num(1), "b1.tif");
        let entry = syn.synthesize(&[band]).unwrap().remove(0);
        assert_eq!(entry.rad_gain, None);
        assert_eq!(entry.rad_bias, None);
    }

    #[test]
    fn thermal_band_without_thermal_extent_is_incomplete() {
        let coeffs = BTreeMap::new();
        let mut syn = synthesis(Instrument::Tm, Satellite::Landsat5, &coeffs, false);
        syn.thermal = None;
        let band = accumulated(Instrument::Tm, BandId::Num(6), "b6.tif");
        let err = syn.synthesize(&[band]).unwrap_err();
        assert!(matches!(err, Error::IncompleteMetadata { .. }));
    }
}
