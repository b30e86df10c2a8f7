//! Band Accumulator: collects one entry per band file declared in the MTL, in
//! file order, with role and thermal flag fixed at insertion time from the
//! `(family, designator)` tables. Collection-2 records list the same file
//! names in a second group; once the band section is closed the accumulator
//! ignores further file-name keys so duplicated sections never double the
//! band list.
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BandId, BandRole, Instrument};

/// Upper bound on bands per scene; downstream fixed-width consumers size
/// their tables from this.
pub const MAX_BANDS: usize = 17;

/// One band file as declared by the source metadata, before derived
/// attributes are synthesized.
#[derive(Clone, Debug)]
pub struct AccumulatedBand {
    pub id: BandId,
    pub source_file: String,
    pub role: BandRole,
    pub thermal: bool,
}

#[derive(Debug, Default)]
pub struct BandAccumulator {
    bands: Vec<AccumulatedBand>,
    section_closed: bool,
}

impl BandAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one band in file order. A no-op after `close_section`.
    pub fn push(&mut self, family: Instrument, id: BandId, source_file: &str) -> Result<()> {
        if self.section_closed {
            debug!(band = %id, "band section closed; ignoring repeated file name");
            return Ok(());
        }
        if self.bands.len() == MAX_BANDS {
            return Err(Error::TooManyBands {
                count: self.bands.len() + 1,
                max: MAX_BANDS,
            });
        }
        self.bands.push(AccumulatedBand {
            id,
            source_file: source_file.to_string(),
            role: id.role(),
            thermal: id.is_thermal(family),
        });
        Ok(())
    }

    /// Latch the duplicate-section guard. Idempotent.
    pub fn close_section(&mut self) {
        self.section_closed = true;
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    pub fn bands(&self) -> &[AccumulatedBand] {
        &self.bands
    }

    pub fn into_bands(self) -> Vec<AccumulatedBand> {
        self.bands
    }
}
