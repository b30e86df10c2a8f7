//! Geolocation Bounds Calculator. The cartographic math lives behind the
//! `ProjectionEngine` trait; this module only decides which image-space
//! corners to project and folds the results into geodetic extrema.
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::core::scene::ProjectionInfo;
use crate::error::{Error, Result};

/// Failure reported by a projection service implementation.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ProjectionError(pub String);

/// External forward-projection service. `initialize` validates the scene's
/// projection parameters and builds whatever context the implementation
/// needs; `forward` maps an image-space (line, sample) position to geodetic
/// (lat, lon) in degrees. Both calls are ordinary synchronous calls with no
/// timeout; a failing service aborts the scene.
pub trait ProjectionEngine {
    type Context;

    fn initialize(&self, proj: &ProjectionInfo) -> std::result::Result<Self::Context, ProjectionError>;

    fn forward(
        &self,
        ctx: &Self::Context,
        line: f64,
        sample: f64,
    ) -> std::result::Result<(f64, f64), ProjectionError>;
}

/// Geodetic bounding box of a scene, in degrees.
///
/// West/east are the minimum/maximum longitude and south/north the
/// minimum/maximum latitude of the four projected corner pixels. For
/// ascending and polar scenes the image is rendered flipped, so the stored
/// upper-left corner can sit south of the lower-right one; the bounds are
/// still true extrema. Consumers compare the scene's stored corners against
/// these bounds to detect the flip; this calculator never guesses
/// orientation.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

/// Forward-project the four extreme corner pixels of the reflective raster
/// and report the geodetic extrema.
///
/// Initialization happens first, then the four corner projections, then the
/// extrema fold; any projection failure aborts with `ProjectionUnavailable`
/// and no partial bounds escape.
pub fn compute_bounds<E: ProjectionEngine>(
    engine: &E,
    proj: &ProjectionInfo,
    nlines: usize,
    nsamps: usize,
) -> Result<GeoBounds> {
    if nlines == 0 || nsamps == 0 {
        return Err(Error::missing("reflective raster extent"));
    }

    let ctx = engine
        .initialize(proj)
        .map_err(|e| Error::ProjectionUnavailable {
            reason: e.to_string(),
        })?;

    let last_line = (nlines - 1) as f64;
    let last_samp = (nsamps - 1) as f64;
    let corners = [
        (0.0, 0.0),
        (0.0, last_samp),
        (last_line, 0.0),
        (last_line, last_samp),
    ];

    let mut bounds: Option<GeoBounds> = None;
    for (line, sample) in corners {
        let (lat, lon) =
            engine
                .forward(&ctx, line, sample)
                .map_err(|e| Error::ProjectionUnavailable {
                    reason: format!("projecting corner ({line}, {sample}): {e}"),
                })?;
        bounds = Some(match bounds {
            None => GeoBounds {
                west: lon,
                east: lon,
                north: lat,
                south: lat,
            },
            Some(b) => GeoBounds {
                west: b.west.min(lon),
                east: b.east.max(lon),
                north: b.north.max(lat),
                south: b.south.min(lat),
            },
        });
    }

    // Four corners were projected, so the fold is always populated.
    let bounds = bounds.ok_or_else(|| Error::missing("corner projections"))?;
    info!(
        west = bounds.west,
        east = bounds.east,
        north = bounds.north,
        south = bounds.south,
        "computed scene bounding box"
    );
    Ok(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{MapProjection, ProjectedCorner};
    use crate::types::{Datum, GridOrigin};
    use approx::assert_relative_eq;

    fn utm_projection() -> ProjectionInfo {
        ProjectionInfo {
            projection: MapProjection::Utm { zone: 11 },
            datum: Datum::Wgs84,
            units: "meters".to_string(),
            grid_origin: GridOrigin::Center,
            ul: ProjectedCorner { x: 0.0, y: 0.0 },
            lr: ProjectedCorner { x: 0.0, y: 0.0 },
        }
    }

    /// Identity-like engine: latitude decreases with line, longitude grows
    /// with sample, from a configurable origin.
    struct LinearEngine {
        lat0: f64,
        lon0: f64,
        dlat: f64,
        dlon: f64,
    }

    impl ProjectionEngine for LinearEngine {
        type Context = ();

        fn initialize(&self, _proj: &ProjectionInfo) -> std::result::Result<(), ProjectionError> {
            Ok(())
        }

        fn forward(
            &self,
            _ctx: &(),
            line: f64,
            sample: f64,
        ) -> std::result::Result<(f64, f64), ProjectionError> {
            Ok((self.lat0 + self.dlat * line, self.lon0 + self.dlon * sample))
        }
    }

    struct FailingEngine;

    impl ProjectionEngine for FailingEngine {
        type Context = ();

        fn initialize(&self, _proj: &ProjectionInfo) -> std::result::Result<(), ProjectionError> {
            Err(ProjectionError("unsupported datum".to_string()))
        }

        fn forward(
            &self,
            _ctx: &(),
            _line: f64,
            _sample: f64,
        ) -> std::result::Result<(f64, f64), ProjectionError> {
            unreachable!("initialize always fails")
        }
    }

    #[test]
    fn bounds_are_corner_extrema() {
        // Descending-style scene: first line is the northern edge.
        let engine = LinearEngine {
            lat0: 45.2,
            lon0: -120.5,
            dlat: -2.2 / 999.0,
            dlon: 2.4 / 999.0,
        };
        let b = compute_bounds(&engine, &utm_projection(), 1000, 1000).unwrap();
        assert_relative_eq!(b.west, -120.5);
        assert_relative_eq!(b.east, -118.1);
        assert_relative_eq!(b.north, 45.2);
        assert_relative_eq!(b.south, 43.0);
    }

    #[test]
    fn flipped_scene_reports_the_same_extrema() {
        // Ascending-style scene: first line is the southern edge. Extrema
        // must not depend on which corner the source calls "upper-left".
        let engine = LinearEngine {
            lat0: 43.0,
            lon0: -118.1,
            dlat: 2.2 / 999.0,
            dlon: -2.4 / 999.0,
        };
        let b = compute_bounds(&engine, &utm_projection(), 1000, 1000).unwrap();
        assert_relative_eq!(b.west, -120.5);
        assert_relative_eq!(b.east, -118.1);
        assert_relative_eq!(b.north, 45.2);
        assert_relative_eq!(b.south, 43.0);
    }

    #[test]
    fn initialization_failure_is_projection_unavailable() {
        let err = compute_bounds(&FailingEngine, &utm_projection(), 100, 100).unwrap_err();
        assert!(matches!(err, Error::ProjectionUnavailable { .. }));
    }

    #[test]
    fn empty_extent_is_rejected() {
        let engine = LinearEngine {
            lat0: 0.0,
            lon0: 0.0,
            dlat: 0.0,
            dlon: 0.0,
        };
        let err = compute_bounds(&engine, &utm_projection(), 0, 100).unwrap_err();
        assert!(matches!(err, Error::IncompleteMetadata { .. }));
    }
}
