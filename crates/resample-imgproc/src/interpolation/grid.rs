use std::fmt;
use std::str::FromStr;

/// Convention used to map an output pixel index back into source coordinates.
///
/// The two conventions are not equivalent and disagree on where edge pixels land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CoordinateMapping {
    /// Output grid corners land exactly on the input grid corners.
    ///
    /// `x = i * (old - 1) / (new - 1)`, or `0` when `new == 1`.
    #[default]
    Endpoint,
    /// Pixel centers are scaled proportionally.
    ///
    /// `x = (i + 0.5) * old / new - 0.5`
    Center,
}

impl fmt::Display for CoordinateMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateMapping::Endpoint => write!(f, "endpoint"),
            CoordinateMapping::Center => write!(f, "center"),
        }
    }
}

impl FromStr for CoordinateMapping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "endpoint" => Ok(CoordinateMapping::Endpoint),
            "center" => Ok(CoordinateMapping::Center),
            other => Err(format!(
                "unknown coordinate mapping '{other}', expected 'endpoint' or 'center'"
            )),
        }
    }
}

/// Map an output index along one axis into a source coordinate.
///
/// The result is not clamped and may fall outside `[0, old_extent - 1]` for the
/// center convention.
///
/// # Arguments
///
/// * `i` - The output index along the axis.
/// * `old_extent` - The length of the source axis.
/// * `new_extent` - The length of the output axis.
/// * `mapping` - The coordinate convention.
///
/// # Example
///
/// ```
/// use resample_imgproc::interpolation::{map_coordinate, CoordinateMapping};
///
/// assert_eq!(map_coordinate(3, 6, 4, CoordinateMapping::Endpoint), 5.0);
/// assert_eq!(map_coordinate(0, 6, 4, CoordinateMapping::Center), 0.25);
/// assert_eq!(map_coordinate(0, 6, 1, CoordinateMapping::Endpoint), 0.0);
/// ```
pub fn map_coordinate(
    i: usize,
    old_extent: usize,
    new_extent: usize,
    mapping: CoordinateMapping,
) -> f32 {
    match mapping {
        CoordinateMapping::Endpoint => {
            // a single output sample has no second endpoint to stretch towards
            if new_extent <= 1 {
                return 0.0;
            }
            i as f32 * (old_extent - 1) as f32 / (new_extent - 1) as f32
        }
        CoordinateMapping::Center => {
            (i as f32 + 0.5) * old_extent as f32 / new_extent as f32 - 0.5
        }
    }
}

/// Compute the source coordinate of every output index along one axis.
///
/// The mapping is separable, so a resize only needs one table per axis instead of
/// a full meshgrid.
pub fn axis_coordinates(
    old_extent: usize,
    new_extent: usize,
    mapping: CoordinateMapping,
) -> Vec<f32> {
    (0..new_extent)
        .map(|i| map_coordinate(i, old_extent, new_extent, mapping))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{axis_coordinates, map_coordinate, CoordinateMapping};
    use approx::assert_relative_eq;

    #[test]
    fn endpoint_maps_corners() {
        let xs = axis_coordinates(6, 4, CoordinateMapping::Endpoint);
        assert_eq!(xs.len(), 4);
        assert_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[1], 5.0 / 3.0, epsilon = 1e-6);
        assert_relative_eq!(xs[2], 10.0 / 3.0, epsilon = 1e-6);
        assert_eq!(xs[3], 5.0);
    }

    #[test]
    fn endpoint_upscale_steps() {
        let xs = axis_coordinates(6, 9, CoordinateMapping::Endpoint);
        for (i, x) in xs.iter().enumerate() {
            assert_relative_eq!(*x, i as f32 * 0.625, epsilon = 1e-6);
        }
    }

    #[test]
    fn center_maps_pixel_centers() {
        let xs = axis_coordinates(6, 4, CoordinateMapping::Center);
        assert_eq!(xs, vec![0.25, 1.75, 3.25, 4.75]);

        let xs = axis_coordinates(2, 4, CoordinateMapping::Center);
        assert_eq!(xs, vec![-0.25, 0.25, 0.75, 1.25]);
    }

    #[test]
    fn degenerate_extents() {
        // single output sample
        assert_eq!(map_coordinate(0, 7, 1, CoordinateMapping::Endpoint), 0.0);
        assert_relative_eq!(map_coordinate(0, 7, 1, CoordinateMapping::Center), 3.0);

        // single source sample
        for i in 0..5 {
            assert_eq!(map_coordinate(i, 1, 5, CoordinateMapping::Endpoint), 0.0);
            let x = map_coordinate(i, 1, 5, CoordinateMapping::Center);
            assert!(x > -0.5 && x < 0.5, "x = {x}");
        }
    }

    #[test]
    fn identity_extent() {
        for mapping in [CoordinateMapping::Endpoint, CoordinateMapping::Center] {
            let xs = axis_coordinates(5, 5, mapping);
            for (i, x) in xs.iter().enumerate() {
                assert_relative_eq!(*x, i as f32, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn mapping_from_str() {
        assert_eq!("endpoint".parse::<CoordinateMapping>(), Ok(CoordinateMapping::Endpoint));
        assert_eq!("Center".parse::<CoordinateMapping>(), Ok(CoordinateMapping::Center));
        assert!("corner".parse::<CoordinateMapping>().is_err());
        assert_eq!(CoordinateMapping::Center.to_string(), "center");
        assert_eq!(CoordinateMapping::default(), CoordinateMapping::Endpoint);
    }
}
