/// Geographic helpers: WGS84 positions, rectangles, distance scalars.

use glam::DVec3;

/// WGS84 semi-major axis (meters)
pub const WGS84_RADIUS_EQUATOR: f64 = 6_378_137.0;
/// WGS84 semi-minor axis (meters)
pub const WGS84_RADIUS_POLAR: f64 = 6_356_752.314_245_179;

/// Convert longitude/latitude in degrees and height in meters to an
/// Earth-fixed Cartesian position on the WGS84 ellipsoid.
pub fn position_from_degrees(longitude: f64, latitude: f64, height: f64) -> DVec3 {
    position_from_radians(longitude.to_radians(), latitude.to_radians(), height)
}

/// Convert longitude/latitude in radians and height in meters to an
/// Earth-fixed Cartesian position on the WGS84 ellipsoid.
pub fn position_from_radians(longitude: f64, latitude: f64, height: f64) -> DVec3 {
    let radii_squared = DVec3::new(
        WGS84_RADIUS_EQUATOR * WGS84_RADIUS_EQUATOR,
        WGS84_RADIUS_EQUATOR * WGS84_RADIUS_EQUATOR,
        WGS84_RADIUS_POLAR * WGS84_RADIUS_POLAR,
    );
    let cos_latitude = latitude.cos();
    let normal = DVec3::new(
        cos_latitude * longitude.cos(),
        cos_latitude * longitude.sin(),
        latitude.sin(),
    )
    .normalize();
    let k = radii_squared * normal;
    let gamma = normal.dot(k).sqrt();
    k / gamma + normal * height
}

/// Convert a list of `[lon, lat]` degree pairs at a fixed height
pub fn positions_from_degrees(coordinates: &[[f64; 2]], height: f64) -> Vec<DVec3> {
    coordinates
        .iter()
        .map(|[lon, lat]| position_from_degrees(*lon, *lat, height))
        .collect()
}

/// Geographic extent in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl Rectangle {
    /// Build a rectangle from degrees
    pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west: west.to_radians(),
            south: south.to_radians(),
            east: east.to_radians(),
            north: north.to_radians(),
        }
    }

    /// Extent back in degrees as `[west, south, east, north]`
    pub fn to_degrees(&self) -> [f64; 4] {
        [
            self.west.to_degrees(),
            self.south.to_degrees(),
            self.east.to_degrees(),
            self.north.to_degrees(),
        ]
    }

    /// Whether a longitude/latitude pair in degrees lies inside the extent
    pub fn contains_degrees(&self, longitude: f64, latitude: f64) -> bool {
        let (lon, lat) = (longitude.to_radians(), latitude.to_radians());
        lon >= self.west && lon <= self.east && lat >= self.south && lat <= self.north
    }
}

/// Scalar interpolated by camera distance (near/far bounds and values)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearFarScalar {
    pub near: f64,
    pub near_value: f64,
    pub far: f64,
    pub far_value: f64,
}

impl NearFarScalar {
    pub fn new(near: f64, near_value: f64, far: f64, far_value: f64) -> Self {
        Self { near, near_value, far, far_value }
    }

    /// Value at `distance`, clamped to the near/far values outside the range
    pub fn evaluate(&self, distance: f64) -> f64 {
        if distance <= self.near || self.far <= self.near {
            return self.near_value;
        }
        if distance >= self.far {
            return self.far_value;
        }
        let t = (distance - self.near) / (self.far - self.near);
        self.near_value + (self.far_value - self.near_value) * t
    }
}

#[cfg(test)]
#[path = "geo_tests.rs"]
mod tests;
