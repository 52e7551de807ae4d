// sf-core/src/units.rs

use uom::si::f64::{
    Angle as UomAngle, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Dimensioned quantities that cross crate boundaries. Mach numbers and
// property ratios stay plain f64.
pub type Angle = UomAngle;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn to_atm(p: Pressure) -> f64 {
    use uom::si::pressure::atmosphere;
    p.get::<atmosphere>()
}

#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn to_radians(a: Angle) -> f64 {
    use uom::si::angle::radian;
    a.get::<radian>()
}

#[inline]
pub fn to_degrees(a: Angle) -> f64 {
    use uom::si::angle::degree;
    a.get::<degree>()
}

pub mod constants {
    use super::*;

    /// Sea-level static pressure [atm].
    pub const P_SEA_LEVEL_ATM: f64 = 1.0;

    /// Sea-level static temperature [K].
    pub const T_SEA_LEVEL_K: f64 = 288.0;

    /// Heat capacity ratio of air.
    pub const GAMMA_AIR: f64 = 1.4;

    #[inline]
    pub fn sea_level_pressure() -> Pressure {
        atm(P_SEA_LEVEL_ATM)
    }

    #[inline]
    pub fn sea_level_temperature() -> Temperature {
        k(T_SEA_LEVEL_K)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_atmosphere_in_pascal() {
        let p = constants::sea_level_pressure();
        assert!((p.value - 101_325.0).abs() < 1e-9);
        assert!((to_atm(atm(2.5)) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn angle_conversions() {
        assert!((to_radians(deg(180.0)) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_degrees(rad(std::f64::consts::FRAC_PI_2)) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn sea_level_temperature_is_kelvin() {
        assert!((to_kelvin(constants::sea_level_temperature()) - 288.0).abs() < 1e-12);
    }
}
