// hf-core/src/units.rs

use uom::si::f64::{
    Mass as UomMass, Pressure as UomPressure, Time as UomTime, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Mass = UomMass;
pub type Pressure = UomPressure;
pub type Time = UomTime;
pub type Volume = UomVolume;

#[inline]
pub fn mmhg(v: f64) -> Pressure {
    use uom::si::pressure::millimeter_of_mercury;
    Pressure::new::<millimeter_of_mercury>(v)
}

#[inline]
pub fn litre(v: f64) -> Volume {
    use uom::si::volume::liter;
    Volume::new::<liter>(v)
}

#[inline]
pub fn sec(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn in_mmhg(p: Pressure) -> f64 {
    use uom::si::pressure::millimeter_of_mercury;
    p.get::<millimeter_of_mercury>()
}

#[inline]
pub fn in_litres(v: Volume) -> f64 {
    use uom::si::volume::liter;
    v.get::<liter>()
}
