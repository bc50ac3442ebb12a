/// Meters per statute mile (international mile).
pub const METERS_PER_MILE: f64 = 1609.344;
/// Statute miles per nautical mile.
pub const MILES_PER_NAUTICAL_MILE: f64 = 1.150779448;

pub fn mi_to_m(mi: f64) -> f64 {
    mi * METERS_PER_MILE
}

pub fn mi_to_km(mi: f64) -> f64 {
    mi_to_m(mi) / 1000.0
}

pub fn mi_to_cm(mi: f64) -> f64 {
    mi_to_m(mi) * 100.0
}

pub fn mi_to_mm(mi: f64) -> f64 {
    mi_to_m(mi) * 1000.0
}

pub fn mi_to_ft(mi: f64) -> f64 {
    mi * 5280.0
}

pub fn mi_to_yd(mi: f64) -> f64 {
    mi * 1760.0
}

pub fn mi_to_in(mi: f64) -> f64 {
    mi * 63360.0
}

pub fn mi_to_nmi(mi: f64) -> f64 {
    mi / MILES_PER_NAUTICAL_MILE
}
