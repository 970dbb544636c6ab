/// A Mexican federal entity used to locate reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

const fn region(code: &'static str, name: &'static str) -> Region {
    Region { code, name }
}

/// The 32 federal entities, alphabetical by name
pub const REGIONS: [Region; 32] = [
    region("AGU", "Aguascalientes"),
    region("BCN", "Baja California"),
    region("BCS", "Baja California Sur"),
    region("CAM", "Campeche"),
    region("CHP", "Chiapas"),
    region("CHH", "Chihuahua"),
    region("CMX", "Ciudad de México"),
    region("COA", "Coahuila"),
    region("COL", "Colima"),
    region("DUR", "Durango"),
    region("GUA", "Guanajuato"),
    region("GRO", "Guerrero"),
    region("HID", "Hidalgo"),
    region("JAL", "Jalisco"),
    region("MEX", "México"),
    region("MIC", "Michoacán"),
    region("MOR", "Morelos"),
    region("NAY", "Nayarit"),
    region("NL", "Nuevo León"),
    region("OAX", "Oaxaca"),
    region("PUE", "Puebla"),
    region("QUE", "Querétaro"),
    region("ROO", "Quintana Roo"),
    region("SLP", "San Luis Potosí"),
    region("SIN", "Sinaloa"),
    region("SON", "Sonora"),
    region("TAB", "Tabasco"),
    region("TAM", "Tamaulipas"),
    region("TLA", "Tlaxcala"),
    region("VER", "Veracruz"),
    region("YUC", "Yucatán"),
    region("ZAC", "Zacatecas"),
];

pub fn is_known_region(name: &str) -> bool {
    REGIONS.iter().any(|r| r.name == name)
}

/// Look up by code (case-insensitive) or by exact name
pub fn find_region(code_or_name: &str) -> Option<&'static Region> {
    REGIONS
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(code_or_name) || r.name == code_or_name)
}
