// Single source of truth for all default values.

/// The EFO annotation property whose restriction presence is measured.
pub const DEFAULT_TARGET_PROPERTY: &str = "http://www.ebi.ac.uk/efo/has_disease_location";

/// The predicate followed for restriction discovery and ancestor walks.
pub const DEFAULT_SUBCLASS_PREDICATE: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
