use anyhow::Result;

use crate::regions::RegionDescriptor;

/// External (serializable) representations of region descriptors
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Serializes a region descriptor to its persisted JSON form.
pub fn encode_region(region: &RegionDescriptor) -> Result<String> {
    Ok(serde_json::to_string(&export::export_region(region))?)
}

/// Deserializes a region descriptor from its persisted JSON form.
/// Missing or malformed fields and unrecognized region kinds are reported as errors,
/// never silently defaulted.
pub fn decode_region(json: &str) -> Result<RegionDescriptor> {
    let ext: ext_repr::ExtRegion = serde_json::from_str(json)?;
    import::import_region(&ext)
}
