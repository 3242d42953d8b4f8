//! Registration of the default contact fields

use super::registry::FieldRegistry;
use crate::i18n::Catalog;
use anyhow::Result;

/// Register the five stock contact fields
///
/// External code may register further fields on the same registry before the
/// service object is constructed (which freezes it).
pub fn register_defaults(registry: &FieldRegistry, catalog: &Catalog) -> Result<()> {
    registry.register("email", catalog.t("Public mail address"))?;
    registry.register("phone", catalog.t("Public phone number"))?;
    registry.register("googleplus", catalog.t("Google Plus"))?;
    registry.register("facebook", catalog.t("FaceBook"))?;
    registry.register("twitter", catalog.t("Twitter"))?;
    Ok(())
}
