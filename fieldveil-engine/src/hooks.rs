//! Lifecycle seam for the host persistence framework.
//!
//! The transformer never runs implicitly: the host registers these two
//! entry points against whatever hook mechanism its persistence layer
//! offers (before-write and after-read). Consumers can depend on
//! `Arc<dyn DocumentHooks>` so a deployment swaps in [`PassthroughHooks`]
//! when protection is disabled without touching call sites.

use crate::error::TransformResult;
use crate::transformer::FieldEncryptor;
use fieldveil_model::Document;
use tracing::debug;

/// Hook pair the host persistence layer calls around its own I/O.
///
/// Both hooks are synchronous and mutate the document in place. An error
/// from `before_persist` means the write must be aborted; an error from
/// `after_load` means the loaded document is not safe to hand out.
pub trait DocumentHooks: Send + Sync {
    /// Runs before the host writes `doc`.
    fn before_persist(&self, doc: &mut Document) -> TransformResult<()>;

    /// Runs after the host reads `doc`.
    fn after_load(&self, doc: &mut Document) -> TransformResult<()>;
}

impl DocumentHooks for FieldEncryptor {
    fn before_persist(&self, doc: &mut Document) -> TransformResult<()> {
        debug!(fields = self.fields().len(), "encrypting document before persist");
        self.encrypt_fields(doc)
    }

    fn after_load(&self, doc: &mut Document) -> TransformResult<()> {
        debug!(fields = self.fields().len(), "decrypting document after load");
        self.decrypt_fields(doc)
    }
}

/// No-op hooks for deployments with protection disabled.
/// Documents pass through unchanged.
pub struct PassthroughHooks;

impl DocumentHooks for PassthroughHooks {
    fn before_persist(&self, _doc: &mut Document) -> TransformResult<()> {
        Ok(())
    }

    fn after_load(&self, _doc: &mut Document) -> TransformResult<()> {
        Ok(())
    }
}
