use crate::error::Result;
use crate::model::parameter::Operation;

pub trait ParameterContext {
    fn resolve_operation(&self, item_index: usize) -> Result<Operation>;
    /// Resolves `(min, max)`; not called for operations that take no range.
    fn resolve_range(&self, item_index: usize) -> Result<(i64, i64)>;
}
