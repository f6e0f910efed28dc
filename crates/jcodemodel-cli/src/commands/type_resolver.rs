//! Turns command-line type names into model handles.

use jcodemodel_lib::{CodeModel, Error, PrimitiveKind, TypeId};

#[derive(Debug, thiserror::Error)]
#[error("{name}: {source}")]
pub struct ResolveError {
    pub name: String,
    #[source]
    pub source: Error,
}

impl ResolveError {
    fn new(name: &str, source: Error) -> Self {
        Self {
            name: name.to_owned(),
            source,
        }
    }
}

/// Resolve a primitive keyword or a fully qualified class name.
pub fn resolve_type(model: &mut CodeModel, name: &str) -> Result<TypeId, ResolveError> {
    let resolved = if PrimitiveKind::from_name(name).is_some() {
        model.parse(name)
    } else {
        model.reference(name)
    };
    resolved.map_err(|e| ResolveError::new(name, e))
}

/// Resolve `name`, narrow it with `args` and wrap it in `dims` array dimensions.
pub fn build_type(
    model: &mut CodeModel,
    name: &str,
    args: &[String],
    dims: u8,
) -> Result<TypeId, ResolveError> {
    let mut id = resolve_type(model, name)?;

    if !args.is_empty() {
        let arg_ids = args
            .iter()
            .map(|arg| resolve_type(model, arg))
            .collect::<Result<Vec<_>, _>>()?;
        id = model
            .narrow(id, &arg_ids)
            .map_err(|e| ResolveError::new(name, e))?;
    }

    for _ in 0..dims {
        id = model.array(id).map_err(|e| ResolveError::new(name, e))?;
    }

    Ok(id)
}
