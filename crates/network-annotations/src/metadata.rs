//! Object metadata helpers
//!
//! Reads and writes annotation lists on any Kubernetes resource (Pods, Nodes,
//! custom resources) using the key bound to the record type. These helpers
//! only touch the in-memory object; persisting it is up to the caller.

use crate::codec::{AnnotationList, AnnotationRecord, marshal_annotation, parse_annotation};
use crate::error::AnnotationError;
use kube::{Resource, ResourceExt};
use tracing::debug;

/// Read and parse the annotation list for `T` from `obj`
///
/// Returns `Ok(None)` when the object does not carry the annotation at all.
/// A present but malformed value is an error, never a default.
pub fn read_annotation<T, K>(obj: &K) -> Result<Option<AnnotationList<T>>, AnnotationError>
where
    T: AnnotationRecord,
    K: Resource,
{
    let Some(text) = obj.annotations().get(T::ANNOTATION_KEY) else {
        return Ok(None);
    };

    match parse_annotation(text) {
        Ok(list) => Ok(Some(list)),
        Err(e) => {
            debug!(
                object = %obj.name_any(),
                key = T::ANNOTATION_KEY,
                "Annotation is not a valid {} value",
                T::SCHEMA_NAME
            );
            Err(e.with_key(T::ANNOTATION_KEY))
        }
    }
}

/// Marshal `value` and store it on `obj` under the key bound to `T`
///
/// Replaces any existing value. The annotation map is created if missing.
pub fn write_annotation<T, K>(obj: &mut K, value: &AnnotationList<T>) -> Result<(), AnnotationError>
where
    T: AnnotationRecord,
    K: Resource,
{
    let text = marshal_annotation(value).map_err(|e| e.with_key(T::ANNOTATION_KEY))?;
    debug!(
        object = %obj.name_any(),
        key = T::ANNOTATION_KEY,
        records = value.len(),
        "Writing annotation"
    );
    obj.annotations_mut().insert(T::ANNOTATION_KEY.to_string(), text);
    Ok(())
}

/// Remove the annotation bound to `T` from `obj`, returning the raw value
pub fn remove_annotation<T, K>(obj: &mut K) -> Option<String>
where
    T: AnnotationRecord,
    K: Resource,
{
    obj.meta_mut()
        .annotations
        .as_mut()
        .and_then(|annotations| annotations.remove(T::ANNOTATION_KEY))
}
