use std::mem::size_of;

use bytemuck::Pod;

/// Errors from reinterpreting one plain-data type as another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("shape mismatch: cannot reinterpret {source_size} bytes as {target_size} bytes")]
    ShapeMismatch {
        source_size: usize,
        target_size: usize,
    },
}

/// Copy the bytes of `source` into a value of type `U`.
///
/// No numeric transformation happens. Sizes are compared before anything is
/// copied, so a mismatch never reads or writes past either value.
pub fn convert<T: Pod, U: Pod>(source: &T) -> Result<U, ConvertError> {
    let (source_size, target_size) = (size_of::<T>(), size_of::<U>());
    if source_size != target_size {
        tracing::warn!(
            source = source_size,
            target = target_size,
            "refusing reinterpretation between differently sized types"
        );
        return Err(ConvertError::ShapeMismatch {
            source_size,
            target_size,
        });
    }
    // Equal sizes are the only precondition `cast` has for Pod values.
    Ok(bytemuck::cast(*source))
}

/// [`convert`] with the size check moved to compile time.
///
/// Instantiating this with types of different sizes fails the build.
pub fn convert_exact<T: Pod, U: Pod>(source: T) -> U {
    const {
        assert!(
            size_of::<T>() == size_of::<U>(),
            "convert_exact requires equally sized types"
        )
    };
    bytemuck::cast(source)
}
