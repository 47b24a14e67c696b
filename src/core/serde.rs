/// Serde helper functions for custom serialization

/// Skip serializing if a time value is zero (for use with skip_serializing_if)
pub fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// Skip serializing if vector is empty
pub fn is_empty_vec<T>(value: &[T]) -> bool {
    value.is_empty()
}
