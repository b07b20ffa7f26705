//! Error macros for graphbench

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphBenchError::invalid_value(
            $context, $value,
        ))
    };
}

/// Macro for rejecting a vertex index outside `0..$count`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $count:expr) => {
        if $vertex >= $count {
            return Err($crate::error::GraphBenchError::vertex_out_of_range(
                $vertex, $count,
            ));
        }
    };
}
