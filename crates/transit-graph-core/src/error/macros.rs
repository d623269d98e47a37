//! Error macros for transit-graph

/// Macro for rejecting a connection with an `InvalidEdge` error
#[macro_export]
macro_rules! bail_invalid_edge {
    ($from:expr, $to:expr, $reason:expr) => {
        return Err($crate::error::GraphError::invalid_edge($from, $to, $reason))
    };
}

