pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} is not in the graph")]
    MissingVertex { vertex: String },

    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("graph contains a cycle through vertex {vertex}")]
    Cycle { vertex: String },

    #[error("weight sum overflows at edge {from} -> {to}")]
    WeightOverflow { from: String, to: String },

    #[error("source and sink are the same vertex {vertex}")]
    SameSourceAndSink { vertex: String },
}

impl Error {
    pub fn missing_vertex(vertex: &impl std::fmt::Debug) -> Self {
        Self::MissingVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    pub fn negative_weight(
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        weight: impl std::fmt::Display,
    ) -> Self {
        Self::NegativeWeight {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            weight: weight.to_string(),
        }
    }

    pub fn cycle(vertex: &impl std::fmt::Debug) -> Self {
        Self::Cycle {
            vertex: format!("{vertex:?}"),
        }
    }

    pub fn weight_overflow(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        Self::WeightOverflow {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub fn same_source_and_sink(vertex: &impl std::fmt::Debug) -> Self {
        Self::SameSourceAndSink {
            vertex: format!("{vertex:?}"),
        }
    }
}
