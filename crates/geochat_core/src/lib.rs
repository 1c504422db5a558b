pub mod analyze;
pub mod domain;
pub mod extract;
pub mod ports;
pub mod respond;
pub mod visualize;

pub use analyze::{analyze, analyze_with_year, Analysis};
pub use domain::{
    Aggregation, ChartDescriptor, ChartSeries, ChartType, Conversation, DataType,
    ExtractedParameters, Location, LocationSource, Query, Timeframe,
};
pub use extract::{extract_parameters, extract_parameters_with_year};
pub use ports::{PortError, PortResult, RecordStore};
pub use respond::{build_response, UNKNOWN_LOCATION};
pub use visualize::build_visualization;
