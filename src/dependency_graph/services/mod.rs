mod graph_flattener;
mod report_metadata_generator;
mod tree_decoder;

pub use graph_flattener::GraphFlattener;
pub use report_metadata_generator::ReportMetadataGenerator;
pub use tree_decoder::TreeDecoder;
