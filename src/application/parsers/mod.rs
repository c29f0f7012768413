/// Parsers for documents produced by external resolvers
mod resolution_result_parser;

pub use resolution_result_parser::ResolutionResultParser;
