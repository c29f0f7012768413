/// Ports of the hexagonal architecture
///
/// Inbound ports are what the CLI drives (building a component report).
/// Outbound ports are what the report workflow needs from infrastructure:
/// reading resolution results, formatting, presenting and progress feedback.
pub mod inbound;
pub mod outbound;
