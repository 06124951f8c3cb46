/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with files, the console and
/// dependency data.
pub mod outbound;
