/// Dependency source adapters implementing the DependencySource port
mod registry_file;
mod static_table;

pub use registry_file::{RegistryFileSource, RegistryFormat};
pub use static_table::{builtin_table, StaticTableSource};
