/*!
 * Allocator Backends
 *
 * The jemalloc backend installs jemalloc as the global allocator so every
 * allocation the workload makes shows up in its statistics. Builds without it
 * still compile, but any allocator capture fails as unsupported.
 */

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
mod jemalloc;
#[cfg(not(all(feature = "jemalloc", not(target_env = "msvc"))))]
mod unsupported;

#[cfg(all(feature = "jemalloc", not(target_env = "msvc")))]
pub use jemalloc::JemallocCollector as AllocatorCollector;
#[cfg(not(all(feature = "jemalloc", not(target_env = "msvc"))))]
pub use unsupported::UnsupportedCollector as AllocatorCollector;
