/*!
 * Monitoring Module
 * Tracing setup for the stress run
 */

pub mod tracer;

pub use tracer::init_tracing;
