/*!
 * Core Types
 * Common types used across the runtime
 */

/// Runtime context ID type
///
/// Identifies one independent runtime instance. IDs are allocated by the
/// context registry and never reused within a process.
pub type ContextId = u64;

/// Host operating-system signal number
pub type HostSignal = i32;
