//! # cpuprobe HAL
//!
//! Instruction access layer for the CPU capability probe.
//!
//! This crate owns exactly one hardware concern: issuing the CPUID
//! instruction. Everything above it (leaf selection, bit decoding, vendor
//! identification, reporting) lives in `cpuprobe-core` and consumes this
//! layer through the [`CpuIdSource`] trait, so the decoding logic is
//! portable and testable against recorded register values.
//!
//! ## Components
//!
//! - [`CpuIdResult`]: the EAX/EBX/ECX/EDX quadruple one CPUID invocation
//!   returns
//! - [`CpuIdSource`]: the single capability the decoding layer consumes
//! - [`HardwareCpuId`]: source backed by the real instruction
//! - [`FixedCpuId`]: source backed by a recorded leaf table, for tests
//!
//! ## Portability
//!
//! The real instruction exists only on x86 and x86_64. On every other
//! architecture this crate still compiles: [`HardwareCpuId`] reports itself
//! unavailable and answers queries with all-zero registers instead of
//! undefined output. Callers that need a hard error consult
//! [`CpuIdSource::is_available`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod arch;
pub mod source;

pub use source::{CpuIdResult, CpuIdSource, FixedCpuId, HardwareCpuId};
