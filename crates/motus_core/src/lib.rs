//! Motus Core Timing
//!
//! This crate provides the foundational timing primitive for the Motus
//! animation toolkit:
//!
//! - **Virtual Clocks**: pausable, rate-scalable elapsed-time sources that
//!   animation engines sample instead of reading wall time directly
//!
//! # Example
//!
//! ```rust
//! use motus_core::VirtualClock;
//!
//! let mut clock = VirtualClock::new_paused();
//!
//! // Rebase to 2.5 virtual seconds, still paused
//! clock.set_elapsed(2.5);
//! assert_eq!(clock.elapsed(), 2.5);
//!
//! // Run at half speed from here on
//! clock.set_rate(0.5);
//! clock.resume();
//!
//! // Restart hands back the reading it wiped
//! let before = clock.restart(true);
//! assert!(before >= 2.5);
//! assert_eq!(clock.elapsed(), 0.0);
//! ```

pub mod clock;

pub use clock::VirtualClock;
