//! Watch Use Case
//!
//! Stands in for the editor's save event: file-system changes under the
//! workspace folders are filtered, debounced and handed to the engine's save
//! hook.
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Main loop (notify events in, save-hook calls out)
//! - `ChangeFilter` - Drops ignored paths and events whose content is unchanged
//! - `WatcherState` - Debounces bursts of events for the same save
//!
//! ## Usage
//!
//! ```ignore
//! let use_case = WatchUseCase::new(options, events);
//! use_case.start(&engine, running).await?;
//! ```

mod cache;
mod event;
mod use_case;


pub use cache::{compute_content_hash, ChangeFilter};
pub use event::{WatchOptions, WatcherState, DEFAULT_DEBOUNCE_MS};
pub use use_case::WatchUseCase;
