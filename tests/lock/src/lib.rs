//! Shared fixtures for the lock tests and fixture binaries.
