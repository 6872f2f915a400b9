// ABOUTME: API module containing HTTP handler functions for the porter REST API.
// ABOUTME: Organized into sub-modules per endpoint group.

pub mod whoami;
