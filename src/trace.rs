//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logging subscriber used by
//! binaries and demos. Chest operations log structured fields
//! (`entity_type`, `id`, `size`) instead of module paths, keeping the
//! output compact:
//!
//! ```text
//! INFO Chest started
//! INFO Pooled entity_type="projects" id="1" size=1
//! DEBUG Lookup entity_type="users" id="4" found=true
//! ```
//!
//! Levels are configured through `RUST_LOG`:
//!
//! ```bash
//! # Writes and lifecycle only
//! RUST_LOG=info cargo run
//!
//! # Also show lookups, snapshots, and rejected payloads
//! RUST_LOG=debug cargo run
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields carry the context instead of module paths
        .compact()
        .init();
}
