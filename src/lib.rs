//! Workspace root package. Carries shared tooling configuration (pre-commit
//! hooks); all code lives in the member crates under `crates/`.
