//! Workspace-level integration tests for polarfit live under `tests/`.
