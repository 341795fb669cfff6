//! Workspace-level integration tests for gearspeed live in `tests/`.
